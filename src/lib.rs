//! # Introduction
//!
//! stepsort is an interactive trainer for sorting algorithms. It picks an
//! algorithm, runs it one visible step at a time, and asks the user to predict
//! the array after each step, scoring correct guesses.
//!
//! ## Pipeline
//!
//! ```text
//! Random array → SortProcess ⇄ SortAutomaton (one step per call) → verdict → UI
//! ```
//!
//! 1. [`automaton`] — bubble, heap, merge and quick sort as resumable state
//!    machines behind one [`automaton::StepSort`] contract.
//! 2. [`process`] — the controller: advances an automaton until the array
//!    visibly changes and scores a guess against the result.
//! 3. [`session`] — array generation, guess parsing, and the `--plain` prompt loop.
//! 4. [`history`] — rounds of the current session and the scoreboard for the run.
//! 5. [`config`] — command-line arguments and logging setup.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod automaton;
pub mod config;
pub mod history;
pub mod process;
pub mod session;
pub mod ui;
