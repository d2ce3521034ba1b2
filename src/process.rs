//! Process controller: drives one automaton against a live array and scores
//! the user's guesses

use crate::automaton::{Algorithm, SortAutomaton, Step, StepSort};
use tracing::{debug, trace};

/// Result of comparing a guess against the next visible snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    Correct,
    Incorrect { expected: Vec<T> },
}

impl<T> Verdict<T> {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// One trainer session over a single array
#[derive(Debug, Clone)]
pub struct SortProcess<T> {
    /// The array as it was when the session started
    original: Vec<T>,

    /// The array as the user currently sees it
    current: Vec<T>,

    /// Number of correct guesses
    guesses: usize,

    /// Number of guesses submitted
    rounds: usize,

    /// Number of automaton calls made so far
    calls: usize,

    done: bool,

    automaton: SortAutomaton,
}

impl<T: Ord + Clone + std::fmt::Debug> SortProcess<T> {
    pub fn new(algorithm: Algorithm, array: Vec<T>) -> Self {
        let automaton = SortAutomaton::new(algorithm, &array);
        debug!(%algorithm, len = array.len(), "starting sort process");
        SortProcess {
            original: array.clone(),
            current: array,
            guesses: 0,
            rounds: 0,
            calls: 0,
            done: false,
            automaton,
        }
    }

    /// Advance the automaton until the array visibly changes or the algorithm
    /// terminates. Does nothing once the process is done.
    pub fn advance_to_change(&mut self) -> Step {
        let mut step = Step {
            done: self.done,
            changed: false,
        };

        while !step.done && !step.changed {
            step = self.automaton.advance(&mut self.current);
            self.calls += 1;
            trace!(call = self.calls, ?step, current = ?self.current, "automaton step");
        }

        self.done = step.done;
        step
    }

    /// Reveal the next visible snapshot and score `guess` against it
    pub fn next(&mut self, guess: &[T]) -> Verdict<T> {
        self.advance_to_change();
        self.rounds += 1;

        let verdict = if is_equal(&self.current, guess) {
            self.guesses += 1;
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                expected: self.current.clone(),
            }
        };

        debug!(
            round = self.rounds,
            correct = verdict.is_correct(),
            done = self.done,
            "guess scored"
        );
        verdict
    }

    pub fn original(&self) -> &[T] {
        &self.original
    }

    pub fn current(&self) -> &[T] {
        &self.current
    }

    pub fn guesses(&self) -> usize {
        self.guesses
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn algorithm(&self) -> Algorithm {
        self.automaton.algorithm()
    }

    pub fn automaton(&self) -> &SortAutomaton {
        &self.automaton
    }
}

/// Element-wise equality of two sequences
pub fn is_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
