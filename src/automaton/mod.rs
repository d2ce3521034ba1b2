//! Resumable step-sort engine
//!
//! Each sorting algorithm is modelled as a suspendable state machine that
//! advances the array by one externally-observable unit of work per call:
//!
//! - [`bubble`]: one adjacent compare/swap
//! - [`heap`]: one sift-down (heapify phase) or one extract + sift-down
//! - [`merge`]: one merge of two adjacent sorted ranges from a precomputed plan
//! - [`quick`]: one Lomuto partition of a range popped from an explicit stack
//!
//! # Step Contract
//!
//! Every automaton implements [`StepSort::advance`], which mutates the array in
//! place and returns a [`Step`]. `changed` is set when the array contents
//! differ from before the call; `done` marks the terminal state, after which the
//! array is sorted and the automaton should not be advanced again.
//!
//! [`SortAutomaton`] wraps the four machines behind one type so callers can stay
//! algorithm-agnostic.

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;

use std::fmt;

use clap::ValueEnum;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use merge::{MergeRange, MergeSort};
pub use quick::{PartitionRange, QuickSort};

/// Outcome of a single automaton call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    /// The algorithm has terminated and the array is sorted
    pub done: bool,
    /// The call modified the array
    pub changed: bool,
}

impl Step {
    /// Terminal step that leaves the array untouched
    pub const DONE: Step = Step {
        done: true,
        changed: false,
    };

    /// Non-terminal step
    pub fn progress(changed: bool) -> Self {
        Step {
            done: false,
            changed,
        }
    }

    /// Terminal step
    pub fn finish(changed: bool) -> Self {
        Step {
            done: true,
            changed,
        }
    }
}

/// A sorting algorithm paused between logical operations
pub trait StepSort {
    /// Perform at most one logical unit of work on `array`.
    ///
    /// The array length must match the length the automaton was created for.
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step;
}

/// Supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Heap,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Heap => "Heap",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }

    /// One-line description shown in the selection menu
    pub fn summary(self) -> &'static str {
        match self {
            Algorithm::Bubble => "adjacent compare-and-swap, one pair per step",
            Algorithm::Heap => "max-heap build, then extract the root each step",
            Algorithm::Merge => "bottom-up merges of the divide tree, one range per step",
            Algorithm::Quick => "Lomuto partition with last-element pivot, one range per step",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step automaton for any supported algorithm
#[derive(Debug, Clone)]
pub enum SortAutomaton {
    Bubble(BubbleSort),
    Heap(HeapSort),
    Merge(MergeSort),
    Quick(QuickSort),
}

impl SortAutomaton {
    /// Create the automaton for `algorithm`, bound to the length of `array`
    pub fn new<T>(algorithm: Algorithm, array: &[T]) -> Self {
        let len = array.len();
        match algorithm {
            Algorithm::Bubble => SortAutomaton::Bubble(BubbleSort::new(len)),
            Algorithm::Heap => SortAutomaton::Heap(HeapSort::new(len)),
            Algorithm::Merge => SortAutomaton::Merge(MergeSort::new(len)),
            Algorithm::Quick => SortAutomaton::Quick(QuickSort::new(len)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortAutomaton::Bubble(_) => Algorithm::Bubble,
            SortAutomaton::Heap(_) => Algorithm::Heap,
            SortAutomaton::Merge(_) => Algorithm::Merge,
            SortAutomaton::Quick(_) => Algorithm::Quick,
        }
    }
}

impl StepSort for SortAutomaton {
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step {
        match self {
            SortAutomaton::Bubble(s) => s.advance(array),
            SortAutomaton::Heap(s) => s.advance(array),
            SortAutomaton::Merge(s) => s.advance(array),
            SortAutomaton::Quick(s) => s.advance(array),
        }
    }
}
