//! Validation errors raised while reading user input
//!
//! None of these reach the process controller: the driver reports them and
//! prompts again.

use thiserror::Error;

/// Reasons a typed guess is rejected before scoring
#[derive(Debug, Error)]
pub enum GuessError {
    /// Nothing but whitespace was entered
    #[error("please enter the next array state")]
    Empty,

    /// The input is not a JSON array of integers
    #[error("expected a JSON array such as [7, 2, 5, 4]: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },

    /// The guess has a different number of elements than the live array
    #[error("expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
