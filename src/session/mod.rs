//! Session driver glue
//!
//! Everything the trainer needs around the controller that is not part of the
//! sorting engine: producing the starting array, turning typed text into a
//! guess, printing arrays, and the line-oriented prompt loop used by
//! `--plain` mode.

pub mod errors;

use std::io::{self, BufRead, Write};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};

use crate::process::{SortProcess, Verdict};
pub use errors::GuessError;

/// Array length used when none is configured
pub const DEFAULT_ARRAY_LEN: usize = 5;

/// Longest array the trainer will generate
pub const MAX_ARRAY_LEN: usize = 16;

/// Shown whenever a guess fails validation
pub const GUESS_FORMAT_HINT: &str =
    "Please enter how the array would look at the next step, as a JSON array: [7, 2, 5, 4, ...]";

/// Random permutation of `0..len`
pub fn generate_array(len: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut array: Vec<i32> = (0..len as i32).collect();
    array.shuffle(rng);
    array
}

/// Build the session RNG, seeded for reproducible arrays when requested
pub fn session_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    debug!(seed, "seeding array generator");
    StdRng::seed_from_u64(seed)
}

/// Parse a typed guess, checking it against the live array length
pub fn parse_guess(input: &str, expected_len: usize) -> Result<Vec<i32>, GuessError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GuessError::Empty);
    }

    let guess: Vec<i32> = serde_json::from_str(input)?;
    if guess.len() != expected_len {
        return Err(GuessError::LengthMismatch {
            expected: expected_len,
            got: guess.len(),
        });
    }

    Ok(guess)
}

/// Render an array in the same notation guesses are typed in
pub fn format_array<T: std::fmt::Display>(array: &[T]) -> String {
    let items: Vec<String> = array.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Final tally of a finished (or abandoned) session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub rounds: usize,
    pub completed: bool,
}

impl Score {
    pub fn of(process: &SortProcess<i32>) -> Self {
        Score {
            correct: process.guesses(),
            rounds: process.rounds(),
            completed: process.is_done(),
        }
    }
}

/// Prompt loop over arbitrary line input and text output.
///
/// Runs until the controller reports done or the input is exhausted.
pub fn run_plain<R: BufRead, W: Write>(
    process: &mut SortProcess<i32>,
    input: R,
    mut output: W,
) -> io::Result<Score> {
    writeln!(
        output,
        "{} sort, starting from {}",
        process.algorithm(),
        format_array(process.original())
    )?;

    let mut lines = input.lines();
    while !process.is_done() {
        write!(
            output,
            "How would the array {} look at the next step? ",
            format_array(process.current())
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            info!("input closed before the sort finished");
            break;
        };
        let line = line?;

        let guess = match parse_guess(&line, process.current().len()) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(error = %e, "rejected guess");
                writeln!(output, "{}", e)?;
                writeln!(output, "{}", GUESS_FORMAT_HINT)?;
                continue;
            }
        };

        match process.next(&guess) {
            Verdict::Correct => writeln!(output, "Correct!")?,
            Verdict::Incorrect { expected } => {
                writeln!(output, "Correct one: {}", format_array(&expected))?
            }
        }
    }

    let score = Score::of(process);
    writeln!(
        output,
        "Score: {}/{} steps guessed",
        score.correct, score.rounds
    )?;
    Ok(score)
}
