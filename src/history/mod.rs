// Round history and per-algorithm scoreboard

use crate::automaton::Algorithm;
use crate::process::Verdict;
use rustc_hash::FxHashMap;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number within the session
    pub number: usize,
    pub guess: Vec<i32>,
    /// The snapshot the automaton actually produced
    pub actual: Vec<i32>,
    pub correct: bool,
}

/// Rounds played in the current session, oldest first
#[derive(Debug, Clone, Default)]
pub struct RoundHistory {
    rounds: Vec<Round>,
}

impl RoundHistory {
    pub fn new() -> Self {
        RoundHistory { rounds: Vec::new() }
    }

    /// Record a guess and its verdict; `current` is the live array after the step
    pub fn record(&mut self, guess: Vec<i32>, verdict: &Verdict<i32>, current: &[i32]) {
        let actual = match verdict {
            Verdict::Correct => current.to_vec(),
            Verdict::Incorrect { expected } => expected.clone(),
        };
        self.rounds.push(Round {
            number: self.rounds.len() + 1,
            guess,
            actual,
            correct: verdict.is_correct(),
        });
    }

    pub fn get(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn correct(&self) -> usize {
        self.rounds.iter().filter(|r| r.correct).count()
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

/// Accumulated results for one algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub sessions: usize,
    pub correct: usize,
    pub rounds: usize,
}

/// In-memory results across every session played in this run
#[derive(Debug, Default)]
pub struct Scoreboard {
    tallies: FxHashMap<Algorithm, Tally>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    /// Add a finished session's results
    pub fn record(&mut self, algorithm: Algorithm, correct: usize, rounds: usize) {
        let tally = self.tallies.entry(algorithm).or_default();
        tally.sessions += 1;
        tally.correct += correct;
        tally.rounds += rounds;
    }

    pub fn tally(&self, algorithm: Algorithm) -> Tally {
        self.tallies.get(&algorithm).copied().unwrap_or_default()
    }

    /// Played algorithms in menu order
    pub fn entries(&self) -> Vec<(Algorithm, Tally)> {
        Algorithm::ALL
            .iter()
            .filter_map(|a| self.tallies.get(a).map(|t| (*a, *t)))
            .collect()
    }
}
