//! Candidate space: the universe of codes and history-based elimination.

use crate::code::Code;
use crate::config::Config;
use crate::feedback::{grade, Feedback};

/// One round of a game: the guess played and the rating it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
}

impl HistoryEntry {
    pub fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Whether `code` as the secret would have produced this rating.
    #[inline]
    pub fn admits(&self, code: &Code) -> bool {
        grade(&self.guess, code) == self.feedback
    }
}

/// Every code for `config`, in mixed-radix counting order with the first
/// peg varying fastest. The order is stable and contains no repeats.
///
/// `config` must already be validated.
pub fn universe(config: &Config) -> Vec<Code> {
    (0..config.universe_size())
        .map(|i| Code::from_index(i, config.length, config.colors))
        .collect()
}

/// Whether `code` agrees with every entry of `history`.
pub fn is_consistent(code: &Code, history: &[HistoryEntry]) -> bool {
    history.iter().all(|entry| entry.admits(code))
}

/// Keep only the candidates consistent with the whole history.
pub fn filter(candidates: &[Code], history: &[HistoryEntry]) -> Vec<Code> {
    candidates
        .iter()
        .filter(|c| is_consistent(c, history))
        .copied()
        .collect()
}
