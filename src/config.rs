//! Solver configuration.
//!
//! A [`Config`] is built once, validated, and then handed by value to the
//! solver and the search engine. Nothing reads configuration from global state.

use crate::{ConfigError, MAX_COLORS, MAX_LENGTH, MAX_UNIVERSE};

/// Candidate sets at or above this size are answered with a random pick.
pub const FULL_SEARCH_THRESHOLD: usize = 1140;

/// Candidate sets below this size search guesses across the whole universe.
pub const LOOP_OVER_ALL_THRESHOLD: usize = 70;

/// Worker count used when none is given.
pub const DEFAULT_THREADS: usize = 8;

/// How a candidate guess is scored against the remaining pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Number of unordered pool pairs the guess tells apart.
    #[default]
    DistinguishedPairs,
    /// Pool size minus the largest group of codes sharing one rating.
    Minimax,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pegs per code.
    pub length: usize,
    /// Distinct symbol values.
    pub colors: usize,
    /// Degree of parallelism for the guess search.
    pub threads: usize,
    pub full_search_threshold: usize,
    pub loop_over_all_threshold: usize,
    pub scoring: Scoring,
    /// Seed for random picks and secrets, entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 4,
            colors: 6,
            threads: DEFAULT_THREADS,
            full_search_threshold: FULL_SEARCH_THRESHOLD,
            loop_over_all_threshold: LOOP_OVER_ALL_THRESHOLD,
            scoring: Scoring::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn new(length: usize, colors: usize) -> Self {
        Self {
            length,
            colors,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_thresholds(mut self, full_search: usize, loop_over_all: usize) -> Self {
        self.full_search_threshold = full_search;
        self.loop_over_all_threshold = loop_over_all;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct codes, `colors ^ length`, saturating on overflow.
    pub fn universe_size(&self) -> u64 {
        (self.colors as u64).saturating_pow(self.length as u32)
    }

    /// Reject configurations no game can be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.length > MAX_LENGTH {
            return Err(ConfigError::CodeTooLong(self.length));
        }
        if self.colors <= 1 {
            return Err(ConfigError::TooFewColors(self.colors));
        }
        if self.colors > MAX_COLORS {
            return Err(ConfigError::TooManyColors(self.colors));
        }
        let size = self.universe_size();
        if size > MAX_UNIVERSE {
            return Err(ConfigError::UniverseTooLarge(size));
        }
        Ok(())
    }
}
