//! Mastermind solver and game state.
//!
//! The solver keeps every code that is still consistent with the ratings seen
//! so far. After each rating the candidates are re-checked against the full
//! history, and the next guess comes from the selection policy in
//! [`crate::selector`].

use crate::code::Code;
use crate::config::Config;
use crate::feedback::{grade, Feedback};
use crate::search::SearchEngine;
use crate::selector::{self, Selection};
use crate::space::{self, HistoryEntry};
use crate::{ConfigError, SolverError};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::Arc;

fn seeded_rng(config: &Config) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// The code breaker
#[derive(Debug, Clone)]
pub struct Solver {
    config: Config,
    engine: SearchEngine,
    universe: Arc<[Code]>,
    candidates: Vec<Code>,
    history: Vec<HistoryEntry>,
    rng: StdRng,
}

impl Solver {
    /// Start a new game for `config`.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = SearchEngine::from_config(&config)?;
        let universe: Arc<[Code]> = space::universe(&config).into();
        debug!(
            "new game: {} pegs, {} colors, {} codes, {} workers",
            config.length,
            config.colors,
            universe.len(),
            config.threads
        );
        Ok(Self {
            candidates: universe.to_vec(),
            history: Vec::new(),
            rng: seeded_rng(&config),
            universe,
            engine,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// Codes still consistent with every rating.
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Whether the last rating was all exact.
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|entry| entry.feedback.is_win(self.config.length))
    }

    /// Forget the history and start over with the full universe.
    pub fn reset(&mut self) {
        self.candidates = self.universe.to_vec();
        self.history.clear();
    }

    /// Choose the next guess and report how it was found.
    pub fn select(&mut self) -> Result<Selection, SolverError> {
        if self.is_solved() {
            return Err(SolverError::AlreadySolved);
        }
        selector::select(
            &self.candidates,
            &self.universe,
            &self.config,
            &self.engine,
            &mut self.rng,
        )
    }

    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        self.select().map(|selection| selection.guess)
    }

    /// Record the rating `feedback` for `guess` and drop every candidate
    /// that disagrees with the history. Returns the number left.
    ///
    /// An empty candidate set means some rating was wrong; the game cannot
    /// continue and [`SolverError::InconsistentFeedback`] is returned.
    pub fn apply_feedback(&mut self, guess: Code, feedback: Feedback) -> Result<usize, SolverError> {
        if self.is_solved() {
            return Err(SolverError::AlreadySolved);
        }
        if guess.len() != self.config.length {
            return Err(SolverError::GuessLength {
                expected: self.config.length,
                found: guess.len(),
            });
        }

        self.history.push(HistoryEntry::new(guess, feedback));
        let before = self.candidates.len();
        let history = &self.history;
        self.candidates
            .retain(|code| space::is_consistent(code, history));
        debug!(
            "{} rated {}: {} -> {} candidates",
            guess,
            feedback,
            before,
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            return Err(SolverError::InconsistentFeedback);
        }
        Ok(self.candidates.len())
    }

    /// Play until solved, asking `rate` for the rating of each guess.
    /// Returns the full history of the game.
    pub fn solve_with_feedback<F, E>(&mut self, mut rate: F) -> Result<Vec<HistoryEntry>, E>
    where
        F: FnMut(&Code) -> Result<Feedback, E>,
        E: From<SolverError>,
    {
        while !self.is_solved() {
            let guess = self.next_guess()?;
            let feedback = rate(&guess)?;
            self.apply_feedback(guess, feedback)?;
        }
        info!("solved in {} attempts", self.attempts());
        Ok(self.history.clone())
    }

    /// Solve a known secret, grading every guess automatically.
    pub fn solve_for_secret(&mut self, secret: &Code) -> Result<Vec<HistoryEntry>, SolverError> {
        if secret.len() != self.config.length {
            return Err(SolverError::GuessLength {
                expected: self.config.length,
                found: secret.len(),
            });
        }
        self.solve_with_feedback(|guess| Ok(grade(guess, secret)))
    }

    /// Attempts needed per secret, as `(attempts, games)` pairs sorted by
    /// attempts. Each game runs on a fresh copy of this solver.
    pub fn guess_distribution(&self, secrets: &[Code]) -> Result<Vec<(usize, usize)>, SolverError> {
        let counts: Vec<usize> = secrets
            .par_iter()
            .map(|secret| {
                let mut solver = self.clone();
                solver.reset();
                solver.solve_for_secret(secret).map(|history| history.len())
            })
            .collect::<Result<_, _>>()?;

        let max_attempts = counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_attempts + 1];
        for count in counts {
            distribution[count] += 1;
        }

        Ok(distribution
            .into_iter()
            .enumerate()
            .filter(|(_, games)| *games > 0)
            .collect())
    }
}

/// A game where the computer keeps the secret and grades the player.
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    secret: Code,
    attempts: usize,
    solved: bool,
}

impl Game {
    /// Start a game with a random secret.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = seeded_rng(&config);
        let secret = Code::random(&mut rng, config.length, config.colors);
        Ok(Self::with_secret(config, secret))
    }

    pub fn with_secret(config: Config, secret: Code) -> Self {
        Self {
            config,
            secret,
            attempts: 0,
            solved: false,
        }
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Grade one player guess against the secret.
    pub fn guess(&mut self, guess: &Code) -> Result<Feedback, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }
        if guess.len() != self.config.length {
            return Err(SolverError::GuessLength {
                expected: self.config.length,
                found: guess.len(),
            });
        }
        self.attempts += 1;
        let feedback = grade(guess, &self.secret);
        self.solved = feedback.is_win(self.config.length);
        Ok(feedback)
    }
}
