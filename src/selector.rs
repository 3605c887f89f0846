//! Guess selection policy.

use crate::code::Code;
use crate::config::Config;
use crate::search::SearchEngine;
use crate::SolverError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Where the next guess was looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Exactly one candidate is left, it is played without searching.
    Sole,
    /// Every code of the universe is scored, eliminated ones included.
    Universe,
    /// Only the remaining candidates are scored.
    Candidates,
    /// Too many candidates to search, one is drawn at random.
    Random,
}

impl SearchMode {
    /// Policy for a candidate set of `remaining` codes.
    pub fn for_remaining(remaining: usize, config: &Config) -> Self {
        if remaining == 1 {
            SearchMode::Sole
        } else if remaining < config.loop_over_all_threshold {
            SearchMode::Universe
        } else if remaining < config.full_search_threshold {
            SearchMode::Candidates
        } else {
            SearchMode::Random
        }
    }
}

/// The chosen guess and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub guess: Code,
    pub mode: SearchMode,
    /// Search score, absent for sole and random picks.
    pub score: Option<u64>,
}

/// Pick the next guess for `candidates`.
///
/// Fails with [`SolverError::InconsistentFeedback`] when no candidate is left.
pub fn select<R: Rng + ?Sized>(
    candidates: &[Code],
    universe: &[Code],
    config: &Config,
    engine: &SearchEngine,
    rng: &mut R,
) -> Result<Selection, SolverError> {
    let first = *candidates.first().ok_or(SolverError::InconsistentFeedback)?;
    let mode = SearchMode::for_remaining(candidates.len(), config);
    debug!("{} candidates remaining, mode {:?}", candidates.len(), mode);

    let searched = match mode {
        SearchMode::Sole => None,
        SearchMode::Universe => engine.best_guess(universe, candidates)?,
        SearchMode::Candidates => engine.best_guess(candidates, candidates)?,
        SearchMode::Random => {
            let guess = *candidates.choose(rng).unwrap_or(&first);
            return Ok(Selection {
                guess,
                mode,
                score: None,
            });
        }
    };

    Ok(match searched {
        Some(best) => Selection {
            guess: best.guess,
            mode,
            score: Some(best.score),
        },
        None => Selection {
            guess: first,
            mode,
            score: None,
        },
    })
}
