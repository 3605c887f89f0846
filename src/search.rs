//! Parallel best-guess search.
//!
//! A guess is scored by how well it separates a pool of still-possible codes.
//! The guess list is split into contiguous chunks, one worker per chunk, and
//! the chunk winners are reduced in chunk order so the result only depends on
//! the inputs and the worker count.

use crate::code::Code;
use crate::config::{Config, Scoring};
use crate::feedback::{grade, NUM_BUCKETS};
use crate::{ConfigError, SolverError};
use log::{debug, trace};

/// A guess together with its score. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess {
    pub guess: Code,
    pub score: u64,
}

/// Group sizes of `pool` by the rating each code would give `guess`.
fn buckets(guess: &Code, pool: &[Code]) -> [u32; NUM_BUCKETS] {
    let mut counts = [0u32; NUM_BUCKETS];
    for code in pool {
        counts[grade(guess, code).bucket()] += 1;
    }
    counts
}

#[inline]
fn pairs(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

/// Count the unordered pairs of distinct pool entries that `guess` rates
/// differently.
///
/// Two codes are told apart exactly when they land in different rating
/// groups, so this is all pairs minus the pairs inside each group.
pub fn distinguished_pairs(guess: &Code, pool: &[Code]) -> u64 {
    let same: u64 = buckets(guess, pool)
        .iter()
        .map(|&k| pairs(k as u64))
        .sum();
    pairs(pool.len() as u64) - same
}

/// Pool size minus the largest group that would survive any single rating.
pub fn minimax_score(guess: &Code, pool: &[Code]) -> u64 {
    let worst = buckets(guess, pool).into_iter().max().unwrap_or(0);
    pool.len() as u64 - worst as u64
}

/// Score `guess` against `pool` with the chosen heuristic.
pub fn score(scoring: Scoring, guess: &Code, pool: &[Code]) -> u64 {
    match scoring {
        Scoring::DistinguishedPairs => distinguished_pairs(guess, pool),
        Scoring::Minimax => minimax_score(guess, pool),
    }
}

/// Chunk length that splits `len` items into at most `workers` chunks.
pub fn chunk_size(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

/// Keep the first of the highest-scoring entries.
fn first_best(best: Option<ScoredGuess>, candidate: ScoredGuess) -> Option<ScoredGuess> {
    match best {
        Some(b) if b.score >= candidate.score => Some(b),
        _ => Some(candidate),
    }
}

/// Best guess of one chunk, first one wins on ties.
fn best_in_chunk(scoring: Scoring, guesses: &[Code], pool: &[Code]) -> Option<ScoredGuess> {
    guesses
        .iter()
        .map(|guess| ScoredGuess {
            guess: *guess,
            score: score(scoring, guess, pool),
        })
        .fold(None, first_best)
}

/// Worker-pool evaluator for guess candidates.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    threads: usize,
    scoring: Scoring,
}

impl SearchEngine {
    pub fn new(threads: usize, scoring: Scoring) -> Result<Self, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(Self { threads, scoring })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.threads, config.scoring)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Score a single guess against `pool`.
    pub fn score(&self, guess: &Code, pool: &[Code]) -> u64 {
        score(self.scoring, guess, pool)
    }

    /// Find the highest-scoring entry of `guesses` against `pool`.
    ///
    /// A fresh pool of workers is started for the call and joined before it
    /// returns. Each worker reads its own chunk and the shared `pool` and posts
    /// its local best on a channel; exactly one result per chunk is collected.
    /// Returns `Ok(None)` only when `guesses` is empty.
    pub fn best_guess(
        &self,
        guesses: &[Code],
        pool: &[Code],
    ) -> Result<Option<ScoredGuess>, SolverError> {
        if guesses.is_empty() {
            return Ok(None);
        }

        let chunks: Vec<&[Code]> = guesses
            .chunks(chunk_size(guesses.len(), self.threads))
            .collect();
        debug!(
            "scoring {} guesses against {} codes in {} chunks",
            guesses.len(),
            pool.len(),
            chunks.len()
        );

        let workers = rayon::ThreadPoolBuilder::new()
            .num_threads(chunks.len())
            .thread_name(|i| format!("guess-search-{}", i))
            .build()?;
        let (tx, rx) = crossbeam_channel::bounded(chunks.len());
        let scoring = self.scoring;

        workers.scope(|s| {
            for (index, chunk) in chunks.iter().enumerate() {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let best = best_in_chunk(scoring, chunk, pool);
                    trace!("chunk {} best {:?}", index, best);
                    let _ = tx.send((index, best));
                });
            }
        });
        drop(tx);

        let mut results: Vec<(usize, Option<ScoredGuess>)> =
            rx.iter().take(chunks.len()).collect();
        results.sort_unstable_by_key(|(index, _)| *index);

        Ok(results
            .into_iter()
            .filter_map(|(_, best)| best)
            .fold(None, first_best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_never_exceed_workers() {
        assert_eq!(chunk_size(10, 8), 2);
        assert_eq!(10usize.div_ceil(chunk_size(10, 8)), 5);
        assert_eq!(chunk_size(1296, 8), 162);
        assert_eq!(chunk_size(3, 1), 3);
        assert_eq!(chunk_size(0, 4), 1);
    }

    #[test]
    fn first_best_keeps_earlier_tie() {
        let a = ScoredGuess {
            guess: Code::from_index(0, 4, 6),
            score: 5,
        };
        let b = ScoredGuess {
            guess: Code::from_index(1, 4, 6),
            score: 5,
        };
        assert_eq!(first_best(Some(a), b), Some(a));
        assert_eq!(first_best(None, b), Some(b));
    }
}
