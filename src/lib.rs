//! # Mastermind Solver
//!
//! A multithreaded Mastermind code breaker.
//!
//! The solver starts from every possible code, removes the codes that disagree
//! with the ratings received so far, and picks its next guess by scoring
//! candidates on how many pairs of remaining codes they tell apart.

pub mod code;
pub mod config;
pub mod feedback;
pub mod search;
pub mod selector;
pub mod solver;
pub mod space;

pub use code::Code;
pub use config::{Config, Scoring};
pub use feedback::{grade, Feedback};
pub use search::{ScoredGuess, SearchEngine};
pub use selector::{SearchMode, Selection};
pub use solver::{Game, Solver};
pub use space::HistoryEntry;

use thiserror::Error;

/// Maximum number of pegs a [`Code`] can hold.
pub const MAX_LENGTH: usize = 8;

/// Symbols used to write codes, one letter per color.
pub const ALPHABET: &[u8; 16] = b"ABCDEFGHIJKLMNOP";

/// Maximum number of colors, bounded by [`ALPHABET`].
pub const MAX_COLORS: usize = ALPHABET.len();

/// Largest universe the solver is willing to materialise.
pub const MAX_UNIVERSE: u64 = 1 << 24;

/// The errors that `mastermind_solver` can produce.
#[derive(Debug, Error)]
pub enum MastermindError {
    #[error("invalid configuration")]
    Config {
        #[from]
        kind: ConfigError,
    },

    #[error("could not parse input")]
    Parse {
        #[from]
        kind: ParseError,
    },

    #[error("the solver encountered an error")]
    Solver {
        #[from]
        kind: SolverError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the worker count must be at least 1")]
    ZeroThreads,

    #[error("the code length must be at least 1")]
    ZeroLength,

    #[error("the code length {0} exceeds the maximum of 8")]
    CodeTooLong(usize),

    #[error("at least 2 colors are required, got {0}")]
    TooFewColors(usize),

    #[error("{0} colors exceeds the alphabet of 16 letters")]
    TooManyColors(usize),

    #[error("a universe of {0} codes is too large to enumerate")]
    UniverseTooLarge(u64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A symbol index is outside the configured colors.
    #[error("symbol {symbol} is not one of the {colors} colors")]
    InvalidSymbol { symbol: u8, colors: usize },

    #[error("expected {expected} pegs, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// A rating may only contain `x` and `.` markers.
    #[error("unrecognized rating marker {0:?}")]
    UnknownMarker(char),

    #[error("rating {exact} exact + {color} color is impossible for {length} pegs")]
    ImpossibleRating {
        exact: usize,
        color: usize,
        length: usize,
    },
}

#[derive(Debug, Error)]
pub enum SolverError {
    /// Some rating disagrees with an earlier one for the same secret.
    #[error("no consistent candidates remain, a rating was entered incorrectly")]
    InconsistentFeedback,

    #[error("the guess has {found} pegs but the game uses {expected}")]
    GuessLength { expected: usize, found: usize },

    #[error("the game is already solved")]
    AlreadySolved,

    #[error("could not start the search workers")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
