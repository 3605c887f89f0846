//! Feedback calculation for Mastermind guesses.
//!
//! This module grades a guess against a target code and converts ratings
//! to and from their text form (`x` per exact peg, `.` per color-only peg).

use crate::code::Code;
use crate::{ParseError, MAX_LENGTH};

/// Marker for a peg of the right color in the right position.
pub const EXACT_MARKER: char = 'x';

/// Marker for a peg of the right color in the wrong position.
pub const COLOR_MARKER: char = '.';

/// Number of dense bucket indices, see [`Feedback::bucket`].
pub const NUM_BUCKETS: usize = (MAX_LENGTH + 1) * (MAX_LENGTH + 1);

/// The rating of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: u8,
    pub color: u8,
}

/// Grade `guess` against `target`.
///
/// The color count starts as the total color overlap of the two histograms.
/// Every exact positional match then moves one peg from color to exact, so a
/// peg is never credited twice and `exact + color` never exceeds the length.
#[inline]
pub fn grade(guess: &Code, target: &Code) -> Feedback {
    debug_assert_eq!(guess.len(), target.len());

    let mut color: u8 = guess
        .counts()
        .iter()
        .zip(target.counts())
        .map(|(&g, &t)| g.min(t))
        .sum();
    let mut exact = 0u8;
    for (g, t) in guess.pegs().iter().zip(target.pegs()) {
        if g == t {
            exact += 1;
            color -= 1;
        }
    }

    Feedback { exact, color }
}

impl Feedback {
    pub fn new(exact: u8, color: u8) -> Self {
        Self { exact, color }
    }

    /// The winning rating for codes of `length` pegs.
    pub fn win(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Check if this rating means the guess was the secret
    pub fn is_win(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Dense index in `0..NUM_BUCKETS`, distinct for every rating.
    #[inline]
    pub fn bucket(self) -> usize {
        self.exact as usize * (MAX_LENGTH + 1) + self.color as usize
    }

    /// Whether some pair of `length`-peg codes can produce this rating.
    ///
    /// `length - 1` exact with one color-only peg is unreachable: the single
    /// remaining peg cannot be misplaced on its own.
    pub fn is_possible(self, length: usize) -> bool {
        let (exact, color) = (self.exact as usize, self.color as usize);
        exact + color <= length && !(exact + 1 == length && color == 1)
    }

    /// Parse a rating such as `"xx."`.
    ///
    /// Surrounding whitespace is ignored, any other character than the two
    /// markers is an error.
    pub fn parse(text: &str, length: usize) -> Result<Self, ParseError> {
        let mut exact = 0usize;
        let mut color = 0usize;
        for c in text.trim().chars() {
            match c {
                c if c.eq_ignore_ascii_case(&EXACT_MARKER) => exact += 1,
                COLOR_MARKER => color += 1,
                other => return Err(ParseError::UnknownMarker(other)),
            }
        }
        if exact + color > length || !Self::new(exact as u8, color as u8).is_possible(length) {
            return Err(ParseError::ImpossibleRating {
                exact,
                color,
                length,
            });
        }
        Ok(Self::new(exact as u8, color as u8))
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.exact {
            write!(f, "{}", EXACT_MARKER)?;
        }
        for _ in 0..self.color {
            write!(f, "{}", COLOR_MARKER)?;
        }
        Ok(())
    }
}
