//! Code representation.
//!
//! A code is a short sequence of symbol indices together with its color
//! histogram, which lets grading run in O(colors) instead of O(length²).

use crate::config::Config;
use crate::{ParseError, ALPHABET, MAX_COLORS, MAX_LENGTH};
use rand::Rng;

/// One candidate combination.
///
/// Pegs past `len` are always zero and `counts` is always the histogram of
/// the used pegs, so derived equality and hashing are structural on the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: [u8; MAX_LENGTH],
    counts: [u8; MAX_COLORS],
    len: u8,
}

impl Code {
    /// Build a code from symbol indices, each of which must be below `colors`.
    pub fn new(pegs: &[u8], colors: usize) -> Result<Self, ParseError> {
        if pegs.is_empty() || pegs.len() > MAX_LENGTH {
            return Err(ParseError::WrongLength {
                expected: pegs.len().clamp(1, MAX_LENGTH),
                found: pegs.len(),
            });
        }
        if let Some(&symbol) = pegs.iter().find(|&&p| p as usize >= colors.min(MAX_COLORS)) {
            return Err(ParseError::InvalidSymbol { symbol, colors });
        }
        Ok(Self::from_valid(pegs))
    }

    fn from_valid(pegs: &[u8]) -> Self {
        let mut code = Self {
            pegs: [0; MAX_LENGTH],
            counts: [0; MAX_COLORS],
            len: pegs.len() as u8,
        };
        code.pegs[..pegs.len()].copy_from_slice(pegs);
        for &p in pegs {
            code.counts[p as usize] += 1;
        }
        code
    }

    /// Decode the `index`-th code of the universe in mixed-radix order,
    /// position 0 being the least significant digit.
    pub fn from_index(mut index: u64, length: usize, colors: usize) -> Self {
        let mut pegs = [0u8; MAX_LENGTH];
        for peg in pegs.iter_mut().take(length) {
            *peg = (index % colors as u64) as u8;
            index /= colors as u64;
        }
        Self::from_valid(&pegs[..length])
    }

    /// Draw a uniformly random code, typically used as a hidden secret.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize, colors: usize) -> Self {
        let mut pegs = [0u8; MAX_LENGTH];
        for peg in pegs.iter_mut().take(length) {
            *peg = rng.gen_range(0..colors) as u8;
        }
        Self::from_valid(&pegs[..length])
    }

    /// Parse a line such as `"ADBC"`.
    ///
    /// Letters are case-insensitive. Characters outside the first
    /// `config.colors` letters of the alphabet are skipped, and exactly
    /// `config.length` symbols must remain.
    pub fn parse(text: &str, config: &Config) -> Result<Self, ParseError> {
        let alphabet = &ALPHABET[..config.colors.min(MAX_COLORS)];
        let pegs: Vec<u8> = text
            .chars()
            .filter(char::is_ascii)
            .filter_map(|c| {
                let c = c.to_ascii_uppercase() as u8;
                alphabet.iter().position(|&a| a == c).map(|i| i as u8)
            })
            .collect();
        if pegs.len() != config.length {
            return Err(ParseError::WrongLength {
                expected: config.length,
                found: pegs.len(),
            });
        }
        Self::new(&pegs, config.colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..self.len as usize]
    }

    /// Occurrences of each symbol value.
    #[inline]
    pub fn counts(&self) -> &[u8; MAX_COLORS] {
        &self.counts
    }

    /// Letter for each peg.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.pegs().iter().map(|&p| ALPHABET[p as usize] as char)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.symbols() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
