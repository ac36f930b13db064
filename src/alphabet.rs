//! The 26-symbol alphabet and its modular index space.
//!
//! All rotor, reflector and plugboard arithmetic happens on [`Letter`]
//! values, indices 0..25 that wrap modulo 26. Conversion from and to
//! characters is limited to the upper-case Latin letters `A..=Z`.

use std::fmt;

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// The alphabet in index order.
pub const SYMBOLS: &[u8; SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A symbol of the alphabet, stored as its index.
///
/// The inner value is always in `0..26`; every constructor reduces or
/// validates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// `A`, index 0.
    pub const A: Letter = Letter(0);

    /// Creates a letter from an index, reducing it modulo 26.
    pub const fn from_index(index: usize) -> Self {
        Letter((index % SIZE) as u8)
    }

    /// Creates a letter from any signed value using Euclidean reduction,
    /// so `-1` maps to `Z`.
    pub fn wrapping(value: i64) -> Self {
        Letter(reduce(value))
    }

    /// Looks up an upper-case alphabet character.
    ///
    /// # Returns
    /// `None` for anything outside `A..=Z`, including lower case.
    pub fn from_char(symbol: char) -> Option<Self> {
        index_of(symbol).map(|i| Letter(i as u8))
    }

    /// Returns the index of this letter (0..25).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the character for this letter.
    pub fn to_char(self) -> char {
        SYMBOLS[self.index()] as char
    }

    /// Moves the letter `delta` places around the alphabet.
    pub fn offset(self, delta: i64) -> Self {
        Self::wrapping(self.0 as i64 + delta)
    }

    /// Iterates over every letter in index order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..SIZE as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Letter::from_char(symbol).ok_or(EnigmaError::InvalidSymbol { symbol })
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Returns the index of `symbol` in the alphabet.
///
/// # Returns
/// `Some(0..=25)` for `A..=Z`, `None` otherwise.
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the symbol at `index`, reduced modulo 26.
pub fn symbol_at(index: usize) -> char {
    SYMBOLS[index % SIZE] as char
}

/// Reduces any integer into `0..26`.
pub fn reduce(value: i64) -> u8 {
    value.rem_euclid(SIZE as i64) as u8
}

/// Parses a 26-character wiring string into a table of letters.
///
/// Lower-case input is accepted and normalized. Only the length and the
/// symbol set are checked here; callers validate the permutation shape.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] if the string does not hold
/// exactly 26 symbols, or [`EnigmaError::InvalidSymbol`] for a character
/// outside the alphabet.
pub(crate) fn parse_table(wiring: &str) -> Result<[Letter; SIZE], EnigmaError> {
    let count = wiring.chars().count();
    if count != SIZE {
        return Err(EnigmaError::InvalidWiring {
            reason: format!("expected {} symbols, got {}", SIZE, count),
        });
    }
    let mut table = [Letter::A; SIZE];
    for (slot, symbol) in table.iter_mut().zip(wiring.chars()) {
        *slot = Letter::try_from(symbol.to_ascii_uppercase())?;
    }
    Ok(table)
}
