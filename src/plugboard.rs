//! Plugboard: symmetric letter swaps before and after the rotor stack.
//!
//! Pairs are disjoint; a symbol listed twice is rejected at construction
//! rather than resolved by ordering, so every accepted configuration has a
//! single meaning. Unpaired symbols pass through unchanged.

use std::str::FromStr;

use crate::alphabet::{Letter, SIZE};
use crate::error::EnigmaError;

/// Symmetric partial permutation stored as a full lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; SIZE],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Returns a plugboard with no cables connected.
    pub fn identity() -> Self {
        let mut table = [Letter::A; SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = Letter::from_index(i);
        }
        Plugboard { table }
    }

    /// Builds a plugboard from symbol pairs.
    ///
    /// Pairs are case-insensitive; `('a', 'B')` and `('A', 'b')` are the
    /// same cable.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidSymbol`] for a character outside the alphabet.
    /// - [`EnigmaError::PlugboardSelfPair`] if a pair joins a symbol to itself.
    /// - [`EnigmaError::PlugboardConflict`] if a symbol appears in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    /// use enigma::alphabet::Letter;
    ///
    /// let board = Plugboard::new(&[('A', 'B'), ('C', 'D')]).unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(board.swap(a).to_char(), 'B');
    ///
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut board = Self::identity();
        for &(first, second) in pairs {
            board.connect(first, second)?;
        }
        Ok(board)
    }

    fn connect(&mut self, first: char, second: char) -> Result<(), EnigmaError> {
        let a = Letter::try_from(first.to_ascii_uppercase())?;
        let b = Letter::try_from(second.to_ascii_uppercase())?;
        if a == b {
            return Err(EnigmaError::PlugboardSelfPair {
                symbol: a.to_char(),
            });
        }
        for letter in [a, b] {
            if self.table[letter.index()] != letter {
                return Err(EnigmaError::PlugboardConflict {
                    symbol: letter.to_char(),
                });
            }
        }
        self.table[a.index()] = b;
        self.table[b.index()] = a;
        Ok(())
    }

    /// Returns the partner of `input`, or `input` itself when unpaired.
    pub fn swap(&self, input: Letter) -> Letter {
        self.table[input.index()]
    }

    /// Returns the connected pairs in alphabetical order of their first symbol.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|a| {
                let b = self.table[a.index()];
                (a < b).then_some((a, b))
            })
            .collect()
    }

    /// Returns the number of connected pairs.
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    /// Returns `true` if no pairs are connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses the textual form `"AB CD EF"`.
///
/// Tokens are separated by whitespace or commas and are read two symbols at
/// a time, so `"ABCD"` is the same as `"AB CD"`. Case is ignored.
impl FromStr for Plugboard {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::identity();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let symbols: Vec<char> = token.chars().collect();
            let pairs = symbols.chunks_exact(2);
            if !pairs.remainder().is_empty() {
                return Err(EnigmaError::InvalidSettingValue {
                    field: "plugboard",
                    value: token.to_string(),
                });
            }
            for pair in pairs {
                board.connect(pair[0], pair[1])?;
            }
        }
        Ok(board)
    }
}
