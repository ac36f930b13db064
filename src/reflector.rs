//! Reflector: fixed involutive wiring at the end of the rotor stack.
//!
//! The reflector has no state and never steps. Its table is checked once at
//! construction to be an involution without fixed points, which is what
//! makes the whole machine self-inverse.

use crate::alphabet::{self, Letter, SIZE};
use crate::error::EnigmaError;

/// Historic reflector B: `YRUHQSLDPXNGOKMIEBFZCWVJAT`.
pub const REFLECTOR_B: Reflector = Reflector::from_static(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// Immutable involutive permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    table: [Letter; SIZE],
}

impl Reflector {
    /// Builds a reflector from a 26-symbol wiring string.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiring`] / [`EnigmaError::InvalidSymbol`] if the
    ///   string is not 26 alphabet symbols.
    /// - [`EnigmaError::ReflectorFixedPoint`] if any symbol maps to itself.
    /// - [`EnigmaError::ReflectorNotInvolution`] if applying the wiring twice
    ///   does not return the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::reflector::{Reflector, REFLECTOR_B};
    ///
    /// let b = Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(b, REFLECTOR_B);
    ///
    /// // The identity maps every symbol to itself.
    /// assert!(Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let table = alphabet::parse_table(wiring)?;
        for input in Letter::all() {
            let output = table[input.index()];
            if output == input {
                return Err(EnigmaError::ReflectorFixedPoint {
                    symbol: input.to_char(),
                });
            }
            if table[output.index()] != input {
                return Err(EnigmaError::ReflectorNotInvolution {
                    symbol: input.to_char(),
                });
            }
        }
        Ok(Reflector { table })
    }

    const fn from_static(wiring: &[u8; SIZE]) -> Self {
        let mut table = [Letter::A; SIZE];
        let mut i = 0;
        while i < SIZE {
            table[i] = Letter::from_index((wiring[i] - b'A') as usize);
            i += 1;
        }
        Reflector { table }
    }

    /// Routes a signal back toward the rotor stack.
    pub fn reflect(&self, input: Letter) -> Letter {
        self.table[input.index()]
    }

    /// Returns the wiring as a 26-character string.
    pub fn wiring(&self) -> String {
        self.table.iter().map(|l| l.to_char()).collect()
    }
}

impl Default for Reflector {
    fn default() -> Self {
        REFLECTOR_B
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflector_b_passes_validation() {
        let checked = Reflector::new(&REFLECTOR_B.wiring()).unwrap();
        assert_eq!(checked, REFLECTOR_B);
    }

    #[test]
    fn test_reflect_is_involution() {
        for input in Letter::all() {
            let out = REFLECTOR_B.reflect(input);
            assert_ne!(out, input);
            assert_eq!(REFLECTOR_B.reflect(out), input);
        }
    }

    #[test]
    fn test_reflect_known_pairs() {
        let a = Letter::from_char('A').unwrap();
        assert_eq!(REFLECTOR_B.reflect(a).to_char(), 'Y');
        let q = Letter::from_char('Q').unwrap();
        assert_eq!(REFLECTOR_B.reflect(q).to_char(), 'E');
    }

    #[test]
    fn test_rejects_fixed_point() {
        // Swap A/B only at the front; C maps to itself.
        assert_eq!(
            Reflector::new("BACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(EnigmaError::ReflectorFixedPoint { symbol: 'C' })
        );
    }

    #[test]
    fn test_rejects_non_involution() {
        // Rotor I wiring is a permutation but not its own inverse.
        assert_eq!(
            Reflector::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
            Err(EnigmaError::ReflectorNotInvolution { symbol: 'A' })
        );
    }

    #[test]
    fn test_default_is_reflector_b() {
        assert_eq!(Reflector::default(), REFLECTOR_B);
    }
}
