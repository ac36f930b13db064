//! Rotor: stateful substitution wheel.
//!
//! A rotor pairs an immutable [`RotorSpec`] (wiring permutation plus notch)
//! with a ring setting and a position counter. The position advances with
//! [`Rotor::step`]; the ring setting stays fixed for the rotor's lifetime.
//!
//! Both the forward table and its inverse are precomputed when a spec is
//! built, so [`Rotor::forward`] and [`Rotor::backward`] are single lookups
//! wrapped in the same offset arithmetic.

use crate::alphabet::{self, Letter, SIZE};
use crate::error::EnigmaError;

/// Immutable rotor definition: a wiring permutation and a notch symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    forward: [Letter; SIZE],
    inverse: [Letter; SIZE],
    notch: Letter,
}

/// Rotor I: `EKMFLGDQVZNTOWYHXUSPAIBRCJ`, notch `Q`.
pub const ROTOR_I: RotorSpec = RotorSpec::from_static(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q');

/// Rotor II: `AJDKSIRUXBLHWTMCQGZNPYFVOE`, notch `E`.
pub const ROTOR_II: RotorSpec = RotorSpec::from_static(b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E');

/// Rotor III: `BDFHJLCPRTXVZNYEIWGAKMUSQO`, notch `V`.
pub const ROTOR_III: RotorSpec = RotorSpec::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V');

/// The predefined rotors, addressed by rotor choice index.
pub static STANDARD_ROTORS: [RotorSpec; 3] = [ROTOR_I, ROTOR_II, ROTOR_III];

impl RotorSpec {
    /// Builds a spec from a wiring string and notch symbol.
    ///
    /// # Parameters
    /// - `wiring`: 26 symbols; position `i` holds the output for input `i`.
    /// - `notch`: Symbol at which this rotor carries its left neighbour.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// permutation of the alphabet, or [`EnigmaError::InvalidSymbol`] for a
    /// character outside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::{RotorSpec, ROTOR_I};
    ///
    /// let spec = RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q').unwrap();
    /// assert_eq!(spec, ROTOR_I);
    ///
    /// assert!(RotorSpec::new("AACDEFGHIJKLMNOPQRSTUVWXYZ", 'A').is_err());
    /// ```
    pub fn new(wiring: &str, notch: char) -> Result<Self, EnigmaError> {
        let forward = alphabet::parse_table(wiring)?;
        let notch = Letter::try_from(notch.to_ascii_uppercase())?;

        let mut inverse: [Option<Letter>; SIZE] = [None; SIZE];
        for (input, &target) in forward.iter().enumerate() {
            if inverse[target.index()].is_some() {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!("duplicate target '{}'", target),
                });
            }
            inverse[target.index()] = Some(Letter::from_index(input));
        }

        let mut table = [Letter::A; SIZE];
        for (slot, entry) in table.iter_mut().zip(inverse) {
            // 26 distinct targets over 26 slots fill every entry.
            if let Some(letter) = entry {
                *slot = letter;
            }
        }

        Ok(RotorSpec {
            forward,
            inverse: table,
            notch,
        })
    }

    /// Compile-time constructor for the built-in wirings.
    ///
    /// The input must already be a valid upper-case permutation; the
    /// built-in tables are checked by the unit tests below.
    const fn from_static(wiring: &[u8; SIZE], notch: u8) -> Self {
        let mut forward = [Letter::A; SIZE];
        let mut inverse = [Letter::A; SIZE];
        let mut i = 0;
        while i < SIZE {
            let target = (wiring[i] - b'A') as usize;
            forward[i] = Letter::from_index(target);
            inverse[target] = Letter::from_index(i);
            i += 1;
        }
        RotorSpec {
            forward,
            inverse,
            notch: Letter::from_index((notch - b'A') as usize),
        }
    }

    /// Returns the predefined spec for a rotor choice index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index >= 3`.
    pub fn standard(index: usize) -> Result<&'static RotorSpec, EnigmaError> {
        STANDARD_ROTORS
            .get(index)
            .ok_or(EnigmaError::InvalidRotorIndex {
                index,
                available: STANDARD_ROTORS.len(),
            })
    }

    /// Returns the notch symbol.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Returns the wiring as a 26-character string.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|l| l.to_char()).collect()
    }
}

/// A rotor mounted in a machine: spec, ring setting and current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: RotorSpec,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor instance.
    ///
    /// `position` and `ring_setting` are reduced modulo 26, so any integer
    /// is accepted.
    pub fn new(spec: RotorSpec, position: i64, ring_setting: i64) -> Self {
        Rotor {
            spec,
            ring_setting: alphabet::reduce(ring_setting),
            position: alphabet::reduce(position),
        }
    }

    /// Returns the spec this rotor was built from.
    pub fn spec(&self) -> &RotorSpec {
        &self.spec
    }

    /// Returns the current position (0..25).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Returns the ring setting (0..25).
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Returns the symbol showing in the window at the current position.
    pub fn window(&self) -> Letter {
        Letter::from_index(self.position as usize)
    }

    /// Moves the rotor to `position`, reduced modulo 26.
    pub fn set_position(&mut self, position: i64) {
        self.position = alphabet::reduce(position);
    }

    /// Advances the position by one, wrapping from 25 to 0.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % SIZE as u8;
    }

    /// Returns `true` if the current position shows the notch symbol.
    pub fn is_at_notch(&self) -> bool {
        self.window() == self.spec.notch
    }

    /// Passes a signal through the wiring toward the reflector.
    pub fn forward(&self, input: Letter) -> Letter {
        let shift = self.shift();
        self.spec.forward[input.offset(shift).index()].offset(-shift)
    }

    /// Passes a signal back from the reflector; the inverse of
    /// [`forward`](Self::forward) at the same position and ring setting.
    pub fn backward(&self, input: Letter) -> Letter {
        let shift = self.shift();
        self.spec.inverse[input.offset(shift).index()].offset(-shift)
    }

    /// Offset between the wiring's contacts and the fixed entry plate.
    fn shift(&self) -> i64 {
        self.position as i64 - self.ring_setting as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(symbol: char) -> Letter {
        Letter::from_char(symbol).unwrap()
    }

    #[test]
    fn test_standard_specs_match_runtime_validation() {
        let wirings = [
            ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
            ("AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
            ("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
        ];
        for (i, (wiring, notch)) in wirings.iter().enumerate() {
            let spec = RotorSpec::new(wiring, *notch).unwrap();
            assert_eq!(&spec, RotorSpec::standard(i).unwrap());
            assert_eq!(spec.wiring(), *wiring);
            assert_eq!(spec.notch().to_char(), *notch);
        }
    }

    #[test]
    fn test_standard_index_out_of_range() {
        assert_eq!(
            RotorSpec::standard(3),
            Err(EnigmaError::InvalidRotorIndex {
                index: 3,
                available: 3
            })
        );
    }

    #[test]
    fn test_spec_rejects_duplicate_target() {
        let err = RotorSpec::new("EEMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q').unwrap_err();
        assert_eq!(
            err,
            EnigmaError::InvalidWiring {
                reason: "duplicate target 'E'".to_string()
            }
        );
    }

    #[test]
    fn test_spec_rejects_bad_notch() {
        assert_eq!(
            RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", '?'),
            Err(EnigmaError::InvalidSymbol { symbol: '?' })
        );
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::new(ROTOR_I, 25, 0);
        rotor.step();
        assert_eq!(rotor.position(), 0);
        rotor.step();
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn test_settings_reduced_mod_26() {
        let rotor = Rotor::new(ROTOR_II, 27, -1);
        assert_eq!(rotor.position(), 1);
        assert_eq!(rotor.ring_setting(), 25);
    }

    #[test]
    fn test_is_at_notch() {
        let mut rotor = Rotor::new(ROTOR_I, 15, 0);
        assert!(!rotor.is_at_notch());
        rotor.step();
        assert_eq!(rotor.window().to_char(), 'Q');
        assert!(rotor.is_at_notch());
        rotor.step();
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn test_notch_ignores_ring_setting() {
        let rotor = Rotor::new(ROTOR_III, 21, 7);
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn test_forward_at_home_position_reads_wiring() {
        let rotor = Rotor::new(ROTOR_I, 0, 0);
        assert_eq!(rotor.forward(letter('A')), letter('E'));
        assert_eq!(rotor.forward(letter('Z')), letter('J'));
        assert_eq!(rotor.backward(letter('E')), letter('A'));
    }

    #[test]
    fn test_forward_with_position_offset() {
        // Position B: A enters contact B, wired to K, exits one place back at J.
        let rotor = Rotor::new(ROTOR_I, 1, 0);
        assert_eq!(rotor.forward(letter('A')), letter('J'));
    }

    #[test]
    fn test_ring_setting_cancels_position() {
        let shifted = Rotor::new(ROTOR_II, 5, 5);
        let home = Rotor::new(ROTOR_II, 0, 0);
        for input in Letter::all() {
            assert_eq!(shifted.forward(input), home.forward(input));
        }
    }

    #[test]
    fn test_backward_inverts_forward_everywhere() {
        for spec in STANDARD_ROTORS.iter() {
            for position in 0..26 {
                for ring in 0..26 {
                    let rotor = Rotor::new(*spec, position, ring);
                    for input in Letter::all() {
                        assert_eq!(
                            rotor.backward(rotor.forward(input)),
                            input,
                            "position={}, ring={}, input={}",
                            position,
                            ring,
                            input
                        );
                    }
                }
            }
        }
    }
}
