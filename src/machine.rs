//! Machine: three rotors, a plugboard and a reflector wired in series.
//!
//! Each alphabetic keystroke first advances the rotors, then sends the
//! signal through plugboard, rotors right to left, reflector, rotors left
//! to right, and plugboard again. Characters outside the alphabet pass
//! through untouched and do not advance the rotors.
//!
//! A machine is a running stream cipher: its output depends on every
//! letter it has processed since construction (or the last
//! [`reset`](Machine::reset)). Two machines built from equal
//! configurations and fed the same number of letters stay in lockstep,
//! which is what lets one decrypt the other's output.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, REFLECTOR_B};
use crate::rotor::{Rotor, RotorSpec};

/// Number of rotors in the stack.
pub const ROTOR_COUNT: usize = 3;

/// Slot of the leftmost (slowest) rotor.
pub const LEFT: usize = 0;

/// Slot of the middle rotor.
pub const MIDDLE: usize = 1;

/// Slot of the rightmost (fastest) rotor.
pub const RIGHT: usize = 2;

/// Three-rotor cipher machine.
///
/// Owns its rotors exclusively; specs and the reflector are immutable
/// values, so cloning a machine yields an independent stream that starts
/// from the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: [Rotor; ROTOR_COUNT],
    plugboard: Plugboard,
    reflector: Reflector,
    initial_positions: [u8; ROTOR_COUNT],
}

impl Machine {
    /// Builds a machine from a configuration, using reflector B.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidRotorIndex`] if a rotor choice is not 0..3.
    /// - Any plugboard error from [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// assert_eq!(machine.window(), "AAF");
    /// ```
    ///
    /// ```
    /// use enigma::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::default().with_rotors([0, 1, 3]);
    /// assert!(Machine::new(&config).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let specs = [
            RotorSpec::standard(config.rotors[LEFT])?,
            RotorSpec::standard(config.rotors[MIDDLE])?,
            RotorSpec::standard(config.rotors[RIGHT])?,
        ];
        let plugboard = Plugboard::new(&config.plugboard)?;

        let rotors = std::array::from_fn(|slot| {
            Rotor::new(
                *specs[slot],
                config.positions[slot],
                config.ring_settings[slot],
            )
        });
        let machine = Self::from_parts(rotors, plugboard, REFLECTOR_B);

        debug!(
            rotors = ?config.rotors,
            window = %machine.window(),
            ring_settings = ?machine.ring_settings(),
            plugboard_pairs = machine.plugboard.len(),
            "machine built"
        );
        Ok(machine)
    }

    /// Assembles a machine from already-built parts.
    ///
    /// The rotors' current positions become the positions restored by
    /// [`reset`](Self::reset).
    pub fn from_parts(
        rotors: [Rotor; ROTOR_COUNT],
        plugboard: Plugboard,
        reflector: Reflector,
    ) -> Self {
        let initial_positions = [
            rotors[LEFT].position(),
            rotors[MIDDLE].position(),
            rotors[RIGHT].position(),
        ];
        Machine {
            rotors,
            plugboard,
            reflector,
            initial_positions,
        }
    }

    /// Encrypts (or decrypts) a whole message.
    ///
    /// Input is upper-cased first; the output has the same number of
    /// characters as the input. Rotor state carries over to later calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::default()
    ///     .with_positions([5, 10, 15])
    ///     .with_ring_settings([1, 2, 3])
    ///     .with_plugboard(&[('A', 'B'), ('C', 'D')]);
    ///
    /// let mut sender = Machine::new(&config).unwrap();
    /// let mut receiver = Machine::new(&config).unwrap();
    ///
    /// let ciphertext = sender.process("Hello, World");
    /// assert_eq!(receiver.process(&ciphertext), "HELLO, WORLD");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_char(c.to_ascii_uppercase()))
            .collect()
    }

    /// Encrypts a single character.
    ///
    /// Characters outside `A..=Z` are returned unchanged and leave the
    /// rotors where they are. No case folding happens here.
    pub fn encrypt_char(&mut self, symbol: char) -> char {
        match Letter::from_char(symbol) {
            Some(letter) => self.encrypt_letter(letter).to_char(),
            None => symbol,
        }
    }

    /// Steps the rotors, then substitutes one letter.
    pub fn encrypt_letter(&mut self, input: Letter) -> Letter {
        self.step_rotors();
        self.substitute(input)
    }

    /// Advances the rotor stack by one keystroke.
    ///
    /// Both notch flags are read before any rotor moves. The middle rotor
    /// steps when either it or the right rotor sits at its notch, which
    /// yields the double step: a middle rotor carried onto its notch moves
    /// again on the very next key, together with the left rotor.
    fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].is_at_notch();
        let right_at_notch = self.rotors[RIGHT].is_at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
        }
        if right_at_notch || middle_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();

        if middle_at_notch || right_at_notch {
            trace!(
                double_step = middle_at_notch,
                window = %self.window(),
                "turnover"
            );
        }
    }

    /// Signal path at the current rotor positions, without stepping.
    fn substitute(&self, input: Letter) -> Letter {
        let signal = self.plugboard.swap(input);
        let signal = self
            .rotors
            .iter()
            .rev()
            .fold(signal, |s, rotor| rotor.forward(s));
        let signal = self.reflector.reflect(signal);
        let signal = self
            .rotors
            .iter()
            .fold(signal, |s, rotor| rotor.backward(s));
        self.plugboard.swap(signal)
    }

    /// Returns the rotors to the positions they had when the machine was
    /// built.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// let first = machine.process("ATTACK");
    /// machine.reset();
    /// assert_eq!(machine.process("ATTACK"), first);
    /// ```
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(&self.initial_positions) {
            rotor.set_position(position as i64);
        }
        debug!(window = %self.window(), "machine reset");
    }

    /// Returns the current rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_COUNT] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Returns the ring settings, left to right.
    pub fn ring_settings(&self) -> [u8; ROTOR_COUNT] {
        [
            self.rotors[LEFT].ring_setting(),
            self.rotors[MIDDLE].ring_setting(),
            self.rotors[RIGHT].ring_setting(),
        ]
    }

    /// Returns the letters showing in the rotor windows, left to right.
    pub fn window(&self) -> String {
        self.rotors.iter().map(|r| r.window().to_char()).collect()
    }

    /// Returns all rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// Returns the rotor in `slot` ([`LEFT`], [`MIDDLE`] or [`RIGHT`]).
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.rotors.get(slot)
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Moves the rotor in `slot` to `position` (reduced modulo 26).
    ///
    /// Does not change what [`reset`](Self::reset) restores.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `slot >= 3`.
    pub fn set_position(&mut self, slot: usize, position: i64) -> Result<(), EnigmaError> {
        let rotor = self
            .rotors
            .get_mut(slot)
            .ok_or(EnigmaError::InvalidRotorIndex {
                index: slot,
                available: ROTOR_COUNT,
            })?;
        rotor.set_position(position);
        Ok(())
    }
}
