//! Enigma-class rotor cipher engine.
//!
//! A three-rotor electromechanical substitution cipher: each letter passes
//! through a plugboard, a stack of rotating rotors, a fixed reflector, back
//! through the rotors and the plugboard. The rotors advance before every
//! letter, including the historical double step of the middle rotor.
//!
//! Encryption and decryption are the same operation: a machine built from
//! the same configuration as the sender's turns ciphertext back into
//! plaintext.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (Letter: index 0..25, arithmetic mod 26)
//!     ↓
//! RotorSpec  (immutable wiring + notch)   Reflector (involution)   Plugboard (pairs)
//!     ↓
//! Rotor      (spec + ring setting + position, forward/backward/step)
//!     ↓
//! Machine    (3 rotors: stepping rule + signal path + stream processing)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines sharing a configuration:
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default()
//!     .with_rotors([0, 1, 2])
//!     .with_positions([5, 10, 15])
//!     .with_ring_settings([1, 2, 3])
//!     .with_plugboard(&[('A', 'B'), ('C', 'D')]);
//!
//! let mut encoder = Machine::new(&config).unwrap();
//! let mut decoder = Machine::new(&config).unwrap();
//!
//! let ciphertext = encoder.process("HELLOWORLD");
//! assert_ne!(ciphertext, "HELLOWORLD");
//! assert_eq!(decoder.process(&ciphertext), "HELLOWORLD");
//! ```
//!
//! Inspect the rotor windows as the machine runs:
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let mut machine = Machine::new(&MachineConfig::default().with_positions([0, 3, 20])).unwrap();
//! machine.process("AAA");
//! assert_eq!(machine.window(), "BFX");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorSpec};
