//! Machine configuration.
//!
//! [`MachineConfig`] is the full construction input for a [`Machine`]:
//! rotor choices, starting positions, ring settings and plugboard pairs.
//! Two parties that build machines from equal configurations produce
//! machines that decrypt each other's output.
//!
//! Configurations can be assembled in code, decoded from JSON, or parsed
//! field by field from the short text forms used on the command line
//! (`"0 1 2"`, `"AB CD"`).
//!
//! [`Machine`]: crate::Machine

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::machine::ROTOR_COUNT;
use crate::plugboard::Plugboard;

/// Settings a [`Machine`](crate::Machine) is built from.
///
/// Positions and ring settings accept any integer and are reduced modulo 26
/// when the machine is built. Rotor choices and plugboard pairs are
/// validated by [`Machine::new`](crate::Machine::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Rotor choice indices, left to right.
    pub rotors: [usize; ROTOR_COUNT],
    /// Starting positions, left to right.
    pub positions: [i64; ROTOR_COUNT],
    /// Ring settings, left to right.
    pub ring_settings: [i64; ROTOR_COUNT],
    /// Plugboard cables.
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: [0, 1, 2],
            positions: [0; ROTOR_COUNT],
            ring_settings: [0; ROTOR_COUNT],
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Replaces the rotor choices.
    pub fn with_rotors(mut self, rotors: [usize; ROTOR_COUNT]) -> Self {
        self.rotors = rotors;
        self
    }

    /// Replaces the starting positions.
    pub fn with_positions(mut self, positions: [i64; ROTOR_COUNT]) -> Self {
        self.positions = positions;
        self
    }

    /// Replaces the ring settings.
    pub fn with_ring_settings(mut self, ring_settings: [i64; ROTOR_COUNT]) -> Self {
        self.ring_settings = ring_settings;
        self
    }

    /// Replaces the plugboard pairs.
    pub fn with_plugboard(mut self, pairs: &[(char, char)]) -> Self {
        self.plugboard = pairs.to_vec();
        self
    }

    /// Decodes a configuration from JSON.
    ///
    /// Missing fields take their [`Default`] values.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the document is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::from_json_str(
    ///     r#"{ "positions": [5, 10, 15], "plugboard": [["A", "B"]] }"#,
    /// ).unwrap();
    /// assert_eq!(config.rotors, [0, 1, 2]);
    /// assert_eq!(config.positions, [5, 10, 15]);
    /// assert_eq!(config.plugboard, vec![('A', 'B')]);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, EnigmaError> {
        serde_json::from_str(json).map_err(|e| EnigmaError::Config {
            reason: e.to_string(),
        })
    }

    /// Encodes this configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String, EnigmaError> {
        serde_json::to_string_pretty(self).map_err(|e| EnigmaError::Config {
            reason: e.to_string(),
        })
    }
}

/// Parses three whitespace-separated integers, e.g. `"5 10 15"`.
///
/// Values are not range-checked; any integer is a valid position or ring
/// setting.
///
/// # Errors
/// - [`EnigmaError::InvalidSettingValue`] for a token that is not an integer.
/// - [`EnigmaError::InvalidSettingCount`] unless exactly three are given.
pub fn parse_settings(
    field: &'static str,
    text: &str,
) -> Result<[i64; ROTOR_COUNT], EnigmaError> {
    let values = parse_list::<i64>(field, text)?;
    into_triplet(field, values)
}

/// Parses three rotor choice indices, e.g. `"0 1 2"`.
///
/// Range checking against the predefined rotors happens when the machine
/// is built.
///
/// # Errors
/// Same as [`parse_settings`]; negative numbers are invalid values.
pub fn parse_rotor_choices(text: &str) -> Result<[usize; ROTOR_COUNT], EnigmaError> {
    let values = parse_list::<usize>("rotors", text)?;
    into_triplet("rotors", values)
}

/// Parses plugboard pairs from `"AB CD"` into upper-case tuples.
///
/// # Errors
/// Any error from [`Plugboard::from_str`](std::str::FromStr::from_str),
/// including conflicting pairs.
pub fn parse_plugboard(text: &str) -> Result<Vec<(char, char)>, EnigmaError> {
    let board: Plugboard = text.parse()?;
    Ok(board
        .pairs()
        .into_iter()
        .map(|(a, b)| (a.to_char(), b.to_char()))
        .collect())
}

fn parse_list<T: std::str::FromStr>(
    field: &'static str,
    text: &str,
) -> Result<Vec<T>, EnigmaError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| EnigmaError::InvalidSettingValue {
                    field,
                    value: token.to_string(),
                })
        })
        .collect()
}

fn into_triplet<T>(
    field: &'static str,
    values: Vec<T>,
) -> Result<[T; ROTOR_COUNT], EnigmaError> {
    let actual = values.len();
    values
        .try_into()
        .map_err(|_| EnigmaError::InvalidSettingCount {
            field,
            expected: ROTOR_COUNT,
            actual,
        })
}
