//! Error types for the Enigma library.
//!
//! Every variant describes an invalid configuration. Processing a message
//! never fails, so these only surface while building a [`Machine`] or one of
//! its parts.
//!
//! [`Machine`]: crate::Machine

use thiserror::Error;

/// Errors produced by the Enigma library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor choice does not name one of the predefined rotors.
    #[error("rotor index {index} is out of range (expected 0..{available})")]
    InvalidRotorIndex {
        /// The rejected index.
        index: usize,
        /// Number of predefined rotors.
        available: usize,
    },

    /// A symbol appears in more than one plugboard pair.
    #[error("plugboard symbol '{symbol}' appears in more than one pair")]
    PlugboardConflict {
        /// The symbol wired twice.
        symbol: char,
    },

    /// A plugboard pair connects a symbol to itself.
    #[error("plugboard pair connects '{symbol}' to itself")]
    PlugboardSelfPair {
        /// The symbol paired with itself.
        symbol: char,
    },

    /// Character is not part of the alphabet.
    #[error("'{symbol}' is not an alphabet symbol")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },

    /// Wiring table is not a permutation of the alphabet.
    #[error("invalid wiring: {reason}")]
    InvalidWiring {
        /// Why the wiring was rejected.
        reason: String,
    },

    /// Reflector wiring applied twice does not return the input.
    #[error("reflector is not an involution at '{symbol}'")]
    ReflectorNotInvolution {
        /// First symbol where `reflect(reflect(x)) != x`.
        symbol: char,
    },

    /// Reflector maps a symbol to itself.
    #[error("reflector maps '{symbol}' to itself")]
    ReflectorFixedPoint {
        /// The self-mapped symbol.
        symbol: char,
    },

    /// A setting list has the wrong number of entries.
    #[error("{field}: expected {expected} values, got {actual}")]
    InvalidSettingCount {
        /// Setting name (`rotors`, `positions`, `ring_settings`).
        field: &'static str,
        /// Required number of values.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A setting entry could not be parsed as an integer.
    #[error("{field}: '{value}' is not an integer")]
    InvalidSettingValue {
        /// Setting name.
        field: &'static str,
        /// The unparseable token.
        value: String,
    },

    /// Configuration document could not be decoded.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Decoder message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_rotor_index() {
        let err = EnigmaError::InvalidRotorIndex {
            index: 7,
            available: 3,
        };
        assert_eq!(
            format!("{}", err),
            "rotor index 7 is out of range (expected 0..3)"
        );
    }

    #[test]
    fn test_display_plugboard_conflict() {
        let err = EnigmaError::PlugboardConflict { symbol: 'A' };
        assert_eq!(
            format!("{}", err),
            "plugboard symbol 'A' appears in more than one pair"
        );
    }

    #[test]
    fn test_display_setting_count() {
        let err = EnigmaError::InvalidSettingCount {
            field: "positions",
            expected: 3,
            actual: 2,
        };
        assert_eq!(format!("{}", err), "positions: expected 3 values, got 2");
    }

    #[test]
    fn test_display_reflector_fixed_point() {
        let err = EnigmaError::ReflectorFixedPoint { symbol: 'Q' };
        assert_eq!(format!("{}", err), "reflector maps 'Q' to itself");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::InvalidSymbol { symbol: '1' },
            EnigmaError::InvalidSymbol { symbol: '1' }
        );
        assert_ne!(
            EnigmaError::InvalidSymbol { symbol: '1' },
            EnigmaError::PlugboardSelfPair { symbol: '1' }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::InvalidWiring {
            reason: "duplicate target 'A'".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
