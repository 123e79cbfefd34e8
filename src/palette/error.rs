//! Error types for color parsing and palette validation

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Palette shape invariants are checked once, at construction; operations
/// on an already-built palette never re-validate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Two palette entries share the same id
    #[error("duplicate color id {id:?} at index {index}")]
    DuplicateId {
        /// The offending id
        id: String,
        /// Index of the second occurrence
        index: usize,
    },

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Unrecognized brand name
    #[error("unknown bead brand {0:?}")]
    UnknownBrand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = PaletteError::DuplicateId {
            id: "h01".to_string(),
            index: 3,
        };
        assert_eq!(err.to_string(), "duplicate color id \"h01\" at index 3");
    }

    #[test]
    fn test_parse_color_wraps_source() {
        let err = PaletteError::from(ParseColorError::InvalidLength);
        assert_eq!(
            err.to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
    }
}
