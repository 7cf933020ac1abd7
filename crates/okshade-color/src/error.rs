//! Error types for color operations.
//!
//! The error surface is deliberately small. Out-of-gamut colors are a
//! queryable state ([`Srgb::is_inside`](crate::Srgb::is_inside)), and IEEE
//! special values produced by degenerate arithmetic propagate without
//! raising an error. Only malformed input is reported.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex color string is malformed.
    #[error("invalid hex color {0:?}: expected 6 hex digits, optionally prefixed by '#'")]
    InvalidHex(String),

    /// Numeric parameter is invalid (NaN, Inf, out of expected range).
    #[error("invalid input value: {0}")]
    InvalidValue(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ColorError::InvalidHex("XYZ".into());
        assert!(err.to_string().contains("\"XYZ\""));

        let err = ColorError::InvalidValue("step must be positive".into());
        assert_eq!(err.to_string(), "invalid input value: step must be positive");
    }
}
