//! Error types for CSD conversion and multiplier generation.

use thiserror::Error;

/// Errors that can occur during CSD encoding, decoding, or Verilog
/// multiplier generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsdError {
    /// Input value is NaN or infinite
    #[error("value {0} is not finite")]
    NotFinite(f64),

    /// Character outside the CSD alphabet
    #[error("invalid digit {digit:?} at position {position} (expected '+', '-', or '0')")]
    InvalidDigit { digit: char, position: usize },

    /// More than one '.' separator in the input
    #[error("duplicate separator at position {position}")]
    DuplicateSeparator { position: usize },

    /// Integral accumulator exceeded the 64-bit range
    #[error("CSD value overflows 64-bit integer range")]
    Overflow,

    /// CSD string length doesn't match the declared highest power
    #[error("invalid CSD length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CsdError::NotFinite(f64::INFINITY);
        assert!(err.to_string().contains("not finite"));

        let err = CsdError::InvalidDigit {
            digit: 'a',
            position: 3,
        };
        assert!(err.to_string().contains("invalid digit"));
        assert!(err.to_string().contains("position 3"));

        let err = CsdError::DuplicateSeparator { position: 5 };
        assert!(err.to_string().contains("duplicate separator"));

        let err = CsdError::Overflow;
        assert!(err.to_string().contains("overflows"));

        let err = CsdError::LengthMismatch {
            expected: 8,
            actual: 7,
        };
        assert!(err.to_string().contains("expected 8"));
        assert!(err.to_string().contains("got 7"));
    }
}
