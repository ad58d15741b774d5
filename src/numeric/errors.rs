// ============================================================================
// Numeric Errors
// Error types for tick-price arithmetic and boundary conversions
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or combining tick prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded i64::MAX ticks
    Overflow,
    /// Result below i64::MIN ticks
    Underflow,
    /// Conversion would lose sub-tick digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum tick value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum tick value")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value is not an integer multiple of the tick"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum tick value"
        );
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::PrecisionLoss);
    }
}
