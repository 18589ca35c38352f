// ============================================================================
// Precision Errors
// Error types for significant-figures construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or combining precision-tracked
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecisionError {
    /// A significant-figures count of zero was supplied at construction
    InvalidPrecision,
    /// Both a significant-figures count and an lsd place were supplied
    ConflictingPrecision,
    /// A multiplicative operation was attempted with an operand that has
    /// no significant figures left
    UndefinedPrecision,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionError::InvalidPrecision => {
                write!(f, "invalid precision: significant figures must be positive")
            },
            PrecisionError::ConflictingPrecision => write!(
                f,
                "conflicting precision: specify either sigfigs or lsd, not both"
            ),
            PrecisionError::UndefinedPrecision => write!(
                f,
                "undefined precision: operand has no significant figures left"
            ),
        }
    }
}

impl std::error::Error for PrecisionError {}

/// Result type alias for precision-tracked operations
pub type PrecisionResult<T> = Result<T, PrecisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PrecisionError::InvalidPrecision.to_string(),
            "invalid precision: significant figures must be positive"
        );
        assert_eq!(
            PrecisionError::UndefinedPrecision.to_string(),
            "undefined precision: operand has no significant figures left"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            PrecisionError::InvalidPrecision,
            PrecisionError::InvalidPrecision
        );
        assert_ne!(
            PrecisionError::InvalidPrecision,
            PrecisionError::UndefinedPrecision
        );
    }
}
