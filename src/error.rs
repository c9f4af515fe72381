//! Error types for softsimd operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.

use std::fmt;

/// Errors that can occur during softsimd operations.
///
/// Every failure is detected eagerly, before any lane or buffer byte is
/// produced; callers never observe partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum SimdError {
    /// A value of the wrong vector kind was passed where a specific kind is
    /// required, or a buffer's element width is not 1, 2, 4 or 8 bytes.
    KindError {
        /// Human-readable error message.
        message: String,
    },
    /// A lane index, permutation index or byte range is out of range.
    ///
    /// Shift counts are clamped, not errored; they never produce this.
    BoundsError {
        /// Human-readable error message.
        message: String,
    },
    /// A floating-point to integer conversion fell outside the
    /// representable range of the destination lane.
    RangeError {
        /// The offending lane value.
        value: f64,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdError::KindError { message } => {
                write!(f, "Kind error: {}", message)
            }
            SimdError::BoundsError { message } => {
                write!(f, "Bounds error: {}", message)
            }
            SimdError::RangeError { value, message } => {
                write!(f, "Range error: {} (value: {})", message, value)
            }
        }
    }
}

impl std::error::Error for SimdError {}

/// Result type alias for softsimd operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Creates a kind error.
pub fn kind_error(message: impl Into<String>) -> SimdError {
    SimdError::KindError {
        message: message.into(),
    }
}

/// Creates a bounds error.
pub fn bounds_error(message: impl Into<String>) -> SimdError {
    SimdError::BoundsError {
        message: message.into(),
    }
}

/// Creates a range error.
pub fn range_error(value: f64, message: impl Into<String>) -> SimdError {
    SimdError::RangeError {
        value,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_error_display() {
        let error = kind_error("argument is not a Float32x4");
        let display = format!("{}", error);
        assert!(display.contains("Kind error"));
        assert!(display.contains("argument is not a Float32x4"));
    }

    #[test]
    fn test_bounds_error_display() {
        let error = bounds_error("lane index must be in bounds");
        let display = format!("{}", error);
        assert!(display.contains("Bounds error"));
        assert!(display.contains("lane index must be in bounds"));
    }

    #[test]
    fn test_range_error_display() {
        let error = range_error(2147483648.0, "conversion from floating-point to integer failed");
        let display = format!("{}", error);
        assert!(display.contains("Range error"));
        assert!(display.contains("2147483648"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = bounds_error("index 4 out of range");
        let error2 = bounds_error("index 4 out of range");
        let error3 = bounds_error("index 5 out of range");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = kind_error("test error");

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
