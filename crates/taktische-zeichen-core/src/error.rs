//! Error types for the layout core.
//!
//! The placement arithmetic itself never fails; errors are raised when a
//! padding specification has the wrong arity, or when a caller explicitly
//! asks for a placement to be checked for degenerate values.

use thiserror::Error;

/// Errors that can occur while building layout inputs or checking results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A padding specification did not have 2, 3 or 4 components.
    #[error("Invalid padding: expected 2, 3 or 4 values, got {len}")]
    InvalidPadding {
        /// The number of values that were supplied.
        len: usize,
    },

    /// A placement contains an infinite or NaN component.
    #[error("Degenerate placement: scale {scale}, offset ({x}, {y})")]
    DegeneratePlacement {
        /// The computed scale factor.
        scale: f64,
        /// The computed horizontal offset.
        x: f64,
        /// The computed vertical offset.
        y: f64,
    },
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::InvalidPadding { len: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid padding: expected 2, 3 or 4 values, got 5"
        );

        let err = LayoutError::DegeneratePlacement {
            scale: f64::INFINITY,
            x: 0.0,
            y: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Degenerate placement: scale inf, offset (0, -1.5)"
        );
    }
}
