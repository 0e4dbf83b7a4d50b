//! Error types for studyperf operations.
//!
//! Every failure carries the operation that rejected its input so the
//! caller can report which stage of a model run stopped.

use std::fmt;

/// Broad category of a [`StudyPerfError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed configuration or arguments.
    InvalidInput,
    /// Statistically undefined operation on well-formed input.
    DegenerateInput,
}

/// Main error type for studyperf operations.
///
/// # Examples
///
/// ```
/// use studyperf::error::{ErrorKind, StudyPerfError};
///
/// let err = StudyPerfError::degenerate("normalize", "max == min (5)");
/// assert_eq!(err.kind(), ErrorKind::DegenerateInput);
/// assert!(err.to_string().contains("normalize"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StudyPerfError {
    /// Bad ratio, unknown feature id, mismatched vector length, empty input.
    InvalidInput {
        /// Operation that rejected the input
        operation: &'static str,
        /// Offending parameters
        detail: String,
    },

    /// Zero-variance normalization, rank-deficient fit, zero total variance.
    DegenerateInput {
        /// Operation that rejected the input
        operation: &'static str,
        /// Offending parameters
        detail: String,
    },
}

impl fmt::Display for StudyPerfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyPerfError::InvalidInput { operation, detail } => {
                write!(f, "Invalid input to {operation}: {detail}")
            }
            StudyPerfError::DegenerateInput { operation, detail } => {
                write!(f, "Degenerate input to {operation}: {detail}")
            }
        }
    }
}

impl std::error::Error for StudyPerfError {}

impl StudyPerfError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation,
            detail: detail.into(),
        }
    }

    /// Create a degenerate input error.
    #[must_use]
    pub fn degenerate(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::DegenerateInput {
            operation,
            detail: detail.into(),
        }
    }

    /// Create an empty input error.
    #[must_use]
    pub fn empty_input(operation: &'static str) -> Self {
        Self::invalid(operation, "empty input")
    }

    /// Create a length mismatch error with descriptive context.
    #[must_use]
    pub fn length_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::invalid(
            operation,
            format!("length mismatch: expected {expected}, got {actual}"),
        )
    }

    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::DegenerateInput { .. } => ErrorKind::DegenerateInput,
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidInput { operation, .. } | Self::DegenerateInput { operation, .. } => {
                operation
            }
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, StudyPerfError>;
