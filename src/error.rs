// src/error.rs
//! Error types for vector construction and operations.

use thiserror::Error;

/// Errors returned by fallible vector operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// A constructor received an unusable argument (e.g. no coordinates).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Parsed input contained something that is not a number.
    #[error("coordinates must be a sequence of numbers, found `{token}`")]
    TypeMismatch {
        /// The offending token, trimmed.
        token: String,
    },

    /// Operands have incompatible dimensions.
    #[error("dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch {
        /// Dimension the operation required
        expected: usize,
        /// Dimension that was supplied
        actual: usize,
    },

    /// A division by a zero magnitude was required.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}

impl VectorError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VectorError>;

pub(crate) const EMPTY_COORDINATES: &str = "coordinates must not be empty";
pub(crate) const ZERO_NORMALIZE: &str = "cannot normalize a zero-magnitude vector";
pub(crate) const ZERO_ANGLE: &str = "undefined angle when either vector has zero magnitude";
