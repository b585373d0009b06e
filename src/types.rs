// src/types.rs
//! Scalar type and crate-wide numeric constants.

/// Coordinate type used by every vector.
pub type Scalar = f64;

/// Threshold for the approximate predicates (`is_orthogonal`, `is_parallel`).
///
/// Exact comparisons (equality, zero-magnitude checks in `normalize` and
/// `angle_between`) never consult it.
pub const TOLERANCE: Scalar = 1e-10;

/// Decimal places used by `Display` when no precision is given.
pub const DISPLAY_DECIMALS: usize = 3;
