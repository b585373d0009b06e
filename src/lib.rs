//! # linvec Quickstart
//!
//! ```rust
//! use linvec::prelude::*;
//!
//! let a = Vector::new([8.218, -9.341])?;
//! let b = Vector::new([-1.129, 2.111])?;
//! assert_eq!(a.add(&b)?.to_string(), "Vector (7.089,-7.230)");
//!
//! // Cross product is orthogonal to both operands
//! let u = Vector::new([8.462, 7.893, -8.187])?;
//! let v = Vector::new([6.984, -5.975, 4.778])?;
//! let w = u.cross_product_3d(&v)?;
//! const EPS: f64 = 1e-9;
//! assert!(w.dot_product(&u)?.abs() < EPS);
//! assert!(w.dot_product(&v)?.abs() < EPS);
//!
//! // Zero vectors have no direction
//! assert!(matches!(
//!     Vector::zero(2)?.normalize(),
//!     Err(VectorError::DivisionByZero(_))
//! ));
//! # Ok::<(), VectorError>(())
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod types;
pub mod vector;

// --- Public API exports ---
pub use error::{Result, VectorError};
pub use types::{Scalar, DISPLAY_DECIMALS, TOLERANCE};
pub use vector::{Rounded, Vector};
