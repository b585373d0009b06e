// src/prelude.rs
//! The “everything” import for linvec.
//!
//! ```rust
//! use linvec::prelude::*;
//! ```

pub use crate::error::{Result, VectorError};
pub use crate::types::{Scalar, DISPLAY_DECIMALS, TOLERANCE};
pub use crate::vector::{Rounded, Vector};
