// src/vector.rs
//! Immutable N-dimensional Euclidean vector.
//!
//! Operations never mutate `self`; each returns a fresh [`Vector`]. Binary
//! operations on operands of different dimension return
//! [`VectorError::DimensionMismatch`] instead of panicking.

use std::fmt;
use std::ops::{Index, Mul, Neg};
use std::str::FromStr;

use crate::error::{Result, VectorError, EMPTY_COORDINATES, ZERO_NORMALIZE};
use crate::types::{Scalar, DISPLAY_DECIMALS};

/// An N-dimensional Euclidean vector with `N >= 1` fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Box<[Scalar]>,
}

impl Vector {
    /// Build a vector from any ordered sequence of numbers.
    ///
    /// The sequence is copied. Fails with [`VectorError::InvalidArgument`]
    /// when it is empty.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let coordinates: Box<[Scalar]> = coordinates.into_iter().map(Into::into).collect();
        if coordinates.is_empty() {
            tracing::debug!("rejected vector with no coordinates");
            return Err(VectorError::InvalidArgument(EMPTY_COORDINATES));
        }
        Ok(Self { coordinates })
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        Self::new(vec![0.0; dimension])
    }

    // Callers guarantee a non-empty slice.
    #[inline]
    fn from_boxed(coordinates: Box<[Scalar]>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Borrow the coordinates.
    #[inline]
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    /// Iterate over the coordinates in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coordinates.iter()
    }

    /// Coordinate at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.coordinates.get(index).copied()
    }

    /// True when every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|&x| x == 0.0)
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            tracing::debug!(
                expected = self.dimension(),
                actual = other.dimension(),
                "dimension mismatch"
            );
            return Err(VectorError::dimension_mismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(Scalar, Scalar) -> Scalar) -> Result<Self> {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_boxed(coordinates))
    }

    /// Element-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, v: &Vector) -> Result<Self> {
        self.zip_with(v, |a, b| a + b)
    }

    /// Element-wise difference `self - v`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, v: &Vector) -> Result<Self> {
        self.zip_with(v, |a, b| a - b)
    }

    /// Multiply every coordinate by `scalar`.
    #[inline]
    pub fn scalar_multiply(&self, scalar: Scalar) -> Self {
        Self::from_boxed(self.iter().map(|&x| x * scalar).collect())
    }

    /// Sum of element-wise products.
    pub fn dot_product(&self, v: &Vector) -> Result<Scalar> {
        self.ensure_same_dimension(v)?;
        Ok(self.iter().zip(v.iter()).map(|(a, b)| a * b).sum())
    }

    /// Euclidean norm (length).
    ///
    /// Coordinates are scaled by the largest absolute value before squaring,
    /// so finite inputs neither underflow to 0 nor overflow to infinity.
    pub fn magnitude(&self) -> Scalar {
        // NaN is sticky: once seen it is returned as the magnitude.
        let scale = self.iter().fold(0.0, |max: Scalar, &x| {
            if x.is_nan() || x.abs() > max {
                x.abs()
            } else {
                max
            }
        });
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let sum: Scalar = self
            .iter()
            .map(|x| {
                let r = x / scale;
                r * r
            })
            .sum();
        scale * sum.sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`VectorError::DivisionByZero`] only when the magnitude is
    /// exactly zero; tiny but non-zero vectors are scaled as usual.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            tracing::debug!(dimension = self.dimension(), "normalize of zero vector");
            return Err(VectorError::DivisionByZero(ZERO_NORMALIZE));
        }
        Ok(Self::from_boxed(self.iter().map(|&x| x / magnitude).collect()))
    }
}

// Conversions

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: Vec<Scalar>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl TryFrom<&[Scalar]> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: &[Scalar]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl<const N: usize> TryFrom<[Scalar; N]> for Vector {
    type Error = VectorError;
    fn try_from(coordinates: [Scalar; N]) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(v: Vector) -> Vec<Scalar> {
        v.coordinates.into_vec()
    }
}

impl AsRef<[Scalar]> for Vector {
    fn as_ref(&self) -> &[Scalar] {
        &self.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;
    #[inline]
    fn index(&self, index: usize) -> &Scalar {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Infallible operators. Addition and subtraction can fail on dimensions and
// stay as methods.

impl Mul<Scalar> for &Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Scalar) -> Vector {
        self.scalar_multiply(rhs)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Scalar) -> Vector {
        self.scalar_multiply(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::from_boxed(self.iter().map(|&x| -x).collect())
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        -&self
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl fmt::Display for Rounded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(v, dec) = *self;
        f.write_str("Vector (")?;
        for (i, x) in v.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{x:.dec$}")?;
        }
        f.write_str(")")
    }
}

/// `Vector (v0,v1,...)` with three decimals, or the formatter's precision
/// when one is given (`{:.5}`).
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DISPLAY_DECIMALS);
        fmt::Display::fmt(&Rounded::new(self, decimals), f)
    }
}

/// Parses `1, 2, 3`, `(1,2,3)`, `[1, 2, 3]` and the display form
/// `Vector (1.000,2.000,3.000)`. Coordinates must be finite numbers.
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let body = strip_delimiters(s);
        if body.is_empty() {
            return Err(VectorError::InvalidArgument(EMPTY_COORDINATES));
        }
        let coordinates = body
            .split(',')
            .map(|token| {
                let token = token.trim();
                match token.parse::<Scalar>() {
                    Ok(value) if value.is_finite() => Ok(value),
                    _ => {
                        tracing::debug!(token, "non-numeric coordinate");
                        Err(VectorError::TypeMismatch {
                            token: token.to_owned(),
                        })
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(coordinates)
    }
}

fn strip_delimiters(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix("Vector").map_or(s, str::trim_start);
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')));
    inner.unwrap_or(s).trim()
}
