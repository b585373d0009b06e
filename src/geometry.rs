// src/geometry.rs
//! Angles, orthogonality/parallelism tests, projections and the 3-D cross
//! product for [`Vector`].

use std::f64::consts::PI;

use crate::error::{Result, VectorError, ZERO_ANGLE};
use crate::types::{Scalar, TOLERANCE};
use crate::vector::Vector;

impl Vector {
    /// Cosine of the angle between `self` and `v`, clamped to [-1, 1].
    fn cosine_with(&self, v: &Vector) -> Result<Scalar> {
        let dot = self.dot_product(v)?;
        let (a, b) = (self.magnitude(), v.magnitude());
        if a == 0.0 || b == 0.0 {
            tracing::debug!(lhs = a, rhs = b, "angle with zero-magnitude vector");
            return Err(VectorError::DivisionByZero(ZERO_ANGLE));
        }
        Ok((dot / (a * b)).clamp(-1.0, 1.0))
    }

    /// Angle between `self` and `v` in radians, in `[0, π]`.
    ///
    /// Fails with [`VectorError::DivisionByZero`] when either magnitude is
    /// exactly zero.
    pub fn angle_between(&self, v: &Vector) -> Result<Scalar> {
        Ok(self.cosine_with(v)?.acos())
    }

    /// Angle between `self` and `v` in degrees, in `[0, 180]`.
    pub fn angle_between_degrees(&self, v: &Vector) -> Result<Scalar> {
        self.angle_between(v).map(Scalar::to_degrees)
    }

    /// `|self · v| < TOLERANCE`.
    pub fn is_orthogonal(&self, v: &Vector) -> Result<bool> {
        self.is_orthogonal_within(v, TOLERANCE)
    }

    /// `|self · v| < tolerance`.
    pub fn is_orthogonal_within(&self, v: &Vector, tolerance: Scalar) -> Result<bool> {
        Ok(self.dot_product(v)?.abs() < tolerance)
    }

    /// True when either vector is (nearly) zero or the two point along the
    /// same line, in the same or opposite direction.
    pub fn is_parallel(&self, v: &Vector) -> Result<bool> {
        self.is_parallel_within(v, TOLERANCE)
    }

    /// [`is_parallel`](Self::is_parallel) with a caller-supplied threshold:
    /// the angle must lie within `tolerance` radians of 0 or π.
    pub fn is_parallel_within(&self, v: &Vector, tolerance: Scalar) -> Result<bool> {
        self.ensure_same_dimension(v)?;
        if self.magnitude() < tolerance || v.magnitude() < tolerance {
            return Ok(true);
        }
        let angle = self.direction_angle(v)?;
        Ok(angle < tolerance || PI - angle < tolerance)
    }

    /// Angle between `self` and `v` as `atan2(|v⊥|, v∥)`, where `v∥` and `v⊥`
    /// are the components of `v` along and across `self`. Stays accurate near
    /// 0 and π, unlike `acos` of the cosine.
    fn direction_angle(&self, v: &Vector) -> Result<Scalar> {
        let unit = self.normalize()?;
        let along = v.dot_product(&unit)?;
        let across = v.sub(&unit.scalar_multiply(along))?.magnitude();
        Ok(across.atan2(along))
    }

    /// Projection of `v` onto the direction of `self`.
    pub fn projection(&self, v: &Vector) -> Result<Vector> {
        let unit = self.normalize()?;
        let length = v.dot_product(&unit)?;
        Ok(unit.scalar_multiply(length))
    }

    /// Component of `v` perpendicular to `self`: `v - projection(v)`.
    pub fn orthogonal_component(&self, v: &Vector) -> Result<Vector> {
        v.sub(&self.projection(v)?)
    }

    /// Split `v` into `(parallel, orthogonal)` parts relative to `self`.
    pub fn decompose(&self, v: &Vector) -> Result<(Vector, Vector)> {
        let parallel = self.projection(v)?;
        let orthogonal = v.sub(&parallel)?;
        Ok((parallel, orthogonal))
    }

    /// Cross product of two 3-vectors.
    ///
    /// Both operands must be 3-dimensional, otherwise
    /// [`VectorError::DimensionMismatch`] with `expected == 3`.
    pub fn cross_product_3d(&self, v: &Vector) -> Result<Vector> {
        let (&[a1, a2, a3], &[b1, b2, b3]) = (self.coordinates(), v.coordinates()) else {
            let actual = if self.dimension() != 3 {
                self.dimension()
            } else {
                v.dimension()
            };
            tracing::debug!(actual, "cross product outside 3-D");
            return Err(VectorError::dimension_mismatch(3, actual));
        };
        Vector::new([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
    }

    /// Area of the parallelogram spanned by two 3-vectors.
    pub fn parallelogram_area(&self, v: &Vector) -> Result<Scalar> {
        Ok(self.cross_product_3d(v)?.magnitude())
    }

    /// Area of the triangle spanned by two 3-vectors.
    pub fn triangle_area(&self, v: &Vector) -> Result<Scalar> {
        Ok(self.parallelogram_area(v)? * 0.5)
    }
}
