//! Quaternions for representing and composing 3D rotations.
//!
//! A quaternion `(x, y, z, w)` has a vector part `(x, y, z)` and a scalar part
//! `w`. Unit quaternions correspond one-to-one (up to sign) with rotations:
//! a rotation by angle `t` about unit axis `a` is
//! `(a sin(t/2), cos(t/2))`.
//!
//! # Conversions
//!
//! [`Quaternion::to_rotation_matrix`] and [`Quaternion::from_rotation_matrix`]
//! move between the two representations. Both assume well-formed input (a
//! unit quaternion, a proper rotation matrix) and do not check it.
//!
//! ```
//! use spatial_core::{Matrix3, Quaternion, Vector3};
//!
//! let q = Quaternion::from_axis_angle(Vector3::z_axis(), 0.8);
//! let m = Matrix3::rotation_z(0.8);
//! assert!(q.to_rotation_matrix().max_difference(&m) < 1e-15);
//!
//! let back = Quaternion::from_rotation_matrix(&m);
//! assert!(back.to_rotation_matrix().max_difference(&m) < 1e-15);
//! ```
//!
//! # Composition
//!
//! The Hamilton product `q1 * q2` is the rotation that applies `q2` first and
//! then `q1`, the same order as the matrix product `M(q1) * M(q2)`.
//!
//! # Normalization
//!
//! Nothing here normalizes implicitly. Accumulated products drift away from
//! unit length; call [`normalize`](Quaternion::normalize) where that matters.

use crate::math::{sincos, sqrt};
use crate::{Matrix3, MathErrorKind, SpatialError, SpatialResult, Vector3};
use std::fmt;

/// A quaternion with vector part `(x, y, z)` and scalar part `w`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// Creates a quaternion from its four components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    #[inline]
    pub fn from_vector_scalar(v: Vector3, w: f64) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the rotation of `angle` radians about unit `axis`.
    ///
    /// The axis is not normalized; a non-unit axis gives a non-unit quaternion.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let (s, c) = sincos(angle * 0.5);
        Self::from_vector_scalar(axis * s, c)
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the scalar part `w`.
    #[inline]
    pub fn scalar_part(&self) -> f64 {
        self.w
    }

    /// Returns the rotation matrix equivalent to this (unit) quaternion.
    ///
    /// ```text
    /// | 1-2(y²+z²)   2(xy-wz)     2(xz+wy)   |
    /// | 2(xy+wz)     1-2(x²+z²)   2(yz-wx)   |
    /// | 2(xz-wy)     2(yz+wx)     1-2(x²+y²) |
    /// ```
    ///
    /// For a non-unit quaternion the result is not a rotation.
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let x2 = self.x * self.x;
        let y2 = self.y * self.y;
        let z2 = self.z * self.z;
        let xy = self.x * self.y;
        let xz = self.x * self.z;
        let yz = self.y * self.z;
        let wx = self.w * self.x;
        let wy = self.w * self.y;
        let wz = self.w * self.z;

        Matrix3::new(
            1.0 - 2.0 * (y2 + z2),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            2.0 * (xy + wz),
            1.0 - 2.0 * (x2 + z2),
            2.0 * (yz - wx),
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (x2 + y2),
        )
    }

    /// Extracts the quaternion of a proper rotation matrix (Shepperd's method).
    ///
    /// When the trace is positive, `w` is recovered first. Otherwise the
    /// component belonging to the largest diagonal entry is recovered first,
    /// which keeps the divisor `4 * component` away from zero for every
    /// rotation. A matrix that is not a rotation gives a meaningless result,
    /// possibly `NaN`.
    ///
    /// The sign of the result is whatever the branch produces; `q` and `-q`
    /// describe the same rotation.
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let m00 = m.get(0, 0);
        let m11 = m.get(1, 1);
        let m22 = m.get(2, 2);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let w = sqrt(trace + 1.0) * 0.5;
            let f = 0.25 / w;
            Self::new(
                (m.get(2, 1) - m.get(1, 2)) * f,
                (m.get(0, 2) - m.get(2, 0)) * f,
                (m.get(1, 0) - m.get(0, 1)) * f,
                w,
            )
        } else if m00 > m11 && m00 > m22 {
            let x = sqrt(m00 - m11 - m22 + 1.0) * 0.5;
            let f = 0.25 / x;
            Self::new(
                x,
                (m.get(0, 1) + m.get(1, 0)) * f,
                (m.get(0, 2) + m.get(2, 0)) * f,
                (m.get(2, 1) - m.get(1, 2)) * f,
            )
        } else if m11 > m22 {
            let y = sqrt(m11 - m00 - m22 + 1.0) * 0.5;
            let f = 0.25 / y;
            Self::new(
                (m.get(0, 1) + m.get(1, 0)) * f,
                y,
                (m.get(1, 2) + m.get(2, 1)) * f,
                (m.get(0, 2) - m.get(2, 0)) * f,
            )
        } else {
            let z = sqrt(m22 - m00 - m11 + 1.0) * 0.5;
            let f = 0.25 / z;
            Self::new(
                (m.get(0, 2) + m.get(2, 0)) * f,
                (m.get(1, 2) + m.get(2, 1)) * f,
                z,
                (m.get(1, 0) - m.get(0, 1)) * f,
            )
        }
    }

    /// Overwrites this quaternion with the one extracted from `m`.
    ///
    /// See [`from_rotation_matrix`](Self::from_rotation_matrix).
    pub fn set_rotation_matrix(&mut self, m: &Matrix3) {
        *self = Self::from_rotation_matrix(m);
    }

    /// Rotates `v` by this quaternion without building a matrix.
    ///
    /// With `b` the vector part, computes
    /// `v (w² - b·b) + b (2 v·b) + (b × v)(2w)`, which equals
    /// `self.to_rotation_matrix() * v` for a unit quaternion.
    ///
    /// ```
    /// use spatial_core::{Quaternion, Vector3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quaternion::from_axis_angle(Vector3::z_axis(), FRAC_PI_2);
    /// let v = q.transform(Vector3::x_axis());
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn transform(&self, v: Vector3) -> Vector3 {
        let b = self.vector_part();
        let b2 = b.magnitude_squared();

        v * (self.w * self.w - b2) + b * (v.dot(&b) * 2.0) + b.cross(&v) * (self.w * 2.0)
    }

    /// Returns the Hamilton product `self * other`.
    pub fn compose(&self, other: &Self) -> Self {
        let (q1, q2) = (self, other);

        Self::new(
            q1.w * q2.x + q1.x * q2.w + q1.y * q2.z - q1.z * q2.y,
            q1.w * q2.y - q1.x * q2.z + q1.y * q2.w + q1.z * q2.x,
            q1.w * q2.z + q1.x * q2.y - q1.y * q2.x + q1.z * q2.w,
            q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
        )
    }

    /// Returns the conjugate `(-x, -y, -z, w)`, the inverse rotation of a
    /// unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        sqrt(self.norm_squared())
    }

    /// Returns this quaternion scaled to unit length.
    ///
    /// The zero quaternion is returned unchanged (avoids NaN).
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            *self
        } else {
            self.divided(n)
        }
    }

    /// Like [`normalize`](Self::normalize), but reports the zero quaternion
    /// as an error.
    pub fn try_normalize(&self) -> SpatialResult<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(SpatialError::math_error(
                "Quaternion::try_normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize a zero quaternion",
            ));
        }
        if !n.is_finite() {
            return Err(SpatialError::math_error(
                "Quaternion::try_normalize",
                MathErrorKind::NotFinite,
                &format!("quaternion norm is {}", n),
            ));
        }
        Ok(self.divided(n))
    }

    fn divided(&self, n: f64) -> Self {
        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }
}

/// Rotates `v` by `q`. Free-function form of [`Quaternion::transform`].
#[inline]
pub fn transform(v: Vector3, q: &Quaternion) -> Vector3 {
    q.transform(v)
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl std::ops::Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.compose(rhs)
    }
}

impl std::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.compose(&rhs);
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<Quaternion> for Matrix3 {
    fn from(q: Quaternion) -> Self {
        q.to_rotation_matrix()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.6}, {:.6}, {:.6}; {:.6})",
            self.x, self.y, self.z, self.w
        )
    }
}
