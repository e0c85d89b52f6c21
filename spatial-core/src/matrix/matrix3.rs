//! General 3x3 matrices for linear transforms in 3D space.
//!
//! [`Matrix3`] covers every linear map a scene graph needs to place and deform
//! geometry: rotations about the coordinate axes or an arbitrary axis, mirror
//! reflections, point involutions through a line, uniform and directional
//! scaling, and skews. All constructors are closed-form and allocation-free.
//!
//! # Storage Layout
//!
//! Elements are stored **column-major**: each column is one basis vector of the
//! transform, so [`column`](Matrix3::column) is a direct copy out of storage.
//! The accessors hide this completely. `m.get(i, j)` and `m[(i, j)]` always
//! mean row `i`, column `j`, and [`Matrix3::new`] takes its nine scalars in
//! the order you would read them off the page, row by row:
//!
//! ```
//! use spatial_core::Matrix3;
//!
//! let m = Matrix3::new(
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//!     7.0, 8.0, 9.0,
//! );
//! assert_eq!(m.get(1, 2), 6.0);
//! assert_eq!(m[(2, 0)], 7.0);
//! ```
//!
//! # Rotation Convention
//!
//! Rotations are active and right-handed: a positive angle turns vectors
//! counterclockwise when looking from the positive axis toward the origin.
//!
//! ```text
//! Rz(t) = | cos t  -sin t  0 |
//!         | sin t   cos t  0 |
//!         |   0       0    1 |
//! ```
//!
//! ```
//! use spatial_core::{Matrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Matrix3::rotation_z(FRAC_PI_2) * Vector3::x_axis();
//! assert!(v.x.abs() < 1e-15);
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! # Unchecked by Default
//!
//! Nothing here validates its input. Axis arguments must already be unit
//! length; they are never normalized. [`inverse`](Matrix3::inverse) of a
//! singular matrix returns `inf`/`NaN` entries. Use
//! [`try_inverse`](Matrix3::try_inverse) when a guard is wanted.

use super::Vector3;
use crate::math::{sincos, tan};
use crate::{SpatialError, SpatialResult};
use std::fmt;

/// A 3x3 matrix of `f64`, stored column-major.
///
/// Any nine values form a valid `Matrix3`, including singular and
/// non-orthogonal ones. [`Default`] is the zero matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    columns: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Creates a matrix from nine scalars given in row-major reading order.
    ///
    /// `nij` is row `i`, column `j`. The values are redistributed into
    /// column-major storage.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n00: f64,
        n01: f64,
        n02: f64,
        n10: f64,
        n11: f64,
        n12: f64,
        n20: f64,
        n21: f64,
        n22: f64,
    ) -> Self {
        Self {
            columns: [[n00, n10, n20], [n01, n11, n21], [n02, n12, n22]],
        }
    }

    /// Creates a matrix whose columns are `a`, `b` and `c`.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    ///
    /// let m = Matrix3::from_columns(
    ///     Vector3::new(1.0, 2.0, 3.0),
    ///     Vector3::new(4.0, 5.0, 6.0),
    ///     Vector3::new(7.0, 8.0, 9.0),
    /// );
    /// assert_eq!(m.get(2, 0), 3.0);
    /// assert_eq!(m.get(0, 2), 7.0);
    /// ```
    pub fn from_columns(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self {
            columns: [a.to_array(), b.to_array(), c.to_array()],
        }
    }

    /// Creates a matrix from a row-major array: `rows[i][j]` is row `i`, column `j`.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::new(
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        )
    }

    /// Returns the row-major array form of this matrix.
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        [
            self.row(0).to_array(),
            self.row(1).to_array(),
            self.row(2).to_array(),
        ]
    }

    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the zero matrix.
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Returns the element at row `row`, column `col`.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.columns[col][row]
    }

    /// Sets the element at row `row`, column `col`.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.columns[col][row] = value;
    }

    /// Returns a copy of column `j`. Panics if `j >= 3`.
    #[inline]
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::from_array(self.columns[j])
    }

    /// Replaces column `j` with `v`. Panics if `j >= 3`.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    ///
    /// let mut m = Matrix3::identity();
    /// m.set_column(2, Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.get(1, 2), 2.0);
    /// assert_eq!(m.column(2), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn set_column(&mut self, j: usize, v: Vector3) {
        self.columns[j] = v.to_array();
    }

    /// Returns column `j`, or an error if `j` is outside 0-2.
    pub fn try_column(&self, j: usize) -> SpatialResult<Vector3> {
        check_index("Matrix3::try_column", j)?;
        Ok(self.column(j))
    }

    /// Replaces column `j`, or returns an error if `j` is outside 0-2.
    pub fn try_set_column(&mut self, j: usize, v: Vector3) -> SpatialResult<()> {
        check_index("Matrix3::try_set_column", j)?;
        self.set_column(j, v);
        Ok(())
    }

    /// Returns a copy of row `i`. Panics if `i >= 3`.
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::new(self.columns[0][i], self.columns[1][i], self.columns[2][i])
    }

    /// Creates a rotation of `angle` radians about the X axis.
    ///
    /// ```text
    /// | 1    0       0    |
    /// | 0  cos t  -sin t  |
    /// | 0  sin t   cos t  |
    /// ```
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = sincos(angle);

        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Creates a rotation of `angle` radians about the Y axis.
    ///
    /// ```text
    /// |  cos t  0  sin t |
    /// |    0    1    0   |
    /// | -sin t  0  cos t |
    /// ```
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = sincos(angle);

        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Creates a rotation of `angle` radians about the Z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = sincos(angle);

        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a rotation of `angle` radians about an arbitrary `axis`.
    ///
    /// This is Rodrigues' formula, `c I + (1 - c) a aᵀ + s [a]ₓ`. The axis
    /// must be unit length; it is not normalized here, and a non-unit axis
    /// yields a matrix that is not a rotation.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    ///
    /// let a = Matrix3::rotation(0.7, Vector3::y_axis());
    /// let b = Matrix3::rotation_y(0.7);
    /// assert!(a.max_difference(&b) < 1e-15);
    /// ```
    pub fn rotation(angle: f64, axis: Vector3) -> Self {
        let (s, c) = sincos(angle);
        let d = 1.0 - c;

        let x = axis.x * d;
        let y = axis.y * d;
        let z = axis.z * d;

        let axay = x * axis.y;
        let axaz = x * axis.z;
        let ayaz = y * axis.z;

        Self::new(
            c + x * axis.x,
            axay - s * axis.z,
            axaz + s * axis.y,
            axay + s * axis.z,
            c + y * axis.y,
            ayaz - s * axis.x,
            axaz - s * axis.y,
            ayaz + s * axis.x,
            c + z * axis.z,
        )
    }

    /// Creates a reflection through the plane perpendicular to unit `axis`.
    ///
    /// The Householder matrix `I - 2 a aᵀ`: components along `axis` flip sign,
    /// components in the plane are untouched.
    pub fn reflection(axis: Vector3) -> Self {
        Self::outer_product_offset(axis, -2.0, 1.0)
    }

    /// Creates an involution through the line along unit `axis`.
    ///
    /// The matrix `2 a aᵀ - I`: a half-turn about `axis`. Components along
    /// `axis` are kept, components perpendicular to it flip sign.
    pub fn involution(axis: Vector3) -> Self {
        Self::outer_product_offset(axis, 2.0, -1.0)
    }

    /// Creates a diagonal scale by `sx`, `sy`, `sz` along the coordinate axes.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, sz)
    }

    /// Creates a scale by `factor` along unit `axis`, leaving the plane
    /// perpendicular to `axis` unchanged: `I + (factor - 1) a aᵀ`.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    ///
    /// let m = Matrix3::scale_along(3.0, Vector3::x_axis());
    /// assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 1.0, 1.0));
    /// ```
    pub fn scale_along(factor: f64, axis: Vector3) -> Self {
        Self::outer_product_offset(axis, factor - 1.0, 1.0)
    }

    /// Creates a skew by `angle` radians along unit direction `a`, driven by
    /// each point's projected length onto unit direction `b`.
    ///
    /// The matrix is `I + tan(angle) a bᵀ`, so a point `p` moves by
    /// `tan(angle) (b · p)` along `a`.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let m = Matrix3::skew(FRAC_PI_4, Vector3::x_axis(), Vector3::y_axis());
    /// let p = m * Vector3::new(0.0, 2.0, 0.0);
    /// assert!((p.x - 2.0).abs() < 1e-15);
    /// assert_eq!(p.y, 2.0);
    /// ```
    pub fn skew(angle: f64, a: Vector3, b: Vector3) -> Self {
        let t = tan(angle);
        let x = a.x * t;
        let y = a.y * t;
        let z = a.z * t;

        Self::new(
            x * b.x + 1.0,
            x * b.y,
            x * b.z,
            y * b.x,
            y * b.y + 1.0,
            y * b.z,
            z * b.x,
            z * b.y,
            z * b.z + 1.0,
        )
    }

    // k * a aᵀ + d * I, the shared shape of reflection, involution and axial scale.
    fn outer_product_offset(a: Vector3, k: f64, d: f64) -> Self {
        let x = a.x * k;
        let y = a.y * k;
        let z = a.z * k;
        let axay = x * a.y;
        let axaz = x * a.z;
        let ayaz = y * a.z;

        Self::new(
            x * a.x + d,
            axay,
            axaz,
            axay,
            y * a.y + d,
            ayaz,
            axaz,
            ayaz,
            z * a.z + d,
        )
    }

    /// Multiplies this matrix by another, returning `self * other`.
    ///
    /// The product applies `other` first, then `self`. The `*` operator is
    /// implemented for owned and borrowed operands.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 3]; 3];

        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.get(i, k) * other.get(k, j);
                }
            }
        }

        Self::from_rows(rows)
    }

    /// Applies this matrix to a vector: the standard product `M * v`.
    pub fn apply_to_vector(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z,
        )
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = |i, j| self.get(i, j);

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            + m(0, 1) * (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Returns the inverse of this matrix.
    ///
    /// With columns `a`, `b`, `c`, the rows of the inverse are `b × c`,
    /// `c × a` and `a × b`, each divided by the determinant `(a × b) · c`.
    ///
    /// There is no singularity check. A singular matrix divides by zero and
    /// the result holds `inf`/`NaN` entries; see [`try_inverse`](Self::try_inverse).
    ///
    /// ```
    /// use spatial_core::Matrix3;
    ///
    /// let m = Matrix3::new(2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0);
    /// let inv = m.inverse();
    /// assert_eq!(inv.get(1, 1), 0.25);
    /// assert!((inv * m).max_difference(&Matrix3::identity()) < 1e-15);
    /// ```
    pub fn inverse(&self) -> Self {
        let a = self.column(0);
        let b = self.column(1);
        let c = self.column(2);

        let r0 = b.cross(&c);
        let r1 = c.cross(&a);
        let r2 = a.cross(&b);

        let inv_det = 1.0 / r2.dot(&c);

        Self::new(
            r0.x * inv_det,
            r0.y * inv_det,
            r0.z * inv_det,
            r1.x * inv_det,
            r1.y * inv_det,
            r1.z * inv_det,
            r2.x * inv_det,
            r2.y * inv_det,
            r2.z * inv_det,
        )
    }

    /// Returns the inverse, or [`SpatialError::SingularMatrix`] when the
    /// determinant's magnitude is at most `tolerance` (or not finite).
    ///
    /// [`DEFAULT_SINGULAR_TOLERANCE`](crate::constants::DEFAULT_SINGULAR_TOLERANCE)
    /// is a reasonable choice for matrices with entries near unit scale.
    pub fn try_inverse(&self, tolerance: f64) -> SpatialResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= tolerance {
            return Err(SpatialError::singular_matrix(det));
        }
        Ok(self.inverse())
    }

    /// Returns the transpose of this matrix.
    ///
    /// For a rotation matrix the transpose is also the inverse, and cheaper
    /// and more stable to compute.
    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// Checks whether this matrix is a proper rotation within `tolerance`:
    /// determinant `+1` and `M Mᵀ = I`.
    ///
    /// ```
    /// use spatial_core::{Matrix3, Vector3};
    ///
    /// assert!(Matrix3::rotation_x(0.3).is_rotation_matrix(1e-14));
    /// assert!(!Matrix3::reflection(Vector3::z_axis()).is_rotation_matrix(1e-14));
    /// assert!(!Matrix3::scale(2.0, 1.0, 1.0).is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for (col, other_col) in self.columns.iter().zip(other.columns.iter()) {
            for (a, b) in col.iter().zip(other_col.iter()) {
                max_diff = max_diff.max((a - b).abs());
            }
        }

        max_diff
    }
}

fn check_index(operation: &str, j: usize) -> SpatialResult<()> {
    if j < 3 {
        Ok(())
    } else {
        Err(SpatialError::math_error(
            operation,
            crate::MathErrorKind::InvalidInput,
            &format!("column {} out of bounds (valid range: 0-2)", j),
        ))
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply_to_vector(v)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply_to_vector(v)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.columns[col][row]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.columns[col][row]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for i in 0..3 {
            let row = self.row(i);
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row.x, row.y, row.z)?;
        }
        Ok(())
    }
}
