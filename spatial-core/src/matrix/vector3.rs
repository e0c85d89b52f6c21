//! 3D Cartesian vectors.
//!
//! [`Vector3`] is the value every matrix and quaternion in this crate acts on:
//! points and directions in a scene, rotation axes, matrix columns.
//!
//! # Dot and Cross Products
//!
//! Most transform constructors are built from these two products:
//!
//! - **Dot product**: projection length. For unit vectors, `a.dot(&b)` is
//!   `cos(θ)` of the angle between them.
//! - **Cross product**: the vector perpendicular to both inputs, oriented by
//!   the right-hand rule. The matrix inverse is assembled from cross products
//!   of the columns.
//!
//! ```
//! use spatial_core::Vector3;
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! ```
use crate::{MathErrorKind, SpatialError, SpatialResult};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public; the type is `Copy` and passed by value.
///
/// ```
/// use spatial_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let w = Vector3::from_array([1.0, 2.0, 3.0]);
/// assert_eq!(v, w);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> SpatialResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(SpatialError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2.
    pub fn set(&mut self, index: usize, value: f64) -> SpatialResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => {
                return Err(SpatialError::math_error(
                    "Vector3::set",
                    MathErrorKind::InvalidInput,
                    &format!("index {} out of bounds (valid range: 0-2)", index),
                ))
            }
        }
        Ok(())
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        crate::math::sqrt(self.magnitude_squared())
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length, returns the zero vector unchanged (avoids NaN).
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    /// Like [`normalize`](Self::normalize), but reports a zero-length vector
    /// as an error instead of passing it through.
    pub fn try_normalize(&self) -> SpatialResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(SpatialError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize a zero-length vector",
            ));
        }
        if !mag.is_finite() {
            return Err(SpatialError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::NotFinite,
                &format!("vector magnitude is {}", mag),
            ));
        }
        Ok(*self / mag)
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use spatial_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_construction() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::zeros(), Vector3::default());
        assert_eq!(Vector3::x_axis(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::y_axis(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Vector3::z_axis(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3::from([4.0, 5.0, 6.0]), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vector3_magnitude() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_vector3_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * a, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vector3_dot_cross() {
        let a = Vector3::x_axis();
        let b = Vector3::y_axis();
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector3::z_axis());
        assert_eq!(b.cross(&a), -Vector3::z_axis());

        let d = Vector3::new(1.0, 2.0, 3.0);
        let e = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(d.cross(&e), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_get_set_methods() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(2).unwrap(), 3.0);

        v.set(0, 10.0).unwrap();
        v.set(1, 20.0).unwrap();
        v.set(2, 30.0).unwrap();
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let err = v.get(3).unwrap_err();
        assert!(err.to_string().contains("index 3 out of bounds"));

        let err = v.set(5, 42.0).unwrap_err();
        assert!(err.to_string().contains("index 5 out of bounds"));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector3::zeros();
        assert_eq!(zero.normalize(), zero);

        let err = zero.try_normalize().unwrap_err();
        assert_eq!(err.math_kind(), Some(&MathErrorKind::DivisionByZero));
    }

    #[test]
    fn test_try_normalize() {
        let unit = Vector3::new(0.0, 0.0, -2.0).try_normalize().unwrap();
        assert_eq!(unit, Vector3::new(0.0, 0.0, -1.0));

        let err = Vector3::new(f64::INFINITY, 0.0, 0.0)
            .try_normalize()
            .unwrap_err();
        assert_eq!(err.math_kind(), Some(&MathErrorKind::NotFinite));
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);

        v[1] = 20.0;
        assert_eq!(v, Vector3::new(1.0, 20.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    fn test_display_formatting() {
        let s = format!("{}", Vector3::new(1.5, -2.25, 3.0));
        assert_eq!(s, "Vector3(1.500000, -2.250000, 3.000000)");
    }

    #[test]
    fn test_array_conversions() {
        let v = Vector3::new(1.5, 2.5, 3.5);
        assert_eq!(v.to_array(), [1.5, 2.5, 3.5]);
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.5, 2.5, 3.5]);
    }
}
