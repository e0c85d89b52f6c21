/// Determinant magnitude at or below which [`Matrix3::try_inverse`](crate::Matrix3::try_inverse)
/// callers usually treat a matrix as singular.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Tolerance for [`Matrix3::is_rotation_matrix`](crate::Matrix3::is_rotation_matrix)
/// on matrices built from trigonometric constructors.
pub const DEFAULT_ROTATION_TOLERANCE: f64 = 1e-9;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
