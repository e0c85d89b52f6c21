//! 3D linear-algebra primitives for graphics and game-engine math.
//!
//! `spatial-core` provides the building blocks for placing and deforming
//! geometry: a column-major 3×3 matrix with closed-form constructors for
//! rotation, reflection, involution, scale and skew; a quaternion type with
//! conversion to and from rotation matrices; and the 3D vector both act on.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Matrix3`] and [`Vector3`] |
//! | [`quaternion`] | [`Quaternion`], Hamilton product, vector rotation |
//! | [`constants`] | Angle constants and default tolerances |
//! | [`errors`] | [`SpatialError`] and [`SpatialResult`] for the checked API |
//!
//! # Example
//!
//! ```
//! use spatial_core::{Matrix3, Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let turn = Matrix3::rotation_z(FRAC_PI_2);
//! let q = Quaternion::from_rotation_matrix(&turn);
//!
//! let p = Vector3::new(1.0, 0.0, 0.0);
//! let a = turn * p;
//! let b = q.transform(p);
//! assert!((a - b).magnitude() < 1e-15);
//! assert!((a.y - 1.0).abs() < 1e-15);
//! ```
//!
//! # Design Notes
//!
//! - **Unchecked by default**: every operation is a direct closed-form
//!   computation. Singular matrices, non-unit axes and non-unit quaternions
//!   are not detected; the formulas run and the result is whatever they give.
//!   The `try_*` methods add checks where a caller wants them.
//!
//! - **Radians everywhere**: all angle arguments are in radians.
//!
//! - **Value types**: all three types are small `Copy` structs. Accessors such
//!   as [`Matrix3::column`] and [`Quaternion::vector_part`] return copies.
//!
//! - **Optional serde**: enable the `serde` feature for
//!   `Serialize`/`Deserialize` on all three types.

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod quaternion;

pub use errors::{MathErrorKind, SpatialError, SpatialResult};
pub use matrix::{Matrix3, Vector3};
pub use quaternion::{transform, Quaternion};

pub mod test_helpers;
