//! Error types for the checked API layer.
//!
//! The default numeric API never returns errors: a singular matrix inverts to
//! `inf`/`NaN` entries and a zero-length axis produces a meaningless matrix,
//! exactly as the closed-form formulas dictate. Callers that want a guard use
//! the `try_*` variants, which report failures through [`SpatialError`].
//!
//! # Error Categories
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`SingularMatrix`](SpatialError::SingularMatrix) | [`Matrix3::try_inverse`](crate::Matrix3::try_inverse) |
//! | [`MathError`](SpatialError::MathError) | index checks, zero-length normalization |
//!
//! ```
//! use spatial_core::{Matrix3, SpatialError};
//!
//! let singular = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
//! match singular.try_inverse(1e-12) {
//!     Err(SpatialError::SingularMatrix { .. }) => {}
//!     other => panic!("expected a singular matrix error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
}

/// Unified error type for the checked operations.
#[derive(Error, Debug)]
pub enum SpatialError {
    /// The matrix determinant is within tolerance of zero.
    #[error("Singular matrix: determinant {determinant:e} is too close to zero")]
    SingularMatrix { determinant: f64 },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SpatialError>`.
pub type SpatialResult<T> = Result<T, SpatialError>;

impl SpatialError {
    /// Creates a [`SingularMatrix`](Self::SingularMatrix) error.
    pub fn singular_matrix(determinant: f64) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] for math errors, `None` otherwise.
    pub fn math_kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            Self::SingularMatrix { .. } => None,
        }
    }
}
