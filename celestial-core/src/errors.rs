//! Error type shared by the orientation crates.
//!
//! The orientation pipeline is pure arithmetic and its default path never fails:
//! NaN and infinity propagate through to the output matrix. Errors exist for the two
//! places where a caller can ask for a check:
//!
//! | Variant | Raised by | When |
//! |---------|-----------|------|
//! | [`InvalidArgument`](CelestialError::InvalidArgument) | constructors taking untyped input | a required input is missing or unrecognised |
//! | [`NumericInstability`](CelestialError::NumericInstability) | the opt-in validation layer | a result is not finite or not a rotation |
//!
//! Both are raised before any caller-supplied destination is written.
//!
//! ```
//! use celestial_core::{CelestialError, MathErrorKind};
//!
//! let err = CelestialError::numeric_instability(
//!     "OrientationAxes::evaluate_checked",
//!     MathErrorKind::NotFinite,
//!     "declination is NaN",
//! );
//! assert!(err.to_string().contains("NotFinite"));
//! ```

use thiserror::Error;

/// Classification of numeric failures reported by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A value is NaN or infinite.
    NotFinite,
    /// A matrix is not orthonormal with determinant +1 within tolerance.
    NotOrthonormal,
    /// An input is outside what the operation accepts.
    InvalidInput,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CelestialError {
    /// A required argument was absent or could not be interpreted.
    #[error("Invalid argument `{argument}` to {operation}: {message}")]
    InvalidArgument {
        operation: String,
        argument: String,
        message: String,
    },

    /// A computed value failed a finiteness or orthonormality check.
    #[error("Numeric instability in {operation} ({kind:?}): {message}")]
    NumericInstability {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type CelestialResult<T> = Result<T, CelestialError>;

impl CelestialError {
    pub fn invalid_argument(operation: &str, argument: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            argument: argument.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn numeric_instability(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::NumericInstability {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Name of the offending argument, for [`InvalidArgument`](Self::InvalidArgument).
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { argument, .. } => Some(argument),
            Self::NumericInstability { .. } => None,
        }
    }
}
