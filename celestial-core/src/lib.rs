//! Numeric building blocks for body orientation math.
//!
//! `celestial-core` holds the small linear-algebra kit the orientation pipeline is
//! written against: 3-vectors, 3x3 rotation matrices and rotation quaternions, plus
//! angle wrapping, shared constants and the workspace error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`], [`RotationMatrix3`], [`Quaternion`] |
//! | [`angle`] | Wrapping angles into `[0, 2pi)` and `[-pi, pi)` |
//! | [`constants`] | Epochs, time units, angle conversions |
//! | [`math`] | `libm` wrappers used where bit-reproducibility matters |
//! | [`errors`] | [`CelestialError`] and [`CelestialResult`] |
//!
//! # Conventions
//!
//! - All angles are radians.
//! - Matrices are stored row-major; element `(i, j)` is row `i`, column `j`.
//! - Quaternions are `(x, y, z, w)` with `w` the scalar part, and map to *active*
//!   rotation matrices (a positive angle turns vectors counterclockwise about the axis).
//!
//! ```
//! use celestial_core::{Quaternion, RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
//! let m = RotationMatrix3::from_quaternion(&q);
//! let v = m * Vector3::x_axis();
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use errors::{CelestialError, CelestialResult, MathErrorKind};
pub use matrix::{Quaternion, RotationMatrix3, Vector3};
