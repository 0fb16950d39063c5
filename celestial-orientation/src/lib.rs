//! Orientation of rotating celestial bodies.
//!
//! Computes the rotation from the ICRF to a body-fixed frame at a given instant,
//! and converts between Cartesian and clock/cone/magnitude spherical coordinates.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`spherical`] | [`Spherical`] value type and conversions |
//! | [`parameters`] | [`OrientationParameters`] and the [`OrientationModel`] strategy |
//! | [`models`] | IAU 2009 models: [`IauMoon`] (default), [`UniformRotation`], [`Body`] |
//! | [`axes`] | [`OrientationAxes`] evaluator and the pure composition functions |
//! | [`validate`] | opt-in [`ValidationConfig`] checks |
//!
//! # Quick Start
//!
//! ```
//! use celestial_core::Vector3;
//! use celestial_orientation::{Body, OrientationAxes};
//! use celestial_time::UTC;
//!
//! let epoch = "2024-03-20T03:06:00Z".parse::<UTC>().unwrap().to_tai().to_tt();
//!
//! let moon = OrientationAxes::default();
//! let to_fixed = moon.evaluate(&epoch);
//! let in_fixed = to_fixed * Vector3::new(1.0, 0.0, 0.0);
//! assert!((in_fixed.magnitude() - 1.0).abs() < 1e-12);
//!
//! let mars = OrientationAxes::new(Body::Mars.model());
//! assert!(mars.evaluate(&epoch).is_rotation_matrix(1e-10));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//! - `cli`: the `orientation` binary.

pub mod axes;
pub mod models;
pub mod parameters;
pub mod spherical;
pub mod validate;

pub use axes::{
    compose_orientation, compose_orientation_into, precession_matrix, spin_matrix,
    OrientationAxes,
};
pub use models::{Body, IauMoon, UniformRotation};
pub use parameters::{model_fn, ModelFn, OrientationModel, OrientationParameters};
pub use spherical::Spherical;
pub use validate::ValidationConfig;
