//! Orientation parameters and the strategy that produces them.
//!
//! An [`OrientationModel`] maps a TT instant to the pole direction `(α, δ)` and the
//! prime-meridian angle `W` of one body, all in radians. The evaluator in
//! [`axes`](crate::axes) is generic over the model, so any body can be plugged in:
//!
//! ```
//! use celestial_orientation::{model_fn, OrientationAxes, OrientationParameters};
//! use celestial_time::TT;
//!
//! let fixed = model_fn("fixed-pole", |_: &TT| {
//!     OrientationParameters::new(0.0, std::f64::consts::FRAC_PI_2, 0.0)
//! });
//! let axes = OrientationAxes::new(fixed);
//! let m = axes.evaluate(&TT::j2000());
//! assert!(m.is_rotation_matrix(1e-12));
//! ```

use celestial_time::TT;
use std::fmt;
use std::sync::Arc;

/// Pole and spin of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationParameters {
    /// α of the north pole, radians.
    pub right_ascension: f64,
    /// δ of the north pole, radians.
    pub declination: f64,
    /// W, the prime-meridian angle, radians. Not wrapped.
    pub rotation: f64,
    /// dW/dt in radians per second. Zero when the model does not provide it.
    pub rotation_rate: f64,
}

impl OrientationParameters {
    pub fn new(right_ascension: f64, declination: f64, rotation: f64) -> Self {
        Self {
            right_ascension,
            declination,
            rotation,
            rotation_rate: 0.0,
        }
    }

    pub fn with_rotation_rate(mut self, rotation_rate: f64) -> Self {
        self.rotation_rate = rotation_rate;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.right_ascension.is_finite()
            && self.declination.is_finite()
            && self.rotation.is_finite()
            && self.rotation_rate.is_finite()
    }
}

/// Source of orientation parameters for one body.
///
/// Implementations must be pure functions of the epoch. Sharing an evaluator across
/// threads additionally requires the model to be `Sync`.
pub trait OrientationModel {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters;

    /// Short name used in logs and CLI output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<M: OrientationModel + ?Sized> OrientationModel for &M {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        (**self).evaluate(epoch)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: OrientationModel + ?Sized> OrientationModel for Box<M> {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        (**self).evaluate(epoch)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: OrientationModel + ?Sized> OrientationModel for Arc<M> {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        (**self).evaluate(epoch)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A closure registered as a model. Built with [`model_fn`].
#[derive(Clone)]
pub struct ModelFn<F> {
    name: String,
    f: F,
}

/// Wraps `f` as an [`OrientationModel`] named `name`.
pub fn model_fn<F>(name: impl Into<String>, f: F) -> ModelFn<F>
where
    F: Fn(&TT) -> OrientationParameters,
{
    ModelFn {
        name: name.into(),
        f,
    }
}

impl<F> OrientationModel for ModelFn<F>
where
    F: Fn(&TT) -> OrientationParameters,
{
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        (self.f)(epoch)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for ModelFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelFn").field("name", &self.name).finish()
    }
}
