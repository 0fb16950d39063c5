//! Inertial-to-body-fixed rotation matrices.
//!
//! For parameters `(α, δ, W)` the orientation is built in two parts and composed:
//!
//! ```text
//! X = (cos(α + π/2), sin(α + π/2), 0)
//! Z = (cos δ cos α, cos δ sin α, sin δ)
//! Y = Z × X
//! P = [X | Y | Z]                    columns, not rows
//! R = matrix(conj(q(+z, W mod 2π)))
//! M = P · R
//! ```
//!
//! `Y` is not re-normalized: `X` and `Z` are unit and orthogonal by construction.
//!
//! # Allocation and Threads
//!
//! Intermediate axes, quaternion and matrices live on the stack of each call. The
//! `_into` variants write into a caller-owned matrix and allocate nothing, so an
//! evaluator can be shared between threads as long as each thread has its own
//! destination. [`OrientationAxes`] is `Send + Sync` whenever its model is.
//!
//! # Validation
//!
//! [`evaluate`](OrientationAxes::evaluate) propagates NaN and infinity from the model
//! without checking. [`evaluate_checked`](OrientationAxes::evaluate_checked) rejects
//! them, and any result that is not a proper rotation, with
//! [`CelestialError::NumericInstability`](celestial_core::CelestialError::NumericInstability).

use crate::models::IauMoon;
use crate::parameters::{OrientationModel, OrientationParameters};
use crate::validate::{check_parameters, check_rotation, ValidationConfig};
use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::HALF_PI;
use celestial_core::math::sincos;
use celestial_core::{CelestialResult, Quaternion, RotationMatrix3, Vector3};
use celestial_time::TT;
use tracing::debug;

/// Evaluates a body's orientation from an [`OrientationModel`].
///
/// ```
/// use celestial_orientation::OrientationAxes;
/// use celestial_time::TT;
///
/// let moon = OrientationAxes::default();
/// let to_fixed = moon.evaluate(&TT::j2000());
/// assert!(to_fixed.is_rotation_matrix(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct OrientationAxes<M = IauMoon> {
    model: M,
}

impl<M: OrientationModel> OrientationAxes<M> {
    pub fn new(model: M) -> Self {
        debug!(model = model.name(), "orientation evaluator created");
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn parameters(&self, epoch: &TT) -> OrientationParameters {
        self.model.evaluate(epoch)
    }

    pub fn evaluate(&self, epoch: &TT) -> RotationMatrix3 {
        let mut result = RotationMatrix3::identity();
        self.evaluate_into(epoch, &mut result);
        result
    }

    /// Evaluates at the current system time. Two calls give different results.
    pub fn evaluate_now(&self) -> RotationMatrix3 {
        self.evaluate(&TT::now())
    }

    pub fn evaluate_into<'a>(
        &self,
        epoch: &TT,
        result: &'a mut RotationMatrix3,
    ) -> &'a mut RotationMatrix3 {
        let params = self.model.evaluate(epoch);
        compose_orientation_into(&params, result)
    }

    /// Body-fixed to inertial: the transpose of [`evaluate`](Self::evaluate).
    pub fn fixed_to_inertial(&self, epoch: &TT) -> RotationMatrix3 {
        self.evaluate(epoch).transpose()
    }

    pub fn evaluate_checked(
        &self,
        epoch: &TT,
        config: &ValidationConfig,
    ) -> CelestialResult<RotationMatrix3> {
        let mut result = RotationMatrix3::identity();
        self.evaluate_checked_into(epoch, config, &mut result)?;
        Ok(result)
    }

    /// Like [`evaluate_into`](Self::evaluate_into) but validated. On error `result`
    /// is left as it was.
    pub fn evaluate_checked_into<'a>(
        &self,
        epoch: &TT,
        config: &ValidationConfig,
        result: &'a mut RotationMatrix3,
    ) -> CelestialResult<&'a mut RotationMatrix3> {
        const OPERATION: &str = "OrientationAxes::evaluate_checked";

        let params = self.model.evaluate(epoch);
        check_parameters(OPERATION, &params)?;

        let mut candidate = RotationMatrix3::identity();
        compose_orientation_into(&params, &mut candidate);
        check_rotation(OPERATION, &candidate, config)?;

        *result = candidate;
        Ok(result)
    }
}

impl Default for OrientationAxes<IauMoon> {
    fn default() -> Self {
        Self::new(IauMoon)
    }
}

/// The matrix with columns `[X, Y, Z]` orienting the body's pole at `(α, δ)`.
pub fn precession_matrix(right_ascension: f64, declination: f64) -> RotationMatrix3 {
    let (sin_node, cos_node) = sincos(right_ascension + HALF_PI);
    let (sin_ra, cos_ra) = sincos(right_ascension);
    let (sin_dec, cos_dec) = sincos(declination);

    let x_axis = Vector3::new(cos_node, sin_node, 0.0);
    let z_axis = Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec);
    let y_axis = z_axis.cross(&x_axis);

    RotationMatrix3::from_columns(&x_axis, &y_axis, &z_axis)
}

/// Rotation by `-W` about +z, with `W` wrapped into `[0, 2π)` first.
pub fn spin_matrix(rotation: f64) -> RotationMatrix3 {
    let spin = Quaternion::from_axis_angle(&Vector3::z_axis(), wrap_0_2pi(rotation)).conjugate();
    RotationMatrix3::from_quaternion(&spin)
}

pub fn compose_orientation(params: &OrientationParameters) -> RotationMatrix3 {
    let mut result = RotationMatrix3::identity();
    compose_orientation_into(params, &mut result);
    result
}

/// `P · R`. The order is significant.
pub fn compose_orientation_into<'a>(
    params: &OrientationParameters,
    result: &'a mut RotationMatrix3,
) -> &'a mut RotationMatrix3 {
    let precession = precession_matrix(params.right_ascension, params.declination);
    let spin = spin_matrix(params.rotation);
    RotationMatrix3::multiply_into(&precession, &spin, result)
}
