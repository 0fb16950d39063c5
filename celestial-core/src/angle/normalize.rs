use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// ```
/// use celestial_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x + PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

/// Wraps an angle to [0, 2pi) radians.
///
/// Spin angles from the IAU models grow by thousands of degrees per year, so
/// the prime-meridian angle is reduced with this before it becomes a quaternion.
///
/// `fmod` keeps the sign of the dividend, so negative remainders are shifted up by
/// 2pi. A tiny negative remainder can round to exactly 2pi after the shift; that case
/// folds back to 0 so the upper bound stays open.
///
/// ```
/// use celestial_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-12);
///
/// let y = wrap_0_2pi(5.0 * PI);
/// assert!((y - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        let shifted = w + TWOPI;
        if shifted >= TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}
