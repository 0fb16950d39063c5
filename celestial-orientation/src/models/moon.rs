use crate::parameters::{OrientationModel, OrientationParameters};
use celestial_core::constants::{DEG_TO_RAD, SECONDS_PER_DAY_F64};
use celestial_time::TT;

/// Fundamental arguments `E1..E13`: (degrees at J2000, degrees per day).
const ARGUMENTS: [(f64, f64); 13] = [
    (125.045, -0.0529921),
    (250.089, -0.1059842),
    (260.008, 13.0120009),
    (176.625, 13.3407154),
    (357.529, 0.9856003),
    (311.589, 26.4057084),
    (134.963, 13.0649930),
    (276.617, 0.3287146),
    (34.226, 1.7484877),
    (15.134, -0.1589763),
    (119.743, 0.0036096),
    (239.961, 0.1643573),
    (25.053, 12.9590088),
];

/// Periodic coefficients per argument, degrees: (α sin, δ cos, W sin).
const PERIODIC_TERMS: [(f64, f64, f64); 13] = [
    (-3.8787, 1.5419, 3.5610),
    (-0.1204, 0.0239, 0.1208),
    (0.0700, -0.0278, -0.0642),
    (-0.0172, 0.0068, 0.0158),
    (0.0, 0.0, 0.0252),
    (0.0072, -0.0029, -0.0066),
    (0.0, 0.0009, -0.0047),
    (0.0, 0.0, -0.0046),
    (0.0, 0.0, 0.0028),
    (-0.0052, 0.0008, 0.0052),
    (0.0, 0.0, 0.0040),
    (0.0, 0.0, 0.0019),
    (0.0043, -0.0009, -0.0044),
];

const RA_J2000: f64 = 269.9949;
const RA_PER_CENTURY: f64 = 0.0031;
const DEC_J2000: f64 = 66.5392;
const DEC_PER_CENTURY: f64 = 0.0130;
const W_J2000: f64 = 38.3213;
const W_PER_DAY: f64 = 13.17635815;
const W_PER_DAY_SQUARED: f64 = -1.4e-12;

/// IAU 2009 lunar orientation model. The default model of
/// [`OrientationAxes`](crate::OrientationAxes).
///
/// With `d` days and `T` centuries since J2000 TT, and `Ei = ei0 + ei1·d` degrees:
///
/// ```text
/// α0 = 269.9949 + 0.0031 T + Σ ai sin Ei
/// δ0 =  66.5392 + 0.0130 T + Σ bi cos Ei
/// W  =  38.3213 + 13.17635815 d - 1.4e-12 d² + Σ ci sin Ei
/// ```
///
/// The rotation rate is the analytic derivative of `W`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IauMoon;

impl IauMoon {
    pub fn new() -> Self {
        Self
    }
}

impl OrientationModel for IauMoon {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        let d = epoch.days_since_j2000();
        let t = epoch.centuries_since_j2000();

        let mut ra = RA_J2000 + RA_PER_CENTURY * t;
        let mut dec = DEC_J2000 + DEC_PER_CENTURY * t;
        let mut w = W_J2000 + W_PER_DAY * d + W_PER_DAY_SQUARED * d * d;
        // degrees per day
        let mut w_dot = W_PER_DAY + 2.0 * W_PER_DAY_SQUARED * d;

        for (&(e0, e_rate), &(ra_sin, dec_cos, w_sin)) in ARGUMENTS.iter().zip(&PERIODIC_TERMS) {
            let (sin_e, cos_e) = libm::sincos((e0 + e_rate * d) * DEG_TO_RAD);
            ra += ra_sin * sin_e;
            dec += dec_cos * cos_e;
            w += w_sin * sin_e;
            w_dot += w_sin * cos_e * e_rate * DEG_TO_RAD;
        }

        OrientationParameters::new(ra * DEG_TO_RAD, dec * DEG_TO_RAD, w * DEG_TO_RAD)
            .with_rotation_rate(w_dot * DEG_TO_RAD / SECONDS_PER_DAY_F64)
    }

    fn name(&self) -> &str {
        "moon"
    }
}
