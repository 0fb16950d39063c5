use crate::parameters::{OrientationModel, OrientationParameters};
use celestial_core::constants::{DEG_TO_RAD, SECONDS_PER_DAY_F64};
use celestial_time::TT;

/// A body whose pole drifts linearly and which spins at a constant rate.
///
/// Angles are in degrees: `ra`/`dec` rates per Julian century, `w_rate` per day.
///
/// ```text
/// α0 = ra0 + ra_rate T
/// δ0 = dec0 + dec_rate T
/// W  = w0 + w_rate d
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformRotation {
    pub name: String,
    pub ra0: f64,
    pub ra_rate: f64,
    pub dec0: f64,
    pub dec_rate: f64,
    pub w0: f64,
    pub w_rate: f64,
}

impl UniformRotation {
    pub fn new(
        name: impl Into<String>,
        ra0: f64,
        ra_rate: f64,
        dec0: f64,
        dec_rate: f64,
        w0: f64,
        w_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            ra0,
            ra_rate,
            dec0,
            dec_rate,
            w0,
            w_rate,
        }
    }

    pub fn sun() -> Self {
        Self::new("sun", 286.13, 0.0, 63.87, 0.0, 84.176, 14.1844000)
    }

    pub fn earth() -> Self {
        Self::new("earth", 0.00, -0.641, 90.00, -0.557, 190.147, 360.9856235)
    }

    pub fn mars() -> Self {
        Self::new(
            "mars",
            317.68143,
            -0.1061,
            52.88650,
            -0.0609,
            176.630,
            350.89198226,
        )
    }
}

impl OrientationModel for UniformRotation {
    fn evaluate(&self, epoch: &TT) -> OrientationParameters {
        let d = epoch.days_since_j2000();
        let t = epoch.centuries_since_j2000();

        let ra = self.ra0 + self.ra_rate * t;
        let dec = self.dec0 + self.dec_rate * t;
        let w = self.w0 + self.w_rate * d;

        OrientationParameters::new(ra * DEG_TO_RAD, dec * DEG_TO_RAD, w * DEG_TO_RAD)
            .with_rotation_rate(self.w_rate * DEG_TO_RAD / SECONDS_PER_DAY_F64)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
