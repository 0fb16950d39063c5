//! International Atomic Time.

use crate::julian::JulianDate;
use crate::scales::TT;
use celestial_core::constants::TT_MINUS_TAI_SECONDS;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TAI(JulianDate);

impl TAI {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    /// TT = TAI + 32.184 s.
    pub fn to_tt(&self) -> TT {
        TT::from_julian_date(self.0.add_seconds(TT_MINUS_TAI_SECONDS))
    }
}

impl fmt::Display for TAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TAI {}", self.0)
    }
}

impl From<JulianDate> for TAI {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}
