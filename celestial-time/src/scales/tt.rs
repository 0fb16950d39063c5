//! Terrestrial Time.
//!
//! TT is the independent argument of the IAU rotation models. It runs a fixed
//! 32.184 s ahead of TAI:
//!
//! ```text
//! TT = TAI + 32.184 s
//! ```
//!
//! The models consume two derived quantities:
//!
//! - `d` = days since J2000.0 ([`TT::days_since_j2000`])
//! - `T` = Julian centuries since J2000.0 ([`TT::centuries_since_j2000`])
//!
//! ```
//! use celestial_time::TT;
//!
//! let tt = TT::j2000().add_days(36525.0);
//! assert_eq!(tt.centuries_since_j2000(), 1.0);
//! ```

use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::scales::{TAI, UTC};
use crate::{TimeError, TimeResult};
use celestial_core::constants::{DAYS_PER_JULIAN_CENTURY, TT_MINUS_TAI_SECONDS};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TT(JulianDate);

impl TT {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn from_julian_date_raw(jd1: f64, jd2: f64) -> Self {
        Self(JulianDate::new(jd1, jd2))
    }

    /// 2000-01-01T12:00:00 TT, JD 2451545.0.
    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    /// The current instant from the system clock, via UTC and TAI.
    pub fn now() -> Self {
        UTC::now().to_tai().to_tt()
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    pub fn to_tai(&self) -> TAI {
        TAI::from_julian_date(self.0.add_seconds(-TT_MINUS_TAI_SECONDS))
    }

    /// Days since J2000.0 (the `d` argument of the IAU models).
    pub fn days_since_j2000(&self) -> f64 {
        self.0.days_since_j2000()
    }

    /// Julian centuries since J2000.0 (the `T` argument of the IAU models).
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }
}

impl fmt::Display for TT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TT {}", self.0)
    }
}

impl From<JulianDate> for TT {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

/// Parses an ISO 8601 string read directly as TT, with no leap second handling.
impl FromStr for TT {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let parsed = parse_iso8601(s)?;
        Ok(Self::from_julian_date(parsed.to_julian_date()))
    }
}
