//! Coordinated Universal Time and the leap second table.

use crate::constants::{TAI_UTC_OFFSETS, UNIX_EPOCH_JD};
use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::scales::TAI;
use crate::{TimeError, TimeResult};
use celestial_core::constants::{NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY_F64};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UTC(JulianDate);

impl UTC {
    /// Creates UTC from seconds and nanoseconds since the Unix epoch.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let days = seconds.div_euclid(86_400);
        let rem = seconds.rem_euclid(86_400) as f64 + nanos as f64 / NANOSECONDS_PER_SECOND_F64;
        Self(JulianDate::new(
            UNIX_EPOCH_JD + days as f64,
            rem / SECONDS_PER_DAY_F64,
        ))
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    /// Reads the system clock.
    ///
    /// A clock set before 1970 reads as the Unix epoch.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new(duration.as_secs() as i64, duration.subsec_nanos())
    }

    /// TAI - UTC in seconds at this instant.
    pub fn tai_minus_utc(&self) -> f64 {
        tai_minus_utc(self.0.to_mjd())
    }

    pub fn to_tai(&self) -> TAI {
        TAI::from_julian_date(self.0.add_seconds(self.tai_minus_utc()))
    }
}

/// Looks up TAI - UTC for a UTC Modified Julian Date.
///
/// Dates before 1972-01-01 return the initial 10 s offset rather than the pre-1972
/// drift model. The offset steps at 0h UTC of the day after the leap second. An
/// inserted 23:59:60 overflows into that day and so already reads the new value.
pub fn tai_minus_utc(utc_mjd: f64) -> f64 {
    TAI_UTC_OFFSETS
        .iter()
        .rev()
        .find(|(mjd, _)| utc_mjd >= *mjd)
        .map_or(TAI_UTC_OFFSETS[0].1, |(_, offset)| *offset)
}

impl fmt::Display for UTC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC {}", self.0)
    }
}

impl FromStr for UTC {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let parsed = parse_iso8601(s)?;
        Ok(Self::from_julian_date(parsed.to_julian_date()))
    }
}
