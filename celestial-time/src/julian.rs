use crate::constants::{SECONDS_TO_DAYS, UNIX_EPOCH_JD};
use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::fmt;

/// A Julian Date split into two parts to preserve precision.
///
/// The usual split is `jd1` = a whole or half day and `jd2` = the remainder, but any
/// split summing to the same instant is valid. Arithmetic only touches `jd2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Modified Julian Date as a single value.
    pub fn to_mjd(&self) -> f64 {
        (self.jd1 - MJD_ZERO_POINT) + self.jd2
    }

    /// Days elapsed since J2000.0, summed so the large `jd1` term cancels first.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Gregorian calendar date and time of day to a split Julian Date.
    ///
    /// `jd1` is the Julian Date at 0h of the given day and `jd2` the fraction of the
    /// day, following ERFA's `eraCal2jd` day-number arithmetic. No range checks are
    /// made on the fields.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::new(J2000_JD, 0.5);
        assert_eq!(jd.jd1(), J2000_JD);
        assert_eq!(jd.jd2(), 0.5);
        assert_eq!(jd.to_f64(), 2451545.5);
    }

    #[test]
    fn test_epochs() {
        assert_eq!(JulianDate::j2000().to_f64(), J2000_JD);
        assert_eq!(JulianDate::unix_epoch().to_f64(), UNIX_EPOCH_JD);
        assert_eq!(JulianDate::unix_epoch().to_mjd(), 40587.0);
    }

    #[test]
    fn test_days_since_j2000() {
        assert_eq!(JulianDate::j2000().days_since_j2000(), 0.0);
        assert_eq!(JulianDate::new(2451544.5, 1.25).days_since_j2000(), 0.75);
        assert_eq!(JulianDate::from(2451180.0).days_since_j2000(), -365.0);
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDate::j2000();
        assert_eq!(jd.add_days(1.0).to_f64(), 2451546.0);

        let jd_plus_hour = jd.add_seconds(3600.0);
        assert!((jd_plus_hour.to_f64() - 2_451_545.041_666_666_5).abs() < 1e-9);
        assert_eq!(jd_plus_hour.jd1(), J2000_JD);
    }

    #[test]
    fn test_from_calendar_j2000() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.jd1(), 2451544.5);
        assert_eq!(jd.jd2(), 0.5);
        assert_eq!(jd.to_f64(), J2000_JD);
    }

    #[test]
    fn test_from_calendar_leap_day() {
        let jd = JulianDate::from_calendar(2024, 2, 29, 0, 0, 0.0);
        assert_eq!(jd.to_mjd(), 60369.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::j2000().to_string(), "JD 2451545.000000000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::new(2451545.5, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let restored: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
