use celestial_time::scales::utc::tai_minus_utc;
use celestial_time::{JulianDate, TT, UTC};

fn utc(s: &str) -> UTC {
    s.parse().unwrap()
}

// --- Leap seconds ---

#[test]
fn offset_before_first_leap_second_table_entry() {
    assert_eq!(utc("1965-06-01T00:00:00").tai_minus_utc(), 10.0);
    assert_eq!(utc("1972-01-01T00:00:00").tai_minus_utc(), 10.0);
}

#[test]
fn offset_steps_at_midnight_after_leap_second() {
    assert_eq!(utc("2016-12-31T23:59:59").tai_minus_utc(), 36.0);
    assert_eq!(utc("2017-01-01T00:00:00").tai_minus_utc(), 37.0);
}

#[test]
fn offset_after_last_entry_is_current() {
    assert_eq!(utc("2030-01-01T00:00:00Z").tai_minus_utc(), 37.0);
    assert_eq!(tai_minus_utc(70000.0), 37.0);
}

// --- Scale chain ---

#[test]
fn utc_to_tt_at_j2000() {
    let tt = utc("2000-01-01T11:58:55.816").to_tai().to_tt();
    assert!(tt.days_since_j2000().abs() < 1e-12);
}

#[test]
fn tt_to_tai_and_back() {
    let tt = TT::j2000().add_days(1234.5);
    let back = tt.to_tai().to_tt();
    assert!((back.days_since_j2000() - tt.days_since_j2000()).abs() < 1e-12);
}

#[test]
fn centuries_since_j2000() {
    let tt = TT::from_julian_date(JulianDate::from_f64(2451545.0 + 36525.0 / 2.0));
    assert_eq!(tt.centuries_since_j2000(), 0.5);
}

#[test]
fn now_is_after_2020() {
    let jd = TT::now().to_julian_date().to_f64();
    assert!(jd > JulianDate::from_calendar(2020, 1, 1, 0, 0, 0.0).to_f64());
}

// --- Parsing errors ---

#[test]
fn malformed_date_is_rejected() {
    assert!("2024-13-01T00:00:00".parse::<UTC>().is_err());
    assert!("2024-01-01".parse::<UTC>().is_err());
    assert!("not a date".parse::<TT>().is_err());
}
