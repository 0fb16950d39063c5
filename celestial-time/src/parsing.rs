use crate::{JulianDate, TimeError, TimeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.fff][Z]` (a space may replace the `T`).
///
/// Only field ranges are checked; the day is not checked against the month length.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 32;
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = s
        .split_once('T')
        .or_else(|| s.split_once(' '))
        .ok_or_else(|| {
            TimeError::ParseError(format!(
                "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
                s
            ))
        })?;

    let date: Vec<&str> = date_part.split('-').collect();
    if date.len() != 3 || date[0].len() != 4 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let time: Vec<&str> = time_part.split(':').collect();
    if time.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }

    let year = parse_digits(date[0], "year")? as i32;
    let month = parse_field(date[1], "month", 1..=12)?;
    let day = parse_field(date[2], "day", 1..=31)?;
    let hour = parse_field(time[0], "hour", 0..=23)?;
    let minute = parse_field(time[1], "minute", 0..=59)?;
    let second = parse_second(time[2])?;

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_digits(text: &str, name: &str) -> TimeResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            name, text
        )));
    }
    text.parse::<u32>()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", name, text)))
}

fn parse_field(text: &str, name: &str, range: std::ops::RangeInclusive<u8>) -> TimeResult<u8> {
    if text.len() > 2 {
        return Err(TimeError::ParseError(format!(
            "Invalid {} format: '{}'",
            name, text
        )));
    }
    let value = parse_digits(text, name)? as u8;
    if !range.contains(&value) {
        return Err(TimeError::ParseError(format!(
            "{} out of range: {}",
            name, value
        )));
    }
    Ok(value)
}

// Allows 60.x for a leap second.
fn parse_second(text: &str) -> TimeResult<f64> {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    if whole.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid second: '{}'", text)));
    }
    parse_digits(whole, "second")?;

    let second: f64 = text
        .parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid second: '{}'", text)))?;
    if !(0.0..61.0).contains(&second) {
        return Err(TimeError::ParseError(format!(
            "second out of range: {}",
            second
        )));
    }
    Ok(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let p = parse_iso8601("2024-03-15T06:30:45").unwrap();
        assert_eq!(
            p,
            ParsedDateTime {
                year: 2024,
                month: 3,
                day: 15,
                hour: 6,
                minute: 30,
                second: 45.0,
            }
        );
    }

    #[test]
    fn test_parse_fraction_and_zulu() {
        let p = parse_iso8601("2000-01-01T12:00:00.125Z").unwrap();
        assert_eq!(p.second, 0.125);
        let jd = p.to_julian_date();
        assert!((jd.days_since_j2000() - 0.125 / 86400.0).abs() < 1e-15);
    }

    #[test]
    fn test_parse_space_separator() {
        let p = parse_iso8601("1999-12-31 23:59:60").unwrap();
        assert_eq!(p.second, 60.0);
    }

    #[test]
    fn test_parse_single_digit_fields() {
        let p = parse_iso8601("2010-1-2T3:4:05").unwrap();
        assert_eq!((p.month, p.day, p.hour, p.minute), (1, 2, 3, 4));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_iso8601("2000-01-01").is_err());
        assert!(parse_iso8601("00-01-01T00:00:00").is_err());
        assert!(parse_iso8601("2000-13-01T00:00:00").is_err());
        assert!(parse_iso8601("2000-01-00T00:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T24:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T00:60:00").is_err());
        assert!(parse_iso8601("2000-01-01T00:00:61").is_err());
        assert!(parse_iso8601("2000-01-01T00:00:1e1").is_err());
        assert!(parse_iso8601("2000-0a-01T00:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T00:00:00.000000000000000000000").is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = parse_iso8601("2000-13-01T00:00:00").unwrap_err();
        assert!(err.to_string().contains("month out of range: 13"));
    }
}
