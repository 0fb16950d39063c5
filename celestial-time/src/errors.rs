use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type TimeResult<T> = Result<T, TimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = TimeError::ParseError("Invalid year: 'abcd'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid year: 'abcd'");
    }
}
