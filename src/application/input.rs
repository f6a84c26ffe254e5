//! Validation of raw user input before it reaches the domain.

use chrono::{DateTime, FixedOffset};

use crate::application::{ApplicationError, ApplicationResult};

/// Parse the user's number. Surrounding whitespace is allowed, anything
/// else that is not a base-10 i64 is rejected.
pub fn parse_user_number(input: &str) -> ApplicationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ApplicationError::InvalidNumber {
            input: input.to_string(),
        })
}

/// Parse an RFC 3339 timestamp, keeping its UTC offset.
pub fn parse_timestamp(input: &str) -> ApplicationResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|_| ApplicationError::InvalidTimestamp {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn given_signed_numbers_when_parsing_then_accepts() {
        assert_eq!(parse_user_number("42").unwrap(), 42);
        assert_eq!(parse_user_number(" -7 ").unwrap(), -7);
        assert_eq!(parse_user_number("+3").unwrap(), 3);
    }

    #[test]
    fn given_non_numeric_input_when_parsing_then_invalid_number() {
        for input in ["", "abc", "12abc", "1.5", "99999999999999999999"] {
            let err = parse_user_number(input).unwrap_err();
            assert!(
                matches!(err, ApplicationError::InvalidNumber { .. }),
                "expected InvalidNumber for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn given_rfc3339_when_parsing_timestamp_then_keeps_wall_clock() {
        let ts = parse_timestamp("2024-03-15T10:20:10+08:00").unwrap();
        assert_eq!(ts.minute(), 20);
        assert_eq!(ts.second(), 10);
        assert_eq!(ts.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn given_garbage_when_parsing_timestamp_then_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(ApplicationError::InvalidTimestamp { .. })
        ));
    }
}
