use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparseable date string {0:?}")]
pub struct DateParseError(pub String);

/// Parse a phase timestamp string into epoch milliseconds.
///
/// Accepts the forms upstream query runners emit: RFC 3339 with an explicit
/// offset, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (or space-separated)
/// timestamp, or a bare `YYYY-MM-DD` date. Naive forms are interpreted as
/// UTC; a bare date is midnight UTC.
pub fn parse_epoch_ms(raw: &str) -> Result<i64, DateParseError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }

    Err(DateParseError(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_is_utc_midnight() {
        assert_eq!(parse_epoch_ms("2024-01-01"), Ok(1_704_067_200_000));
        assert_eq!(parse_epoch_ms("2024-02-05"), Ok(1_707_091_200_000));
    }

    #[test]
    fn rfc3339_with_offset() {
        assert_eq!(
            parse_epoch_ms("2024-01-01T00:00:00Z"),
            Ok(1_704_067_200_000)
        );
        assert_eq!(
            parse_epoch_ms("2024-01-01T02:00:00+02:00"),
            Ok(1_704_067_200_000)
        );
    }

    #[test]
    fn naive_datetime_is_utc() {
        assert_eq!(
            parse_epoch_ms("2024-01-01T12:00:00"),
            Ok(1_704_067_200_000 + 12 * 3600 * 1000)
        );
        assert_eq!(
            parse_epoch_ms("2024-01-01 00:00:00.500"),
            Ok(1_704_067_200_500)
        );
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        assert_eq!(parse_epoch_ms(" 2024-01-01 "), Ok(1_704_067_200_000));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_epoch_ms("next tuesday").unwrap_err();
        assert_eq!(err, DateParseError("next tuesday".into()));
        assert!(parse_epoch_ms("").is_err());
        assert!(parse_epoch_ms("2024-13-01").is_err());
    }
}
