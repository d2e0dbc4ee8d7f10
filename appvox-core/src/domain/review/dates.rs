// appvox-core/src/domain/review/dates.rs

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::domain::error::DomainError;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

#[allow(clippy::expect_used)]
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("literal pattern"));

/// Rewrite any accepted source date representation into `YYYY-MM-DD`.
///
/// Idempotent: an already-canonical input comes back unchanged (after being
/// checked as a real calendar date). Accepted inputs, tried in order:
/// canonical form, RFC 3339, `T`/space datetimes, epoch seconds or millis.
pub fn canonical_date(input: &str) -> Result<String, DomainError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DomainError::DateFormat(input.to_string()));
    }

    if CANONICAL_RE.is_match(s) {
        return NaiveDate::parse_from_str(s, CANONICAL_FORMAT)
            .map(|d| d.format(CANONICAL_FORMAT).to_string())
            .map_err(|_| DomainError::DateFormat(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive().format(CANONICAL_FORMAT).to_string());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date().format(CANONICAL_FORMAT).to_string());
        }
    }

    // Epoch: 13+ digits is millis, anything shorter is seconds (UTC).
    if s.chars().all(|c| c.is_ascii_digit())
        && let Ok(n) = s.parse::<i64>()
    {
        let secs = if s.len() >= 13 { n / 1000 } else { n };
        if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) {
            return Ok(dt.date_naive().format(CANONICAL_FORMAT).to_string());
        }
    }

    Err(DomainError::DateFormat(input.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_passthrough_is_idempotent() {
        let once = canonical_date("2023-03-05").unwrap();
        let twice = canonical_date(&once).unwrap();
        assert_eq!(once, "2023-03-05");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rfc3339_timestamp() {
        // March 5 2023, 14:30 UTC
        assert_eq!(canonical_date("2023-03-05T14:30:00Z").unwrap(), "2023-03-05");
        assert_eq!(
            canonical_date("2023-03-05T14:30:00+00:00").unwrap(),
            "2023-03-05"
        );
    }

    #[test]
    fn test_naive_datetime_forms() {
        assert_eq!(canonical_date("2023-03-05 14:30:00").unwrap(), "2023-03-05");
        assert_eq!(canonical_date("2023-03-05T14:30:00").unwrap(), "2023-03-05");
        assert_eq!(
            canonical_date("2023-03-05 14:30:00.250").unwrap(),
            "2023-03-05"
        );
    }

    #[test]
    fn test_epoch_seconds_and_millis() {
        // Both are March 5 2023, 14:30 UTC
        assert_eq!(canonical_date("1678026600").unwrap(), "2023-03-05");
        assert_eq!(canonical_date("1678026600000").unwrap(), "2023-03-05");
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        assert!(canonical_date("2023-02-30").is_err());
        assert!(canonical_date("2023-13-01").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(canonical_date("").is_err());
        assert!(canonical_date("yesterday").is_err());
        assert!(canonical_date("05/03/2023").is_err());
    }
}
