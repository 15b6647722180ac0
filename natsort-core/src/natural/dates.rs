//! Date detection
//!
//! Text that reads as a calendar date is ordered chronologically. Accepted
//! forms, case-insensitive:
//!
//!     2020-01-01T10:00:00Z            RFC 3339 (also with a space or offset)
//!     Tue, 1 Jul 2003 10:52:37 +0200  RFC 2822
//!     2020-01-01T10:00[:00[.000]]     ISO date-time without offset (UTC)
//!     2020-01-01, 2020/01/01          ISO-like dates
//!     01/31/2020                      US dates
//!     Jan 5, 2020 / 5 January 2020    named months
//!
//! Dates without an offset are taken as UTC, so results do not depend on the
//! host time zone. Forms without an offset must carry a four-digit year;
//! bare numbers never read as dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static FOUR_DIGIT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9])[0-9]{4}(?:[^0-9]|$)").unwrap());

const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Milliseconds since the Unix epoch, if the text reads as a date.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    // Format literals such as the `T` separator match case-sensitively.
    let text = text.to_ascii_uppercase();

    if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&text) {
        return Some(dt.timestamp_millis());
    }
    if let Some(dt) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&text, format).ok())
    {
        return Some(dt.timestamp_millis());
    }
    if !FOUR_DIGIT_YEAR.is_match(&text) {
        return None;
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_iso_date_is_utc_midnight() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(DAY_MS));
        assert_eq!(parse_timestamp("2020-01-01"), Some(1_577_836_800_000));
    }

    #[test]
    fn test_epoch_is_a_valid_date() {
        assert_eq!(parse_timestamp("1970-01-01"), Some(0));
    }

    #[rstest]
    #[case("2020-01-01t00:00:00z")]
    #[case("2020-01-01 00:00:00+00:00")]
    #[case("2020-01-01t00:00")]
    #[case("2020-01-01t00:00:00.000")]
    #[case("2020/01/01")]
    #[case("01/01/2020")]
    #[case("jan 1, 2020")]
    #[case("january 1, 2020")]
    #[case("1 jan 2020")]
    #[case("wed, 1 jan 2020 00:00:00 +0000")]
    #[case("  2020-01-01  ")]
    fn test_same_instant_in_every_form(#[case] text: &str) {
        assert_eq!(parse_timestamp(text), Some(1_577_836_800_000), "{text}");
    }

    #[test]
    fn test_offsets_are_applied() {
        let utc = parse_timestamp("2020-01-01t12:00:00z");
        let plus_two = parse_timestamp("2020-01-01t14:00:00+02:00");
        assert_eq!(utc, plus_two);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("2020")]
    #[case("1")]
    #[case("1.2")]
    #[case("1-2-3")]
    #[case("file9")]
    #[case("v1.2")]
    #[case("2020-13-01")]
    #[case("jan")]
    fn test_not_dates(#[case] text: &str) {
        assert_eq!(parse_timestamp(text), None, "{text}");
    }
}
