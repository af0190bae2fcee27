use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format of the dedicated date column in the form export.
const SIMPLE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Timestamp interpretations, tried in order. Month-first comes before
/// day-first, so an ambiguous value like "9/8/2025 0:00:00" reads as
/// September 8th; "22/8/2025 00:00:00" only fits day-first and falls
/// through to it.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only fallbacks for timestamp values; time-of-day defaults to midnight.
const DATE_ONLY_FORMATS: &[&str] = &["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Parse the simple date column, `MM/DD/YYYY` at midnight.
pub fn parse_simple_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value.trim(), SIMPLE_DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parse a timestamp value against each candidate format; the first
/// interpretation whose fields are in calendar range wins.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in DATE_ONLY_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }

    None
}
