//! Deadline Handling
//!
//! Parsing and formatting of task deadlines: server timestamps, the
//! `datetime-local` form input and the row label.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::ValidationError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const LABEL_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Parse a timestamp from the API. Naive timestamps are taken as UTC.
pub fn parse_server(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Wire form sent to the API: UTC, millisecond precision, `Z` suffix.
pub fn to_wire(deadline: &DateTime<Utc>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert a `datetime-local` value, read in `tz`, to UTC.
///
/// An empty input means "no deadline".
pub fn parse_input<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let naive = INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or(ValidationError::InvalidDeadline)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .ok_or(ValidationError::InvalidDeadline)
}

/// Inverse of [`parse_input`], for pre-filling the edit form.
pub fn to_input<Tz>(deadline: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    deadline.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// Row label, e.g. `31.12.2024, 18:30:00`.
pub fn label<Tz>(deadline: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    deadline.with_timezone(tz).format(LABEL_FORMAT).to_string()
}

/// Serde adapter for optional deadlines.
pub mod lenient {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::to_wire(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Unreadable values are logged and read as `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => {
                let parsed = super::parse_server(&raw);
                if parsed.is_none() {
                    tracing::warn!(deadline = %raw, "ignoring unreadable deadline");
                }
                Ok(parsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_server_variants() {
        let expected = utc("2024-05-01T12:30:00Z");
        assert_eq!(parse_server("2024-05-01T12:30:00Z"), Some(expected));
        assert_eq!(parse_server("2024-05-01T15:30:00+03:00"), Some(expected));
        assert_eq!(parse_server("2024-05-01T12:30:00"), Some(expected));
        assert_eq!(parse_server("2024-05-01 12:30:00.000"), Some(expected));
        assert_eq!(parse_server("2024-05-01T12:30"), Some(expected));
        assert_eq!(parse_server("not a date"), None);
    }

    #[test]
    fn test_to_wire_matches_iso_string() {
        assert_eq!(to_wire(&utc("2024-05-01T12:30:00Z")), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_parse_input_uses_local_offset() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        let parsed = parse_input("2024-05-01T15:30", &msk).unwrap();
        assert_eq!(parsed, Some(utc("2024-05-01T12:30:00Z")));
    }

    #[test]
    fn test_parse_input_empty_and_invalid() {
        assert_eq!(parse_input("", &Utc), Ok(None));
        assert_eq!(parse_input("   ", &Utc), Ok(None));
        assert_eq!(parse_input("tomorrow", &Utc), Err(ValidationError::InvalidDeadline));
    }

    #[test]
    fn test_input_round_trip_through_offset() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        let deadline = utc("2024-05-01T12:30:00Z");
        assert_eq!(to_input(&deadline, &msk), "2024-05-01T15:30");
    }

    #[test]
    fn test_label() {
        assert_eq!(label(&utc("2024-12-31T18:30:05Z"), &Utc), "31.12.2024, 18:30:05");
    }

    #[test]
    fn test_lenient_deserialize_drops_garbage() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "lenient")]
            deadline: Option<DateTime<Utc>>,
        }
        let ok: Wrapper = serde_json::from_str(r#"{"deadline":"2024-05-01T12:30:00"}"#).unwrap();
        assert_eq!(ok.deadline, Some(utc("2024-05-01T12:30:00Z")));
        let garbage: Wrapper = serde_json::from_str(r#"{"deadline":"soon"}"#).unwrap();
        assert_eq!(garbage.deadline, None);
    }
}
