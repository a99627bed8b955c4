//! Lenient date parsing for REST payloads.
//!
//! The backend emits due and payment dates either as plain `YYYY-MM-DD`
//! strings or as full timestamps. Every aggregation in AgencyHub compares
//! calendar dates only, so timestamps are truncated to the date they name
//! in their own offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a calendar date from a date or timestamp string.
///
/// Accepts `2026-03-05`, `2026-03-05T14:30:00Z`, `2026-03-05T14:30:00-03:00`
/// and offset-less `2026-03-05T14:30:00.000`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
}

/// Serde adapter for `Option<NaiveDate>` fields.
///
/// Use with `#[serde(default, with = "agencyhub_shared::types::date::optional")]`.
/// Null, missing, and empty-string values all deserialize to `None`.
pub mod optional {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes as `YYYY-MM-DD` or null.
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes from a date string, a timestamp string, or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_date(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
