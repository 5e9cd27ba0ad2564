//! Serde adapter for backend timestamps.
//!
//! The analysis service emits ISO-8601 date-times both with an offset
//! (`2026-03-01T10:00:00+00:00`) and without one (`2026-03-01T10:00:00.123456`).
//! Naive values are read as UTC. Serialization always produces RFC 3339.
//!
//! Use with `#[serde(with = "aat_core::timestamp")]` on `DateTime<Utc>` fields.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::CoreError;

/// Parse a backend timestamp, accepting RFC 3339 or a naive date-time.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimestamp`] if neither form matches.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    trimmed
        .parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidTimestamp {
            value: raw.to_string(),
        })
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
