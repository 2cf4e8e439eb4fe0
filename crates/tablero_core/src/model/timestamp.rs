//! ISO-8601 timestamp helpers shared by persisted records.
//!
//! Writes use UTC with millisecond precision (`2024-05-01T09:30:00.123Z`).
//! Reads accept any RFC 3339 timestamp and normalize it to UTC.

use chrono::{DateTime, SecondsFormat, Utc};

/// Drops sub-millisecond precision so values survive a wire round-trip.
pub fn truncate_to_millis(value: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or(value)
}

/// Rounds up to the next whole millisecond, so the result is never earlier
/// than `value`.
pub fn ceil_to_millis(value: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = truncate_to_millis(value);
    if truncated < value {
        truncated + chrono::Duration::milliseconds(1)
    } else {
        truncated
    }
}

/// Formats a timestamp in the persisted ISO-8601 shape.
pub fn format_iso_millis(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `created_at` fields.
pub mod iso_millis {
    use super::format_iso_millis;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_iso_millis(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| serde::de::Error::custom(format!("invalid created_at `{raw}`: {err}")))
    }
}
