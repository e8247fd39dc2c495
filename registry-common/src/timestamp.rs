//! ISO-8601 timestamps with millisecond precision.
//!
//! Records are written as `2024-05-01T12:00:00.000Z`, the same shape browsers
//! produce with `Date.prototype.toISOString`, so existing store files and
//! clients keep parsing.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a timestamp as UTC with exactly three fractional digits and a `Z` suffix.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_deserialize_accepts_offsets() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(with = "crate::timestamp")]
            at: DateTime<Utc>,
        }

        let parsed: Wrapper =
            serde_json::from_str(r#"{"at": "2024-05-01T14:00:00.250+02:00"}"#).unwrap();
        assert_eq!(format(&parsed.at), "2024-05-01T12:00:00.250Z");
    }
}
