//! Timestamp helpers for item records.
//!
//! Timestamps are kept at millisecond precision so the in-memory value and
//! its ISO-8601 wire form (`2026-10-19T08:09:10.123Z`) always agree.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current wall-clock time truncated to milliseconds.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats a timestamp as ISO-8601 UTC with millisecond precision.
#[must_use]
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde `with` adapter writing [`format`] output.
///
/// # Errors
/// Propagates serializer errors.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

/// Serde `with` adapter accepting any RFC 3339 string.
///
/// # Errors
/// Fails when the input is not a string or not valid RFC 3339.
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
    use chrono::{TimeZone, Timelike};

    #[test]
    fn format_uses_millis_and_z_suffix() {
        let ts = match Utc.with_ymd_and_hms(2026, 10, 19, 8, 9, 10).single() {
            Some(t) => t,
            None => panic!("valid date"),
        };
        assert_eq!(format(&ts), "2026-10-19T08:09:10.000Z");
    }

    #[test]
    fn now_has_no_sub_millisecond_component() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000_000, 0, "now() must be truncated to ms");
    }
}
