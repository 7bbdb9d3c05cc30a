//! Time-based identifiers and ISO-8601 timestamp helpers.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Builds an id of the form `<prefix>-<unix millis>`.
///
/// When that id is already taken (two creations inside the same
/// millisecond) a `-<n>` suffix is appended until `taken` returns false.
pub fn time_based_id(prefix: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{}-{}", prefix, now.timestamp_millis());
    if !taken(&base) {
        return base;
    }

    let mut n = 1u32;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Formats an instant the way the stored messages carry it
/// (`2025-03-19T14:30:00.000Z`).
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored timestamp.
///
/// Accepts RFC 3339 (with offset) and the offset-less local form used by
/// the seed data (`2025-03-19T14:30:00`), which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
