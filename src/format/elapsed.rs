//! Elapsed-time labels ("2 minutes ago", "Just now").

use chrono::{DateTime, Utc};

use super::FormatError;

/// Period buckets in milliseconds, largest first.
///
/// The conversion constants are deliberately approximate: a month is 30
/// days and the year bucket is 365 30-day months, not a calendar year.
/// Callers depend on these exact thresholds.
const PERIODS: &[(&str, i64)] = &[
    ("year", 365 * 30 * 24 * 60 * 60 * 1000),
    ("month", 30 * 24 * 60 * 60 * 1000),
    ("week", 7 * 24 * 60 * 60 * 1000),
    ("day", 24 * 60 * 60 * 1000),
    ("hour", 60 * 60 * 1000),
    ("minute", 60 * 1000),
];

/// Label for the time elapsed between `instant` and a fixed `now`.
///
/// The first bucket no larger than the difference wins; the unit is
/// pluralized unless the count is exactly 1. Anything under one minute,
/// including instants in the future, is "Just now".
pub fn elapsed_time_label(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(instant).num_milliseconds();

    for (unit, millis) in PERIODS {
        if diff >= *millis {
            let count = diff / millis;
            let suffix = if count == 1 { "" } else { "s" };
            return format!("{} {}{} ago", count, unit, suffix);
        }
    }

    "Just now".to_string()
}

/// Label for the time elapsed since `instant`, measured against the wall clock.
pub fn elapsed_time_label_now(instant: DateTime<Utc>) -> String {
    elapsed_time_label(instant, Utc::now())
}

/// Parse an RFC 3339 timestamp (e.g. "2022-05-20T09:03:20.229Z").
pub fn parse_instant(timestamp: &str) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FormatError::invalid(format!("unparseable timestamp {:?}: {}", timestamp, e)))
}
