//! Time utilities: millisecond rounding and log timestamps.

use chrono::DateTime;

/// Round seconds to whole milliseconds.
pub fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Reformat an RFC 3339 timestamp for display; unparsable input is
/// returned unchanged.
pub fn display_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%F %T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
