//! Formatting utilities for timestamps returned by the API.
//!
//! Clients parse `created_at`/`updated_at` as plain strings, so every payload
//! goes through the same formatter.

use chrono::{DateTime, Utc};

/// Layout used for every timestamp in a JSON response.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Formats a UTC datetime with microsecond precision and no zone suffix.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use chirpy_api::utils::format_timestamp;
///
/// let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00.123456789Z")
///     .unwrap()
///     .with_timezone(&Utc);
/// assert_eq!(format_timestamp(&dt), "2024-01-15 10:30:00.123456");
/// ```
#[inline]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_seconds_are_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 7, 4, 5, 6).unwrap();
        assert_eq!(format_timestamp(&dt), "2025-03-07 04:05:06.000000");
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }
}
