//! Timestamp handling for flight records.
//!
//! The flight table carries naive local timestamps in ISO-8601 form without
//! an offset (`2021-09-01T10:00:00`). No timezone conversion is attempted:
//! connection gaps and travel times are plain wall-clock differences.

use chrono::{Duration, NaiveDateTime};

/// Timestamp layout used by the flight table and by serialized results.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use trip_finder::domain::{format_timestamp, parse_timestamp};
///
/// let ts = parse_timestamp("2021-09-01T23:20:00").unwrap();
/// assert_eq!(format_timestamp(&ts), "2021-09-01T23:20:00");
///
/// assert!(parse_timestamp("2021-09-01 23:20").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|_| TimeError {
        input: s.to_string(),
    })
}

/// Format a timestamp in [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a travel time as `H:MM:SS`, with a `N day(s), ` prefix once it
/// spans whole days.
///
/// Negative durations never come out of a valid itinerary; they are
/// rendered with a leading minus on the magnitude.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use trip_finder::domain::format_travel_time;
///
/// assert_eq!(format_travel_time(Duration::minutes(75)), "1:15:00");
/// assert_eq!(format_travel_time(Duration::hours(26)), "1 day, 2:00:00");
/// assert_eq!(format_travel_time(Duration::hours(48)), "2 days, 0:00:00");
/// ```
pub fn format_travel_time(duration: Duration) -> String {
    let total = duration.num_seconds();
    if total < 0 {
        return format!("-{}", format_travel_time(Duration::seconds(-total)));
    }

    let days = total / 86_400;
    let rem = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}
