//! Duration and timestamp rendering for reports.
//!
//! Durations render as `[NNNN days ][HH:]MM:SS`, omitting leading zero
//! components; timestamps render in the local timezone. Formatting is pure
//! and never fails.

use chrono::{DateTime, Duration, Local};

/// Width the duration column is padded to in session lines.
pub const DURATION_COL_WIDTH: usize = 20;

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a duration as `[NNNN days ][HH:]MM:SS`. Negative durations clamp
/// to zero.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let mins = (total % 3_600) / 60;
    let secs = total % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{:04} days ", days));
    }
    if hours > 0 {
        out.push_str(&format!("{:02}:", hours));
    }
    out.push_str(&format!("{:02}:{:02}", mins, secs));
    out
}

/// Renders a Unix-seconds stamp in the local timezone.
pub fn format_stamp(stamp: i64) -> String {
    match DateTime::from_timestamp(stamp, 0) {
        Some(utc) => utc.with_timezone(&Local).format(DATE_TIME_FORMAT).to_string(),
        None => format!("@{}", stamp),
    }
}

/// Short stop-time rendering for a session line: time-of-day only, unless
/// the session ran longer than 22 hours.
pub fn format_session_stop(stop: i64, duration: &Duration) -> String {
    let format = if duration.num_hours() > 22 {
        "%m-%d %H:%M:%S"
    } else {
        "%H:%M:%S"
    };
    match DateTime::from_timestamp(stop, 0) {
        Some(utc) => utc.with_timezone(&Local).format(format).to_string(),
        None => format!("@{}", stop),
    }
}

/// Local timezone marker printed in report headers, e.g. `+0200 CEST`.
pub fn tz_context() -> String {
    Local::now().format("%z %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_omit_leading_components() {
        assert_eq!(format_duration(&Duration::seconds(125)), "02:05");
        assert_eq!(format_duration(&Duration::seconds(59)), "00:59");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn hours_appear_once_nonzero() {
        assert_eq!(format_duration(&Duration::seconds(3_725)), "01:02:05");
        assert_eq!(format_duration(&Duration::hours(23)), "23:00:00");
    }

    #[test]
    fn days_get_their_own_prefix() {
        assert_eq!(
            format_duration(&Duration::seconds(2 * 86_400 + 3_600 + 61)),
            "0002 days 01:01:01"
        );
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_duration(&Duration::seconds(-30)), "00:00");
    }
}
