//! Time utilities: elapsed-time formatting and the display formats used by
//! the form and the log file.

use chrono::NaiveDateTime;

/// Time of day as stored in the log ("HH:MM:SS").
pub const TIME_FMT: &str = "%H:%M:%S";

/// Calendar date as stored in the log ("YYYY-MM-DD").
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Full timestamp shown on the form ("YYYY-MM-DD HH:MM:SS").
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub const ZERO_DURATION: &str = "00:00:00";

/// Elapsed time between two instants as `HH:MM:SS`, truncated to whole
/// seconds. Hours are not wrapped at 24.
///
/// Returns `00:00:00` when either side is missing or `end` precedes `start`.
pub fn format_hms(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
    match (start, end) {
        (Some(s), Some(e)) if e >= s => format_seconds((e - s).num_seconds()),
        _ => ZERO_DURATION.to_string(),
    }
}

pub fn format_seconds(secs: i64) -> String {
    if secs <= 0 {
        return ZERO_DURATION.to_string();
    }
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

pub fn time_str(t: &NaiveDateTime) -> String {
    t.format(TIME_FMT).to_string()
}

pub fn date_str(t: &NaiveDateTime) -> String {
    t.format(DATE_FMT).to_string()
}

pub fn timestamp_str(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FMT).to_string()
}
