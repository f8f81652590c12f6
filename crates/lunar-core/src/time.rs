//! Unix timestamp formatting for tables and headers

use chrono::{DateTime, Local, TimeZone};

/// Which parts of a timestamp to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    Time,
    Date,
    #[default]
    DateTime,
}

impl TimestampFormat {
    fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Time => "%H:%M:%S",
            TimestampFormat::Date => "%Y-%m-%d",
            TimestampFormat::DateTime => "%Y-%m-%d %H:%M:%S",
        }
    }
}

/// Format a unix timestamp (seconds) in the local timezone.
///
/// Returns `N/A` for `0` and `Invalid Date` for out-of-range values.
pub fn format_timestamp(timestamp: i64, format: TimestampFormat) -> String {
    format_timestamp_in(timestamp, format, &Local)
}

/// Format a unix timestamp (seconds) in the given timezone
pub fn format_timestamp_in<Tz>(timestamp: i64, format: TimestampFormat, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamp == 0 {
        return "N/A".to_string();
    }
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format(format.pattern()).to_string(),
        None => "Invalid Date".to_string(),
    }
}
