// src/infrastructure/clock.rs
use chrono::{DateTime, Local, TimeZone};

/// `yyyy-MM-dd HH:mm:ss a`: 24-hour clock followed by an AM/PM marker.
///
/// Zero-padded fields keep the strings sortable, which the store relies on
/// for its newest-first ordering.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %p";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time in store format
pub fn now() -> String {
    format_timestamp(&Local::now())
}
