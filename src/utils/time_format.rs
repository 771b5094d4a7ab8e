use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::config::Config;
use crate::models::prices::PriceRecord;

/// What `format_date_time` renders for a record starting at local midnight.
pub const MIDNIGHT_LABEL: &str = "0";

/// Formats a calendar date the way the fi-FI locale does (`7.12.2025`).
pub fn format_date_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%-d.%-m.%Y").to_string()
}

/// Formats a time of day the way the fi-FI locale does, minus zero groups.
///
/// `08:30:00` renders as `8.30`, `10:00:00` as `10` and midnight as `0`.
pub fn format_date_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    strip_zero_groups(&timestamp.format("%-H.%M.%S").to_string())
}

/// Removes every literal `.00` from a formatted time.
///
/// This is textual, not numeric: `10.00.30` becomes `10.30` even though the
/// minutes were the zero group, not the seconds.
pub fn strip_zero_groups(formatted: &str) -> String {
    formatted.replace(".00", "")
}

/// True when `now` lies strictly inside the record's validity window.
pub fn is_now_at<Tz: TimeZone>(record: &PriceRecord, now: &DateTime<Tz>) -> bool {
    let now = now.with_timezone(&Utc);
    record.start < now && record.end > now
}

/// Renders a duration as `HH:MM:SS`. Hours do not wrap at 24.
pub fn format_seconds(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Whether any record belongs to a later calendar day than `now` and starts
/// after next-day prices are published.
///
/// Days are compared by date in `now`'s time zone, not by elapsed time.
pub fn is_next_day_visible<Tz: TimeZone>(records: &[PriceRecord], now: &DateTime<Tz>) -> bool {
    let zone = now.timezone();
    let today = now.date_naive();

    records.iter().any(|record| {
        let start = record.start.with_timezone(&zone);
        is_later_day(start.year(), start.month(), start.day(), today)
            && start.hour() >= Config::NEXT_DAY_PUBLISH_HOUR
    })
}

fn is_later_day(year: i32, month: u32, day: u32, today: chrono::NaiveDate) -> bool {
    (year, month, day) > (today.year(), today.month(), today.day())
}
