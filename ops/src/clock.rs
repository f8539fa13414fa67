//! Timestamp formatting for display strings.
//!
//! `ops` never reads the clock itself; `SystemTime::now` panics on
//! `wasm32-unknown-unknown`, so callers supply milliseconds since the epoch.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Render milliseconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Out-of-range timestamps render as `"-"`.
#[must_use]
pub fn format_timestamp_ms(ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp(ms.div_euclid(1000))
        .ok()
        .and_then(|dt| dt.format(DISPLAY_FORMAT).ok())
        .unwrap_or_else(|| "-".to_owned())
}
