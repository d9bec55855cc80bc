//! Display formatting for due dates and calendar headers.

use chrono::{NaiveDate, TimeZone};
use std::fmt::Display;

/// Formats a due timestamp as `Oct 18, 2026, 07:39 PM` in time zone `tz`.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn format_timestamp<Tz>(timestamp_ms: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%b %d, %Y, %I:%M %p").to_string())
}

/// Formats a calendar date as `October 18, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_timestamp};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn format_timestamp_uses_twelve_hour_clock() {
        assert_eq!(
            format_timestamp(1_792_352_340_000, &Utc).as_deref(),
            Some("Oct 18, 2026, 07:39 PM")
        );
        assert_eq!(
            format_timestamp(1_792_307_100_000, &Utc).as_deref(),
            Some("Oct 18, 2026, 07:05 AM")
        );
    }

    #[test]
    fn format_date_does_not_pad_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(format_date(date), "October 5, 2026");
    }

    #[test]
    fn format_timestamp_out_of_range_is_none() {
        assert_eq!(format_timestamp(i64::MIN, &Utc), None);
    }
}
