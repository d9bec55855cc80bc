//! Calendar projections over habit records.
//!
//! # Responsibility
//! - Resolve due timestamps to local calendar dates.
//! - Answer "which habits are due on this day" and "which days have habits".
//!
//! # Invariants
//! - Records without a due timestamp never appear in any calendar projection.
//! - Input order is preserved; callers pass active records before completed ones.
//! - Out-of-range timestamps are treated as having no date, never a panic.

use crate::model::habit::Habit;
use chrono::{Datelike, NaiveDate, TimeZone};
use std::collections::BTreeSet;

/// Resolves an epoch-millisecond timestamp to a local date in `tz`.
pub fn local_date<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.date_naive())
}

/// Returns whether `timestamp_ms` falls on `date` in time zone `tz`.
pub fn is_same_day<Tz: TimeZone>(timestamp_ms: i64, date: NaiveDate, tz: &Tz) -> bool {
    local_date(timestamp_ms, tz) == Some(date)
}

/// Returns records due on `date`, in input order.
pub fn habits_due_on<Tz: TimeZone>(habits: &[Habit], date: NaiveDate, tz: &Tz) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| {
            habit
                .due_timestamp
                .is_some_and(|due| is_same_day(due, date, tz))
        })
        .cloned()
        .collect()
}

/// Returns sorted, unique day-of-month numbers in `year`/`month` with at
/// least one due record.
pub fn due_days_in_month<Tz: TimeZone>(habits: &[Habit], year: i32, month: u32, tz: &Tz) -> Vec<u32> {
    habits
        .iter()
        .filter_map(|habit| habit.due_timestamp)
        .filter_map(|due| local_date(due, tz))
        .filter(|date| date.year() == year && date.month() == month)
        .map(|date| date.day())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Calendar header title, e.g. `October 2026`.
///
/// Returns `None` when `month` is outside `1..=12` or `year` is out of range.
pub fn month_title(year: i32, month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::{is_same_day, local_date, month_title};
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn local_date_respects_time_zone_offset() {
        // 2026-10-18T23:30:00Z
        let ts = 1_792_366_200_000;
        let utc_date = local_date(ts, &Utc).unwrap();
        let ahead = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(utc_date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert!(is_same_day(
            ts,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            &ahead
        ));
    }

    #[test]
    fn local_date_rejects_out_of_range_timestamp() {
        assert_eq!(local_date(i64::MAX, &Utc), None);
    }

    #[test]
    fn month_title_uses_full_month_name() {
        assert_eq!(month_title(2026, 10).as_deref(), Some("October 2026"));
        assert_eq!(month_title(2026, 13), None);
    }
}
