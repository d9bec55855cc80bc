use chrono::{FixedOffset, NaiveDate, Utc};
use habit_core::calendar::{habits_due_on, month_title};
use habit_core::{format_date, format_timestamp, HabitService, NewHabit, Sentiment};

// 2026-10-18T19:39:00Z
const OCT_18_EVENING: i64 = 1_792_352_340_000;
// 2026-10-05T09:00:00Z
const OCT_05_MORNING: i64 = 1_791_190_800_000;
// 2026-11-01T08:00:00Z
const NOV_01_MORNING: i64 = 1_793_520_000_000;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_service() -> HabitService<habit_core::InMemoryHabitRepository> {
    let mut service = HabitService::in_memory();
    service
        .add_habit(NewHabit::new("Run", Sentiment::Positive).due_at(OCT_18_EVENING))
        .unwrap();
    service
        .add_habit(NewHabit::new("Smoke", Sentiment::Negative).due_at(OCT_05_MORNING))
        .unwrap();
    service
        .add_habit(NewHabit::new("Read", Sentiment::Positive))
        .unwrap();
    service
        .add_habit(NewHabit::new("Swim", Sentiment::Positive).due_at(NOV_01_MORNING))
        .unwrap();
    service
        .add_habit(NewHabit::new("Stretch", Sentiment::Neutral).due_at(OCT_18_EVENING))
        .unwrap();
    service
}

#[test]
fn due_on_includes_both_partitions_in_list_order() {
    let mut service = seeded_service();
    service.complete(1).unwrap();

    let due = service.due_on(date(2026, 10, 18), &Utc);
    let names: Vec<_> = due.iter().map(|habit| habit.name.as_str()).collect();
    assert_eq!(names, vec!["Stretch", "Run"]);
}

#[test]
fn due_on_skips_habits_without_due_date() {
    let service = seeded_service();
    let all = service.list_all();
    assert!(habits_due_on(&all, date(2026, 10, 18), &Utc)
        .iter()
        .all(|habit| habit.due_timestamp.is_some()));
    assert!(service.due_on(date(2026, 10, 19), &Utc).is_empty());
}

#[test]
fn due_on_uses_local_date_of_time_zone() {
    let service = seeded_service();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

    let due = service.due_on(date(2026, 10, 19), &tokyo);
    let names: Vec<_> = due.iter().map(|habit| habit.name.as_str()).collect();
    assert_eq!(names, vec!["Run", "Stretch"]);
}

#[test]
fn due_days_in_month_are_sorted_and_unique() {
    let service = seeded_service();
    assert_eq!(service.due_days_in_month(2026, 10, &Utc), vec![5, 18]);
    assert_eq!(service.due_days_in_month(2026, 11, &Utc), vec![1]);
    assert!(service.due_days_in_month(2026, 12, &Utc).is_empty());
}

#[test]
fn calendar_text_helpers_render_expected_strings() {
    assert_eq!(month_title(2026, 11).as_deref(), Some("November 2026"));
    assert_eq!(format_date(date(2026, 10, 18)), "October 18, 2026");
    assert_eq!(
        format_timestamp(OCT_05_MORNING, &Utc).as_deref(),
        Some("Oct 05, 2026, 09:00 AM")
    );
}
