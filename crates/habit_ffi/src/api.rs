//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the habit store to Dart via FRB as an opaque session handle.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The store lives inside `HabitSession`; the UI root owns one handle and
//!   passes it to each screen. There is no process-global store.
//! - Stale IDs return `ok = false` envelopes, never errors thrown into Dart.

use chrono::{Local, NaiveDate};
use habit_core::{
    core_version as core_version_inner, format_timestamp, init_logging as init_logging_inner,
    ping as ping_inner, Habit, HabitService, InMemoryHabitRepository, NewHabit, Partition,
    Sentiment,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Habit row rendered by list, notes and calendar screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    pub id: u64,
    pub name: String,
    pub notes: String,
    /// Due time in epoch milliseconds.
    pub due_epoch_ms: Option<i64>,
    /// Wire sentiment (`positive|negative|neutral`).
    pub sentiment: String,
    /// Card label (`Good habit|Bad habit|Habit`).
    pub sentiment_label: String,
    /// Due time formatted in the device time zone.
    pub due_display: Option<String>,
    pub completed: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected habit ID, when known.
    pub habit_id: Option<u64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl HabitActionResponse {
    fn success(message: impl Into<String>, habit_id: u64) -> Self {
        Self {
            ok: true,
            habit_id: Some(habit_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            habit_id: None,
            message: message.into(),
        }
    }
}

/// Session-scoped habit store handle.
///
/// The mutex only guards against a multi-threaded FRB executor; all calls
/// are expected from the UI isolate.
#[flutter_rust_bridge::frb(opaque)]
pub struct HabitSession {
    service: Mutex<HabitService<InMemoryHabitRepository>>,
}

impl Default for HabitSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitSession {
    /// Creates an empty store for one app session.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            service: Mutex::new(HabitService::in_memory()),
        }
    }

    /// Creates a habit from add-dialog input.
    ///
    /// `sentiment` is `positive|negative|neutral`; empty means unset and is
    /// rejected along with blank names.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_habit(
        &self,
        name: String,
        sentiment: String,
        due_epoch_ms: Option<i64>,
    ) -> HabitActionResponse {
        let parsed = if sentiment.trim().is_empty() {
            None
        } else {
            match Sentiment::parse(&sentiment) {
                Some(value) => Some(value),
                None => {
                    return HabitActionResponse::failure(format!(
                        "add_habit failed: unknown sentiment `{}`",
                        sentiment.trim()
                    ))
                }
            }
        };
        let input = NewHabit {
            name,
            sentiment: parsed,
            due_timestamp: due_epoch_ms,
        };
        match self.lock().add_habit(input) {
            Ok(habit) => HabitActionResponse::success("Habit added.", habit.id),
            Err(err) => HabitActionResponse::failure(format!("add_habit failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn complete(&self, id: u64) -> HabitActionResponse {
        match self.lock().complete(id) {
            Ok(()) => HabitActionResponse::success("Habit completed.", id),
            Err(err) => HabitActionResponse::failure(format!("complete failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn uncomplete(&self, id: u64) -> HabitActionResponse {
        match self.lock().uncomplete(id) {
            Ok(()) => HabitActionResponse::success("Habit restored.", id),
            Err(err) => HabitActionResponse::failure(format!("uncomplete failed: {err}")),
        }
    }

    /// Saves notes when the notes screen is left.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_notes(&self, id: u64, text: String) -> HabitActionResponse {
        match self.lock().set_notes(id, text) {
            Ok(()) => HabitActionResponse::success("Notes saved.", id),
            Err(err) => HabitActionResponse::failure(format!("set_notes failed: {err}")),
        }
    }

    /// Returns `None` for a vanished ID; the notes screen renders nothing.
    #[flutter_rust_bridge::frb(sync)]
    pub fn find(&self, id: u64) -> Option<HabitItem> {
        let service = self.lock();
        let partition = service.partition_of(id)?;
        service
            .find_by_id(id)
            .map(|habit| to_habit_item(habit, partition == Partition::Completed))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn list_active(&self) -> Vec<HabitItem> {
        self.lock()
            .list_active()
            .into_iter()
            .map(|habit| to_habit_item(habit, false))
            .collect()
    }

    /// Lists completed habits; `filter` is an optional sentiment wire name.
    ///
    /// Unknown filter values yield an empty list.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_completed(&self, filter: Option<String>) -> Vec<HabitItem> {
        let filter = match filter.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match Sentiment::parse(raw) {
                Some(sentiment) => Some(sentiment),
                None => {
                    warn!("event=list_completed module=ffi status=rejected reason=unknown_filter");
                    return Vec::new();
                }
            },
        };
        self.lock()
            .list_completed(filter)
            .into_iter()
            .map(|habit| to_habit_item(habit, true))
            .collect()
    }

    /// Habits due on the given local date, active first.
    #[flutter_rust_bridge::frb(sync)]
    pub fn due_on(&self, year: i32, month: u32, day: u32) -> Vec<HabitItem> {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Vec::new();
        };
        let service = self.lock();
        service
            .due_on(date, &Local)
            .into_iter()
            .map(|habit| {
                let completed = service.partition_of(habit.id) == Some(Partition::Completed);
                to_habit_item(habit, completed)
            })
            .collect()
    }

    /// Day numbers of the month that get a "has habits" marker.
    #[flutter_rust_bridge::frb(sync)]
    pub fn due_days_in_month(&self, year: i32, month: u32) -> Vec<u32> {
        self.lock().due_days_in_month(year, month, &Local)
    }

    fn lock(&self) -> MutexGuard<'_, HabitService<InMemoryHabitRepository>> {
        // Store mutations cannot leave partitions half-updated, so a poisoned
        // lock still holds consistent state.
        self.service
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn to_habit_item(habit: Habit, completed: bool) -> HabitItem {
    HabitItem {
        id: habit.id,
        due_display: habit
            .due_timestamp
            .and_then(|due| format_timestamp(due, &Local)),
        sentiment: habit.sentiment.as_str().to_string(),
        sentiment_label: habit.sentiment.label().to_string(),
        due_epoch_ms: habit.due_timestamp,
        name: habit.name,
        notes: habit.notes,
        completed,
    }
}
