//! Habit use-case service.
//!
//! # Responsibility
//! - Provide the add/complete/uncomplete/notes entry points the UI invokes.
//! - Derive list and calendar views from repository snapshots.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Stale IDs surface as `HabitNotFound`, never as a panic.
//! - Log lines carry IDs and counts only, never names or notes.

use crate::calendar;
use crate::model::habit::{Habit, HabitId, HabitValidationError, NewHabit, Partition, Sentiment};
use crate::repo::habit_repo::{HabitRepository, InMemoryHabitRepository, RepoError};
use chrono::{NaiveDate, TimeZone};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from habit service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitServiceError {
    /// Add-dialog input was rejected; no record was created.
    InvalidInput(HabitValidationError),
    /// Target habit is not in the expected partition.
    HabitNotFound(HabitId),
}

impl Display for HabitServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid habit input: {err}"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
        }
    }
}

impl Error for HabitServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::HabitNotFound(_) => None,
        }
    }
}

impl From<RepoError> for HabitServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidInput(err),
            RepoError::NotFound(id) => Self::HabitNotFound(id),
        }
    }
}

pub type HabitServiceResult<T> = Result<T, HabitServiceError>;

/// Habit store facade over repository implementations.
///
/// One instance lives for the whole app session and is handed to each
/// screen by the UI root.
pub struct HabitService<R: HabitRepository> {
    repo: R,
}

impl HabitService<InMemoryHabitRepository> {
    /// Creates a service over a fresh, empty session store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryHabitRepository::new())
    }
}

impl<R: HabitRepository> HabitService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a habit at the end of the active partition.
    ///
    /// # Contract
    /// - Rejects blank names and missing sentiment without side effects.
    /// - Returns the stored record with its freshly allocated ID.
    pub fn add_habit(&mut self, input: NewHabit) -> HabitServiceResult<Habit> {
        match self.repo.insert_active(input) {
            Ok(habit) => {
                info!(
                    "event=habit_add module=service status=ok habit_id={} sentiment={} has_due={}",
                    habit.id,
                    habit.sentiment,
                    habit.has_due_date()
                );
                Ok(habit)
            }
            Err(err) => {
                warn!("event=habit_add module=service status=rejected reason=\"{err}\"");
                Err(err.into())
            }
        }
    }

    /// Moves an active habit to the completed partition.
    pub fn complete(&mut self, id: HabitId) -> HabitServiceResult<()> {
        self.repo.complete(id)?;
        info!("event=habit_complete module=service status=ok habit_id={id}");
        Ok(())
    }

    /// Moves a completed habit back to the active partition.
    pub fn uncomplete(&mut self, id: HabitId) -> HabitServiceResult<()> {
        self.repo.uncomplete(id)?;
        info!("event=habit_uncomplete module=service status=ok habit_id={id}");
        Ok(())
    }

    /// Overwrites notes on a habit in either partition.
    pub fn set_notes(&mut self, id: HabitId, text: impl AsRef<str>) -> HabitServiceResult<()> {
        let text = text.as_ref();
        self.repo.set_notes(id, text)?;
        debug!(
            "event=habit_notes module=service status=ok habit_id={id} notes_chars={}",
            text.chars().count()
        );
        Ok(())
    }

    /// Looks a habit up in active, then completed.
    pub fn find_by_id(&self, id: HabitId) -> Option<Habit> {
        self.repo.find_by_id(id).map(|(habit, _)| habit)
    }

    /// Returns which partition currently holds `id`.
    pub fn partition_of(&self, id: HabitId) -> Option<Partition> {
        self.repo.find_by_id(id).map(|(_, partition)| partition)
    }

    /// Snapshot of the active partition in insertion order.
    pub fn list_active(&self) -> Vec<Habit> {
        self.repo.list_active()
    }

    /// Snapshot of the completed partition, optionally filtered by sentiment.
    pub fn list_completed(&self, filter: Option<Sentiment>) -> Vec<Habit> {
        self.repo.list_completed(filter)
    }

    /// Completed positive habits.
    pub fn good_habits(&self) -> Vec<Habit> {
        self.list_completed(Some(Sentiment::Positive))
    }

    /// Completed negative habits.
    pub fn bad_habits(&self) -> Vec<Habit> {
        self.list_completed(Some(Sentiment::Negative))
    }

    /// Active records followed by completed records.
    pub fn list_all(&self) -> Vec<Habit> {
        let mut all = self.list_active();
        all.extend(self.list_completed(None));
        all
    }

    /// Habits from both partitions due on `date` in time zone `tz`.
    pub fn due_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Vec<Habit> {
        calendar::habits_due_on(&self.list_all(), date, tz)
    }

    /// Day numbers of `year`/`month` that have at least one due habit.
    pub fn due_days_in_month<Tz: TimeZone>(&self, year: i32, month: u32, tz: &Tz) -> Vec<u32> {
        calendar::due_days_in_month(&self.list_all(), year, month, tz)
    }
}
