//! Habit repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the authoritative active/completed partitions for one app session.
//! - Allocate habit IDs.
//!
//! # Invariants
//! - A record lives in exactly one partition at a time.
//! - IDs come from a monotonic counter and are never reused.
//! - Both partitions keep insertion order; moves append to the target end.
//! - Write paths must call `NewHabit::validate()` before mutating state.

use crate::model::habit::{Habit, HabitId, HabitValidationError, NewHabit, Partition, Sentiment};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for habit store operations.
///
/// `NotFound` is a stale-reference result and is always recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(HabitValidationError),
    NotFound(HabitId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the habit store.
pub trait HabitRepository {
    fn insert_active(&mut self, input: NewHabit) -> RepoResult<Habit>;
    fn complete(&mut self, id: HabitId) -> RepoResult<()>;
    fn uncomplete(&mut self, id: HabitId) -> RepoResult<()>;
    fn set_notes(&mut self, id: HabitId, notes: &str) -> RepoResult<()>;
    fn find_by_id(&self, id: HabitId) -> Option<(Habit, Partition)>;
    fn list_active(&self) -> Vec<Habit>;
    fn list_completed(&self, filter: Option<Sentiment>) -> Vec<Habit>;
}

/// Session-lifetime store backed by two ordered vectors.
#[derive(Debug, Default)]
pub struct InMemoryHabitRepository {
    active: Vec<Habit>,
    completed: Vec<Habit>,
    last_id: HabitId,
}

impl InMemoryHabitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across both partitions.
    pub fn len(&self) -> usize {
        self.active.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(&mut self) -> HabitId {
        self.last_id += 1;
        self.last_id
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut Vec<Habit> {
        match partition {
            Partition::Active => &mut self.active,
            Partition::Completed => &mut self.completed,
        }
    }

    fn move_between(&mut self, id: HabitId, from: Partition, to: Partition) -> RepoResult<()> {
        let source = self.partition_mut(from);
        let index = source
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(RepoError::NotFound(id))?;
        let habit = source.remove(index);
        self.partition_mut(to).push(habit);
        Ok(())
    }
}

impl HabitRepository for InMemoryHabitRepository {
    fn insert_active(&mut self, input: NewHabit) -> RepoResult<Habit> {
        input.validate()?;

        let habit = input.into_habit(self.next_id())?;
        self.active.push(habit.clone());
        Ok(habit)
    }

    fn complete(&mut self, id: HabitId) -> RepoResult<()> {
        self.move_between(id, Partition::Active, Partition::Completed)
    }

    fn uncomplete(&mut self, id: HabitId) -> RepoResult<()> {
        self.move_between(id, Partition::Completed, Partition::Active)
    }

    fn set_notes(&mut self, id: HabitId, notes: &str) -> RepoResult<()> {
        let habit = self
            .active
            .iter_mut()
            .chain(self.completed.iter_mut())
            .find(|habit| habit.id == id)
            .ok_or(RepoError::NotFound(id))?;
        habit.notes = notes.to_string();
        Ok(())
    }

    fn find_by_id(&self, id: HabitId) -> Option<(Habit, Partition)> {
        if let Some(habit) = self.active.iter().find(|habit| habit.id == id) {
            return Some((habit.clone(), Partition::Active));
        }
        self.completed
            .iter()
            .find(|habit| habit.id == id)
            .map(|habit| (habit.clone(), Partition::Completed))
    }

    fn list_active(&self) -> Vec<Habit> {
        self.active.clone()
    }

    fn list_completed(&self, filter: Option<Sentiment>) -> Vec<Habit> {
        self.completed
            .iter()
            .filter(|habit| filter.map_or(true, |sentiment| habit.sentiment == sentiment))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{HabitRepository, InMemoryHabitRepository, RepoError};
    use crate::model::habit::{HabitValidationError, NewHabit, Partition, Sentiment};

    #[test]
    fn rejected_input_does_not_consume_an_id() {
        let mut repo = InMemoryHabitRepository::new();
        let err = repo
            .insert_active(NewHabit::new("   ", Sentiment::Positive))
            .unwrap_err();
        assert_eq!(err, RepoError::Validation(HabitValidationError::BlankName));

        let created = repo
            .insert_active(NewHabit::new("Run", Sentiment::Positive))
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn move_appends_to_end_of_target_partition() {
        let mut repo = InMemoryHabitRepository::new();
        let first = repo
            .insert_active(NewHabit::new("a", Sentiment::Neutral))
            .unwrap();
        let second = repo
            .insert_active(NewHabit::new("b", Sentiment::Neutral))
            .unwrap();

        repo.complete(first.id).unwrap();
        repo.uncomplete(first.id).unwrap();

        let ids: Vec<_> = repo.list_active().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(
            repo.find_by_id(first.id).map(|(_, partition)| partition),
            Some(Partition::Active)
        );
    }

    #[test]
    fn complete_twice_reports_not_found_without_duplication() {
        let mut repo = InMemoryHabitRepository::new();
        let habit = repo
            .insert_active(NewHabit::new("a", Sentiment::Negative))
            .unwrap();

        repo.complete(habit.id).unwrap();
        assert_eq!(repo.complete(habit.id), Err(RepoError::NotFound(habit.id)));
        assert_eq!(repo.list_completed(None).len(), 1);
        assert!(repo.list_active().is_empty());
    }
}
