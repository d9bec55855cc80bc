//! Core domain logic for the habit tracker.
//! This crate is the single source of truth for habit store invariants.

pub mod calendar;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use format::{format_date, format_timestamp};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::habit::{Habit, HabitId, HabitValidationError, NewHabit, Partition, Sentiment};
pub use repo::habit_repo::{HabitRepository, InMemoryHabitRepository, RepoError, RepoResult};
pub use service::habit_service::{HabitService, HabitServiceError, HabitServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
