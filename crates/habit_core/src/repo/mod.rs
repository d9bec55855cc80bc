//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep partition bookkeeping out of service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewHabit::validate()` before mutation.
//! - Repository APIs return semantic `NotFound` errors for stale IDs.

pub mod habit_repo;
