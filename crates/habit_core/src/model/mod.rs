//! Habit domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every habit is identified by a store-assigned `HabitId`.
//! - There is no delete; records only move between partitions.

pub mod habit;
