//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical habit record rendered by list, notes and calendar views.
//! - Validate add-dialog input before a record is created.
//!
//! # Invariants
//! - `id` is unique across active and completed partitions and never reused.
//! - `name` is never blank; this is enforced at creation time only.
//! - `sentiment` is fixed once the record exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for a habit record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type HabitId = u64;

/// Classification of a habit as good, bad or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Good habit the user performed (e.g. exercise).
    Positive,
    /// Bad habit the user performed (e.g. smoking).
    Negative,
    /// Plain checklist item.
    Neutral,
}

impl Sentiment {
    /// Card label shown next to the habit name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Good habit",
            Self::Negative => "Bad habit",
            Self::Neutral => "Habit",
        }
    }

    /// Stable lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Parses a wire name, case-insensitive and whitespace tolerant.
    ///
    /// Returns `None` for unknown values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which store partition a record currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Active,
    Completed,
}

/// Validation failures for add-dialog input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// Name is empty or whitespace-only.
    BlankName,
    /// No sentiment was chosen.
    MissingSentiment,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "habit name must not be blank"),
            Self::MissingSentiment => write!(f, "habit sentiment must be selected"),
        }
    }
}

impl Error for HabitValidationError {}

/// Canonical habit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned unique ID.
    pub id: HabitId,
    /// Display name as entered by the user.
    pub name: String,
    /// Free-text notes, editable in either partition.
    pub notes: String,
    /// Unix epoch milliseconds. `None` means no due date.
    pub due_timestamp: Option<i64>,
    pub sentiment: Sentiment,
}

impl Habit {
    /// Whether this record has a due date set.
    pub fn has_due_date(&self) -> bool {
        self.due_timestamp.is_some()
    }

    /// Whether the notes field carries visible text.
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

/// Raw input collected by the add-habit dialog.
///
/// `sentiment` stays optional here because the dialog can be confirmed
/// before a chip is selected; validation rejects that case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewHabit {
    pub name: String,
    pub sentiment: Option<Sentiment>,
    pub due_timestamp: Option<i64>,
}

impl NewHabit {
    pub fn new(name: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            name: name.into(),
            sentiment: Some(sentiment),
            due_timestamp: None,
        }
    }

    /// Sets the optional due timestamp (epoch milliseconds).
    pub fn due_at(mut self, due_timestamp: i64) -> Self {
        self.due_timestamp = Some(due_timestamp);
        self
    }

    /// Validates input and returns the chosen sentiment.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty after trim.
    /// - `MissingSentiment` when no sentiment was chosen.
    pub fn validate(&self) -> Result<Sentiment, HabitValidationError> {
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::BlankName);
        }
        self.sentiment.ok_or(HabitValidationError::MissingSentiment)
    }

    /// Builds the stored record using a store-allocated ID.
    pub(crate) fn into_habit(self, id: HabitId) -> Result<Habit, HabitValidationError> {
        let sentiment = self.validate()?;
        Ok(Habit {
            id,
            name: self.name,
            notes: String::new(),
            due_timestamp: self.due_timestamp,
            sentiment,
        })
    }
}
