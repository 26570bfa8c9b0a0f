//! Task record for the to-do store.
//!
//! # Responsibility
//! - Define the task shape shared by the repository and the API envelopes.
//! - Keep the integer-coded `completed` flag inside {0, 1} at the edges.
//!
//! # Invariants
//! - `creation_datetime` is stamped once at construction and never rewritten.
//! - `completed` maps to exactly 0 or 1 in the store.

use serde::Serialize;

use crate::model::{now_epoch_ms, require_text, InvalidValue};

/// Store-assigned surrogate key for a task row.
pub type TaskId = i64;

/// Converts the external 0/1 encoding of a completion flag.
///
/// Any other integer is rejected before the value reaches a record or a
/// statement parameter.
pub fn completed_from_flag(value: i64) -> Result<bool, InvalidValue> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(InvalidValue::FlagOutOfRange {
            field: "completed",
            value: other,
        }),
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// `None` until the store assigns an id on insert.
    pub id: Option<TaskId>,
    /// Free-form description; must not be blank when persisted.
    pub description: String,
    /// Unix epoch milliseconds, stamped when the task is created.
    pub creation_datetime: i64,
    /// Stored as 0/1 in the `tasks` table.
    pub completed: bool,
}

impl Task {
    /// Creates a fresh, not-yet-persisted task stamped with the current time.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            creation_datetime: now_epoch_ms(),
            completed: false,
        }
    }

    /// Reconstructs a persisted task from store-owned values.
    pub fn with_id(
        id: TaskId,
        description: impl Into<String>,
        creation_datetime: i64,
        completed: bool,
    ) -> Self {
        Self {
            id: Some(id),
            description: description.into(),
            creation_datetime,
            completed,
        }
    }

    /// Applies an integer-coded completion flag, rejecting values outside {0, 1}.
    pub fn set_completed_flag(&mut self, value: i64) -> Result<(), InvalidValue> {
        self.completed = completed_from_flag(value)?;
        Ok(())
    }

    /// The 0/1 encoding used by the store and the JSON surface.
    pub fn completed_flag(&self) -> i64 {
        i64::from(self.completed)
    }

    /// Checks required fields before an insert.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        require_text("description", &self.description)
    }
}
