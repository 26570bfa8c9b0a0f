//! JSON envelope types for the task HTTP surface.
//!
//! # Responsibility
//! - Define the response shapes a route layer serializes, decoupled from
//!   any particular web framework.
//!
//! # Invariants
//! - Every envelope carries `"status": "success"`; failures never produce
//!   an envelope here, they surface as errors to the caller.
//! - Every read, including the single-record fetch, answers under a
//!   `tasks` list key; an absent id is an empty list, never an error.
//! - Mutations acknowledge with the affected `id`.

use serde::Serialize;

use crate::model::task::{Task, TaskId};

/// Fixed status discriminant of every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
}

/// Envelope for list, search and by-id reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListEnvelope {
    pub status: ApiStatus,
    pub tasks: Vec<Task>,
}

impl TaskListEnvelope {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            status: ApiStatus::Success,
            tasks,
        }
    }

    /// Wraps the single-record fetch; an absent record becomes an empty
    /// list under the same key.
    pub fn single(task: Option<Task>) -> Self {
        Self::new(task.into_iter().collect())
    }
}

/// Acknowledgement envelope for create, update and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskIdEnvelope {
    pub status: ApiStatus,
    pub id: TaskId,
}

impl TaskIdEnvelope {
    pub fn new(id: TaskId) -> Self {
        Self {
            status: ApiStatus::Success,
            id,
        }
    }
}
