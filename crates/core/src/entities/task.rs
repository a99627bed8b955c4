//! Tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::TaskId;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
    /// Any status this version does not know.
    #[serde(other)]
    Other,
}

/// A task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task ID.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Due date.
    #[serde(default, with = "agencyhub_shared::types::date::optional")]
    pub due_date: Option<NaiveDate>,
    /// Priority label (`low`, `medium`, `high`).
    #[serde(default)]
    pub priority: Option<String>,
}

impl Task {
    /// Returns true if the task is done.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
