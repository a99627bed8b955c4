//! Urgency types.

use serde::{Deserialize, Serialize};

/// How close an open task is to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Due before today.
    Overdue,
    /// Due today.
    DueToday,
    /// Due after today.
    DueSoon,
    /// No due date.
    NoDeadline,
}

impl Urgency {
    /// Returns true for the classes shown in the "urgent" summary.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Overdue | Self::DueToday)
    }
}

/// Counts of open tasks per urgency class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencySummary {
    /// Tasks not completed.
    pub open: usize,
    /// Open tasks past due.
    pub overdue: usize,
    /// Open tasks due today.
    pub due_today: usize,
    /// Open tasks due later.
    pub due_soon: usize,
    /// Open tasks without a due date.
    pub no_deadline: usize,
}
