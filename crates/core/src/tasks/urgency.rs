//! Urgency classifier.

use chrono::NaiveDate;

use super::types::{Urgency, UrgencySummary};
use crate::entities::Task;

/// Maximum number of tasks in the urgent summary.
pub const URGENT_TASK_LIMIT: usize = 3;

/// Classifies tasks by due-date proximity.
///
/// Dates carry no time component; "today" is a calendar date.
pub struct UrgencyClassifier;

impl UrgencyClassifier {
    /// Classifies an open task. Completed tasks have no urgency.
    #[must_use]
    pub fn classify(task: &Task, today: NaiveDate) -> Option<Urgency> {
        if task.is_completed() {
            return None;
        }

        let urgency = match task.due_date {
            None => Urgency::NoDeadline,
            Some(due) if due < today => Urgency::Overdue,
            Some(due) if due == today => Urgency::DueToday,
            Some(_) => Urgency::DueSoon,
        };
        Some(urgency)
    }

    /// Overdue and due-today tasks, in input order, at most
    /// [`URGENT_TASK_LIMIT`].
    #[must_use]
    pub fn urgent_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
        tasks
            .iter()
            .filter(|task| Self::classify(task, today).is_some_and(Urgency::is_urgent))
            .take(URGENT_TASK_LIMIT)
            .collect()
    }

    /// Counts open tasks per urgency class.
    #[must_use]
    pub fn summarize(tasks: &[Task], today: NaiveDate) -> UrgencySummary {
        tasks
            .iter()
            .filter_map(|task| Self::classify(task, today))
            .fold(UrgencySummary::default(), |mut summary, urgency| {
                summary.open += 1;
                match urgency {
                    Urgency::Overdue => summary.overdue += 1,
                    Urgency::DueToday => summary.due_today += 1,
                    Urgency::DueSoon => summary.due_soon += 1,
                    Urgency::NoDeadline => summary.no_deadline += 1,
                }
                summary
            })
    }
}
