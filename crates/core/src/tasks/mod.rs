//! Task urgency classification.

pub mod types;
pub mod urgency;


pub use types::{Urgency, UrgencySummary};
pub use urgency::{URGENT_TASK_LIMIT, UrgencyClassifier};
