//! Raw records as served by the AgencyHub REST API.
//!
//! These are transient copies of backend-owned data. Unknown enum values
//! deserialize to an `Other` variant so a new backend status never breaks
//! aggregation.

pub mod client;
pub mod financial;
pub mod opportunity;
pub mod product;
pub mod task;

pub use client::{Client, ClientStatus};
pub use financial::{FinancialRecord, PaymentStatus};
pub use opportunity::{Opportunity, OpportunityStage};
pub use product::{Product, ProductSale};
pub use task::{Task, TaskStatus};
