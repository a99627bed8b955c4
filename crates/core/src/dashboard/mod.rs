//! Dashboard snapshot.
//!
//! This module composes the aggregators into the values a dashboard shows:
//! - KPI cards with period-over-period change
//! - Monthly revenue chart
//! - Client status and pipeline stage distributions
//! - Urgent tasks
//! - Product heat map

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::*;
