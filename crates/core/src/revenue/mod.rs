//! Revenue aggregation over financial records.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::RevenueService;
pub use types::{OverdueSummary, PercentChange, RevenueSeries};
