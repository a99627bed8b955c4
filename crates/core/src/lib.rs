//! Core metrics aggregation for AgencyHub.
//!
//! This crate contains pure aggregation logic with ZERO network or storage
//! dependencies. Every derived value is a function of the raw collections,
//! the selected period, and an explicit "today".
//!
//! # Modules
//!
//! - `entities` - Raw records as served by the REST API
//! - `period` - Period tokens, date ranges, and month buckets
//! - `revenue` - Paid revenue totals, monthly series, and percent change
//! - `distribution` - Client status and pipeline stage counts
//! - `pipeline` - Open, weighted, and won pipeline value
//! - `tasks` - Task urgency classification
//! - `heatmap` - Product revenue heat map
//! - `dashboard` - Composition of all of the above into one snapshot

pub mod dashboard;
pub mod distribution;
pub mod entities;
pub mod heatmap;
pub mod period;
pub mod pipeline;
pub mod revenue;
pub mod tasks;
