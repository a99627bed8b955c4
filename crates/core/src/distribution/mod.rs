//! Category distributions (client status, pipeline stage).
//!
//! Each category enum owns a static display table, so a category always
//! resolves to the same key, label, and color no matter which slices
//! are present in a given render.

pub mod category;
pub mod service;
pub mod types;


pub use category::{Category, CategoryStyle};
pub use service::DistributionService;
pub use types::{Distribution, DistributionSlice};
