//! REST fetch layer for AgencyHub.
//!
//! This crate provides:
//! - Resource paths and cache keys
//! - An injectable response cache keyed by (resource, params)
//! - A credentialed HTTP client with retry
//! - The `DataSource` seam and a dashboard loader built on it

pub mod api;
pub mod cache;
pub mod error;
pub mod loader;
pub mod resource;
pub mod source;

pub use api::ApiClient;
pub use cache::FetchCache;
pub use error::ClientError;
pub use loader::DashboardLoader;
pub use resource::{Resource, ResourceKey};
pub use source::DataSource;
