//! Sales pipeline value.

pub mod service;
pub mod types;

pub use service::PipelineService;
pub use types::PipelineSummary;
