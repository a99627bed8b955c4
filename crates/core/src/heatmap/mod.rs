//! Product revenue heat map.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::HeatMapService;
pub use types::{IntensityBand, ProductHeat};
