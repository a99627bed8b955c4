//! Heat map data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::ProductId;

/// Coarse bucket of a product's intensity, for coloring cells.
///
/// This is a snapshot of relative revenue. It carries no comparison over
/// time and must not be presented as a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    /// Intensity above 66.
    High,
    /// Intensity above 33, up to 66.
    Medium,
    /// Intensity of 33 or less.
    Low,
}

impl IntensityBand {
    /// Buckets an intensity in `[0, 100]`.
    #[must_use]
    pub fn from_intensity(intensity: Decimal) -> Self {
        if intensity > Decimal::from(66) {
            Self::High
        } else if intensity > Decimal::from(33) {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One heat map cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHeat {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Number of sales.
    pub sales_count: usize,
    /// Sum of sale amounts.
    pub revenue: Decimal,
    /// Revenue relative to the best product, 0-100.
    pub intensity: Decimal,
    /// Display bucket of `intensity`.
    pub band: IntensityBand,
}
