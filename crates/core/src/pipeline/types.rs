//! Pipeline data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pipeline totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Number of opportunities in any stage.
    pub total_opportunities: usize,
    /// Opportunities not yet won or lost.
    pub open_count: usize,
    /// Sum of open opportunity values.
    pub open_value: Decimal,
    /// Open value weighted by win probability.
    pub weighted_value: Decimal,
    /// Opportunities won.
    pub won_count: usize,
    /// Sum of won opportunity values.
    pub won_value: Decimal,
    /// Opportunities lost.
    pub lost_count: usize,
}
