//! Revenue data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Period-over-period change of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum PercentChange {
    /// Change in percent, rounded to one decimal.
    Change(Decimal),
    /// No positive baseline to compare against.
    NoPriorData,
}

impl PercentChange {
    /// Returns the percentage if one could be computed.
    #[must_use]
    pub const fn percent(self) -> Option<Decimal> {
        match self {
            Self::Change(percent) => Some(percent),
            Self::NoPriorData => None,
        }
    }
}

/// Revenue per month bucket, as parallel label/total lists for charting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSeries {
    /// Bucket labels (month abbreviations).
    pub labels: Vec<String>,
    /// Paid revenue per bucket.
    pub totals: Vec<Decimal>,
}

impl RevenueSeries {
    /// Sum of every bucket.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.totals.iter().copied().sum()
    }
}

/// Outstanding payments past their due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueSummary {
    /// Number of overdue records.
    pub count: usize,
    /// Total amount outstanding.
    pub total_amount: Decimal,
}
