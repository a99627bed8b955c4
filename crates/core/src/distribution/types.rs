//! Distribution data types.

use serde::{Deserialize, Serialize};

use super::category::CategoryStyle;

/// Key of the placeholder slice emitted when there is nothing to show.
pub const NO_DATA_KEY: &str = "no_data";

const NO_DATA_LABEL: &str = "No data";
const NO_DATA_COLOR: &str = "#e5e7eb";

/// One labeled, colored count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Stable category key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Display color.
    pub color: String,
    /// Number of items in the category.
    pub count: usize,
}

impl DistributionSlice {
    /// Builds a slice from a category style.
    #[must_use]
    pub fn from_style(style: CategoryStyle, count: usize) -> Self {
        Self {
            key: style.key.to_string(),
            label: style.label.to_string(),
            color: style.color.to_string(),
            count,
        }
    }

    /// The placeholder slice.
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            key: NO_DATA_KEY.to_string(),
            label: NO_DATA_LABEL.to_string(),
            color: NO_DATA_COLOR.to_string(),
            count: 0,
        }
    }

    /// Returns true for the placeholder slice.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.key == NO_DATA_KEY
    }
}

/// Counts per category, zero-count categories omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Non-empty slices in category order, or the single placeholder slice.
    pub slices: Vec<DistributionSlice>,
    /// Number of items counted.
    pub total: usize,
}

impl Distribution {
    /// Count for a category key; 0 when the category is absent.
    #[must_use]
    pub fn count_of(&self, key: &str) -> usize {
        self.slices
            .iter()
            .find(|slice| slice.key == key)
            .map_or(0, |slice| slice.count)
    }

    /// Returns true when nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
