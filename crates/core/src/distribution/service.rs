//! Distribution service.

use super::category::Category;
use super::types::{Distribution, DistributionSlice};
use crate::entities::{Client, ClientStatus, Opportunity, OpportunityStage};

/// Counts items per category.
pub struct DistributionService;

impl DistributionService {
    /// Counts `items` per category as read by `accessor`.
    ///
    /// Slices follow `C::ORDER`, zero-count categories are omitted, and when
    /// every count is zero a single `no_data` slice with count 0 is emitted.
    /// The emitted counts always sum to `items.len()`.
    pub fn distribute<T, C, F>(items: &[T], accessor: F) -> Distribution
    where
        C: Category,
        F: Fn(&T) -> C,
    {
        let mut counts = vec![0usize; C::ORDER.len()];
        for item in items {
            let category = accessor(item);
            if let Some(index) = C::ORDER.iter().position(|c| *c == category) {
                counts[index] += 1;
            }
        }

        let mut slices: Vec<DistributionSlice> = C::ORDER
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| DistributionSlice::from_style(category.style(), count))
            .collect();

        if slices.is_empty() {
            slices.push(DistributionSlice::no_data());
        }

        Distribution {
            slices,
            total: items.len(),
        }
    }

    /// Clients per relationship status.
    #[must_use]
    pub fn client_statuses(clients: &[Client]) -> Distribution {
        Self::distribute::<_, ClientStatus, _>(clients, |client| client.status)
    }

    /// Opportunities per pipeline stage.
    #[must_use]
    pub fn pipeline_stages(opportunities: &[Opportunity]) -> Distribution {
        Self::distribute::<_, OpportunityStage, _>(opportunities, |opportunity| opportunity.stage)
    }
}
