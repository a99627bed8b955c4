//! Pipeline service.

use rust_decimal::Decimal;

use super::types::PipelineSummary;
use crate::entities::{Opportunity, OpportunityStage};

/// Pipeline value aggregation.
pub struct PipelineService;

impl PipelineService {
    /// Value of an opportunity weighted by its win probability (capped at 100).
    #[must_use]
    pub fn weighted_value(opportunity: &Opportunity) -> Decimal {
        let probability = Decimal::from(opportunity.probability.min(100));
        (opportunity.value * probability / Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// Summarizes the pipeline.
    #[must_use]
    pub fn summarize(opportunities: &[Opportunity]) -> PipelineSummary {
        let mut summary = PipelineSummary {
            total_opportunities: opportunities.len(),
            ..PipelineSummary::default()
        };

        for opportunity in opportunities {
            match opportunity.stage {
                OpportunityStage::ClosedWon => {
                    summary.won_count += 1;
                    summary.won_value += opportunity.value;
                }
                OpportunityStage::ClosedLost => summary.lost_count += 1,
                _ => {
                    summary.open_count += 1;
                    summary.open_value += opportunity.value;
                    summary.weighted_value += Self::weighted_value(opportunity);
                }
            }
        }

        summary
    }
}
