//! Sales pipeline opportunities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::{ClientId, OpportunityId};

/// Pipeline stage of an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    /// First contact.
    Prospecting,
    /// Fit confirmed.
    Qualification,
    /// Proposal sent.
    Proposal,
    /// Terms under discussion.
    Negotiation,
    /// Deal signed.
    ClosedWon,
    /// Deal lost.
    ClosedLost,
    /// Any stage this version does not know.
    #[serde(other)]
    Other,
}

impl OpportunityStage {
    /// Returns true for stages that no longer count as open pipeline.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }
}

/// An opportunity in the sales pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Opportunity ID.
    pub id: OpportunityId,
    /// Title.
    pub title: String,
    /// Client the deal is with.
    #[serde(default)]
    pub client_id: Option<ClientId>,
    /// Pipeline stage.
    pub stage: OpportunityStage,
    /// Expected deal value.
    #[serde(default)]
    pub value: Decimal,
    /// Win probability, 0-100.
    #[serde(default)]
    pub probability: u8,
}
