//! Category display tables.

use crate::entities::{ClientStatus, OpportunityStage};

/// Display attributes of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Stable machine key.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Display color (hex).
    pub color: &'static str,
}

/// A closed set of categories with a fixed display order.
pub trait Category: Copy + Eq + 'static {
    /// Every variant, in display order.
    const ORDER: &'static [Self];

    /// Display attributes for this variant.
    fn style(self) -> CategoryStyle;
}

impl Category for ClientStatus {
    const ORDER: &'static [Self] = &[Self::Active, Self::Prospect, Self::Inactive, Self::Other];

    fn style(self) -> CategoryStyle {
        match self {
            Self::Active => CategoryStyle {
                key: "active",
                label: "Active",
                color: "#10b981",
            },
            Self::Prospect => CategoryStyle {
                key: "prospect",
                label: "Prospect",
                color: "#3b82f6",
            },
            Self::Inactive => CategoryStyle {
                key: "inactive",
                label: "Inactive",
                color: "#6b7280",
            },
            Self::Other => CategoryStyle {
                key: "other",
                label: "Other",
                color: "#a855f7",
            },
        }
    }
}

impl Category for OpportunityStage {
    const ORDER: &'static [Self] = &[
        Self::Prospecting,
        Self::Qualification,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
        Self::Other,
    ];

    fn style(self) -> CategoryStyle {
        match self {
            Self::Prospecting => CategoryStyle {
                key: "prospecting",
                label: "Prospecting",
                color: "#94a3b8",
            },
            Self::Qualification => CategoryStyle {
                key: "qualification",
                label: "Qualification",
                color: "#3b82f6",
            },
            Self::Proposal => CategoryStyle {
                key: "proposal",
                label: "Proposal",
                color: "#8b5cf6",
            },
            Self::Negotiation => CategoryStyle {
                key: "negotiation",
                label: "Negotiation",
                color: "#f59e0b",
            },
            Self::ClosedWon => CategoryStyle {
                key: "closed_won",
                label: "Closed won",
                color: "#10b981",
            },
            Self::ClosedLost => CategoryStyle {
                key: "closed_lost",
                label: "Closed lost",
                color: "#ef4444",
            },
            Self::Other => CategoryStyle {
                key: "other",
                label: "Other",
                color: "#6b7280",
            },
        }
    }
}
