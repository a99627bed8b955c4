//! Financial records (invoices and payments).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::{ClientId, FinancialRecordId};

/// Payment status of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Settled.
    Paid,
    /// Issued, awaiting payment.
    Pending,
    /// Flagged overdue by the backend.
    Overdue,
    /// Voided.
    Cancelled,
    /// Any status this version does not know.
    #[serde(other)]
    Other,
}

/// A financial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Record ID.
    pub id: FinancialRecordId,
    /// Client billed, if any.
    #[serde(default)]
    pub client_id: Option<ClientId>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount in the agency's currency.
    pub amount: Decimal,
    /// Payment status.
    pub status: PaymentStatus,
    /// Date payment is due.
    #[serde(default, with = "agencyhub_shared::types::date::optional")]
    pub due_date: Option<NaiveDate>,
    /// Date payment was received.
    #[serde(default, with = "agencyhub_shared::types::date::optional")]
    pub paid_date: Option<NaiveDate>,
}
