//! Agency clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::ClientId;

/// Relationship status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    /// Under contract.
    Active,
    /// Being courted.
    Prospect,
    /// Former or paused client.
    Inactive,
    /// Any status this version does not know.
    #[serde(other)]
    Other,
}

/// A client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Relationship status.
    pub status: ClientStatus,
    /// Date the client was registered.
    #[serde(default, with = "agencyhub_shared::types::date::optional")]
    pub created_at: Option<NaiveDate>,
}
