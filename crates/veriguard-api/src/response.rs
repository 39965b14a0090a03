//! Response shapes returned to the transport layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use veriguard_types::{Decision, ListingOutcome, TicketId, TicketRecord};

/// Result of listing one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub id: TicketId,
    pub decision: Decision,
    pub duplicate_of_id: Option<TicketId>,
    pub message: String,
    pub ticket: TicketRecord,
}

impl From<ListingOutcome> for ListResponse {
    fn from(outcome: ListingOutcome) -> Self {
        let ListingOutcome {
            ticket, message, ..
        } = outcome;
        Self {
            id: ticket.id.clone(),
            decision: ticket.decision,
            duplicate_of_id: ticket.duplicate_of_id.clone(),
            message: message.to_string(),
            ticket,
        }
    }
}

/// Results of a bulk listing, in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkListResponse {
    pub results: Vec<ListResponse>,
}

/// Liveness check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub time: DateTime<Utc>,
}

/// Service metadata and route hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub health: String,
    pub events: String,
    pub tickets: String,
    pub block_within_marketplace: bool,
}
