//! Ledger records produced by listing intake.
//!
//! A [`TicketRecord`] is created exactly once per listing attempt and is
//! immutable afterwards. Blocked attempts are recorded too; they form the
//! audit trail of rejected duplicates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ListingRequest, SeatDescriptor, TicketId, constants};

/// Terminal outcome of a listing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    BlockedDuplicate,
}

impl Decision {
    /// Human-readable message returned alongside the record.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Approved => constants::MSG_APPROVED,
            Self::BlockedDuplicate => constants::MSG_BLOCKED_DUPLICATE,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "APPROVED"),
            Self::BlockedDuplicate => write!(f, "BLOCKED_DUPLICATE"),
        }
    }
}

/// One entry of the append-only ticket ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: TicketId,
    pub marketplace: String,
    pub event_id: String,
    pub section: String,
    pub row: Option<String>,
    pub seat: String,
    pub created_at: DateTime<Utc>,
    pub decision: Decision,
    /// The earlier record this one duplicates. Set iff `decision` is
    /// [`Decision::BlockedDuplicate`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_of_id: Option<TicketId>,
}

impl TicketRecord {
    /// Finalize a listing into a record.
    ///
    /// The decision is derived from `duplicate_of`, so a blocked record can
    /// never lack its back-reference.
    #[must_use]
    pub fn stamp(
        listing: ListingRequest,
        id: TicketId,
        created_at: DateTime<Utc>,
        duplicate_of: Option<TicketId>,
    ) -> Self {
        let decision = if duplicate_of.is_some() {
            Decision::BlockedDuplicate
        } else {
            Decision::Approved
        };
        Self {
            id,
            marketplace: listing.marketplace,
            event_id: listing.event_id,
            section: listing.section,
            row: listing.row,
            seat: listing.seat,
            created_at,
            decision,
            duplicate_of_id: duplicate_of,
        }
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.decision == Decision::BlockedDuplicate
    }
}

impl SeatDescriptor for TicketRecord {
    fn marketplace(&self) -> &str {
        &self.marketplace
    }
    fn event_id(&self) -> &str {
        &self.event_id
    }
    fn section(&self) -> &str {
        &self.section
    }
    fn row(&self) -> Option<&str> {
        self.row.as_deref()
    }
    fn seat(&self) -> &str {
        &self.seat
    }
}

impl fmt::Display for TicketRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket[{}] {} {} sec={} row={} seat={} {}",
            self.id,
            self.marketplace,
            self.event_id,
            self.section,
            self.row.as_deref().unwrap_or("-"),
            self.seat,
            self.decision,
        )
    }
}

/// What intake hands back for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingOutcome {
    pub ticket: TicketRecord,
    pub message: &'static str,
    /// Whether the write-through to storage succeeded. Informational only:
    /// the in-memory ledger already holds the record either way.
    pub persisted: bool,
}

impl ListingOutcome {
    #[must_use]
    pub fn new(ticket: TicketRecord, persisted: bool) -> Self {
        let message = ticket.decision.message();
        Self {
            ticket,
            message,
            persisted,
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl TicketRecord {
    /// An approved record for [`ListingRequest::dummy`] with a fixed id.
    pub fn dummy_approved(id: &str, marketplace: &str, seat: &str) -> Self {
        Self::stamp(
            ListingRequest::dummy(marketplace, seat),
            TicketId::from(id),
            Utc::now(),
            None,
        )
    }
}
