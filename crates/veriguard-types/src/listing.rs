//! Listing requests submitted by marketplaces.
//!
//! A [`ListingRequest`] is ephemeral: it has no identity until intake turns
//! it into a [`TicketRecord`](crate::TicketRecord).

use serde::{Deserialize, Serialize};

use crate::{Result, VeriguardError};

/// Read access to the fields that identify a seat.
///
/// Implemented by both requests and ledger records so the seat matcher can
/// compare one against the other without conversion.
pub trait SeatDescriptor {
    fn marketplace(&self) -> &str;
    fn event_id(&self) -> &str;
    fn section(&self) -> &str;
    /// `None` and `Some("")` are equivalent for matching purposes.
    fn row(&self) -> Option<&str>;
    fn seat(&self) -> &str;
}

/// A single-seat listing request (e.g., from "StubHub").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRequest {
    pub marketplace: String,
    /// Must reference a cataloged event.
    pub event_id: String,
    pub section: String,
    #[serde(default)]
    pub row: Option<String>,
    pub seat: String,
}

impl ListingRequest {
    #[must_use]
    pub fn new(
        marketplace: impl Into<String>,
        event_id: impl Into<String>,
        section: impl Into<String>,
        row: Option<&str>,
        seat: impl Into<String>,
    ) -> Self {
        Self {
            marketplace: marketplace.into(),
            event_id: event_id.into(),
            section: section.into(),
            row: row.map(str::to_string),
            seat: seat.into(),
        }
    }

    /// Field-level checks that do not need the catalog. Only the
    /// marketplace is required; an unknown or blank event is left to the
    /// catalog lookup.
    ///
    /// # Errors
    /// `InvalidListing` if the marketplace is blank.
    pub fn validate(&self) -> Result<()> {
        require_marketplace(&self.marketplace)
    }
}

impl SeatDescriptor for ListingRequest {
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

/// Several seats in one section/row listed by one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkListingRequest {
    pub marketplace: String,
    pub event_id: String,
    pub section: String,
    #[serde(default)]
    pub row: Option<String>,
    /// Seats in submission order (e.g., `["10", "11", "12"]`).
    pub seats: Vec<String>,
}

impl BulkListingRequest {
    /// Expand into one [`ListingRequest`] per seat, preserving seat order.
    pub fn listings(&self) -> impl Iterator<Item = ListingRequest> + '_ {
        self.seats.iter().map(|seat| ListingRequest {
            marketplace: self.marketplace.clone(),
            event_id: self.event_id.clone(),
            section: self.section.clone(),
            row: self.row.clone(),
            seat: seat.clone(),
        })
    }

    /// Same checks as [`ListingRequest::validate`], once for the batch.
    ///
    /// # Errors
    /// `InvalidListing` if the marketplace is blank.
    pub fn validate(&self) -> Result<()> {
        require_marketplace(&self.marketplace)
    }
}

fn require_marketplace(marketplace: &str) -> Result<()> {
    if marketplace.trim().is_empty() {
        return Err(VeriguardError::InvalidListing {
            reason: "marketplace must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ListingRequest {
    /// Seat in section 101, row A of the demo Seahawks game.
    pub fn dummy(marketplace: &str, seat: &str) -> Self {
        Self::new(
            marketplace,
            "nfl-seahawks-2025-11-02",
            "101",
            Some("A"),
            seat,
        )
    }
}
