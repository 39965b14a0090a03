//! Listing intake — the single writer of the ticket ledger.
//!
//! Every listing passes through [`ListingIntake`]:
//!
//! 1. Marketplace check and catalog lookup (`InvalidListing` / `UnknownEvent`)
//! 2. Under the ledger lock: duplicate decision, stamp, append, persist
//!
//! Bulk listings replay step 2 once per seat, in seat order, so each seat
//! sees the records appended for the seats before it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use veriguard_matchcore::{DuplicatePolicy, decide};
use veriguard_types::{
    BulkListingRequest, ListingOutcome, ListingRequest, Result, TicketRecord, VeriguardError,
};

use crate::{EventCatalog, LedgerCounts, LedgerStore, TicketLedger};

/// Serialized listing intake over a shared ledger.
pub struct ListingIntake {
    catalog: Arc<dyn EventCatalog>,
    store: Box<dyn LedgerStore>,
    policy: DuplicatePolicy,
    ledger: Mutex<TicketLedger>,
}

impl ListingIntake {
    /// Create an intake, loading the ledger from `store`.
    ///
    /// A missing or corrupt stored ledger yields an empty one.
    pub fn new(
        catalog: Arc<dyn EventCatalog>,
        store: Box<dyn LedgerStore>,
        policy: DuplicatePolicy,
    ) -> Self {
        let ledger = TicketLedger::open(store.as_ref());
        Self {
            catalog,
            store,
            policy,
            ledger: Mutex::new(ledger),
        }
    }

    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn EventCatalog {
        self.catalog.as_ref()
    }

    /// List a single seat.
    ///
    /// # Errors
    /// - `InvalidListing` if the marketplace is blank
    /// - `UnknownEvent` if the event is not cataloged
    ///
    /// In both cases nothing is appended. Storage failures are not errors.
    pub fn submit(&self, listing: ListingRequest) -> Result<ListingOutcome> {
        listing.validate()?;
        self.ensure_event(&listing.event_id)?;

        let mut ledger = self.lock_ledger();
        self.record(&mut ledger, listing)
    }

    /// List several seats of one section/row, one outcome per seat in order.
    ///
    /// The whole request is validated before any seat is recorded. The lock
    /// is held for the full batch so its records are contiguous.
    ///
    /// # Errors
    /// Same as [`submit`](Self::submit); on error no seat is recorded.
    pub fn submit_bulk(&self, bulk: &BulkListingRequest) -> Result<Vec<ListingOutcome>> {
        bulk.validate()?;
        self.ensure_event(&bulk.event_id)?;

        let mut ledger = self.lock_ledger();
        let mut outcomes = Vec::with_capacity(bulk.seats.len());
        for listing in bulk.listings() {
            outcomes.push(self.record(&mut ledger, listing)?);
        }
        tracing::debug!(
            marketplace = %bulk.marketplace,
            event_id = %bulk.event_id,
            seats = outcomes.len(),
            "bulk listing recorded"
        );
        Ok(outcomes)
    }

    /// Full ledger contents in insertion order.
    #[must_use]
    pub fn tickets(&self) -> Vec<TicketRecord> {
        self.lock_ledger().snapshot()
    }

    #[must_use]
    pub fn counts(&self) -> LedgerCounts {
        self.lock_ledger().counts()
    }

    fn ensure_event(&self, event_id: &str) -> Result<()> {
        if self.catalog.contains(event_id) {
            Ok(())
        } else {
            tracing::info!(event_id, "listing rejected: unknown event");
            Err(VeriguardError::UnknownEvent(event_id.to_string()))
        }
    }

    /// Decide, stamp, append, persist. Caller holds the ledger lock.
    fn record(&self, ledger: &mut TicketLedger, listing: ListingRequest) -> Result<ListingOutcome> {
        let id = ledger.fresh_id();
        let created_at = Utc::now();

        // Decided against the ledger *before* this record is appended.
        let duplicate_of = decide(&listing, ledger.records(), self.policy)
            .matched_record
            .map(|prior| prior.id.clone());

        let ticket = TicketRecord::stamp(listing, id, created_at, duplicate_of);
        ledger.append(ticket.clone())?;

        match &ticket.duplicate_of_id {
            Some(dup) => tracing::warn!(
                ticket_id = %ticket.id,
                duplicate_of = %dup,
                marketplace = %ticket.marketplace,
                event_id = %ticket.event_id,
                "listing blocked: duplicate seat"
            ),
            None => tracing::info!(
                ticket_id = %ticket.id,
                marketplace = %ticket.marketplace,
                event_id = %ticket.event_id,
                "listing approved"
            ),
        }

        let persisted = self.persist(ledger);
        Ok(ListingOutcome::new(ticket, persisted))
    }

    /// Best-effort write-through. Failures are logged and swallowed.
    fn persist(&self, ledger: &TicketLedger) -> bool {
        match self.store.save(ledger.records()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, records = ledger.len(), "ledger write-through failed");
                false
            }
        }
    }

    fn lock_ledger(&self) -> MutexGuard<'_, TicketLedger> {
        // Appends are a single push, so a poisoned ledger is still consistent.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
