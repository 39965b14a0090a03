//! The VeriGuard service: one object per process, built at startup and
//! shared by every request handler.

use std::sync::Arc;

use chrono::Utc;
use veriguard_ingress::{EventCatalog, JsonFileStore, LedgerStore, ListingIntake, StaticCatalog};
use veriguard_matchcore::DuplicatePolicy;
use veriguard_types::{
    BulkListingRequest, Event, ListingRequest, Result, ServiceConfig, TicketRecord,
    VeriguardError, constants,
};

use crate::{BulkListResponse, HealthStatus, ListResponse, ServiceInfo};

/// Listing intake plus read-only catalog and ledger views.
pub struct VeriguardService {
    intake: ListingIntake,
}

impl VeriguardService {
    /// Build the production service: demo catalog, JSON file ledger under
    /// `config.data_dir`, policy from `config.block_within_marketplace`.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let store = JsonFileStore::new(config.ledger_path());
        tracing::info!(
            ledger = %store.path().display(),
            block_within_marketplace = config.block_within_marketplace,
            "starting {}",
            constants::SERVICE_NAME
        );
        Self::with_parts(
            Arc::new(StaticCatalog::demo()),
            Box::new(store),
            DuplicatePolicy::from_flag(config.block_within_marketplace),
        )
    }

    #[must_use]
    pub fn with_parts(
        catalog: Arc<dyn EventCatalog>,
        store: Box<dyn LedgerStore>,
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            intake: ListingIntake::new(catalog, store, policy),
        }
    }

    /// List one seat.
    ///
    /// # Errors
    /// `UnknownEvent` / `InvalidListing`; both are client errors.
    pub fn list(&self, request: ListingRequest) -> Result<ListResponse> {
        self.intake.submit(request).map(ListResponse::from)
    }

    /// List several seats, one result per seat in request order.
    ///
    /// # Errors
    /// `UnknownEvent` / `InvalidListing`; nothing is recorded on error.
    pub fn bulk_list(&self, request: &BulkListingRequest) -> Result<BulkListResponse> {
        let results = self
            .intake
            .submit_bulk(request)?
            .into_iter()
            .map(ListResponse::from)
            .collect();
        Ok(BulkListResponse { results })
    }

    /// Every ledger record, approved and blocked, in insertion order.
    #[must_use]
    pub fn tickets(&self) -> Vec<TicketRecord> {
        self.intake.tickets()
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.intake.catalog().all().into_iter().cloned().collect()
    }

    /// # Errors
    /// `EventNotFound` if `event_id` is not cataloged.
    pub fn event(&self, event_id: &str) -> Result<Event> {
        self.intake
            .catalog()
            .lookup(event_id)
            .cloned()
            .ok_or_else(|| VeriguardError::EventNotFound(event_id.to_string()))
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            time: Utc::now(),
        }
    }

    #[must_use]
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            name: constants::SERVICE_NAME.to_string(),
            version: constants::VERSION.to_string(),
            health: constants::ROUTE_HEALTH.to_string(),
            events: constants::ROUTE_EVENTS.to_string(),
            tickets: constants::ROUTE_TICKETS.to_string(),
            block_within_marketplace: self.intake.policy()
                == DuplicatePolicy::BlockWithinMarketplace,
        }
    }
}
