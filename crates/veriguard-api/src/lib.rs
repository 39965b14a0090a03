//! # veriguard-api
//!
//! **Service facade** for the VeriGuard listing intake service.
//!
//! Wires configuration, the event catalog, and listing intake into one
//! [`VeriguardService`] whose operations mirror the public endpoints. Wire
//! encoding and routing belong to the transport; this crate only fixes the
//! request/response shapes.
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | list one seat | [`ListingRequest`] → [`ListResponse`] |
//! | list many seats | [`BulkListingRequest`] → [`BulkListResponse`] |
//! | read ledger | → `Vec<TicketRecord>` |
//! | read catalog / one event | → `Vec<Event>` / [`Event`] |
//! | health, info | → [`HealthStatus`], [`ServiceInfo`] |
//!
//! [`ListingRequest`]: veriguard_types::ListingRequest
//! [`BulkListingRequest`]: veriguard_types::BulkListingRequest
//! [`Event`]: veriguard_types::Event

pub mod response;
pub mod service;
pub mod telemetry;

pub use response::{BulkListResponse, HealthStatus, ListResponse, ServiceInfo};
pub use service::VeriguardService;
pub use telemetry::init_logging;
