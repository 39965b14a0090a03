//! # veriguard-types
//!
//! Shared types, errors, and configuration for the **VeriGuard** listing
//! intake service.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`TicketId`]
//! - **Catalog model**: [`Event`]
//! - **Listing model**: [`ListingRequest`], [`BulkListingRequest`], [`SeatDescriptor`]
//! - **Ledger model**: [`TicketRecord`], [`Decision`], [`ListingOutcome`]
//! - **Configuration**: [`ServiceConfig`], [`LogFormat`]
//! - **Errors**: [`VeriguardError`] with `VG_ERR_` prefix codes
//! - **Constants**: service name, file names, response messages

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod listing;
pub mod ticket;

// Re-export all primary types at crate root for ergonomic imports:
//   use veriguard_types::{ListingRequest, TicketRecord, Decision, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use listing::*;
pub use ticket::*;

// Constants are accessed via `veriguard_types::constants::FOO`
// (not re-exported to avoid name collisions).
