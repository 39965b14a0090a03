//! # veriguard-ingress
//!
//! **Listing intake**: catalog validation, duplicate decisions against the
//! ticket ledger, and write-through persistence.
//!
//! ## Architecture
//!
//! 1. **EventCatalog**: read-only event lookup, fixed at startup
//! 2. **TicketLedger**: append-only history of every decision
//! 3. **LedgerStore**: external blob storage for the ledger (load / save)
//! 4. **ListingIntake**: the single writer — validates, decides, appends, persists
//!
//! ## Listing Flow
//!
//! ```text
//! API → ListingIntake.submit() → EventCatalog.lookup()
//!     → [lock] decide(listing, ledger) → TicketLedger.append() → LedgerStore.save() [unlock]
//! ```
//!
//! The scan-decide-append-persist sequence runs under one mutex, so two
//! concurrent submissions for the same seat can never both be approved.

pub mod catalog;
pub mod intake;
pub mod ledger;
pub mod storage;

pub use catalog::{EventCatalog, StaticCatalog};
pub use intake::ListingIntake;
pub use ledger::{LedgerCounts, TicketLedger};
pub use storage::{JsonFileStore, LedgerStore, MemoryStore};
