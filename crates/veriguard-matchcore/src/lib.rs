//! # veriguard-matchcore
//!
//! **Pure duplicate-seat detection for VeriGuard.**
//!
//! MatchCore decides whether a new listing duplicates a seat already in the
//! ledger. It has:
//!
//! - **Zero side effects**: no ledger writes, no persistence, no catalog checks
//! - **One definition of "same seat"**: [`is_same_seat`] is shared by every
//!   intake path, single and bulk
//! - **Deterministic tie-break**: the earliest qualifying record wins

pub mod decision;
pub mod seat;

pub use decision::{DecisionResult, DuplicatePolicy, decide};
pub use seat::{SeatKey, is_same_seat, normalize, same_marketplace};
