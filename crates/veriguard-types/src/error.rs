//! Error types for the VeriGuard intake service.
//!
//! All errors use the `VG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Listing errors
//! - 2xx: Catalog errors
//! - 3xx: Storage errors
//! - 4xx: Ledger errors
//! - 9xx: General errors

use thiserror::Error;

use crate::TicketId;

/// Central error enum for all VeriGuard operations.
#[derive(Debug, Error)]
pub enum VeriguardError {
    // =================================================================
    // Listing Errors (1xx)
    // =================================================================
    /// The listing references an event id that is not in the catalog.
    #[error("VG_ERR_100: Unknown event_id: {0}")]
    UnknownEvent(String),

    /// The listing failed field validation (blank marketplace, seat, etc.).
    #[error("VG_ERR_101: Invalid listing: {reason}")]
    InvalidListing { reason: String },

    // =================================================================
    // Catalog Errors (2xx)
    // =================================================================
    /// A direct catalog read asked for an event that does not exist.
    #[error("VG_ERR_200: Event not found: {0}")]
    EventNotFound(String),

    // =================================================================
    // Storage Errors (3xx)
    // =================================================================
    /// The ledger could not be written to storage.
    #[error("VG_ERR_300: Storage write failed: {reason}")]
    StorageWrite { reason: String },

    /// The persisted ledger exists but could not be parsed.
    #[error("VG_ERR_301: Stored ledger is corrupt: {reason}")]
    StorageReadCorruption { reason: String },

    // =================================================================
    // Ledger Errors (4xx)
    // =================================================================
    /// A record with this id is already in the ledger.
    #[error("VG_ERR_400: Ticket id already recorded: {0}")]
    DuplicateTicketId(TicketId),

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (bad env var value, etc.).
    #[error("VG_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl VeriguardError {
    /// Whether the caller is at fault (maps to a 4xx at the transport).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownEvent(_) | Self::InvalidListing { .. } | Self::EventNotFound(_)
        )
    }

    /// Whether this is a "not found" condition rather than a rejection.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_))
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, VeriguardError>;
