//! System-wide constants for the VeriGuard intake service.

/// Service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "Ticket VeriGuard Demo API";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory holding the persisted ledger.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the persisted ledger inside the data directory.
pub const LEDGER_FILE_NAME: &str = "tickets.json";

/// Default duplicate policy: block repeats within the same marketplace too.
pub const DEFAULT_BLOCK_WITHIN_MARKETPLACE: bool = true;

/// Message attached to an approved listing.
pub const MSG_APPROVED: &str = "Listing approved";

/// Message attached to a blocked listing.
pub const MSG_BLOCKED_DUPLICATE: &str = "Duplicate detected — listing blocked";

/// Env var selecting the duplicate policy.
pub const ENV_BLOCK_WITHIN_MARKETPLACE: &str = "VERIGUARD_BLOCK_WITHIN_MARKETPLACE";

/// Env var overriding the data directory.
pub const ENV_DATA_DIR: &str = "VERIGUARD_DATA_DIR";

/// Env var selecting the log output format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "VERIGUARD_LOG_FORMAT";

/// Route hints advertised by the info endpoint.
pub const ROUTE_HEALTH: &str = "/health";
/// Catalog route hint.
pub const ROUTE_EVENTS: &str = "/events";
/// Ledger route hint.
pub const ROUTE_TICKETS: &str = "/tickets";
