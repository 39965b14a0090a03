//! Catalog event model.

use serde::{Deserialize, Serialize};

/// A cataloged event. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique catalog key (e.g., `nfl-seahawks-2025-11-02`).
    pub event_id: String,
    pub name: String,
    pub venue: String,
    /// ISO-8601 timestamp with the venue's local offset.
    pub date: String,
}

impl Event {
    #[must_use]
    pub fn new(
        event_id: impl Into<String>,
        name: impl Into<String>,
        venue: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            name: name.into(),
            venue: venue.into(),
            date: date.into(),
        }
    }
}
