//! Event catalog — read-only event lookup.
//!
//! The catalog is built once at startup and never mutated, so it needs no
//! synchronization and can be shared behind an `Arc`.

use std::collections::HashMap;

use veriguard_types::Event;

/// Read-only source of cataloged events.
pub trait EventCatalog: Send + Sync {
    /// Exact-key lookup.
    fn lookup(&self, event_id: &str) -> Option<&Event>;

    /// Every event, in catalog order.
    fn all(&self) -> Vec<&Event>;

    fn contains(&self, event_id: &str) -> bool {
        self.lookup(event_id).is_some()
    }
}

/// In-memory catalog that keeps events in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    /// Events in catalog order.
    events: Vec<Event>,
    /// Event id -> position in `events`.
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Build from a list of events. A later event with the same id replaces
    /// an earlier one in place.
    #[must_use]
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut catalog = Self::default();
        for evt in events {
            let existing = catalog.index.get(&evt.event_id).copied();
            match existing {
                Some(pos) => catalog.events[pos] = evt,
                None => {
                    catalog.index.insert(evt.event_id.clone(), catalog.events.len());
                    catalog.events.push(evt);
                }
            }
        }
        catalog
    }

    /// The demo catalog shipped with the service.
    #[must_use]
    pub fn demo() -> Self {
        Self::from_events([
            Event::new(
                "nfl-seahawks-2025-11-02",
                "NFL — Seattle Seahawks vs. TBD (Home)",
                "Lumen Field, Seattle, WA",
                "2025-11-02T13:05:00-07:00",
            ),
            Event::new(
                "festival-summer-2026-day1",
                "Summer Fest — Day 1",
                "Seattle Center",
                "2026-07-10T12:00:00-07:00",
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventCatalog for StaticCatalog {
    fn lookup(&self, event_id: &str) -> Option<&Event> {
        self.index.get(event_id).map(|&pos| &self.events[pos])
    }

    fn all(&self) -> Vec<&Event> {
        self.events.iter().collect()
    }
}
