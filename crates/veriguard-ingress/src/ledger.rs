//! Append-only ticket ledger.
//!
//! Holds every listing decision in insertion order, approved and blocked.
//! Records are never mutated or removed once appended.

use std::collections::HashSet;

use veriguard_types::{Decision, Result, TicketId, TicketRecord, VeriguardError};

use crate::LedgerStore;

/// Approved/blocked tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerCounts {
    pub approved: usize,
    pub blocked: usize,
}

/// Ordered, append-only history of [`TicketRecord`]s.
#[derive(Debug, Default)]
pub struct TicketLedger {
    /// Records in insertion order.
    records: Vec<TicketRecord>,
    /// Ids of every record, for uniqueness checks.
    ids: HashSet<TicketId>,
}

impl TicketLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously stored records.
    ///
    /// # Errors
    /// `DuplicateTicketId` if two records share an id.
    pub fn from_records(records: Vec<TicketRecord>) -> Result<Self> {
        let mut ledger = Self {
            records: Vec::with_capacity(records.len()),
            ids: HashSet::with_capacity(records.len()),
        };
        for record in records {
            ledger.append(record)?;
        }
        Ok(ledger)
    }

    /// Load from `store`, starting empty if the stored ledger is missing or
    /// unusable. Never fails.
    ///
    /// Stored records that parse but cannot be replayed (repeated ids) are
    /// discarded along with the rest of the history, and the next
    /// write-through overwrites them. That loss is logged at error level.
    pub fn open(store: &dyn LedgerStore) -> Self {
        let records = match store.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "stored ledger unusable, starting empty");
                return Self::new();
            }
        };
        let stored = records.len();
        match Self::from_records(records) {
            Ok(ledger) => {
                tracing::info!(records = ledger.len(), "ticket ledger loaded");
                ledger
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    discarded_records = stored,
                    "stored ledger rejected, discarding {stored} records and starting empty"
                );
                Self::new()
            }
        }
    }

    /// Append a finalized record.
    ///
    /// # Errors
    /// `DuplicateTicketId` if a record with the same id is already present.
    pub fn append(&mut self, record: TicketRecord) -> Result<()> {
        if !self.ids.insert(record.id.clone()) {
            return Err(VeriguardError::DuplicateTicketId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Mint an id not yet used by any record.
    #[must_use]
    pub fn fresh_id(&self) -> TicketId {
        loop {
            let id = TicketId::generate();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[TicketRecord] {
        &self.records
    }

    /// Owned copy of the ledger contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TicketRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn counts(&self) -> LedgerCounts {
        self.records
            .iter()
            .fold(LedgerCounts::default(), |mut acc, r| {
                match r.decision {
                    Decision::Approved => acc.approved += 1,
                    Decision::BlockedDuplicate => acc.blocked += 1,
                }
                acc
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use veriguard_types::*;

    use super::*;
    use crate::MemoryStore;

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = TicketLedger::new();
        for (id, seat) in [("t1", "10"), ("t2", "11"), ("t3", "12")] {
            ledger
                .append(TicketRecord::dummy_approved(id, "StubHub", seat))
                .unwrap();
        }
        let ids: Vec<&str> = ledger.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut ledger = TicketLedger::new();
        ledger
            .append(TicketRecord::dummy_approved("t1", "StubHub", "10"))
            .unwrap();
        let err = ledger
            .append(TicketRecord::dummy_approved("t1", "SeatGeek", "11"))
            .unwrap_err();
        assert!(matches!(err, VeriguardError::DuplicateTicketId(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn fresh_id_is_unused() {
        let mut ledger = TicketLedger::new();
        ledger
            .append(TicketRecord::dummy_approved("t1", "StubHub", "10"))
            .unwrap();
        let id = ledger.fresh_id();
        assert_ne!(id.as_str(), "t1");
        ledger
            .append(TicketRecord::stamp(
                ListingRequest::dummy("StubHub", "11"),
                id,
                Utc::now(),
                None,
            ))
            .unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn counts_split_by_decision() {
        let mut ledger = TicketLedger::new();
        ledger
            .append(TicketRecord::dummy_approved("t1", "StubHub", "10"))
            .unwrap();
        ledger
            .append(TicketRecord::stamp(
                ListingRequest::dummy("SeatGeek", "10"),
                TicketId::from("t2"),
                Utc::now(),
                Some(TicketId::from("t1")),
            ))
            .unwrap();
        assert_eq!(
            ledger.counts(),
            LedgerCounts {
                approved: 1,
                blocked: 1
            }
        );
        assert!(ledger.records()[1].is_blocked());
    }

    #[test]
    fn open_loads_stored_records() {
        let store = MemoryStore::with_records(vec![
            TicketRecord::dummy_approved("t1", "StubHub", "10"),
            TicketRecord::dummy_approved("t2", "StubHub", "11"),
        ]);
        let ledger = TicketLedger::open(&store);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].id.as_str(), "t1");
    }

    #[test]
    fn open_recovers_from_corruption() {
        let ledger = TicketLedger::open(&MemoryStore::corrupt());
        assert!(ledger.is_empty());
    }

    #[test]
    fn open_treats_repeated_ids_as_corruption() {
        let records = vec![
            TicketRecord::dummy_approved("t1", "StubHub", "10"),
            TicketRecord::dummy_approved("t2", "StubHub", "11"),
            TicketRecord::dummy_approved("t1", "StubHub", "12"),
        ];
        let err = TicketLedger::from_records(records.clone()).unwrap_err();
        assert!(matches!(err, VeriguardError::DuplicateTicketId(ref id) if id.as_str() == "t1"));

        let store = MemoryStore::with_records(records);
        assert!(TicketLedger::open(&store).is_empty());
        // Opening alone never rewrites the stored history.
        assert_eq!(store.stored().len(), 3);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn snapshot_is_idempotent() {
        let mut ledger = TicketLedger::new();
        ledger
            .append(TicketRecord::dummy_approved("t1", "StubHub", "10"))
            .unwrap();
        assert_eq!(ledger.snapshot(), ledger.snapshot());
    }
}
