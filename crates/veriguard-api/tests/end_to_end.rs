//! End-to-end tests through the service facade.
//!
//! These exercise the full listing path:
//! catalog check -> duplicate decision -> ledger append -> file write-through
//! and the read endpoints that observe the result.

use std::sync::Arc;

use veriguard_api::VeriguardService;
use veriguard_ingress::{MemoryStore, StaticCatalog};
use veriguard_matchcore::DuplicatePolicy;
use veriguard_types::*;

const EVENT: &str = "nfl-seahawks-2025-11-02";

fn service(block_within_marketplace: bool) -> VeriguardService {
    VeriguardService::with_parts(
        Arc::new(StaticCatalog::demo()),
        Box::new(MemoryStore::new()),
        DuplicatePolicy::from_flag(block_within_marketplace),
    )
}

fn listing(marketplace: &str, section: &str, row: Option<&str>, seat: &str) -> ListingRequest {
    ListingRequest::new(marketplace, EVENT, section, row, seat)
}

fn bulk(marketplace: &str, seats: &[&str]) -> BulkListingRequest {
    BulkListingRequest {
        marketplace: marketplace.into(),
        event_id: EVENT.into(),
        section: "101".into(),
        row: None,
        seats: seats.iter().map(|s| (*s).to_string()).collect(),
    }
}

// =============================================================================
// Policy on: same marketplace repeats are blocked
// =============================================================================
#[test]
fn e2e_same_marketplace_twice_blocked_when_policy_on() {
    let svc = service(true);
    let first = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    let second = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();

    assert_eq!(first.decision, Decision::Approved);
    assert_eq!(second.decision, Decision::BlockedDuplicate);
    assert_eq!(second.duplicate_of_id, Some(first.id));
}

// =============================================================================
// Policy off: only cross-marketplace repeats are blocked
// =============================================================================
#[test]
fn e2e_policy_off_same_vs_different_marketplace() {
    let svc = service(false);
    let a = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    let b = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    assert_eq!(a.decision, Decision::Approved);
    assert_eq!(b.decision, Decision::Approved);

    let svc = service(false);
    let a = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    let c = svc.list(listing("SeatGeek", "101", Some("A"), "10")).unwrap();
    assert_eq!(a.decision, Decision::Approved);
    assert_eq!(c.decision, Decision::BlockedDuplicate);
    assert_eq!(c.duplicate_of_id, Some(a.id));
}

// =============================================================================
// Earliest qualifying record wins
// =============================================================================
#[test]
fn e2e_duplicate_resolves_to_earliest_record() {
    let svc = service(false);
    let first = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    let relist = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    assert_eq!(relist.decision, Decision::Approved);

    let foreign = svc.list(listing("Vivid Seats", "101", Some("A"), "10")).unwrap();
    assert_eq!(foreign.duplicate_of_id, Some(first.id));
}

// =============================================================================
// Blocked listings stay in the ledger
// =============================================================================
#[test]
fn e2e_blocked_listing_visible_in_ledger() {
    let svc = service(true);
    svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    let blocked = svc.list(listing("SeatGeek", "101", Some("A"), "10")).unwrap();

    let tickets = svc.tickets();
    assert_eq!(tickets.len(), 2);
    let stored = tickets.iter().find(|t| t.id == blocked.id).unwrap();
    assert_eq!(stored.decision, Decision::BlockedDuplicate);
    assert_eq!(tickets[1], blocked.ticket);
}

// =============================================================================
// Bulk: seats replay in order and observe each other
// =============================================================================
#[test]
fn e2e_bulk_repeated_seat_in_one_request() {
    let svc = service(true);
    let resp = svc.bulk_list(&bulk("StubHub", &["10", "10", "11"])).unwrap();

    let decisions: Vec<Decision> = resp.results.iter().map(|r| r.decision).collect();
    assert_eq!(
        decisions,
        [
            Decision::Approved,
            Decision::BlockedDuplicate,
            Decision::Approved
        ]
    );
    assert_eq!(resp.results[1].duplicate_of_id, Some(resp.results[0].id.clone()));
    let seats: Vec<&str> = resp.results.iter().map(|r| r.ticket.seat.as_str()).collect();
    assert_eq!(seats, ["10", "10", "11"]);
}

#[test]
fn e2e_bulk_then_single_across_marketplaces() {
    let svc = service(false);
    let resp = svc.bulk_list(&bulk("StubHub", &["1", "2", "3"])).unwrap();
    assert!(resp.results.iter().all(|r| r.decision == Decision::Approved));

    let dup = svc.list(listing("SeatGeek", "101", None, "2")).unwrap();
    assert_eq!(dup.duplicate_of_id, Some(resp.results[1].id.clone()));
}

// =============================================================================
// Unknown events are rejected and never recorded
// =============================================================================
#[test]
fn e2e_unknown_event_not_appended() {
    let svc = service(true);
    let mut req = listing("StubHub", "101", Some("A"), "10");
    req.event_id = "nba-sonics-2027-01-01".into();

    let err = svc.list(req).unwrap_err();
    assert!(matches!(err, VeriguardError::UnknownEvent(_)));
    assert!(err.is_client_error());
    assert!(svc.tickets().is_empty());
}

#[test]
fn e2e_blank_event_id_is_unknown_event() {
    let svc = service(true);
    let err = svc
        .list(ListingRequest::new("StubHub", "", "101", None, "10"))
        .unwrap_err();
    assert!(matches!(err, VeriguardError::UnknownEvent(_)));
    assert!(svc.tickets().is_empty());
}

#[test]
fn e2e_blank_section_is_listed() {
    let svc = service(true);
    let resp = svc.list(listing("StubHub", "", None, "10")).unwrap();
    assert_eq!(resp.decision, Decision::Approved);
    assert_eq!(svc.tickets().len(), 1);
}

// =============================================================================
// Row: null and empty string are the same row
// =============================================================================
#[test]
fn e2e_null_row_and_empty_row_collide() {
    let svc = service(true);
    svc.list(listing("StubHub", "101", None, "10")).unwrap();
    let second = svc.list(listing("StubHub", "101", Some(""), "10")).unwrap();
    assert_eq!(second.decision, Decision::BlockedDuplicate);
}

// =============================================================================
// Normalization through the full path
// =============================================================================
#[test]
fn e2e_case_and_whitespace_variants_collide() {
    let svc = service(true);
    svc.list(listing("StubHub", "GA Floor", Some("b"), "12A")).unwrap();
    let mut req = listing("seatgeek", "  ga floor ", Some(" B"), "12a ");
    req.event_id = format!(" {} ", EVENT.to_uppercase());
    // Catalog lookup is exact-key, so the padded id is an unknown event.
    assert!(svc.list(req.clone()).is_err());

    req.event_id = EVENT.to_string();
    let resp = svc.list(req).unwrap();
    assert_eq!(resp.decision, Decision::BlockedDuplicate);
}

// =============================================================================
// Reads are idempotent
// =============================================================================
#[test]
fn e2e_repeated_reads_identical() {
    let svc = service(true);
    svc.bulk_list(&bulk("StubHub", &["1", "1"])).unwrap();
    assert_eq!(svc.tickets(), svc.tickets());
    assert_eq!(svc.events(), svc.events());
    assert_eq!(svc.event(EVENT).unwrap(), svc.event(EVENT).unwrap());
}

// =============================================================================
// File-backed service survives a restart
// =============================================================================
#[test]
fn e2e_file_ledger_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        data_dir: dir.path().join("data"),
        ..ServiceConfig::default()
    };

    let first = {
        let svc = VeriguardService::from_config(&config);
        svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap()
    };
    assert!(config.ledger_path().exists());

    let svc = VeriguardService::from_config(&config);
    assert_eq!(svc.tickets().len(), 1);
    let again = svc.list(listing("SeatGeek", "101", Some("A"), "10")).unwrap();
    assert_eq!(again.duplicate_of_id, Some(first.id));
}

#[test]
fn e2e_corrupt_ledger_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        data_dir: dir.path().to_path_buf(),
        ..ServiceConfig::default()
    };
    std::fs::write(config.ledger_path(), b"[{\"id\": 42").unwrap();

    let svc = VeriguardService::from_config(&config);
    assert!(svc.tickets().is_empty());
    let resp = svc.list(listing("StubHub", "101", Some("A"), "10")).unwrap();
    assert_eq!(resp.decision, Decision::Approved);
}

#[test]
fn e2e_response_json_shape() {
    let svc = service(true);
    let resp = svc.bulk_list(&bulk("StubHub", &["7", "7"])).unwrap();
    let v = serde_json::to_value(&resp).unwrap();
    let results = v["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["decision"], "APPROVED");
    assert!(results[0]["duplicate_of_id"].is_null());
    assert_eq!(results[1]["decision"], "BLOCKED_DUPLICATE");
    assert_eq!(results[1]["duplicate_of_id"], results[0]["id"]);
    assert_eq!(results[1]["ticket"]["duplicate_of_id"], results[0]["id"]);
}
