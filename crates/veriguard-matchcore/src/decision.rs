//! Duplicate decision engine.
//!
//! ```text
//! decide(listing, ledger, policy) -> DecisionResult
//! ```
//!
//! Scans the ledger in insertion order and stops at the first record that
//! holds the same seat and qualifies under the [`DuplicatePolicy`]. The scan
//! is O(n) with no index; the whole ledger is walked for every approval.
//! Blocked records are scanned as well.
//!
//! The engine is total: it never errors. Unknown events are rejected by
//! intake before a decision is requested.

use veriguard_types::{Decision, SeatDescriptor, TicketRecord};

use crate::seat::{is_same_seat, same_marketplace};

/// Which seat repeats count as duplicates. Fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Any earlier listing of the seat blocks, whichever marketplace made it.
    BlockWithinMarketplace,
    /// Only an earlier listing from a *different* marketplace blocks; a
    /// marketplace may relist its own seat.
    CrossMarketplaceOnly,
}

impl DuplicatePolicy {
    /// Map the boolean `block_within_marketplace` flag to a policy.
    #[must_use]
    pub fn from_flag(block_within_marketplace: bool) -> Self {
        if block_within_marketplace {
            Self::BlockWithinMarketplace
        } else {
            Self::CrossMarketplaceOnly
        }
    }

    /// Whether a seat-matching `prior` record counts against `listing`.
    fn counts<L, P>(self, listing: &L, prior: &P) -> bool
    where
        L: SeatDescriptor + ?Sized,
        P: SeatDescriptor + ?Sized,
    {
        match self {
            Self::BlockWithinMarketplace => true,
            Self::CrossMarketplaceOnly => !same_marketplace(listing, prior),
        }
    }
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::from_flag(veriguard_types::constants::DEFAULT_BLOCK_WITHIN_MARKETPLACE)
    }
}

/// Outcome of one decision, borrowing the matched record from the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionResult<'a> {
    pub outcome: Decision,
    /// The earliest qualifying record; `Some` iff `outcome` is blocked.
    pub matched_record: Option<&'a TicketRecord>,
}

impl<'a> DecisionResult<'a> {
    #[must_use]
    pub fn approved() -> Self {
        Self {
            outcome: Decision::Approved,
            matched_record: None,
        }
    }

    #[must_use]
    pub fn blocked(matched: &'a TicketRecord) -> Self {
        Self {
            outcome: Decision::BlockedDuplicate,
            matched_record: Some(matched),
        }
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.outcome == Decision::BlockedDuplicate
    }
}

/// Decide whether `listing` duplicates a record already in `ledger`.
///
/// `ledger` must be in insertion order and must not contain the listing's
/// own record: the decision is taken before the append.
#[must_use]
pub fn decide<'a, L>(
    listing: &L,
    ledger: &'a [TicketRecord],
    policy: DuplicatePolicy,
) -> DecisionResult<'a>
where
    L: SeatDescriptor + ?Sized,
{
    let matched = ledger
        .iter()
        .filter(|prior| is_same_seat(*prior, listing))
        .find(|prior| policy.counts(listing, *prior));

    match matched {
        Some(prior) => {
            tracing::debug!(
                matched_id = %prior.id,
                matched_marketplace = %prior.marketplace,
                ?policy,
                "seat already listed"
            );
            DecisionResult::blocked(prior)
        }
        None => DecisionResult::approved(),
    }
}
