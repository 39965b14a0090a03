//! Seat identity.
//!
//! Two descriptors name the same seat iff event, section, row, and seat are
//! equal after trimming and case-folding. A missing row equals the empty
//! row. Comparison is on whole strings: `"10"` and `"010"` differ.

use veriguard_types::SeatDescriptor;

/// Trim surrounding whitespace and case-fold.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized `(event, section, row, seat)` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatKey {
    pub event_id: String,
    pub section: String,
    pub row: String,
    pub seat: String,
}

impl SeatKey {
    #[must_use]
    pub fn of<D: SeatDescriptor + ?Sized>(d: &D) -> Self {
        Self {
            event_id: normalize(d.event_id()),
            section: normalize(d.section()),
            row: normalize(d.row().unwrap_or_default()),
            seat: normalize(d.seat()),
        }
    }
}

/// Whether `a` and `b` describe the same physical seat.
#[must_use]
pub fn is_same_seat<A, B>(a: &A, b: &B) -> bool
where
    A: SeatDescriptor + ?Sized,
    B: SeatDescriptor + ?Sized,
{
    SeatKey::of(a) == SeatKey::of(b)
}

/// Whether `a` and `b` were listed by the same marketplace (case-insensitive).
#[must_use]
pub fn same_marketplace<A, B>(a: &A, b: &B) -> bool
where
    A: SeatDescriptor + ?Sized,
    B: SeatDescriptor + ?Sized,
{
    normalize(a.marketplace()) == normalize(b.marketplace())
}
