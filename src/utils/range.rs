//! Slot range lookups
//!
//! Positions and barlines are kept sorted by slot, so range queries are
//! binary searches. Annotations carry no ordering guarantee and are scanned.

use std::ops::Range;

use crate::models::{Anchored, Slot};

/// Indices of the sorted `items` whose slot lies in `[start, end)`
pub fn slot_range<T>(items: &[T], start: Slot, end: Slot, slot_of: impl Fn(&T) -> Slot) -> Range<usize> {
    let lo = items.partition_point(|item| slot_of(item) < start);
    let hi = items.partition_point(|item| slot_of(item) < end);
    lo..hi.max(lo)
}

/// Index of the first sorted item whose slot is strictly greater than `slot`
pub fn first_after<T>(items: &[T], slot: Slot, slot_of: impl Fn(&T) -> Slot) -> Option<usize> {
    let index = items.partition_point(|item| slot_of(item) <= slot);
    (index < items.len()).then_some(index)
}

/// Indices of the annotations anchored exactly at `slot`
pub fn anchored_at<T: Anchored>(items: &[T], slot: Slot) -> impl Iterator<Item = usize> + '_ {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| item.slot() == slot)
        .map(|(index, _)| index)
}
