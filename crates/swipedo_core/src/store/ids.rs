//! Identifier allocation strategies.

use crate::model::item::ItemId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of identifiers for newly created items.
pub trait IdAllocator {
    /// Allocates the identifier for the next item.
    fn next_id(&mut self) -> ItemId;

    /// Records an identifier that entered the store from elsewhere, such
    /// as a seed item, so later allocations can avoid it.
    fn observe(&mut self, id: ItemId);
}

/// Monotonic counter, independent of wall-clock time.
///
/// # Invariants
/// - Every returned id is strictly greater than all ids returned or
///   observed before it, as long as the counter stays below `ItemId::MAX`.
///   `ScreenConfig::validate` rejects starting points without that room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next: ItemId,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: ItemId) -> Self {
        Self { next: first }
    }

    /// Returns the id the next call to `next_id` will hand out.
    pub fn peek(&self) -> ItemId {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, id: ItemId) {
        if id >= self.next {
            self.next = id.saturating_add(1);
        }
    }
}

/// Epoch-millisecond identifiers, strictly increasing within a process.
///
/// Ids start from the wall clock; when the clock has not advanced past the
/// last id, the next id is `last + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampIds {
    last: Option<ItemId>,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdAllocator for TimestampIds {
    fn next_id(&mut self) -> ItemId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| ItemId::try_from(elapsed.as_millis()).unwrap_or(ItemId::MAX))
            .unwrap_or_default();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        id
    }

    fn observe(&mut self, id: ItemId) {
        if self.last.map_or(true, |last| id > last) {
            self.last = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IdAllocator, SequentialIds, TimestampIds};

    #[test]
    fn sequential_ids_are_strictly_increasing() {
        let mut ids = SequentialIds::starting_at(1000);
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first, 1000);
        assert_eq!(second, 1001);
        assert_eq!(ids.peek(), 1002);
    }

    #[test]
    fn observe_skips_past_foreign_ids_only_when_needed() {
        let mut ids = SequentialIds::starting_at(10);
        ids.observe(4);
        assert_eq!(ids.peek(), 10);
        ids.observe(42);
        assert_eq!(ids.next_id(), 43);
    }

    #[test]
    fn timestamp_ids_are_positive_epoch_millis() {
        let mut ids = TimestampIds::new();
        assert!(ids.next_id() > 1_600_000_000_000);
    }

    #[test]
    fn timestamp_ids_never_repeat_within_one_millisecond() {
        let mut ids = TimestampIds::new();
        let allocated = (0..50).map(|_| ids.next_id()).collect::<Vec<_>>();
        assert!(allocated.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn timestamp_ids_skip_past_observed_future_ids() {
        let mut ids = TimestampIds::new();
        let future = ids.next_id() + 60_000;
        ids.observe(future);
        assert_eq!(ids.next_id(), future + 1);
    }
}
