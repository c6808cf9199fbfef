//! Immutable ordered item snapshots.
//!
//! # Responsibility
//! - Represent one committed state of the item sequence.
//! - Derive successor snapshots for append/remove/update.
//!
//! # Invariants
//! - A snapshot is never mutated after construction.
//! - Every snapshot that differs from its parent carries a fresh,
//!   process-unique `Revision`.
//! - Equality compares elements and order only, not revisions.

use crate::model::item::{Item, ItemId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Identity of one snapshot. Observers compare revisions to detect that
/// the underlying list changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    fn fresh() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Cheap-to-clone snapshot of the ordered item sequence.
#[derive(Debug, Clone)]
pub struct ItemList {
    revision: Revision,
    items: Arc<[Item]>,
}

impl ItemList {
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            revision: Revision::fresh(),
            items: items.into(),
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first item carrying `id`.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a snapshot with `item` added at the tail.
    pub fn appended(&self, item: Item) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self::from_items(items)
    }

    /// Returns a snapshot without any item carrying `id`.
    ///
    /// Every matching item is dropped, so colliding ids are removed
    /// together. When nothing matches, the same snapshot is returned.
    pub fn removed(&self, id: ItemId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect::<Vec<_>>();
        Self::from_items(items)
    }

    /// Returns a snapshot where every item carrying `id` has `text`.
    ///
    /// Order is preserved. When nothing matches or the text is already
    /// equal, the same snapshot is returned.
    pub fn updated(&self, id: ItemId, text: &str) -> Self {
        let changes = self
            .items
            .iter()
            .any(|item| item.id == id && item.text != text);
        if !changes {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item::new(item.id, text)
                } else {
                    item.clone()
                }
            })
            .collect::<Vec<_>>();
        Self::from_items(items)
    }
}

impl Default for ItemList {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for ItemList {}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
