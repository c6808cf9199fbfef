//! Item store command surface.
//!
//! # Responsibility
//! - Provide append/remove/update entry points over `ItemList` snapshots.
//! - Delegate identifier assignment to an `IdAllocator`.
//!
//! # Invariants
//! - Append never fails and accepts empty text.
//! - Remove and update of an unknown id leave the snapshot unchanged.

use crate::model::item::{Item, ItemId};
use crate::store::ids::{IdAllocator, SequentialIds};
use crate::store::item_list::ItemList;
use log::debug;

/// Owner of the current item snapshot.
#[derive(Debug, Clone)]
pub struct ItemStore<A: IdAllocator = SequentialIds> {
    ids: A,
    current: ItemList,
}

impl<A: IdAllocator> ItemStore<A> {
    /// Creates an empty store using the provided allocator.
    pub fn new(ids: A) -> Self {
        Self {
            ids,
            current: ItemList::empty(),
        }
    }

    /// Creates a store holding one item per seed text, in order.
    pub fn seeded<I, S>(ids: A, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new(ids);
        let items = seeds
            .into_iter()
            .map(|text| Item::new(store.ids.next_id(), text))
            .collect::<Vec<_>>();
        store.current = ItemList::from_items(items);
        store
    }

    /// Creates a store from existing items, keeping their ids.
    pub fn from_items(mut ids: A, items: Vec<Item>) -> Self {
        for item in &items {
            ids.observe(item.id);
        }
        Self {
            ids,
            current: ItemList::from_items(items),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> ItemList {
        self.current.clone()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.current.get(id)
    }

    /// Appends a new item with a freshly allocated id.
    ///
    /// # Contract
    /// - Returns the new snapshot; its last element is the created item.
    pub fn append(&mut self, text: impl Into<String>) -> ItemList {
        let item = Item::new(self.ids.next_id(), text);
        debug!(
            "event=item_append module=store status=ok item_id={} text_len={}",
            item.id,
            item.text.chars().count()
        );
        self.current = self.current.appended(item);
        self.snapshot()
    }

    /// Removes every item carrying `id`.
    pub fn remove(&mut self, id: ItemId) -> ItemList {
        let next = self.current.removed(id);
        let removed = self.current.len() - next.len();
        debug!(
            "event=item_remove module=store status={} item_id={} removed={}",
            if removed > 0 { "ok" } else { "noop" },
            id,
            removed
        );
        self.current = next;
        self.snapshot()
    }

    /// Replaces the text of every item carrying `id`.
    pub fn update(&mut self, id: ItemId, text: &str) -> ItemList {
        let next = self.current.updated(id, text);
        debug!(
            "event=item_update module=store status={} item_id={} text_len={}",
            if next.revision() == self.current.revision() {
                "noop"
            } else {
                "ok"
            },
            id,
            text.chars().count()
        );
        self.current = next;
        self.snapshot()
    }
}

impl Default for ItemStore<SequentialIds> {
    fn default() -> Self {
        Self::new(SequentialIds::new())
    }
}
