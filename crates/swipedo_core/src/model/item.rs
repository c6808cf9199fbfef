//! To-do item model.
//!
//! # Responsibility
//! - Define the record shared by the store, the renderer and the FFI layer.
//!
//! # Invariants
//! - `text` is stored verbatim; empty text is a valid (blank) item.
//! - `id` never changes for the lifetime of an item.

use serde::{Deserialize, Serialize};

/// Identifier used as the lookup and deletion key for items.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Allocation-time identifier. Collisions are only possible with the
    /// timestamp allocator.
    pub id: ItemId,
    /// User-supplied text, not validated.
    pub text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns whether this item renders as a blank row.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(Item::new(1, "").is_blank());
        assert!(Item::new(2, "  \t").is_blank());
        assert!(!Item::new(3, " milk ").is_blank());
    }

    #[test]
    fn new_keeps_text_verbatim() {
        let item = Item::new(7, "  padded  ");
        assert_eq!(item.id, 7);
        assert_eq!(item.text, "  padded  ");
    }
}
