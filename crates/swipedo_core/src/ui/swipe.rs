//! Per-row swipe state machine.
//!
//! # Responsibility
//! - Track which row, if any, has its hidden action row exposed.
//! - Resolve released horizontal drags into open/closed transitions.
//!
//! # Invariants
//! - At most one row is open at a time.
//! - State is bound to one `Revision`; syncing against a different
//!   snapshot closes every row.
//! - Left and right drags use the same distances.

use crate::model::item::ItemId;
use crate::store::item_list::{ItemList, Revision};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which side of the hidden row is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeSide {
    /// Exposed by dragging the row to the right.
    Leading,
    /// Exposed by dragging the row to the left.
    Trailing,
}

/// Swipe state of one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSwipe {
    #[default]
    Closed,
    Open(SwipeSide),
}

impl RowSwipe {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Horizontal translation of the visible row for this state.
    pub fn offset(self, open_distance: f32) -> f32 {
        match self {
            Self::Closed => 0.0,
            Self::Open(SwipeSide::Leading) => open_distance,
            Self::Open(SwipeSide::Trailing) => -open_distance,
        }
    }
}

/// Distances that decide how a released drag resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGeometry {
    /// How far an open row is translated, in pixels.
    pub open_distance: f32,
    /// Share of `open_distance` a closed row must travel to open.
    pub open_ratio: f32,
    /// Share of `open_distance` an open row must travel back to close.
    pub close_ratio: f32,
}

impl SwipeGeometry {
    pub fn open_threshold(&self) -> f32 {
        self.open_distance * self.open_ratio
    }

    pub fn close_threshold(&self) -> f32 {
        self.open_distance * self.close_ratio
    }
}

/// Transient swipe state for all rows of one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    revision: Option<Revision>,
    open: BTreeMap<ItemId, SwipeSide>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the tracker to `list`, closing every row when the list
    /// identity changed. Returns whether state was reset.
    pub fn sync(&mut self, list: &ItemList) -> bool {
        let revision = Some(list.revision());
        if self.revision == revision {
            return false;
        }
        self.revision = revision;
        let had_open = !self.open.is_empty();
        self.open.clear();
        had_open
    }

    pub fn state(&self, id: ItemId) -> RowSwipe {
        self.open
            .get(&id)
            .map_or(RowSwipe::Closed, |side| RowSwipe::Open(*side))
    }

    /// Returns the currently open row.
    pub fn open_row(&self) -> Option<(ItemId, SwipeSide)> {
        self.open.iter().next().map(|(id, side)| (*id, *side))
    }

    /// Resolves a released drag of `dx` pixels on row `id`.
    ///
    /// Positive `dx` is a drag to the right. Opening a row closes any other
    /// open row.
    pub fn release_drag(&mut self, id: ItemId, dx: f32, geometry: &SwipeGeometry) -> RowSwipe {
        let next = match self.state(id) {
            RowSwipe::Closed => {
                if dx != 0.0 && dx.abs() >= geometry.open_threshold() {
                    let side = if dx > 0.0 {
                        SwipeSide::Leading
                    } else {
                        SwipeSide::Trailing
                    };
                    RowSwipe::Open(side)
                } else {
                    RowSwipe::Closed
                }
            }
            RowSwipe::Open(side) => {
                let travel_back = match side {
                    SwipeSide::Leading => -dx,
                    SwipeSide::Trailing => dx,
                };
                if travel_back > 0.0 && travel_back >= geometry.close_threshold() {
                    RowSwipe::Closed
                } else {
                    RowSwipe::Open(side)
                }
            }
        };

        match next {
            RowSwipe::Open(side) => {
                self.open.clear();
                self.open.insert(id, side);
            }
            RowSwipe::Closed => {
                self.open.remove(&id);
            }
        }
        next
    }

    /// Closes every row, as a tap outside the open row does.
    pub fn close_all(&mut self) {
        self.open.clear();
    }
}
