//! Item store: immutable list snapshots and identifier allocation.
//!
//! # Responsibility
//! - Own the ordered item sequence behind append/remove/update commands.
//! - Hand out new snapshots instead of mutating shared state in place.
//!
//! # Invariants
//! - Insertion order is display order; items are only appended at the tail.
//! - A command that changes nothing returns a snapshot with the same revision.

pub mod ids;
pub mod item_list;
pub mod item_store;
