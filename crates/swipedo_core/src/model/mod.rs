//! Domain model for the to-do screen.
//!
//! # Responsibility
//! - Define the single domain record rendered as one list row.
//!
//! # Invariants
//! - Every item is identified by an `ItemId` that is unique among live
//!   items when allocated by `SequentialIds`.
//! - Items are flat: no nesting, no secondary indices.

pub mod item;
