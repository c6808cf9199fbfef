//! Presentation state and view building for the to-do screen.
//!
//! # Responsibility
//! - Hold UI-owned state that is not part of the domain model (input text,
//!   per-row swipe state).
//! - Turn snapshots into plain view trees that any host UI can draw.
//!
//! # Invariants
//! - Nothing in this module mutates the item store.
//! - Views are pure functions of a snapshot, a config and a viewport.

pub mod input;
pub mod layout;
pub mod render;
pub mod swipe;
