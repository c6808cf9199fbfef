//! Flutter-facing bindings for the to-do screen core.

pub mod api;
