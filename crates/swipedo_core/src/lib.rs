//! Core state and view logic for the swipe-to-delete to-do screen.
//! This crate is the single source of truth for screen invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod ui;

pub use config::{ConfigError, ScreenConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId};
pub use service::todo_service::{
    EditSession, RowAction, ScreenSnapshot, SubscriptionId, TodoError, TodoService,
};
pub use store::ids::{IdAllocator, SequentialIds, TimestampIds};
pub use store::item_list::{ItemList, Revision};
pub use store::item_store::ItemStore;
pub use ui::input::InputBuffer;
pub use ui::layout::{ScreenLayout, Theme, Viewport};
pub use ui::render::{render_screen, RowView, ScreenView};
pub use ui::swipe::{RowSwipe, SwipeGeometry, SwipeSide, SwipeTracker};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
