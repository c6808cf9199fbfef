//! Root to-do screen service.
//!
//! # Responsibility
//! - Own the item store, input buffer, swipe tracker and edit session.
//! - Turn user gestures (type, add, swipe, tap, edit, delete) into store
//!   commands.
//! - Notify subscribers with the committed snapshot.
//!
//! # Invariants
//! - Only this service mutates screen state; renderers read snapshots.
//! - Submission always succeeds and always clears the input buffer.
//! - Swipe state is resynced against the item list before every publish.
//! - An edit session never outlives the item it edits.

use crate::config::{ConfigError, ScreenConfig};
use crate::model::item::ItemId;
use crate::store::ids::{IdAllocator, SequentialIds};
use crate::store::item_list::ItemList;
use crate::store::item_store::ItemStore;
use crate::ui::input::InputBuffer;
use crate::ui::layout::{ScreenLayout, Viewport};
use crate::ui::render::{render_screen, ScreenView};
use crate::ui::swipe::{RowSwipe, SwipeGeometry, SwipeTracker};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Callback invoked with every published snapshot.
pub type Listener = Box<dyn FnMut(&ScreenSnapshot) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Action exposed by a row's hidden action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    Edit,
    Delete,
}

/// In-progress edit of one item's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub item_id: ItemId,
    pub draft: String,
}

/// Committed screen state handed to observers and renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot {
    pub items: ItemList,
    pub input: String,
    pub swipe: SwipeTracker,
    pub editing: Option<EditSession>,
}

impl ScreenSnapshot {
    pub fn row_state(&self, id: ItemId) -> RowSwipe {
        self.swipe.state(id)
    }
}

/// Failure of an edit-flow command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No live item carries this id.
    ItemNotFound(ItemId),
    /// An edit command arrived with no edit session open.
    NoActiveEdit,
}

impl Display for TodoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::NoActiveEdit => write!(f, "no edit in progress"),
        }
    }
}

impl Error for TodoError {}

/// Root component of the to-do screen.
pub struct TodoService<A: IdAllocator = SequentialIds> {
    config: ScreenConfig,
    viewport: Viewport,
    store: ItemStore<A>,
    input: InputBuffer,
    swipe: SwipeTracker,
    editing: Option<EditSession>,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_subscription: u64,
}

impl TodoService<SequentialIds> {
    /// Builds a session with counter-based ids starting at
    /// `config.first_item_id`.
    pub fn new(config: ScreenConfig) -> Result<Self, ConfigError> {
        let ids = SequentialIds::starting_at(config.first_item_id);
        Self::with_allocator(config, ids)
    }
}

impl<A: IdAllocator> TodoService<A> {
    /// Builds a session seeded from `config` using the provided allocator.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config.validate()` fails.
    pub fn with_allocator(config: ScreenConfig, ids: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = ItemStore::seeded(ids, config.seed_items.iter().cloned());
        let mut swipe = SwipeTracker::new();
        swipe.sync(&store.snapshot());
        info!(
            "event=screen_init module=service status=ok seed_count={}",
            config.seed_items.len()
        );
        Ok(Self {
            config,
            viewport: Viewport::default(),
            store,
            input: InputBuffer::new(),
            swipe,
            editing: None,
            listeners: BTreeMap::new(),
            next_subscription: 1,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.viewport, self.config.swipe_open_percent)
    }

    /// Returns the current state without publishing.
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            items: self.store.snapshot(),
            input: self.input.text().to_string(),
            swipe: self.swipe.clone(),
            editing: self.editing.clone(),
        }
    }

    /// Builds the view tree for the current state.
    pub fn render(&self) -> ScreenView {
        render_screen(&self.snapshot(), &self.config, self.viewport)
    }

    /// Registers `listener` for every future published snapshot.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ScreenSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Returns whether a listener was registered under `id`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Replaces the add field contents.
    pub fn set_input(&mut self, text: impl Into<String>) -> ScreenSnapshot {
        self.input.set_text(text);
        self.publish()
    }

    /// Moves the add field contents into a new item and clears the field.
    ///
    /// # Contract
    /// - Never fails; empty input creates a blank item.
    pub fn submit(&mut self) -> ScreenSnapshot {
        let text = self.input.take();
        self.store.append(text);
        self.publish()
    }

    /// Removes every item carrying `id`.
    pub fn delete(&mut self, id: ItemId) -> ScreenSnapshot {
        self.store.remove(id);
        if self.editing.as_ref().is_some_and(|edit| edit.item_id == id) {
            debug!("event=edit_discarded module=service status=ok item_id={id}");
            self.editing = None;
        }
        self.publish()
    }

    /// Runs a hidden-row action.
    ///
    /// Actions on a row that is not open are ignored and return the current
    /// snapshot unpublished.
    ///
    /// # Errors
    /// - Propagates `begin_edit` errors for `RowAction::Edit`.
    pub fn activate(&mut self, id: ItemId, action: RowAction) -> Result<ScreenSnapshot, TodoError> {
        if !self.swipe.state(id).is_open() {
            debug!("event=row_action module=service status=ignored item_id={id} reason=row_closed");
            return Ok(self.snapshot());
        }
        match action {
            RowAction::Edit => self.begin_edit(id),
            RowAction::Delete => Ok(self.delete(id)),
        }
    }

    /// Opens an edit session prefilled with the item's current text.
    ///
    /// # Errors
    /// - `TodoError::ItemNotFound` when no item carries `id`.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<ScreenSnapshot, TodoError> {
        let draft = self
            .store
            .get(id)
            .map(|item| item.text.clone())
            .ok_or(TodoError::ItemNotFound(id))?;
        self.swipe.close_all();
        self.editing = Some(EditSession { item_id: id, draft });
        Ok(self.publish())
    }

    /// Replaces the draft text of the open edit session.
    ///
    /// # Errors
    /// - `TodoError::NoActiveEdit` when no session is open.
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> Result<ScreenSnapshot, TodoError> {
        let edit = self.editing.as_mut().ok_or(TodoError::NoActiveEdit)?;
        edit.draft = text.into();
        Ok(self.publish())
    }

    /// Writes the draft back to the item and closes the session.
    ///
    /// # Errors
    /// - `TodoError::NoActiveEdit` when no session is open.
    /// - `TodoError::ItemNotFound` when the item disappeared; the session is
    ///   discarded.
    pub fn commit_edit(&mut self) -> Result<ScreenSnapshot, TodoError> {
        let edit = self.editing.take().ok_or(TodoError::NoActiveEdit)?;
        if self.store.get(edit.item_id).is_none() {
            self.publish();
            return Err(TodoError::ItemNotFound(edit.item_id));
        }
        self.store.update(edit.item_id, edit.draft.as_str());
        Ok(self.publish())
    }

    /// Drops the open edit session, if any, without touching the item.
    pub fn cancel_edit(&mut self) -> ScreenSnapshot {
        self.editing = None;
        self.publish()
    }

    /// Resolves a released horizontal drag of `dx` pixels on row `id`.
    pub fn release_drag(&mut self, id: ItemId, dx: f32) -> ScreenSnapshot {
        if self.store.get(id).is_none() {
            debug!("event=row_drag module=service status=ignored item_id={id} reason=unknown_row");
            return self.snapshot();
        }
        let geometry = self.swipe_geometry();
        let state = self.swipe.release_drag(id, dx, &geometry);
        debug!(
            "event=row_drag module=service status=ok item_id={id} open={}",
            state.is_open()
        );
        self.publish()
    }

    /// Closes every open row, as a tap elsewhere on the screen does.
    pub fn close_rows(&mut self) -> ScreenSnapshot {
        self.swipe.close_all();
        self.publish()
    }

    /// Applies a new viewport size reported by the host.
    pub fn resize(&mut self, viewport: Viewport) -> ScreenSnapshot {
        self.viewport = viewport;
        self.publish()
    }

    fn swipe_geometry(&self) -> SwipeGeometry {
        SwipeGeometry {
            open_distance: self.layout().swipe_open_distance,
            open_ratio: self.config.swipe_open_ratio,
            close_ratio: self.config.swipe_close_ratio,
        }
    }

    fn publish(&mut self) -> ScreenSnapshot {
        let items = self.store.snapshot();
        if self.swipe.sync(&items) {
            debug!("event=swipe_reset module=service status=ok");
        }
        let snapshot = self.snapshot();
        for listener in self.listeners.values_mut() {
            listener(&snapshot);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::{RowAction, TodoError, TodoService};
    use crate::config::ScreenConfig;
    use crate::ui::swipe::{RowSwipe, SwipeSide};

    fn service() -> TodoService {
        TodoService::new(ScreenConfig::default()).expect("default config is valid")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = ScreenConfig {
            swipe_open_ratio: 2.0,
            ..ScreenConfig::default()
        };
        assert!(TodoService::new(config).is_err());
    }

    #[test]
    fn new_rejects_first_item_id_without_room_for_seeds() {
        let config = ScreenConfig {
            first_item_id: i64::MAX,
            ..ScreenConfig::default()
        };
        let err = TodoService::new(config).err().expect("id overflow must be rejected");
        assert!(err.to_string().contains("first_item_id"));
    }

    #[test]
    fn activate_on_closed_row_is_ignored() {
        let mut service = service();
        let before = service.snapshot();
        let after = service
            .activate(1, RowAction::Delete)
            .expect("ignored action is not an error");
        assert_eq!(after.items, before.items);
        assert_eq!(after.items.revision(), before.items.revision());
    }

    #[test]
    fn opening_a_second_row_closes_the_first() {
        let mut service = service();
        service.release_drag(1, 100.0);
        let snapshot = service.release_drag(2, -100.0);
        assert_eq!(snapshot.row_state(1), RowSwipe::Closed);
        assert_eq!(snapshot.row_state(2), RowSwipe::Open(SwipeSide::Trailing));
    }

    #[test]
    fn commit_edit_without_session_fails() {
        let mut service = service();
        assert_eq!(service.commit_edit().unwrap_err(), TodoError::NoActiveEdit);
    }

    #[test]
    fn drag_on_unknown_row_is_ignored() {
        let mut service = service();
        let snapshot = service.release_drag(404, 100.0);
        assert_eq!(snapshot.swipe.open_row(), None);
    }
}
