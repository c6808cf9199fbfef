//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen commands to Dart via FRB as sync calls.
//! - Flatten core views and errors into plain response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One screen session per process; every call sees the latest state.
//! - Every command returns the full screen so the UI redraws from it.

use log::warn;
use std::sync::{Mutex, PoisonError};
use swipedo_core::ui::render::{ADD_LABEL, DELETE_GLYPH, EDIT_GLYPH};
use swipedo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, RowAction, RowSwipe,
    ScreenConfig, ScreenLayout, ScreenView, SwipeSide, Theme, TodoError, TodoService, Viewport,
};

static SESSION: Mutex<Option<TodoService>> = Mutex::new(None);

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Hidden-row action selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoRowAction {
    Edit,
    Delete,
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRowItem {
    pub item_id: i64,
    pub text: String,
    pub is_blank: bool,
    /// `leading|trailing` when the action row is exposed.
    pub open_side: Option<String>,
    /// Horizontal translation of the visible row in logical pixels.
    pub offset: f64,
    /// Whether the hidden edit/delete glyphs accept taps.
    pub actions_enabled: bool,
}

/// Responsive sizes in logical pixels, computed from the last viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoLayoutItem {
    pub header_height: f64,
    pub header_padding_left: f64,
    pub title_font_size: f64,
    pub list_height: f64,
    pub row_width: f64,
    pub row_height: f64,
    pub row_margin_horizontal: f64,
    pub row_gap: f64,
    pub marker_size: f64,
    pub trailing_marker_size: f64,
    pub text_width: f64,
    pub glyph_size: f64,
    pub input_width: f64,
    pub input_height: f64,
    pub add_button_size: f64,
    pub swipe_open_distance: f64,
    /// `#RRGGBB` screen background.
    pub background: String,
    /// `#RRGGBB` marker colour.
    pub accent: String,
}

impl From<ScreenLayout> for TodoLayoutItem {
    fn from(layout: ScreenLayout) -> Self {
        Self {
            header_height: f64::from(layout.header_height),
            header_padding_left: f64::from(layout.header_padding_left),
            title_font_size: f64::from(layout.title_font_size),
            list_height: f64::from(layout.list_height),
            row_width: f64::from(layout.row_width),
            row_height: f64::from(layout.row_height),
            row_margin_horizontal: f64::from(layout.row_margin_horizontal),
            row_gap: f64::from(layout.row_gap),
            marker_size: f64::from(layout.marker_size),
            trailing_marker_size: f64::from(layout.trailing_marker_size),
            text_width: f64::from(layout.text_width),
            glyph_size: f64::from(layout.glyph_size),
            input_width: f64::from(layout.input_width),
            input_height: f64::from(layout.input_height),
            add_button_size: f64::from(layout.add_button_size),
            swipe_open_distance: f64::from(layout.swipe_open_distance),
            background: Theme::BACKGROUND.to_string(),
            accent: Theme::ACCENT.to_string(),
        }
    }
}

/// Full-screen response envelope returned by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoScreenResponse {
    /// Whether the command was applied.
    pub ok: bool,
    /// Empty on success; human-readable reason otherwise.
    pub message: String,
    pub title: String,
    pub rows: Vec<TodoRowItem>,
    pub input_text: String,
    pub placeholder: String,
    pub shows_placeholder: bool,
    pub editing_item_id: Option<i64>,
    pub editing_draft: Option<String>,
    /// `None` only on failed session setup.
    pub layout: Option<TodoLayoutItem>,
    pub edit_glyph: String,
    pub delete_glyph: String,
    pub add_label: String,
}

/// Rebuilds the session from a JSON `ScreenConfig`; missing fields keep
/// their defaults and an empty string selects the default config.
///
/// # FFI contract
/// - Discards current items, input and edit state on success.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_configure(config_json: String) -> String {
    let trimmed = config_json.trim();
    let config = if trimmed.is_empty() {
        ScreenConfig::default()
    } else {
        match serde_json::from_str::<ScreenConfig>(trimmed) {
            Ok(config) => config,
            Err(err) => return format!("todo_configure failed: invalid config json: {err}"),
        }
    };
    match TodoService::new(config) {
        Ok(service) => {
            *lock_session() = Some(service);
            String::new()
        }
        Err(err) => format!("todo_configure failed: {err}"),
    }
}

/// Returns the current screen without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_snapshot() -> TodoScreenResponse {
    run("todo_snapshot", |service| Ok(service.render()))
}

/// Reports the device viewport in logical pixels.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_resize(width: f64, height: f64) -> TodoScreenResponse {
    run("todo_resize", |service| {
        service.resize(Viewport::new(width as f32, height as f32));
        Ok(service.render())
    })
}

/// Mirrors the add field contents.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_set_input(text: String) -> TodoScreenResponse {
    run("todo_set_input", |service| {
        service.set_input(text);
        Ok(service.render())
    })
}

/// Add button: commits the add field as a new item. Never fails.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_submit() -> TodoScreenResponse {
    run("todo_submit", |service| {
        service.submit();
        Ok(service.render())
    })
}

/// Removes the item(s) carrying `item_id`; unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(item_id: i64) -> TodoScreenResponse {
    run("todo_delete", |service| {
        service.delete(item_id);
        Ok(service.render())
    })
}

/// Resolves a released horizontal drag on one row.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_release_drag(item_id: i64, dx: f64) -> TodoScreenResponse {
    run("todo_release_drag", |service| {
        service.release_drag(item_id, dx as f32);
        Ok(service.render())
    })
}

/// Tap outside the open row: closes every row.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_close_rows() -> TodoScreenResponse {
    run("todo_close_rows", |service| {
        service.close_rows();
        Ok(service.render())
    })
}

/// Hidden-row glyph tap. Ignored unless the row is open.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_activate(item_id: i64, action: TodoRowAction) -> TodoScreenResponse {
    let action = match action {
        TodoRowAction::Edit => RowAction::Edit,
        TodoRowAction::Delete => RowAction::Delete,
    };
    run("todo_activate", |service| {
        service.activate(item_id, action)?;
        Ok(service.render())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_begin_edit(item_id: i64) -> TodoScreenResponse {
    run("todo_begin_edit", |service| {
        service.begin_edit(item_id)?;
        Ok(service.render())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_set_edit_text(text: String) -> TodoScreenResponse {
    run("todo_set_edit_text", |service| {
        service.set_edit_text(text)?;
        Ok(service.render())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_commit_edit() -> TodoScreenResponse {
    run("todo_commit_edit", |service| {
        service.commit_edit()?;
        Ok(service.render())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_cancel_edit() -> TodoScreenResponse {
    run("todo_cancel_edit", |service| {
        service.cancel_edit();
        Ok(service.render())
    })
}

fn lock_session() -> std::sync::MutexGuard<'static, Option<TodoService>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn run(
    op: &str,
    f: impl FnOnce(&mut TodoService) -> Result<ScreenView, TodoError>,
) -> TodoScreenResponse {
    let mut guard = lock_session();
    if guard.is_none() {
        match TodoService::new(ScreenConfig::default()) {
            Ok(service) => *guard = Some(service),
            Err(err) => return TodoScreenResponse::failure(format!("{op} failed: {err}")),
        }
    }
    let Some(service) = guard.as_mut() else {
        return TodoScreenResponse::failure(format!("{op} failed: session unavailable"));
    };

    match f(service) {
        Ok(view) => TodoScreenResponse::from_view(view),
        Err(err) => {
            warn!("event=ffi_command module=ffi status=error op={op} error={err}");
            let mut response = TodoScreenResponse::from_view(service.render());
            response.ok = false;
            response.message = format!("{op} failed: {err}");
            response
        }
    }
}

impl TodoScreenResponse {
    fn from_view(view: ScreenView) -> Self {
        let (editing_item_id, editing_draft) = match view.edit {
            Some(edit) => (Some(edit.item_id), Some(edit.draft)),
            None => (None, None),
        };
        Self {
            ok: true,
            message: String::new(),
            title: view.title,
            rows: view
                .rows
                .into_iter()
                .map(|row| TodoRowItem {
                    item_id: row.item_id,
                    text: row.text,
                    is_blank: row.is_blank,
                    open_side: side_label(row.swipe).map(str::to_string),
                    offset: f64::from(row.offset),
                    actions_enabled: row.hidden.edit.enabled && row.hidden.delete.enabled,
                })
                .collect(),
            input_text: view.input.value,
            placeholder: view.input.placeholder,
            shows_placeholder: view.input.shows_placeholder,
            editing_item_id,
            editing_draft,
            layout: Some(TodoLayoutItem::from(view.layout)),
            edit_glyph: EDIT_GLYPH.to_string(),
            delete_glyph: DELETE_GLYPH.to_string(),
            add_label: view.add_button.label.to_string(),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            title: String::new(),
            rows: Vec::new(),
            input_text: String::new(),
            placeholder: String::new(),
            shows_placeholder: true,
            editing_item_id: None,
            editing_draft: None,
            layout: None,
            edit_glyph: EDIT_GLYPH.to_string(),
            delete_glyph: DELETE_GLYPH.to_string(),
            add_label: ADD_LABEL.to_string(),
        }
    }
}

fn side_label(swipe: RowSwipe) -> Option<&'static str> {
    match swipe {
        RowSwipe::Closed => None,
        RowSwipe::Open(SwipeSide::Leading) => Some("leading"),
        RowSwipe::Open(SwipeSide::Trailing) => Some("trailing"),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, todo_activate, todo_begin_edit, todo_commit_edit,
        todo_configure, todo_release_drag, todo_resize, todo_set_edit_text, todo_set_input,
        todo_snapshot, todo_submit, TodoRowAction,
    };
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static SERIAL: Mutex<()> = Mutex::new(());

    fn fresh_session(config_json: &str) -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        let error = todo_configure(config_json.to_string());
        assert!(error.is_empty(), "{error}");
        guard
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn configure_rejects_bad_json_and_out_of_range_values() {
        let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        assert!(todo_configure("{not json".to_string()).contains("invalid config json"));
        assert!(todo_configure(r#"{"swipe_open_percent":80}"#.to_string())
            .contains("swipe_open_percent"));
        assert!(todo_configure(r#"{"first_item_id":9223372036854775807}"#.to_string())
            .contains("first_item_id"));
    }

    #[test]
    fn default_session_shows_seed_rows() {
        let _guard = fresh_session("");
        let response = todo_snapshot();
        assert!(response.ok);
        assert_eq!(response.rows.len(), 2);
        assert!(response.shows_placeholder);
        assert_eq!(response.title, "✅ To do list");
    }

    #[test]
    fn submit_appends_row_and_clears_input() {
        let _guard = fresh_session(r#"{"seed_items":[]}"#);
        let typed = todo_set_input("Hello".to_string());
        assert_eq!(typed.input_text, "Hello");
        assert!(!typed.shows_placeholder);

        let response = todo_submit();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].text, "Hello");
        assert_eq!(response.input_text, "");
    }

    #[test]
    fn swipe_then_delete_via_hidden_action() {
        let _guard = fresh_session(r#"{"first_item_id":1000}"#);
        todo_resize(400.0, 800.0);
        let opened = todo_release_drag(1000, 30.0);
        assert_eq!(opened.rows[0].open_side.as_deref(), Some("leading"));
        assert_eq!(opened.rows[0].offset, 40.0);
        assert!(opened.rows[0].actions_enabled);
        assert!(!opened.rows[1].actions_enabled);

        let response = todo_activate(1000, TodoRowAction::Delete);
        assert!(response.ok);
        let ids = response.rows.iter().map(|row| row.item_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1001]);
    }

    #[test]
    fn responses_carry_responsive_layout() {
        let _guard = fresh_session("");
        let response = todo_resize(400.0, 800.0);
        let layout = response.layout.expect("layout should be present");
        assert_eq!(layout.row_width, 360.0);
        assert_eq!(layout.row_height, 90.0);
        assert_eq!(layout.swipe_open_distance, 40.0);
        assert_eq!(layout.background, "#E8EAED");
        assert_eq!(response.add_label, "➕");
        assert_eq!(response.delete_glyph, "🗑️");
    }

    #[test]
    fn edit_flow_updates_row_text() {
        let _guard = fresh_session(r#"{"first_item_id":1}"#);
        let editing = todo_begin_edit(2);
        assert_eq!(editing.editing_item_id, Some(2));
        assert_eq!(editing.editing_draft.as_deref(), Some("Sample Text"));

        todo_set_edit_text("Renamed".to_string());
        let response = todo_commit_edit();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.rows[1].text, "Renamed");
        assert_eq!(response.editing_item_id, None);
    }

    #[test]
    fn edit_errors_come_back_as_failed_envelopes() {
        let _guard = fresh_session("");
        let response = todo_commit_edit();
        assert!(!response.ok);
        assert!(response.message.contains("no edit in progress"));
        assert_eq!(response.rows.len(), 2);
    }
}
