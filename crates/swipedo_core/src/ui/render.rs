//! View tree builder.
//!
//! # Responsibility
//! - Map a `ScreenSnapshot` to one visible row plus one hidden action row
//!   per item, in list order.
//! - Describe the title, add field, add button and edit field.
//!
//! # Invariants
//! - Row order equals item order.
//! - Hidden actions are only enabled on the open row.

use crate::config::ScreenConfig;
use crate::model::item::ItemId;
use crate::service::todo_service::{RowAction, ScreenSnapshot};
use crate::ui::layout::{ScreenLayout, Theme, Viewport};
use crate::ui::swipe::RowSwipe;
use serde::Serialize;

pub const EDIT_GLYPH: &str = "✏️";
pub const DELETE_GLYPH: &str = "🗑️";
pub const ADD_LABEL: &str = "➕";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    RoundedSquare,
    Circle,
}

/// Decorative marker drawn at either end of a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub shape: MarkerShape,
    pub size: f32,
    pub color: &'static str,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub action: RowAction,
    pub glyph: &'static str,
    pub enabled: bool,
}

/// Action row revealed behind a swiped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenRowView {
    pub edit: ActionView,
    pub delete: ActionView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub item_id: ItemId,
    pub text: String,
    pub is_blank: bool,
    pub leading: Marker,
    pub trailing: Marker,
    pub swipe: RowSwipe,
    /// Horizontal translation of the visible row, in pixels.
    pub offset: f32,
    pub hidden: HiddenRowView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFieldView {
    pub value: String,
    pub placeholder: String,
    pub shows_placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditFieldView {
    pub item_id: ItemId,
    pub draft: String,
}

/// Complete description of one frame of the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    pub title: String,
    pub background: &'static str,
    pub layout: ScreenLayout,
    pub rows: Vec<RowView>,
    pub input: InputFieldView,
    pub add_button: ButtonView,
    pub edit: Option<EditFieldView>,
}

/// Builds the view tree for `snapshot`.
pub fn render_screen(
    snapshot: &ScreenSnapshot,
    config: &ScreenConfig,
    viewport: Viewport,
) -> ScreenView {
    let layout = ScreenLayout::compute(viewport, config.swipe_open_percent);
    let leading = Marker {
        shape: MarkerShape::RoundedSquare,
        size: layout.marker_size,
        color: Theme::ACCENT,
        opacity: Theme::MARKER_OPACITY,
    };
    let trailing = Marker {
        shape: MarkerShape::Circle,
        size: layout.trailing_marker_size,
        color: Theme::ACCENT,
        opacity: 1.0,
    };

    let rows = snapshot
        .items
        .iter()
        .map(|item| {
            let swipe = snapshot.row_state(item.id);
            let enabled = swipe.is_open();
            RowView {
                item_id: item.id,
                text: item.text.clone(),
                is_blank: item.is_blank(),
                leading,
                trailing,
                swipe,
                offset: swipe.offset(layout.swipe_open_distance),
                hidden: HiddenRowView {
                    edit: ActionView {
                        action: RowAction::Edit,
                        glyph: EDIT_GLYPH,
                        enabled,
                    },
                    delete: ActionView {
                        action: RowAction::Delete,
                        glyph: DELETE_GLYPH,
                        enabled,
                    },
                },
            }
        })
        .collect();

    ScreenView {
        title: config.title.clone(),
        background: Theme::BACKGROUND,
        layout,
        rows,
        input: InputFieldView {
            value: snapshot.input.clone(),
            placeholder: config.placeholder.clone(),
            shows_placeholder: snapshot.input.is_empty(),
        },
        add_button: ButtonView { label: ADD_LABEL },
        edit: snapshot.editing.as_ref().map(|edit| EditFieldView {
            item_id: edit.item_id,
            draft: edit.draft.clone(),
        }),
    }
}
