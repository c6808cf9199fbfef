//! Responsive sizing for the single-screen layout.
//!
//! All sizes are expressed as percentages of the viewport so the screen
//! keeps its proportions on any device.

use serde::{Deserialize, Serialize};

/// Device viewport in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Width percentage to pixels.
    pub fn wp(&self, percent: f32) -> f32 {
        self.width * percent / 100.0
    }

    /// Height percentage to pixels.
    pub fn hp(&self, percent: f32) -> f32 {
        self.height * percent / 100.0
    }
}

impl Default for Viewport {
    /// A common phone viewport, used until the host reports its size.
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Computed pixel sizes for every screen region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub header_height: f32,
    pub header_padding_left: f32,
    pub title_font_size: f32,
    pub list_height: f32,
    pub row_width: f32,
    pub row_height: f32,
    pub row_margin_horizontal: f32,
    pub row_gap: f32,
    pub marker_size: f32,
    pub trailing_marker_size: f32,
    pub text_width: f32,
    pub glyph_size: f32,
    pub input_width: f32,
    pub input_height: f32,
    pub add_button_size: f32,
    pub swipe_open_distance: f32,
}

impl ScreenLayout {
    /// Computes the layout for `viewport`; `swipe_open_percent` is the share
    /// of screen width a row slides when opened.
    pub fn compute(viewport: Viewport, swipe_open_percent: f32) -> Self {
        let row_width = viewport.wp(90.0);
        Self {
            header_height: viewport.hp(20.0),
            header_padding_left: viewport.wp(10.0),
            title_font_size: viewport.hp(3.0),
            list_height: viewport.hp(70.0),
            row_width,
            row_height: row_width / 4.0,
            row_margin_horizontal: viewport.wp(5.0),
            row_gap: viewport.hp(2.0),
            marker_size: viewport.hp(4.0),
            trailing_marker_size: viewport.hp(2.0),
            text_width: viewport.wp(50.0),
            glyph_size: viewport.hp(3.0),
            input_width: viewport.wp(60.0),
            input_height: viewport.hp(5.0),
            add_button_size: viewport.hp(5.0),
            swipe_open_distance: viewport.wp(swipe_open_percent),
        }
    }
}

/// Fixed colour palette, as `#RRGGBB` strings.
pub struct Theme;

impl Theme {
    pub const BACKGROUND: &'static str = "#E8EAED";
    pub const ACCENT: &'static str = "#8D71FE";
    pub const SURFACE: &'static str = "#FFFFFF";
    pub const PLACEHOLDER: &'static str = "#AAAAAA";
    /// Opacity applied to the leading check marker.
    pub const MARKER_OPACITY: f32 = 0.4;
}

#[cfg(test)]
mod tests {
    use super::{ScreenLayout, Viewport};

    #[test]
    fn percentages_scale_with_viewport() {
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(viewport.wp(10.0), 40.0);
        assert_eq!(viewport.hp(20.0), 160.0);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let viewport = Viewport::new(-1.0, 10.0);
        assert_eq!(viewport.width, 0.0);
    }

    #[test]
    fn row_height_is_quarter_of_row_width() {
        let layout = ScreenLayout::compute(Viewport::new(400.0, 800.0), 10.0);
        assert_eq!(layout.row_width, 360.0);
        assert_eq!(layout.row_height, 90.0);
        assert_eq!(layout.swipe_open_distance, 40.0);
        assert_eq!(layout.list_height, 560.0);
    }
}
