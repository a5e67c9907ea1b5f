//! Quick Menu Settings
//!
//! Layout, smoothing and timing parameters for a [`QuickMenu`](crate::QuickMenu).
//! Every field has a default, so a JSON file only needs to name what it changes:
//!
//! ```rust,ignore
//! use quick_menu::MenuSettings;
//!
//! let settings = MenuSettings::from_json_str(r#"{ "smooth": 12.0, "line_height": 40.0 }"#)?;
//! assert_eq!(settings.select_wait_time, MenuSettings::default().select_wait_time);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::input::MenuBindings;

/// Configuration for the quick menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    // === Layout ===
    /// Height of one menu line.
    pub line_height: f32,
    /// Extra space between lines (not applied before the second line).
    pub line_space_height: f32,
    /// Vertical text offset that puts the first line under the selector.
    pub first_select_y: f32,
    /// Multiplier applied to summed glyph advances to size the selector.
    pub text_length_multiplier: f32,

    // === Motion ===
    /// Exponential smoothing rate for text offset, line colors and title fade.
    pub smooth: f32,
    /// Smoothing rate of the overall menu opacity.
    pub canvas_fade_rate: f32,
    /// Title opacity at or below which a fade-out counts as finished.
    pub fade_out_threshold: f32,
    /// Cooldown after a selection step during which Up/Down is ignored, in seconds.
    pub select_wait_time: f32,

    // === Animated selector properties (initial values) ===
    /// 0 sizes the selector from the text width, 1 uses `target_width`.
    pub selector_blend: f32,
    /// Selector width used when `selector_blend` is 1.
    pub target_width: f32,
    /// Constant added to the selector width.
    pub selector_offset: f32,

    /// Key bindings.
    pub bindings: MenuBindings,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            line_height: 36.0,
            line_space_height: 4.0,
            first_select_y: 0.0,
            text_length_multiplier: 0.01,
            smooth: 10.0,
            canvas_fade_rate: 6.0,
            fade_out_threshold: 0.05,
            select_wait_time: 0.2,
            selector_blend: 0.0,
            target_width: 1.0,
            selector_offset: 0.2,
            bindings: MenuBindings::default(),
        }
    }
}

impl MenuSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&text)?;
        log::debug!("Loaded menu settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Vertical text offset that places line `index` under the selector.
    #[must_use]
    pub fn line_offset(&self, index: usize) -> f32 {
        let index_f = index as f32;
        let spacing = index.saturating_sub(1) as f32;
        self.first_select_y + self.line_height * index_f + self.line_space_height * spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings =
            MenuSettings::from_json_str(r#"{ "smooth": 3.5, "bindings": { "confirm": "Enter" } }"#)
                .unwrap();
        assert_eq!(settings.smooth, 3.5);
        assert_eq!(settings.bindings.confirm, Key::Enter);
        assert_eq!(settings.bindings.up, Key::ArrowUp);
        assert_eq!(settings.line_height, MenuSettings::default().line_height);
    }

    #[test]
    fn line_spacing_starts_after_second_line() {
        let settings = MenuSettings {
            first_select_y: 5.0,
            line_height: 10.0,
            line_space_height: 2.0,
            ..Default::default()
        };
        assert_eq!(settings.line_offset(0), 5.0);
        assert_eq!(settings.line_offset(1), 15.0);
        assert_eq!(settings.line_offset(3), 39.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MenuSettings::from_json_str("{ smooth: }").is_err());
    }
}
