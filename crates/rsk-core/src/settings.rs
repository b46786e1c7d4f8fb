//! User-adjustable drawing options.
//!
//! Everything the toolbar can change lives in one `Settings` value owned by
//! the stroke renderer. Hosts mutate it through the setters below.

use crate::color::Color;
use crate::tool::ToolKind;
use serde::{Deserialize, Serialize};

/// Blank canvas color. The eraser paints with it too.
pub const BACKGROUND: Color = Color::WHITE;

/// Size slider bounds.
pub const MIN_WIDTH: f64 = 1.0;
pub const MAX_WIDTH: f64 = 50.0;
pub const DEFAULT_WIDTH: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub tool: ToolKind,
    pub color: Color,
    pub width: f64,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pencil,
            color: Color::BLACK,
            width: DEFAULT_WIDTH,
            sound_enabled: true,
        }
    }
}

impl Settings {
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Non-finite widths are ignored; everything else is clamped to the slider range.
    pub fn set_width(&mut self, width: f64) {
        if width.is_finite() {
            self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        } else {
            log::warn!("ignoring non-finite stroke width {width}");
        }
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Flip the sound flag, returning the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
