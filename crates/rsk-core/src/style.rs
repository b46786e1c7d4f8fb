//! Stroke style, derived per segment from the current settings.

use crate::color::Color;
use crate::settings::{BACKGROUND, Settings};
use crate::tool::ToolKind;

/// Blur radius of the brush glow, in pixels.
pub const GLOW_BLUR: f64 = 5.0;

/// Soft halo painted beneath a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Color,
}

/// Everything the rasterizer needs to paint one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    pub glow: Option<Glow>,
}

impl StrokeStyle {
    /// Compose the style for the active tool. Never stored; call per segment.
    pub fn resolve(settings: &Settings) -> Self {
        let color = match settings.tool {
            ToolKind::Eraser => BACKGROUND,
            ToolKind::Pencil | ToolKind::Brush => settings.color,
        };
        let glow = settings.tool.has_glow().then_some(Glow {
            blur: GLOW_BLUR,
            color,
        });
        Self {
            width: settings.width,
            color,
            glow,
        }
    }

    /// Glow blur radius, zero when the stroke has no glow.
    pub fn glow_radius(&self) -> f64 {
        self.glow.map_or(0.0, |g| g.blur)
    }
}
