//! Ambient effects layered over the drawing.
//!
//! Neither effect knows about strokes. The retro filter recurs on a fixed
//! timer; the texture overlay runs once, whenever its asset is ready. Both
//! paint straight onto the surface, so whatever they land on top of is
//! tinted. A texture that finishes loading after the user has started
//! drawing will paint over those early strokes; hosts must not reorder the
//! two to hide that.

use rsk_core::Color;
use rsk_render::{BlendMode, RgbaImage, Surface, decode_png, fill_surface, tile_pattern};

/// Period of the retro filter.
pub const RETRO_INTERVAL_MS: u32 = 1000;

/// `rgba(212, 188, 139, 0.1)`: a faint sepia wash.
pub const RETRO_TINT: Color = Color::rgba(212.0 / 255.0, 188.0 / 255.0, 139.0 / 255.0, 0.1);

/// Opacity of the tiled paper texture.
pub const TEXTURE_ALPHA: f32 = 0.1;

/// Periodic multiply tint over the whole surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetroFilter {
    pub tint: Color,
    pub interval_ms: u32,
}

impl Default for RetroFilter {
    fn default() -> Self {
        Self {
            tint: RETRO_TINT,
            interval_ms: RETRO_INTERVAL_MS,
        }
    }
}

impl RetroFilter {
    /// One tick of the filter. Blend mode is per call, so normal blending
    /// is in effect again as soon as this returns.
    pub fn apply(&self, surface: &mut Surface) {
        fill_surface(surface, self.tint, BlendMode::Multiply);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Applied,
    Failed,
}

/// One-shot tiled paper texture.
#[derive(Debug, Clone)]
pub struct TextureOverlay {
    alpha: f32,
    state: TextureState,
}

impl Default for TextureOverlay {
    fn default() -> Self {
        Self::new(TEXTURE_ALPHA)
    }
}

impl TextureOverlay {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            state: TextureState::Pending,
        }
    }

    pub fn state(&self) -> TextureState {
        self.state
    }

    /// Tile `texture` over the surface if this overlay has not run yet.
    /// Returns whether anything was painted.
    pub fn on_loaded(&mut self, surface: &mut Surface, texture: &RgbaImage) -> bool {
        if self.state != TextureState::Pending {
            log::debug!("texture overlay already settled ({:?}); ignoring", self.state);
            return false;
        }
        tile_pattern(surface, texture, self.alpha);
        self.state = TextureState::Applied;
        log::info!(
            "texture overlay applied ({}x{} tile @ {})",
            texture.width(),
            texture.height(),
            self.alpha
        );
        true
    }

    /// Decode PNG bytes and apply them. A decode failure is logged and
    /// settles the overlay without painting.
    pub fn on_loaded_png(&mut self, surface: &mut Surface, png: &[u8]) -> bool {
        if self.state != TextureState::Pending {
            return false;
        }
        match decode_png(png) {
            Ok(texture) => self.on_loaded(surface, &texture),
            Err(e) => {
                log::warn!("texture overlay skipped: {e}");
                self.state = TextureState::Failed;
                false
            }
        }
    }
}
