//! Whole-surface compositing: tinted fills and tiled patterns.

use crate::surface::Surface;
use image::RgbaImage;
use rsk_core::Color;

/// How a fill combines with the pixels already on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Standard alpha compositing.
    #[default]
    SourceOver,
    /// `dst = lerp(dst, dst * src, src_alpha)`; darkens, never lightens.
    Multiply,
}

/// Composite `color` over every pixel of the surface.
pub fn fill_surface(surface: &mut Surface, color: Color, mode: BlendMode) {
    let (width, height) = surface.size();
    log::trace!("FILL {} {:?} over {width}x{height}", color.to_hex(), mode);
    for y in 0..height {
        for x in 0..width {
            match mode {
                BlendMode::SourceOver => surface.blend_over(x, y, color, 1.0),
                BlendMode::Multiply => surface.blend_multiply(x, y, color),
            }
        }
    }
}

/// Tile `pattern` from the origin across the surface at `alpha` opacity.
///
/// Each texel's own alpha is scaled by `alpha`. An empty pattern is a no-op.
pub fn tile_pattern(surface: &mut Surface, pattern: &RgbaImage, alpha: f32) {
    let (tw, th) = pattern.dimensions();
    if tw == 0 || th == 0 || alpha <= 0.0 {
        return;
    }
    let (width, height) = surface.size();
    log::trace!("PATTERN {tw}x{th} @ {alpha} over {width}x{height}");
    for y in 0..height {
        for x in 0..width {
            let [r, g, b, a] = pattern.get_pixel(x % tw, y % th).0;
            let texel = Color::from_rgb8(r, g, b, f32::from(a) / 255.0);
            surface.blend_over(x, y, texel, alpha);
        }
    }
}
