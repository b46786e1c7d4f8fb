//! The raster surface strokes and effects are painted onto.
//!
//! Committed pixels are the only state: nothing about individual strokes
//! survives rasterization.

use image::{Rgba, RgbaImage};
use kurbo::Rect;
use rsk_core::{BACKGROUND, Color};

/// Fixed-size RGBA8 pixel buffer with a fill color used by `clear` and `resize`.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
    background: Color,
}

impl Surface {
    /// A surface of the given size, cleared to the default background.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, BACKGROUND)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8())),
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Whole-surface rectangle in pixel space.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }

    /// Reallocate at a new size. All previous pixels are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::info!("surface resize {}x{} -> {width}x{height}", self.width(), self.height());
        self.pixels = RgbaImage::from_pixel(width, height, Rgba(self.background.to_rgba8()));
    }

    /// Repaint every pixel with the background color.
    pub fn clear(&mut self) {
        let fill = Rgba(self.background.to_rgba8());
        for px in self.pixels.pixels_mut() {
            *px = fill;
        }
    }

    /// RGBA channels at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.pixels.get_pixel(x, y).0)
    }

    /// True when every pixel equals `color` once quantized.
    pub fn is_uniform(&self, color: Color) -> bool {
        let target = color.to_rgba8();
        self.pixels.pixels().all(|px| px.0 == target)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Row-major RGBA bytes, ready for `ImageData`.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Source-over composite of `color` at `coverage` onto one pixel.
    /// Out-of-bounds coordinates are ignored.
    pub(crate) fn blend_over(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 || x >= self.width() || y >= self.height() {
            return;
        }
        let px = self.pixels.get_pixel_mut(x, y);
        px.0 = source_over(px.0, color, alpha);
    }

    /// Multiply composite of `color` at its own alpha onto one pixel.
    pub(crate) fn blend_multiply(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let px = self.pixels.get_pixel_mut(x, y);
        px.0 = multiply(px.0, color);
    }
}

fn source_over(dst: [u8; 4], src: Color, alpha: f32) -> [u8; 4] {
    let da = f32::from(dst[3]) / 255.0;
    let out_a = alpha + da * (1.0 - alpha);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let channel = |s: f32, d: u8| {
        let d = f32::from(d) / 255.0;
        to_u8((s * alpha + d * da * (1.0 - alpha)) / out_a)
    };
    [
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        to_u8(out_a),
    ]
}

/// `dst * (1 - a) + dst * src * a` per channel; alpha is left as is.
fn multiply(dst: [u8; 4], src: Color) -> [u8; 4] {
    let a = src.a.clamp(0.0, 1.0);
    let channel = |s: f32, d: u8| {
        let d = f32::from(d) / 255.0;
        to_u8(d * (1.0 - a) + d * s * a)
    };
    [
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        dst[3],
    ]
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
