//! Surface → Canvas2D presentation.
//!
//! The raster lives in Rust; the `<canvas>` is only a display. Each present
//! copies just the dirty rows into an `ImageData` and puts it at the
//! region's origin.

use rsk_render::{Rect, Surface};
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

/// Integer pixel region `(x, y, width, height)` of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRegion {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

/// Copy `dirty` (or the whole surface when `None`) onto the canvas.
pub fn present(
    ctx: &CanvasRenderingContext2d,
    surface: &Surface,
    dirty: Option<Rect>,
) -> Result<(), JsValue> {
    let Some(region) = pixel_region(surface, dirty) else {
        return Ok(());
    };
    let rows = copy_region(surface, region);
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(rows.as_slice()),
        region.width,
        region.height,
    )?;
    ctx.put_image_data(&data, f64::from(region.x), f64::from(region.y))
}

/// Snap `dirty` outward to whole pixels and clip it to the surface.
fn pixel_region(surface: &Surface, dirty: Option<Rect>) -> Option<PixelRegion> {
    if surface.is_empty() {
        return None;
    }
    let bounds = surface.bounds();
    let region = dirty.unwrap_or(bounds).intersect(bounds);
    if region.area() <= 0.0 {
        return None;
    }
    let (x0, y0) = (region.x0.floor() as u32, region.y0.floor() as u32);
    let (x1, y1) = (region.x1.ceil() as u32, region.y1.ceil() as u32);
    let (x1, y1) = (x1.min(surface.width()), y1.min(surface.height()));
    (x1 > x0 && y1 > y0).then_some(PixelRegion {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

/// Row-major RGBA bytes of `region`.
fn copy_region(surface: &Surface, region: PixelRegion) -> Vec<u8> {
    let stride = surface.width() as usize * 4;
    let row_len = region.width as usize * 4;
    let raw = surface.as_raw();
    let mut out = Vec::with_capacity(row_len * region.height as usize);
    for y in region.y..region.y + region.height {
        let start = y as usize * stride + region.x as usize * 4;
        out.extend_from_slice(&raw[start..start + row_len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rsk_core::StrokeStyle;
    use rsk_render::{Point, stroke_segment};

    #[test]
    fn region_snaps_outward_and_clips() {
        let surface = Surface::new(100, 50);
        let dirty = Rect::new(10.4, -3.0, 20.2, 8.6);
        assert_eq!(
            pixel_region(&surface, Some(dirty)),
            Some(PixelRegion {
                x: 10,
                y: 0,
                width: 11,
                height: 9,
            })
        );
    }

    #[test]
    fn missing_dirty_means_whole_surface() {
        let surface = Surface::new(7, 3);
        assert_eq!(
            pixel_region(&surface, None),
            Some(PixelRegion {
                x: 0,
                y: 0,
                width: 7,
                height: 3,
            })
        );
    }

    #[test]
    fn nothing_to_present_outside_or_on_empty_surface() {
        let surface = Surface::new(10, 10);
        let outside = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(pixel_region(&surface, Some(outside)), None);
        assert_eq!(pixel_region(&Surface::new(0, 10), None), None);
    }

    #[test]
    fn small_stroke_copies_only_its_rows() {
        let mut surface = Surface::new(1920, 1080);
        let style = StrokeStyle {
            width: 4.0,
            color: rsk_core::Color::BLACK,
            glow: None,
        };
        let p = Point::new(500.0, 400.0);
        let dirty = stroke_segment(&mut surface, p, p, &style);

        let region = pixel_region(&surface, dirty).unwrap();
        let rows = copy_region(&surface, region);
        assert_eq!(rows.len(), (region.width * region.height * 4) as usize);
        assert!(rows.len() < 1024);

        // The dab's center pixel sits at its offset inside the copied block.
        let (dx, dy) = (500 - region.x, 400 - region.y);
        let idx = ((dy * region.width + dx) * 4) as usize;
        assert_eq!(&rows[idx..idx + 4], &[0, 0, 0, 255]);
    }
}
