//! Segment rasterization.
//!
//! A segment is painted as a capsule: every pixel whose center lies within
//! `width / 2` of the segment is covered, which gives round caps and makes a
//! zero-length segment a round dab. Edges get one pixel of linear
//! anti-aliasing. A glow, when present, is painted beneath the capsule.

use crate::surface::Surface;
use kurbo::{Point, Rect};
use rsk_core::{Glow, StrokeStyle};

/// Peak opacity of a glow halo, relative to the glow color's own alpha.
const GLOW_PEAK: f32 = 0.5;

/// Paint one straight segment from `from` to `to`.
///
/// Returns the clipped pixel rectangle that was touched, or `None` when the
/// segment lies entirely outside the surface.
pub fn stroke_segment(
    surface: &mut Surface,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Option<Rect> {
    let radius = (style.width / 2.0).max(0.5);
    let reach = radius + style.glow.map_or(0.0, |g| g.blur) + 1.0;
    let dirty = Rect::from_points(from, to)
        .inflate(reach, reach)
        .intersect(surface.bounds());
    if dirty.area() <= 0.0 {
        return None;
    }

    log::trace!(
        "SEGMENT ({:.1}, {:.1}) -> ({:.1}, {:.1}) w={} glow={}",
        from.x,
        from.y,
        to.x,
        to.y,
        style.width,
        style.glow_radius()
    );

    let (x0, y0) = (dirty.x0.floor() as u32, dirty.y0.floor() as u32);
    let (x1, y1) = (dirty.x1.ceil() as u32, dirty.y1.ceil() as u32);

    if let Some(glow) = style.glow {
        paint_glow(surface, from, to, radius, &glow, (x0, y0, x1, y1));
    }

    for y in y0..y1 {
        for x in x0..x1 {
            let d = distance_to_segment(pixel_center(x, y), from, to);
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0) as f32;
            if coverage > 0.0 {
                surface.blend_over(x, y, style.color, coverage);
            }
        }
    }

    Some(dirty)
}

fn paint_glow(
    surface: &mut Surface,
    from: Point,
    to: Point,
    radius: f64,
    glow: &Glow,
    (x0, y0, x1, y1): (u32, u32, u32, u32),
) {
    if glow.blur <= 0.0 {
        return;
    }
    for y in y0..y1 {
        for x in x0..x1 {
            let d = distance_to_segment(pixel_center(x, y), from, to);
            let falloff = 1.0 - ((d - radius) / glow.blur).clamp(0.0, 1.0);
            if falloff > 0.0 {
                let coverage = GLOW_PEAK * (falloff * falloff) as f32;
                surface.blend_over(x, y, glow.color, coverage);
            }
        }
    }
}

#[inline]
fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Distance from `p` to the closed segment `a..b`.
fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
