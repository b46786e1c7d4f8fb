//! Software raster for RetroSketch.
//!
//! Strokes and effects are painted straight into an RGBA buffer; there is
//! no retained scene. Hosts blit `Surface::as_raw()` to whatever display
//! they own.

pub mod codec;
pub mod composite;
pub mod error;
pub mod raster;
pub mod surface;

pub use codec::{PNG_MIME, decode_png, encode_png, from_data_url, to_data_url};
pub use composite::{BlendMode, fill_surface, tile_pattern};
pub use error::RenderError;
pub use raster::stroke_segment;
pub use surface::Surface;

// Re-export geometry and image types so downstream crates share one version
pub use image::{Rgba, RgbaImage};
pub use kurbo::{Point, Rect};
