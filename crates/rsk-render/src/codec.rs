//! PNG encode/decode and `data:` URL packing.

use crate::error::RenderError;
use crate::surface::Surface;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, ImageOutputFormat, RgbaImage};
use std::io::Cursor;

pub const PNG_MIME: &str = "image/png";

/// Encode the surface's current pixels as PNG. The surface is not touched.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, RenderError> {
    let (width, height) = surface.size();
    if surface.is_empty() {
        return Err(RenderError::EmptySurface { width, height });
    }
    let mut bytes = Vec::new();
    surface
        .image()
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(RenderError::Encode)?;
    log::debug!("encoded {width}x{height} surface to {} PNG bytes", bytes.len());
    Ok(bytes)
}

/// Decode PNG bytes into an RGBA8 image, expanding palettes and gray.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let decoded =
        image::load_from_memory_with_format(bytes, ImageFormat::Png).map_err(RenderError::Decode)?;
    Ok(decoded.to_rgba8())
}

/// Pack bytes into a base64 `data:` URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Unpack a base64 `data:` URL into `(mime, bytes)`.
pub fn from_data_url(url: &str) -> Result<(String, Vec<u8>), RenderError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| RenderError::DataUrl("missing `data:` scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| RenderError::DataUrl("missing `,` separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| RenderError::DataUrl("only base64 payloads are supported".to_string()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| RenderError::DataUrl(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}
