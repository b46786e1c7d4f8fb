use thiserror::Error;

/// Failures from encoding, decoding, or unpacking raster data.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot encode an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image decoding failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("malformed data URL: {0}")]
    DataUrl(String),
}
