//! Embedded assets and fixed names.

use rsk_render::to_data_url;

/// File name offered for the exported drawing.
pub const EXPORT_FILE_NAME: &str = "retrosketch.png";

/// 50×50 gray paper grain, tiled by the texture overlay.
pub const PAPER_TEXTURE_PNG: &[u8] = include_bytes!("../assets/paper-texture.png");

/// Stroke sound cue.
pub const DRAW_CUE_WAV: &[u8] = include_bytes!("../assets/draw-cue.wav");

pub fn draw_cue_data_url() -> String {
    to_data_url("audio/wav", DRAW_CUE_WAV)
}
