pub mod assets;
pub mod audio;
pub mod effects;
pub mod input;
pub mod renderer;

pub use assets::{DRAW_CUE_WAV, EXPORT_FILE_NAME, PAPER_TEXTURE_PNG, draw_cue_data_url};
pub use audio::{AudioCue, SilentCue};
pub use effects::{
    RETRO_INTERVAL_MS, RETRO_TINT, RetroFilter, TEXTURE_ALPHA, TextureOverlay, TextureState,
};
pub use input::{InputEvent, PointerPhase, ViewRect};
pub use renderer::{ButtonEffect, StrokeRenderer};
