//! Audio cue played in lockstep with strokes.
//!
//! The renderer only knows this trait; hosts plug in a real player. Errors
//! are reported as strings and never interrupt drawing.

/// A short sound that starts with a stroke and pauses when it ends.
pub trait AudioCue {
    /// Rewind to time zero and start playing.
    fn restart(&mut self) -> Result<(), String>;

    /// Pause without rewinding.
    fn pause(&mut self) -> Result<(), String>;
}

/// A cue that makes no sound. Used by hosts without audio output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn restart(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        Ok(())
    }
}
