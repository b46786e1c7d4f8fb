//! `<audio>`-backed draw cue.

use rsk_editor::AudioCue;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

pub struct HtmlAudioCue {
    element: HtmlAudioElement,
    /// Shared rejection handler for `play()` promises (autoplay blocks land here).
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudioCue {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        let on_reject = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
            log::warn!("draw cue playback rejected: {}", describe(&err));
        });
        Ok(Self { element, on_reject })
    }
}

impl AudioCue for HtmlAudioCue {
    fn restart(&mut self) -> Result<(), String> {
        self.element.set_current_time(0.0);
        let promise: js_sys::Promise = self.element.play().map_err(|e| describe(&e))?;
        let _ = promise.catch(&self.on_reject);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        self.element.pause().map_err(|e| describe(&e))
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
