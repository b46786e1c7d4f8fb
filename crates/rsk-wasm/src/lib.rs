//! WASM bridge for RetroSketch: exposes the stroke renderer to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by `web/index.html`.
//! The page forwards pointer events and toolbar clicks; everything else
//! (raster, timers, audio, downloads) is driven from here.

mod audio;
mod blit;
mod console;

use audio::{HtmlAudioCue, describe};
use rsk_core::{Color, ToolKind, ToolbarButton};
use rsk_editor::{
    AudioCue, ButtonEffect, EXPORT_FILE_NAME, InputEvent, PAPER_TEXTURE_PNG, PointerPhase,
    RetroFilter, StrokeRenderer, TextureOverlay, ViewRect, draw_cue_data_url,
};
use rsk_render::{PNG_MIME, to_data_url};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, Window};

/// State shared by the controller and its timer callbacks.
struct Sketch {
    renderer: StrokeRenderer<HtmlAudioCue>,
    ctx: CanvasRenderingContext2d,
}

impl Sketch {
    /// Push changed pixels to the canvas.
    fn present(&mut self) {
        let dirty = self.renderer.take_dirty();
        if dirty.is_none() {
            return;
        }
        if let Err(e) = blit::present(&self.ctx, self.renderer.surface(), dirty) {
            log::error!("canvas present failed: {}", describe(&e));
        }
    }
}

/// The main WASM-facing drawing controller.
///
/// Owns the renderer (shared with the retro timer and the texture loader)
/// and the canvas it presents to. All interaction from JS goes through this
/// struct.
#[wasm_bindgen]
pub struct RetroSketch {
    sketch: Rc<RefCell<Sketch>>,
    canvas: HtmlCanvasElement,
    window: Window,
    retro_interval: i32,
    _retro_tick: Closure<dyn FnMut()>,
    _texture_load: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl RetroSketch {
    /// Attach to a canvas, size it to its layout box, and start the ambient
    /// effects: the retro filter every second and the paper texture as soon
    /// as the event loop gets to it.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<RetroSketch, JsValue> {
        // Set up panic hook for better error messages in console
        console::panic_hook_setup();
        console::init(log::LevelFilter::Info);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = layout_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let cue = HtmlAudioCue::new(&draw_cue_data_url())?;
        let mut renderer = StrokeRenderer::new(width, height, cue);
        renderer.clear();
        let sketch = Rc::new(RefCell::new(Sketch { renderer, ctx }));
        sketch.borrow_mut().present();

        let filter = RetroFilter::default();
        let retro_tick = {
            let sketch = Rc::clone(&sketch);
            Closure::<dyn FnMut()>::new(move || {
                let Ok(mut sketch) = sketch.try_borrow_mut() else {
                    log::warn!("retro tick skipped: sketch busy");
                    return;
                };
                sketch.renderer.paint_overlay(|surface| filter.apply(surface));
                sketch.present();
            })
        };
        let retro_interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
            retro_tick.as_ref().unchecked_ref(),
            filter.interval_ms as i32,
        )?;

        // May land before or after the first strokes; paints over whatever is there.
        let texture_load = {
            let sketch = Rc::clone(&sketch);
            let mut overlay = TextureOverlay::default();
            Closure::<dyn FnMut()>::new(move || {
                let Ok(mut sketch) = sketch.try_borrow_mut() else {
                    log::warn!("texture load skipped: sketch busy");
                    return;
                };
                let painted = sketch
                    .renderer
                    .paint_overlay(|surface| overlay.on_loaded_png(surface, PAPER_TEXTURE_PNG));
                if painted {
                    sketch.present();
                }
            })
        };
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            texture_load.as_ref().unchecked_ref(),
            0,
        )?;

        log::info!("RetroSketch attached to {width}x{height} canvas");
        Ok(Self {
            sketch,
            canvas,
            window,
            retro_interval,
            _retro_tick: retro_tick,
            _texture_load: texture_load,
        })
    }

    /// Handle pointer down event (client coordinates). Returns true if pixels changed.
    pub fn handle_pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        self.dispatch(PointerPhase::Down, client_x, client_y)
    }

    /// Handle pointer move event (client coordinates). Returns true if pixels changed.
    pub fn handle_pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        self.dispatch(PointerPhase::Move, client_x, client_y)
    }

    /// Handle pointer up event.
    pub fn handle_pointer_up(&mut self, client_x: f64, client_y: f64) -> bool {
        self.dispatch(PointerPhase::Up, client_x, client_y)
    }

    /// Handle the pointer leaving the canvas.
    pub fn handle_pointer_leave(&mut self) -> bool {
        self.dispatch(PointerPhase::Leave, 0.0, 0.0)
    }

    /// Re-read the canvas layout size. The drawing is discarded.
    pub fn resize(&mut self) {
        let (width, height) = layout_size(&self.canvas);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let mut sketch = self.sketch.borrow_mut();
        sketch.renderer.resize(width, height);
        sketch.present();
    }

    /// Handle a toolbar click by element id.
    /// Returns JSON: `{"ok":true,"effect":...}` or `{"ok":false,"error":"..."}`.
    pub fn press_button(&mut self, id: &str) -> String {
        let Some(button) = ToolbarButton::from_id(id) else {
            return status_json(Err(format!("unknown toolbar button: {id}")));
        };
        let effect = {
            let mut sketch = self.sketch.borrow_mut();
            let effect = sketch.renderer.press(button);
            sketch.present();
            effect
        };
        if effect == ButtonEffect::SaveRequested {
            return self.save();
        }
        status_json(Ok(effect_json(effect)))
    }

    /// Switch the active tool. Returns false for unknown names.
    pub fn set_tool(&mut self, name: &str) -> bool {
        let Some(tool) = ToolKind::from_name(name) else {
            log::warn!("unknown tool {name:?}");
            return false;
        };
        self.sketch.borrow_mut().renderer.settings_mut().set_tool(tool);
        true
    }

    /// Set the stroke color from a CSS color string. Returns false if it does not parse.
    pub fn set_color(&mut self, css: &str) -> bool {
        match Color::parse(css) {
            Ok(color) => {
                self.sketch.borrow_mut().renderer.settings_mut().set_color(color);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Set the stroke width from the size slider.
    pub fn set_width(&mut self, width: f64) {
        self.sketch.borrow_mut().renderer.settings_mut().set_width(width);
    }

    /// Flip the sound flag. Returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sketch.borrow_mut().renderer.settings_mut().toggle_sound()
    }

    /// Repaint the canvas with the background.
    pub fn clear(&mut self) {
        let mut sketch = self.sketch.borrow_mut();
        sketch.renderer.clear();
        sketch.present();
    }

    /// Export the drawing and start a `retrosketch.png` download.
    /// Failures are shown to the user and reported in the returned JSON.
    pub fn save(&self) -> String {
        let result = self.download_png();
        if let Err(ref e) = result {
            log::error!("export failed: {e}");
            let _ = self
                .window
                .alert_with_message(&format!("Could not save drawing: {e}"));
        }
        status_json(result.map(|()| serde_json::json!({ "saved": EXPORT_FILE_NAME })))
    }

    /// Current settings and session state as JSON, for the toolbar to mirror.
    pub fn state_json(&self) -> String {
        let sketch = self.sketch.borrow();
        let snapshot = StateSnapshot::new(&sketch.renderer);
        serde_json::to_string(&snapshot).unwrap_or_else(|e| status_json(Err(e.to_string())))
    }
}

impl Drop for RetroSketch {
    fn drop(&mut self) {
        // The tick closure dies with us; the interval must not outlive it.
        self.window.clear_interval_with_handle(self.retro_interval);
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl RetroSketch {
    fn dispatch(&mut self, phase: PointerPhase, client_x: f64, client_y: f64) -> bool {
        let rect = self.canvas.get_bounding_client_rect();
        let view = ViewRect::new(rect.left(), rect.top());
        let event = InputEvent::from_client(phase, client_x, client_y, &view);
        let mut sketch = self.sketch.borrow_mut();
        let changed = sketch.renderer.handle(&event);
        if changed {
            sketch.present();
        }
        changed
    }

    fn download_png(&self) -> Result<(), String> {
        let png = self
            .sketch
            .borrow()
            .renderer
            .export_png()
            .map_err(|e| e.to_string())?;
        let document = self
            .window
            .document()
            .ok_or_else(|| "no document".to_string())?;
        let link = document
            .create_element("a")
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from))
            .map_err(|e| describe(&e))?;
        link.set_download(EXPORT_FILE_NAME);
        link.set_href(&to_data_url(PNG_MIME, &png));
        link.click();
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateSnapshot {
    tool: ToolKind,
    color: String,
    width: f64,
    sound_enabled: bool,
    drawing: bool,
    surface_width: u32,
    surface_height: u32,
}

impl StateSnapshot {
    fn new<A: AudioCue>(renderer: &StrokeRenderer<A>) -> Self {
        let settings = renderer.settings();
        let (surface_width, surface_height) = renderer.surface().size();
        Self {
            tool: settings.tool,
            color: settings.color.to_hex(),
            width: settings.width,
            sound_enabled: settings.sound_enabled,
            drawing: renderer.is_drawing(),
            surface_width,
            surface_height,
        }
    }
}

fn layout_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    (
        canvas.offset_width().max(0) as u32,
        canvas.offset_height().max(0) as u32,
    )
}

fn effect_json(effect: ButtonEffect) -> serde_json::Value {
    match effect {
        ButtonEffect::ToolSelected(tool) => serde_json::json!({ "tool": tool }),
        ButtonEffect::Cleared => serde_json::json!({ "cleared": true }),
        ButtonEffect::SaveRequested => serde_json::json!({ "saveRequested": true }),
        ButtonEffect::SoundToggled(enabled) => serde_json::json!({ "soundEnabled": enabled }),
    }
}

fn status_json(result: Result<serde_json::Value, String>) -> String {
    let value = match result {
        Ok(effect) => serde_json::json!({ "ok": true, "effect": effect }),
        Err(error) => serde_json::json!({ "ok": false, "error": error }),
    };
    value.to_string()
}

/// Change the console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match console::level_from_name(level) {
        Some(filter) => {
            console::init(filter);
            true
        }
        None => false,
    }
}
