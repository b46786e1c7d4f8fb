//! Stroke renderer: turns a pointer drag into rasterized segments.
//!
//! A stroke session runs from `begin` to `end`. Each `extend` paints one
//! independent segment from the anchor to the new point and moves the anchor
//! there, so consecutive segments never share a join. Nothing about the
//! stroke is retained once its pixels land on the surface.
//!
//! ## Toolbar behavior
//!
//! | Button | Effect |
//! |--------|--------|
//! | pencil / brush / eraser | Select tool |
//! | clear | Repaint background |
//! | save | Ask the host to export |
//! | sound-toggle | Flip the sound flag |

use crate::audio::{AudioCue, SilentCue};
use crate::input::InputEvent;
use rsk_core::{Settings, StrokeStyle, ToolKind, ToolbarButton};
use rsk_render::{Point, Rect, RenderError, Surface, encode_png, stroke_segment};

/// What pressing a toolbar button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEffect {
    ToolSelected(ToolKind),
    Cleared,
    /// The host owns downloads; it should call `export_png` now.
    SaveRequested,
    SoundToggled(bool),
}

pub struct StrokeRenderer<A: AudioCue = SilentCue> {
    surface: Surface,
    settings: Settings,
    /// True between pointer-down and pointer-up/leave.
    drawing: bool,
    /// Start point of the next segment.
    anchor: Option<Point>,
    audio: A,
    /// Pixels changed since the host last took the dirty region.
    dirty: Option<Rect>,
}

impl StrokeRenderer<SilentCue> {
    pub fn silent(width: u32, height: u32) -> Self {
        Self::new(width, height, SilentCue)
    }
}

impl<A: AudioCue> StrokeRenderer<A> {
    pub fn new(width: u32, height: u32, audio: A) -> Self {
        Self {
            surface: Surface::new(width, height),
            settings: Settings::default(),
            drawing: false,
            anchor: None,
            audio,
            dirty: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    // ─── Stroke session ──────────────────────────────────────────────────

    /// Start a stroke: paint a dab at `point` so a tap leaves a dot.
    /// Returns whether any pixels changed.
    pub fn begin(&mut self, point: Point) -> bool {
        log::debug!("stroke begin at ({:.1}, {:.1})", point.x, point.y);
        self.drawing = true;
        self.anchor = Some(point);
        let changed = self.paint_segment(point, point);

        if self.settings.sound_enabled {
            if let Err(e) = self.audio.restart() {
                log::warn!("draw cue failed to play: {e}");
            }
        }
        changed
    }

    /// Paint a segment from the anchor to `point`. No-op outside a session.
    pub fn extend(&mut self, point: Point) -> bool {
        if !self.drawing {
            return false;
        }
        let Some(anchor) = self.anchor else {
            return false;
        };
        let changed = self.paint_segment(anchor, point);
        self.anchor = Some(point);
        changed
    }

    /// Finish the stroke. Safe to call when no stroke is active.
    pub fn end(&mut self) {
        if self.drawing {
            log::debug!("stroke end");
        }
        self.drawing = false;
        self.anchor = None;

        if self.settings.sound_enabled {
            if let Err(e) = self.audio.pause() {
                log::warn!("draw cue failed to pause: {e}");
            }
        }
    }

    /// Dispatch a normalized pointer event. Returns whether pixels changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => self.begin(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.extend(Point::new(x, y)),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.end();
                false
            }
        }
    }

    // ─── Whole-surface operations ────────────────────────────────────────

    /// Repaint the surface with the background. Irreversible.
    pub fn clear(&mut self) {
        log::info!("clear {}x{}", self.surface.width(), self.surface.height());
        self.surface.clear();
        self.mark_all_dirty();
    }

    /// Match a new view size. The surface comes back blank; the stroke
    /// session, if any, carries on from its anchor.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.mark_all_dirty();
    }

    /// PNG of the current pixels. Pure read.
    pub fn export_png(&self) -> Result<Vec<u8>, RenderError> {
        log::info!(
            "export {}x{} surface",
            self.surface.width(),
            self.surface.height()
        );
        encode_png(&self.surface)
    }

    /// Run an effect that paints over the whole surface.
    pub fn paint_overlay<R>(&mut self, paint: impl FnOnce(&mut Surface) -> R) -> R {
        let result = paint(&mut self.surface);
        self.mark_all_dirty();
        result
    }

    /// Take the region changed since the last call.
    pub fn take_dirty(&mut self) -> Option<Rect> {
        self.dirty.take()
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    /// Apply a toolbar button. Only tool buttons touch the tool selection.
    pub fn press(&mut self, button: ToolbarButton) -> ButtonEffect {
        match button {
            ToolbarButton::Tool(tool) => {
                self.settings.set_tool(tool);
                ButtonEffect::ToolSelected(tool)
            }
            ToolbarButton::Clear => {
                self.clear();
                ButtonEffect::Cleared
            }
            ToolbarButton::Save => ButtonEffect::SaveRequested,
            ToolbarButton::SoundToggle => ButtonEffect::SoundToggled(self.settings.toggle_sound()),
        }
    }

    // ─── Private helpers ─────────────────────────────────────────────────

    fn paint_segment(&mut self, from: Point, to: Point) -> bool {
        let style = StrokeStyle::resolve(&self.settings);
        match stroke_segment(&mut self.surface, from, to, &style) {
            Some(rect) => {
                self.dirty = Some(self.dirty.map_or(rect, |d| d.union(rect)));
                true
            }
            None => false,
        }
    }

    fn mark_all_dirty(&mut self) {
        self.dirty = Some(self.surface.bounds());
    }
}
