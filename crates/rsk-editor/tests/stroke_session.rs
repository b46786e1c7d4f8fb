//! Integration tests: stroke sessions end to end (rsk-editor + rsk-render).
//!
//! Drives the `StrokeRenderer` through pointer events and checks the pixels,
//! the exported PNG, and the audio cue calls that come out the other side.

use pretty_assertions::assert_eq;
use rsk_core::{BACKGROUND, Color, StrokeStyle, ToolKind, ToolbarButton};
use rsk_editor::{
    AudioCue, ButtonEffect, InputEvent, PointerPhase, RetroFilter, StrokeRenderer, TextureOverlay,
    ViewRect,
};
use rsk_render::{Point, decode_png};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Records every call so tests can assert on ordering.
#[derive(Debug, Default)]
struct RecordingCue {
    calls: Vec<&'static str>,
}

impl AudioCue for RecordingCue {
    fn restart(&mut self) -> Result<(), String> {
        self.calls.push("restart");
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        self.calls.push("pause");
        Ok(())
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_renderer() -> StrokeRenderer<RecordingCue> {
    init_logging();
    StrokeRenderer::new(80, 60, RecordingCue::default())
}

// ─── Stroke session ─────────────────────────────────────────────────────

#[test]
fn pencil_diagonal_scenario() {
    let mut renderer = make_renderer();
    let settings = renderer.settings_mut();
    settings.set_tool(ToolKind::Pencil);
    settings.set_color(Color::from_hex("#000000").unwrap());
    settings.set_width(4.0);

    renderer.begin(Point::new(10.0, 10.0));
    renderer.extend(Point::new(50.0, 50.0));

    // On the line.
    for t in [10, 20, 30, 40, 49] {
        assert_eq!(renderer.surface().pixel(t, t), Some(BLACK), "({t}, {t})");
    }
    // 1.4px off the line is still inside a 4px stroke; 2.8px off is not.
    assert_eq!(renderer.surface().pixel(30, 32), Some(BLACK));
    assert_eq!(renderer.surface().pixel(30, 34), Some(WHITE));
    assert_eq!(renderer.surface().pixel(34, 30), Some(WHITE));
    // Beyond the end cap.
    assert_eq!(renderer.surface().pixel(56, 56), Some(WHITE));

    renderer.end();
    assert_eq!(renderer.anchor(), None);

    let before = renderer.surface().as_raw().to_vec();
    assert!(!renderer.extend(Point::new(70.0, 10.0)));
    assert_eq!(renderer.surface().as_raw(), before.as_slice());
}

#[test]
fn extend_is_noop_for_any_sequence_without_open_session() {
    let mut renderer = make_renderer();
    let untouched = renderer.surface().as_raw().to_vec();

    let sequences: [&[InputEvent]; 3] = [
        &[InputEvent::from_pointer_move(5.0, 5.0)],
        &[
            InputEvent::from_pointer_up(5.0, 5.0),
            InputEvent::from_pointer_move(20.0, 20.0),
        ],
        &[
            InputEvent::PointerLeave,
            InputEvent::from_pointer_move(30.0, 30.0),
            InputEvent::from_pointer_move(40.0, 40.0),
        ],
    ];
    for events in sequences {
        for event in events {
            assert!(!renderer.handle(event), "{event:?} should not paint");
        }
    }
    assert_eq!(renderer.surface().as_raw(), untouched.as_slice());
}

#[test]
fn client_events_are_translated_through_view_rect() {
    let mut renderer = make_renderer();
    let view = ViewRect::new(200.0, 100.0);
    renderer.handle(&InputEvent::from_client(PointerPhase::Down, 220.0, 130.0, &view));
    renderer.handle(&InputEvent::from_client(PointerPhase::Up, 220.0, 130.0, &view));
    assert_eq!(renderer.surface().pixel(20, 30), Some(BLACK));
}

// ─── Tools ──────────────────────────────────────────────────────────────

#[test]
fn eraser_always_paints_background() {
    for picked in ["#FF0000", "#00FF00", "#123456", "#000000"] {
        let mut renderer = make_renderer();
        renderer.settings_mut().set_color(Color::from_hex(picked).unwrap());
        renderer.press(ToolbarButton::Tool(ToolKind::Eraser));
        renderer.begin(Point::new(10.0, 10.0));
        renderer.extend(Point::new(60.0, 40.0));
        renderer.end();
        assert!(
            renderer.surface().is_uniform(BACKGROUND),
            "eraser with {picked} left marks"
        );
    }
}

#[test]
fn eraser_removes_pencil_marks_under_its_core() {
    let mut renderer = make_renderer();
    renderer.settings_mut().set_width(6.0);
    renderer.begin(Point::new(10.0, 30.0));
    renderer.extend(Point::new(70.0, 30.0));
    renderer.end();
    assert_eq!(renderer.surface().pixel(40, 30), Some(BLACK));

    renderer.press(ToolbarButton::Tool(ToolKind::Eraser));
    renderer.settings_mut().set_width(20.0);
    renderer.begin(Point::new(40.0, 30.0));
    renderer.end();
    assert_eq!(renderer.surface().pixel(40, 30), Some(WHITE));
}

#[test]
fn only_brush_segments_glow() {
    let mut renderer = make_renderer();
    for (tool, radius) in [
        (ToolKind::Pencil, 0.0),
        (ToolKind::Brush, 5.0),
        (ToolKind::Eraser, 0.0),
    ] {
        renderer.press(ToolbarButton::Tool(tool));
        let style = StrokeStyle::resolve(renderer.settings());
        assert_eq!(style.glow_radius(), radius, "{tool:?}");
    }
}

#[test]
fn brush_halo_reaches_past_pencil_edge() {
    let mut pencil = make_renderer();
    let mut brush = make_renderer();
    brush.press(ToolbarButton::Tool(ToolKind::Brush));
    for renderer in [&mut pencil, &mut brush] {
        renderer.settings_mut().set_width(2.0);
        renderer.begin(Point::new(10.0, 30.0));
        renderer.extend(Point::new(70.0, 30.0));
        renderer.end();
    }
    assert_eq!(pencil.surface().pixel(40, 33), Some(WHITE));
    assert_ne!(brush.surface().pixel(40, 33), Some(WHITE));
}

#[test]
fn glow_stays_with_the_brush_segment_after_a_tool_switch() {
    init_logging();
    let mut renderer = StrokeRenderer::new(200, 60, RecordingCue::default());
    renderer.settings_mut().set_width(2.0);
    renderer.press(ToolbarButton::Tool(ToolKind::Brush));
    renderer.begin(Point::new(10.0, 30.0));
    renderer.extend(Point::new(50.0, 30.0));

    renderer.press(ToolbarButton::Tool(ToolKind::Pencil));
    assert!(renderer.is_drawing());
    renderer.extend(Point::new(190.0, 30.0));
    renderer.end();

    // Brush segment: halo three pixels off the line.
    assert_ne!(renderer.surface().pixel(30, 33), Some(WHITE));
    // Pencil segment: solid on the line, nothing beside it.
    assert_eq!(renderer.surface().pixel(120, 30), Some(BLACK));
    for x in [80, 120, 170] {
        assert_eq!(renderer.surface().pixel(x, 33), Some(WHITE), "halo at ({x}, 33)");
        assert_eq!(renderer.surface().pixel(x, 27), Some(WHITE), "halo at ({x}, 27)");
    }
}

// ─── Clear / export ─────────────────────────────────────────────────────

#[test]
fn clear_discards_every_stroke() {
    let mut renderer = make_renderer();
    renderer.press(ToolbarButton::Tool(ToolKind::Brush));
    renderer.begin(Point::new(5.0, 5.0));
    renderer.extend(Point::new(75.0, 55.0));
    renderer.end();
    renderer.paint_overlay(|surface| RetroFilter::default().apply(surface));
    assert!(!renderer.surface().is_uniform(BACKGROUND));

    assert_eq!(renderer.press(ToolbarButton::Clear), ButtonEffect::Cleared);
    assert!(renderer.surface().is_uniform(BACKGROUND));
}

#[test]
fn export_matches_surface_size_and_leaves_it_alone() {
    let mut renderer = make_renderer();
    renderer.begin(Point::new(40.0, 30.0));
    renderer.end();
    let before = renderer.surface().as_raw().to_vec();

    let png = renderer.export_png().expect("export succeeds");
    let decoded = decode_png(&png).unwrap();
    assert_eq!(decoded.dimensions(), renderer.surface().size());
    assert_eq!(decoded.as_raw(), &before);
    assert_eq!(renderer.surface().as_raw(), before.as_slice());
}

#[test]
fn export_follows_resize() {
    let mut renderer = make_renderer();
    renderer.resize(33, 21);
    let decoded = decode_png(&renderer.export_png().unwrap()).unwrap();
    assert_eq!(decoded.dimensions(), (33, 21));
}

#[test]
fn export_of_zero_sized_view_fails_without_panicking() {
    let mut renderer = make_renderer();
    renderer.resize(0, 0);
    assert!(renderer.export_png().is_err());
}

// ─── Audio cue ──────────────────────────────────────────────────────────

#[test]
fn cue_restarts_on_begin_and_pauses_on_end() {
    let mut renderer = make_renderer();
    renderer.begin(Point::new(1.0, 1.0));
    renderer.extend(Point::new(9.0, 9.0));
    renderer.end();
    renderer.begin(Point::new(3.0, 3.0));
    renderer.handle(&InputEvent::PointerLeave);
    assert_eq!(
        renderer.audio().calls,
        vec!["restart", "pause", "restart", "pause"]
    );
}

#[test]
fn toggling_sound_off_silences_the_cue() {
    let mut renderer = make_renderer();
    assert_eq!(
        renderer.press(ToolbarButton::SoundToggle),
        ButtonEffect::SoundToggled(false)
    );
    renderer.begin(Point::new(1.0, 1.0));
    renderer.end();
    assert!(renderer.audio().calls.is_empty());
}

// ─── Ambient effects ────────────────────────────────────────────────────

#[test]
fn texture_overlay_runs_once_even_if_loaded_twice() {
    let mut renderer = make_renderer();
    let mut overlay = TextureOverlay::default();

    let painted = renderer.paint_overlay(|surface| {
        overlay.on_loaded_png(surface, rsk_editor::PAPER_TEXTURE_PNG)
    });
    assert!(painted);
    let after_first = renderer.surface().as_raw().to_vec();

    let painted_again = renderer.paint_overlay(|surface| {
        overlay.on_loaded_png(surface, rsk_editor::PAPER_TEXTURE_PNG)
    });
    assert!(!painted_again);
    assert_eq!(renderer.surface().as_raw(), after_first.as_slice());
}

#[test]
fn retro_filter_tints_strokes_too() {
    let mut renderer = make_renderer();
    renderer.settings_mut().set_color(Color::WHITE);
    renderer.begin(Point::new(40.0, 30.0));
    renderer.end();
    renderer.paint_overlay(|surface| RetroFilter::default().apply(surface));
    assert_eq!(renderer.surface().pixel(40, 30), Some([251, 248, 243, 255]));
    assert_eq!(renderer.surface().pixel(0, 0), Some([251, 248, 243, 255]));
}
