//! End-to-end tests for the frame pipeline.

use field_common::{FieldConfig, NoiseBackend, Playback};
use field_render::pipeline::FramePipeline;
use field_render::surface::{DrawCall, PixmapSurface, TraceSurface};

fn small_config() -> FieldConfig {
    FieldConfig {
        cell_size: 8,
        threshold_delta: 51,
        ..Default::default()
    }
}

#[test]
fn test_frame_is_deterministic() {
    let mut first = TraceSurface::new();
    let mut second = TraceSurface::new();

    let mut a = FramePipeline::new(small_config(), 64, 48).unwrap();
    let mut b = FramePipeline::new(small_config(), 64, 48).unwrap();
    a.render_frame(&mut first, 42);
    b.render_frame(&mut second, 42);

    assert_eq!(first.calls, second.calls);
}

#[test]
fn test_frame_order_clear_fill_contour() {
    let mut trace = TraceSurface::new();
    let mut pipeline = FramePipeline::new(small_config(), 64, 48).unwrap();
    pipeline.render_frame(&mut trace, 0);

    assert!(matches!(trace.calls[0], DrawCall::Clear(_)));

    let last_rect = trace
        .calls
        .iter()
        .rposition(|c| matches!(c, DrawCall::FillRect { .. }))
        .expect("gradient pass painted nothing");
    let first_line = trace
        .calls
        .iter()
        .position(|c| matches!(c, DrawCall::Line { .. }));
    if let Some(first_line) = first_line {
        assert!(last_rect < first_line, "fill pass must precede contours");
    }
}

#[test]
fn test_fill_rect_count_matches_interior_cells() {
    let config = FieldConfig {
        gradient_fill_iterations: 2,
        ..small_config()
    };
    let mut trace = TraceSurface::new();
    let mut pipeline = FramePipeline::new(config, 32, 24).unwrap();
    pipeline.render_frame(&mut trace, 0);

    let grid = pipeline.grid();
    let cells = (grid.rows() - 1) * (grid.cols() - 1);
    assert_eq!(trace.rects().count(), cells * 4);
}

#[test]
fn test_all_draw_calls_finite() {
    let mut trace = TraceSurface::new();
    let mut pipeline = FramePipeline::new(small_config(), 96, 96).unwrap();
    for frame in 0..5 {
        pipeline.render_frame(&mut trace, frame);
    }
    assert!(trace.calls.iter().all(|c| c.is_finite()));
}

#[test]
fn test_advancing_time_changes_the_frame() {
    let mut early = TraceSurface::new();
    let mut late = TraceSurface::new();

    let mut pipeline = FramePipeline::new(small_config(), 64, 48).unwrap();
    pipeline.render_frame(&mut early, 0);
    pipeline.render_frame(&mut late, 300);

    assert_ne!(early.calls, late.calls);
}

#[test]
fn test_noise_backends_are_interchangeable() {
    for backend in [
        NoiseBackend::Value,
        NoiseBackend::Perlin,
        NoiseBackend::OpenSimplex,
    ] {
        let mut config = small_config();
        config.noise.backend = backend;

        let mut trace = TraceSurface::new();
        let mut pipeline = FramePipeline::new(config, 32, 32).unwrap();
        pipeline.render_frame(&mut trace, 1);

        assert!(trace.rects().count() > 0, "{backend:?} painted nothing");
        assert!(trace.calls.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config = FieldConfig {
        cell_size: 0,
        ..Default::default()
    };
    assert!(FramePipeline::new(config, 64, 64).is_err());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_applies_before_next_frame() {
    let mut pipeline = FramePipeline::new(small_config(), 64, 64).unwrap();
    let (rows, cols) = (pipeline.grid().rows(), pipeline.grid().cols());

    pipeline.handle_resize(128, 64);
    assert_eq!(pipeline.grid().rows(), rows);
    assert_ne!(pipeline.grid().cols(), cols);

    let mut trace = TraceSurface::new();
    pipeline.render_frame(&mut trace, 0);
    let cells = (pipeline.grid().rows() - 1) * (pipeline.grid().cols() - 1);
    assert_eq!(trace.rects().count(), cells);
}

#[test]
fn test_resize_idempotent() {
    let mut pipeline = FramePipeline::new(small_config(), 64, 64).unwrap();
    pipeline.handle_resize(100, 80);
    let first = (pipeline.grid().rows(), pipeline.grid().cols());
    pipeline.handle_resize(100, 80);
    assert_eq!((pipeline.grid().rows(), pipeline.grid().cols()), first);
}

#[test]
fn test_collapsed_viewport_renders_clear_only() {
    let mut pipeline = FramePipeline::new(small_config(), 64, 64).unwrap();
    pipeline.handle_resize(0, 0);

    let mut trace = TraceSurface::new();
    pipeline.render_frame(&mut trace, 0);
    assert_eq!(trace.calls.len(), 1);
    assert!(matches!(trace.calls[0], DrawCall::Clear(_)));
}

// ============================================================================
// Host loop integration
// ============================================================================

#[test]
fn test_playback_gates_rendering() {
    let mut pipeline = FramePipeline::new(small_config(), 32, 32).unwrap();
    let mut playback = Playback::new();
    let mut rendered = Vec::new();

    for step in 0..6 {
        if step == 2 {
            playback.toggle(); // pause
        }
        if step == 4 {
            playback.toggle(); // resume
        }
        if let Some(frame) = playback.advance() {
            let mut trace = TraceSurface::new();
            pipeline.render_frame(&mut trace, frame);
            rendered.push(frame);
        }
    }

    // steps 2 and 3 were paused; frame numbers stay contiguous
    assert_eq!(rendered, vec![0, 1, 2, 3]);
}

#[test]
fn test_renders_to_pixmap_surface() {
    let mut surface = PixmapSurface::new(64, 48).unwrap();
    let mut pipeline = FramePipeline::new(small_config(), 64, 48).unwrap();
    pipeline.render_frame(&mut surface, 3);

    let rgba = surface.to_rgba();
    assert_eq!(rgba.len(), 64 * 48 * 4);
    // background clear plus fills leave no fully transparent pixel
    assert!(rgba.chunks_exact(4).all(|p| p[3] > 0));
}
