//! Per-frame orchestration of sampling, fill, and contour passes.

use crate::contour::extract_and_draw;
use crate::gradient::fill_pass;
use crate::noise::{build_noise, NoiseField};
use crate::sampler::resample;
use crate::surface::{Rgba, Surface};
use field_common::{FieldConfig, FieldResult, VertexGrid};

/// Owns the vertex grid, the noise backend, and the resolved
/// configuration; renders complete frames through a [`Surface`].
///
/// One frame is: clear, full-grid resample at the frame's time, gradient
/// fill pass, contour pass. The pipeline is single-threaded and
/// frame-synchronous; the grid is exclusively owned here (sampler
/// writes, fill and contour passes read), and resize applies only
/// between frames.
pub struct FramePipeline {
    config: FieldConfig,
    grid: VertexGrid,
    noise: Box<dyn NoiseField>,
    thresholds: Vec<f32>,
    fill_rgb: [u8; 3],
    contour_rgba: Rgba,
    background: Rgba,
}

impl FramePipeline {
    /// Build a pipeline for a viewport. Validates the configuration and
    /// resolves colors and threshold levels once up front.
    pub fn new(config: FieldConfig, width_px: u32, height_px: u32) -> FieldResult<Self> {
        config.validate()?;

        let grid = VertexGrid::new(width_px, height_px, config.cell_size);
        let noise = build_noise(&config.noise);
        let thresholds = config.thresholds();
        let fill_rgb = config.fill_color.to_rgb();
        let contour_rgba = config.contour_color.to_rgba();
        let background = config.background_color.to_rgba();

        Ok(Self {
            config,
            grid,
            noise,
            thresholds,
            fill_rgb,
            contour_rgba,
            background,
        })
    }

    /// Apply a viewport resize. Must be called between frames, never
    /// while a frame renders; the grid is reallocated before the next
    /// resample and repeated identical dimensions keep the buffer.
    pub fn handle_resize(&mut self, width_px: u32, height_px: u32) {
        self.grid.resize(width_px, height_px);
        tracing::debug!(
            width_px,
            height_px,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "viewport resized"
        );
    }

    /// Render one complete frame at the given frame count.
    ///
    /// A collapsed (0x0) viewport clears the surface and does nothing
    /// else.
    pub fn render_frame(&mut self, surface: &mut dyn Surface, frame: u64) {
        surface.clear(self.background);

        resample(
            &mut self.grid,
            self.noise.as_ref(),
            self.config.distance_scale,
            self.config.time_scale,
            frame as f64,
        );

        let cell_size_px = self.config.cell_size as f32;
        fill_pass(
            surface,
            &self.grid,
            cell_size_px,
            self.config.gradient_fill_iterations,
            self.fill_rgb,
        );
        extract_and_draw(
            surface,
            &self.grid,
            &self.thresholds,
            cell_size_px,
            self.contour_rgba,
            self.config.stroke_weight,
        );

        tracing::debug!(frame, "frame rendered");
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn grid(&self) -> &VertexGrid {
        &self.grid
    }
}
