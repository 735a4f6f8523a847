//! Rendering configuration for the animated field pipeline.
//!
//! All knobs are load-time constants: the configuration is parsed and
//! validated once at startup and never mutated while frames render.

use crate::color::Color;
use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for the field rendering pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Grid cell size in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Scale applied to grid coordinates before noise sampling
    #[serde(default = "default_distance_scale")]
    pub distance_scale: f64,

    /// Scale applied to frame time before noise sampling
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,

    /// First contour threshold level
    #[serde(default)]
    pub threshold_start: u8,

    /// Spacing between consecutive threshold levels
    #[serde(default = "default_threshold_delta")]
    pub threshold_delta: u8,

    /// Sub-quad subdivisions per cell for the gradient fill
    #[serde(default = "default_fill_iterations")]
    pub gradient_fill_iterations: u32,

    /// Stroke color for contour lines
    #[serde(default = "default_contour_color")]
    pub contour_color: Color,

    /// Base color for the gradient fill (alpha is computed per sub-quad)
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,

    /// Color the frame is cleared to before drawing
    #[serde(default = "default_background_color")]
    pub background_color: Color,

    /// Contour stroke width in pixels
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: f32,

    /// Noise backend selection
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Log the effective frame rate while rendering
    #[serde(default = "default_show_fps")]
    pub show_fps: bool,
}

fn default_cell_size() -> u32 {
    8
}

fn default_distance_scale() -> f64 {
    0.1
}

fn default_time_scale() -> f64 {
    0.01
}

fn default_threshold_delta() -> u8 {
    15
}

fn default_fill_iterations() -> u32 {
    1
}

fn default_contour_color() -> Color {
    Color::Named("black".to_string())
}

fn default_fill_color() -> Color {
    Color::Named("orange".to_string())
}

fn default_background_color() -> Color {
    Color::Named("white".to_string())
}

fn default_stroke_weight() -> f32 {
    1.0
}

fn default_show_fps() -> bool {
    true
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            distance_scale: default_distance_scale(),
            time_scale: default_time_scale(),
            threshold_start: 0,
            threshold_delta: default_threshold_delta(),
            gradient_fill_iterations: default_fill_iterations(),
            contour_color: default_contour_color(),
            fill_color: default_fill_color(),
            background_color: default_background_color(),
            stroke_weight: default_stroke_weight(),
            noise: NoiseConfig::default(),
            show_fps: default_show_fps(),
        }
    }
}

impl FieldConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> FieldResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> FieldResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all knobs, rejecting out-of-range values at load time.
    pub fn validate(&self) -> FieldResult<()> {
        if self.cell_size == 0 {
            return Err(FieldError::invalid_config(
                "cell_size",
                "must be at least 1 pixel",
            ));
        }
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(FieldError::invalid_config(
                "distance_scale",
                format!("must be a positive finite number, got {}", self.distance_scale),
            ));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(FieldError::invalid_config(
                "time_scale",
                format!("must be a positive finite number, got {}", self.time_scale),
            ));
        }
        if self.threshold_delta == 0 {
            return Err(FieldError::invalid_config(
                "threshold_delta",
                "must be at least 1",
            ));
        }
        if self.gradient_fill_iterations == 0 {
            return Err(FieldError::invalid_config(
                "gradient_fill_iterations",
                "must be at least 1",
            ));
        }
        if !(self.stroke_weight.is_finite() && self.stroke_weight > 0.0) {
            return Err(FieldError::invalid_config(
                "stroke_weight",
                format!("must be a positive finite number, got {}", self.stroke_weight),
            ));
        }
        Ok(())
    }

    /// The ascending contour level sequence: `threshold_start`,
    /// `threshold_start + threshold_delta`, ... bounded at 255.
    pub fn thresholds(&self) -> Vec<f32> {
        if self.threshold_delta == 0 {
            return vec![];
        }

        let mut levels = Vec::new();
        let mut level = self.threshold_start as u16;
        while level <= 255 {
            levels.push(level as f32);
            level += self.threshold_delta as u16;
        }
        levels
    }
}

/// Which noise algorithm drives the animated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoiseBackend {
    /// Interpolated value noise
    #[default]
    Value,
    /// Classic Perlin gradient noise
    Perlin,
    /// OpenSimplex noise
    OpenSimplex,
}

/// Noise backend selection and seeding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NoiseConfig {
    #[serde(default)]
    pub backend: NoiseBackend,

    /// Seed for the noise generator. The sampled field is fully
    /// deterministic for a fixed seed.
    #[serde(default)]
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            backend: NoiseBackend::default(),
            seed: 0,
        }
    }
}
