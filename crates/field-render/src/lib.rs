//! Rendering pipeline for the animated iso-contour field.
//!
//! Per frame, in order:
//! - resample the vertex grid from the active noise backend
//! - paint the bilinear gradient fill, cell by cell
//! - extract and stroke marching-squares contour lines per threshold
//!
//! All drawing goes through the [`surface::Surface`] trait; the pipeline
//! itself has no window, pacing, or pause awareness.

pub mod contour;
pub mod gradient;
pub mod noise;
pub mod pipeline;
pub mod png;
pub mod sampler;
pub mod surface;

pub use self::noise::NoiseField;
pub use pipeline::FramePipeline;
pub use surface::{DrawCall, PixmapSurface, Surface, TraceSurface};
