//! Common types shared across the isofield workspace.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod playback;

pub use color::Color;
pub use config::{FieldConfig, NoiseBackend, NoiseConfig};
pub use error::{FieldError, FieldResult};
pub use grid::VertexGrid;
pub use playback::{Playback, PlaybackState};
