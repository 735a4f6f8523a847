//! Per-frame resampling of the vertex grid from a noise field.

use crate::noise::NoiseField;
use field_common::VertexGrid;

/// Overwrite every grid vertex with the noise field sampled at the
/// current time, scaled to [0, 255].
///
/// Vertex (row, col) samples the field at
/// `(col * distance_scale, row * distance_scale, time * time_scale)`.
/// Runs in rows x cols with no allocation; the grid buffer is reused
/// across frames and only reallocated on resize. An empty grid is a
/// no-op.
pub fn resample(
    grid: &mut VertexGrid,
    field: &dyn NoiseField,
    distance_scale: f64,
    time_scale: f64,
    time: f64,
) {
    if grid.is_empty() {
        return;
    }

    let t = time * time_scale;
    for row in 0..grid.rows() {
        let y = row as f64 * distance_scale;
        for col in 0..grid.cols() {
            let x = col as f64 * distance_scale;
            let value = field.sample(x, y, t) * 255.0;
            grid.set(row, col, value as f32);
        }
    }
}
