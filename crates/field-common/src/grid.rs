//! The per-frame vertex grid of sampled scalar values.

/// A mutable 2D grid of scalar values in [0, 255], one per vertex,
/// stored in row-major order.
///
/// Dimensions are derived from the viewport so that every on-screen cell
/// has four defined corners: `rows = ceil(height / cell_size) + 1`,
/// `cols = ceil(width / cell_size) + 1`. The buffer is reallocated only
/// when the viewport dimensions change; every entry is overwritten once
/// per frame before the fill and contour passes read it.
#[derive(Debug, Clone)]
pub struct VertexGrid {
    rows: usize,
    cols: usize,
    cell_size: u32,
    values: Vec<f32>,
}

impl VertexGrid {
    /// Create a grid covering a viewport of the given pixel dimensions.
    pub fn new(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        let (rows, cols) = Self::dims_for(width_px, height_px, cell_size);
        Self {
            rows,
            cols,
            cell_size,
            values: vec![0.0; rows * cols],
        }
    }

    /// Grid shape for a viewport, including the one-vertex padding row
    /// and column. A collapsed viewport yields a 0x0 grid.
    fn dims_for(width_px: u32, height_px: u32, cell_size: u32) -> (usize, usize) {
        if width_px == 0 || height_px == 0 || cell_size == 0 {
            return (0, 0);
        }
        let rows = height_px.div_ceil(cell_size) as usize + 1;
        let cols = width_px.div_ceil(cell_size) as usize + 1;
        (rows, cols)
    }

    /// Reallocate for a new viewport size. A no-op when the resulting
    /// shape is unchanged; the next resample overwrites all values
    /// either way.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        let (rows, cols) = Self::dims_for(width_px, height_px, self.cell_size);
        if rows == self.rows && cols == self.cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.values = vec![0.0; rows * cols];
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Value at (row, col). Callers stay in bounds; the pipeline only
    /// derives indices from this grid's own dimensions.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.values[row * self.cols + col] = value;
    }

    /// Overwrite every entry with a constant.
    pub fn fill(&mut self, value: f32) {
        self.values.fill(value);
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
