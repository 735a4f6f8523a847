//! Iso-contour extraction using marching squares.
//!
//! For each threshold level, every grid cell is classified by a 4-bit
//! mask of which corners exceed the level, and the mask selects a fixed
//! line-segment pattern whose endpoints are linearly interpolated along
//! the crossed edges. Segments are drawn immediately, never retained.
//!
//! Corner bit order: a=TL=1, b=TR=2, c=BR=4, d=BL=8. The ambiguous
//! saddle masks (5 and 10) always emit two independent segments without
//! center-sample disambiguation; the contour is topologically ambiguous
//! at saddle points and intentionally left that way.

use crate::surface::{Rgba, Surface};
use field_common::VertexGrid;

/// A point in screen-space pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One contour line segment within a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// 4-bit marching-squares case for one cell at one threshold.
///
/// Bit i is set when corner i's scalar strictly exceeds the threshold.
#[inline]
pub fn cell_case(a: f32, b: f32, c: f32, d: f32, threshold: f32) -> u8 {
    let mut case = 0;
    if a > threshold {
        case |= 1;
    }
    if b > threshold {
        case |= 2;
    }
    if c > threshold {
        case |= 4;
    }
    if d > threshold {
        case |= 8;
    }
    case
}

/// Fraction along an edge at which the contour crosses, clamped to
/// [0, 1].
///
/// When both corner values are equal the denominator vanishes; the
/// crossing defaults to the edge midpoint so no non-finite coordinate
/// can reach a draw call.
#[inline]
pub fn edge_lerp(threshold: f32, from: f32, to: f32) -> f32 {
    if (to - from).abs() < 1e-6 {
        return 0.5;
    }
    ((threshold - from) / (to - from)).clamp(0.0, 1.0)
}

/// Segments for one cell at one threshold.
///
/// `(x, y)` is the cell's top-left pixel. Returns 0, 1, or 2 segments
/// per the 16-entry case table; masks 0 and 15 draw nothing.
pub fn cell_segments(
    corners: [f32; 4],
    threshold: f32,
    x: f32,
    y: f32,
    cell_size_px: f32,
) -> Vec<Segment> {
    let [a, b, c, d] = corners;
    let case = cell_case(a, b, c, d, threshold);

    let top = Point {
        x: x + edge_lerp(threshold, a, b) * cell_size_px,
        y,
    };
    let right = Point {
        x: x + cell_size_px,
        y: y + edge_lerp(threshold, b, c) * cell_size_px,
    };
    let bottom = Point {
        x: x + edge_lerp(threshold, d, c) * cell_size_px,
        y: y + cell_size_px,
    };
    let left = Point {
        x,
        y: y + edge_lerp(threshold, a, d) * cell_size_px,
    };

    let seg = |start: Point, end: Point| Segment { start, end };

    match case {
        0 | 15 => vec![],
        1 | 14 => vec![seg(left, top)],
        2 | 13 => vec![seg(top, right)],
        3 | 12 => vec![seg(left, right)],
        4 | 11 => vec![seg(right, bottom)],
        5 => vec![seg(left, top), seg(right, bottom)],
        6 | 9 => vec![seg(top, bottom)],
        7 | 8 => vec![seg(left, bottom)],
        10 => vec![seg(top, right), seg(left, bottom)],
        _ => vec![],
    }
}

/// Extract and stroke contour lines for every threshold level.
///
/// Thresholds iterate ascending in the outer loop and cells row-major in
/// the inner loop. Segment independence makes the order semantically
/// inert, but it is fixed so draw-call traces are deterministic.
pub fn extract_and_draw(
    surface: &mut dyn Surface,
    grid: &VertexGrid,
    thresholds: &[f32],
    cell_size_px: f32,
    color: Rgba,
    stroke_width: f32,
) {
    if grid.rows() < 2 || grid.cols() < 2 {
        return;
    }

    let mut segments = 0usize;
    for &threshold in thresholds {
        for row in 0..grid.rows() - 1 {
            for col in 0..grid.cols() - 1 {
                let corners = [
                    grid.get(row, col),         // a: top-left
                    grid.get(row, col + 1),     // b: top-right
                    grid.get(row + 1, col + 1), // c: bottom-right
                    grid.get(row + 1, col),     // d: bottom-left
                ];
                let x = col as f32 * cell_size_px;
                let y = row as f32 * cell_size_px;

                for s in cell_segments(corners, threshold, x, y, cell_size_px) {
                    surface.draw_line(s.start.x, s.start.y, s.end.x, s.end.y, color, stroke_width);
                    segments += 1;
                }
            }
        }
    }

    tracing::debug!(
        levels = thresholds.len(),
        segments,
        rows = grid.rows(),
        cols = grid.cols(),
        "contour pass"
    );
}
