//! Drawing surface abstraction.
//!
//! The pipeline draws through this trait so the same passes can target a
//! raster pixmap in production and a recording surface in tests, where
//! draw-call order and coordinates are asserted directly.

use field_common::{FieldError, FieldResult};
use tiny_skia::{
    LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Minimal drawing operations the pipeline needs.
pub trait Surface {
    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgba);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);

    /// Stroke a line segment.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, width: f32);
}

/// Raster surface backed by a `tiny_skia::Pixmap`.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> FieldResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            FieldError::Render(format!("cannot create {width}x{height} pixmap"))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy out straight (non-premultiplied) RGBA pixels.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color;
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };

        let [r, g, b, a] = color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        // Sub-quads tile exactly; anti-aliasing would bleed seams
        paint.anti_alias = false;

        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, width: f32) {
        let [r, g, b, a] = color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);

        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgba,
        width: f32,
    },
}

impl DrawCall {
    /// True when every coordinate in the call is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            DrawCall::Clear(_) => true,
            DrawCall::FillRect { x, y, w, h, .. } => {
                [x, y, w, h].iter().all(|v| v.is_finite())
            }
            DrawCall::Line { x1, y1, x2, y2, .. } => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
            }
        }
    }
}

/// Surface that records calls instead of rasterizing, for tests.
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub calls: Vec<DrawCall>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded line calls, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
    }

    /// Recorded rect fills, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
    }
}

impl Surface for TraceSurface {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, width: f32) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }
}
