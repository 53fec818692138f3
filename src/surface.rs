//! 2-D drawing target.
//!
//! [`Surface`] is the small path-and-stroke vocabulary the renderer needs.
//! Backends implement it for a real context; [`DrawList`] records the calls
//! instead, which makes rendering output comparable in tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;
use std::fmt::Debug;

use crate::color::Rgba;
use crate::geom::Rect;
use crate::header::HeaderImage;

/// Stroke end style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    /// Round caps and round joins.
    Round,
}

/// Something the panel can be drawn onto.
///
/// Arcs run in the direction of increasing angle; an end angle smaller than
/// the start wraps through zero. Path calls accumulate until `fill` or
/// `stroke` consumes the path.
pub trait Surface {
    type Error: Debug;

    /// Push the drawing state (colour, line style, clip).
    fn save(&mut self);
    /// Pop the drawing state.
    fn restore(&mut self);
    /// Intersect the clip region with `rect`.
    fn clip(&mut self, rect: Rect);

    fn set_colour(&mut self, colour: Rgba);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    /// Dash pattern for subsequent strokes; empty means solid.
    fn set_dash(&mut self, dashes: &[f64]) -> Result<(), Self::Error>;

    fn rectangle(&mut self, rect: Rect);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) -> Result<(), Self::Error>;

    fn fill(&mut self);
    fn stroke(&mut self);

    /// Draw `text` with its baseline starting at `(x, y)`.
    fn show_text(&mut self, x: f64, y: f64, size: f64, text: &str) -> Result<(), Self::Error>;
    /// Blit `image` with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: &HeaderImage, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Clip(Rect),
    SetColour(Rgba),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetDash(Vec<f64>),
    Rectangle(Rect),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64 },
    Fill,
    Stroke,
    Text { x: f64, y: f64, size: f64, text: String },
    Image { x: f64, y: f64, width: u32, height: u32 },
}

/// A surface that records every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text strings drawn, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Arcs drawn, as `(radius, angle1, angle2)`.
    #[must_use]
    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Arc { radius, angle1, angle2, .. } => Some((radius, angle1, angle2)),
                _ => None,
            })
            .collect()
    }

    /// Number of times `op` was recorded.
    #[must_use]
    pub fn count(&self, op: &DrawOp) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn clip(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clip(rect));
    }

    fn set_colour(&mut self, colour: Rgba) {
        self.ops.push(DrawOp::SetColour(colour));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(DrawOp::SetLineCap(cap));
    }

    fn set_dash(&mut self, dashes: &[f64]) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::SetDash(dashes.to_vec()));
        Ok(())
    }

    fn rectangle(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Rectangle(rect));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Arc { xc, yc, radius, angle1, angle2 });
        Ok(())
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn show_text(&mut self, x: f64, y: f64, size: f64, text: &str) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Text { x, y, size, text: text.to_string() });
        Ok(())
    }

    fn draw_image(&mut self, image: &HeaderImage, x: f64, y: f64) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Image { x, y, width: image.width, height: image.height });
        Ok(())
    }
}
