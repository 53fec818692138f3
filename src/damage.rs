//! Repaint requests.
//!
//! The tracker never keeps a pending set: each request turns straight into an
//! [`Action::Repaint`] and coalescing is left to the window system.

#[cfg(test)]
#[path = "damage_test.rs"]
mod damage_test;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::controller::Action;
use crate::geom::Rect;

/// Knows the canvas bounds and turns repaint requests into actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageTracker {
    bounds: Rect,
}

impl Default for DamageTracker {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl DamageTracker {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { bounds: Rect::new(0.0, 0.0, width, height) }
    }

    /// The whole canvas.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Canvas height, the drag normalization divisor.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    /// Track a new window size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Rect::new(0.0, 0.0, width, height);
    }

    /// Repaint everything.
    #[must_use]
    pub fn request_repaint(&self) -> Action {
        Action::Repaint(self.bounds)
    }

    /// Repaint only `rect`, clipped to the canvas.
    ///
    /// Returns `None` when nothing of `rect` is visible.
    #[must_use]
    pub fn request_repaint_rect(&self, rect: Rect) -> Option<Action> {
        self.bounds.intersect(&rect).map(Action::Repaint)
    }
}
