#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{GRID_LEVELS, GRID_SLICES};
use crate::geom::{Point, Rect};
use crate::layout::{HOT_REGIONS, HotRegion, is_over_link};

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// A control hotspot.
    Control(&'static HotRegion),
    /// The project link in the header graphic.
    Link,
}

/// Test which control (if any) is under `pt`.
///
/// Regions are tried in declaration order and the first match wins; the
/// header link is only considered when no control matches.
#[must_use]
pub fn hit_test(pt: Point) -> Option<Hit> {
    if let Some(region) = HOT_REGIONS.iter().find(|r| r.rect.contains(pt)) {
        return Some(Hit::Control(region));
    }
    is_over_link(pt).then_some(Hit::Link)
}

/// Quantize a point inside the retrigger grid into `(slice, level)`.
///
/// Slices run top to bottom, levels left to right. Points on or past the
/// far edges land in the last slice/level.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn grid_cell(rect: &Rect, pt: Point) -> (usize, u8) {
    let slice_h = rect.height / GRID_SLICES as f64;
    let level_w = rect.width / GRID_LEVELS as f64;
    let slice = ((pt.y - rect.y) / slice_h).floor().max(0.0) as usize;
    let level = ((pt.x - rect.x) / level_w).floor().max(0.0) as usize;
    (slice.min(GRID_SLICES - 1), level.min(GRID_LEVELS - 1) as u8)
}
