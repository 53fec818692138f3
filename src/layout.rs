//! Static layout: panels and control hotspots.
//!
//! Panels tile on a fixed column grid (see [`column_x`] and [`row_y`]). The
//! hotspot table is shared by hit-testing, damage scoping and rendering, so a
//! control is always drawn exactly where it can be clicked.
//!
//! Hotspot order is significant: [`crate::hit::hit_test`] returns the first
//! region containing the pointer, so the declaration order below is the
//! priority order.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    COLUMN_WIDTH, COLUMNS, DAMAGE_MARGIN, GUTTER, LEFT_MARGIN, LINK_BOTTOM, LINK_HOVER_TOP, LINK_LEFT, LINK_TOP,
    ROW_HEIGHT,
    TALL_ROW_HEIGHT, TOP_MARGIN,
};
use crate::geom::{Point, Rect};
use crate::params::ParamKey;

/// Which pointer axis drives a continuous control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Vertical drag; moving up raises the value.
    Normal,
    /// Horizontal drag with the delta sign flipped; moving right raises the value.
    Inverted,
}

/// How a hotspot turns pointer input into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// A dial driven by relative drags.
    Continuous(Axis),
    /// The retrigger step grid, addressed by absolute position.
    DiscreteGrid,
}

/// A clickable control: its rectangle, the parameter it drives and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotRegion {
    pub key: ParamKey,
    pub rect: Rect,
    pub kind: ControlKind,
    pub label: &'static str,
}

impl HotRegion {
    const fn continuous(key: ParamKey, rect: Rect, axis: Axis, label: &'static str) -> Self {
        Self { key, rect, kind: ControlKind::Continuous(axis), label }
    }

    /// Area to repaint when this control's value changes.
    #[must_use]
    pub fn damage_rect(&self) -> Rect {
        self.rect.inflate(DAMAGE_MARGIN)
    }

    /// Value written by a reset-to-default action.
    #[must_use]
    pub fn default_value(&self) -> f32 {
        self.key.default_value()
    }
}

/// A captioned background panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub caption: &'static str,
    pub rect: Rect,
}

/// Left edge of panel column `col`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn column_x(col: usize) -> f64 {
    LEFT_MARGIN + col as f64 * (COLUMN_WIDTH + GUTTER)
}

/// Width of a panel spanning `cols` columns, including the gutters between them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn span_width(cols: usize) -> f64 {
    cols as f64 * COLUMN_WIDTH + cols.saturating_sub(1) as f64 * GUTTER
}

/// Top edge of row `row`, given whether each preceding row is tall.
#[must_use]
pub fn row_y(row: usize, tall_rows: &[bool]) -> f64 {
    tall_rows
        .iter()
        .take(row)
        .fold(TOP_MARGIN, |y, &tall| y + row_height(tall) + GUTTER)
}

/// Height of a standard or tall row.
#[must_use]
pub fn row_height(tall: bool) -> f64 {
    if tall { TALL_ROW_HEIGHT } else { ROW_HEIGHT }
}

/// Both panel rows are tall.
const ROWS: [bool; 2] = [true, true];

/// The six panels in draw order.
#[must_use]
pub fn panels() -> [Panel; 6] {
    let top = row_y(0, &ROWS);
    let bottom = row_y(1, &ROWS);
    let h = row_height(true);
    let cell = |col: usize, caption: &'static str| Panel {
        caption,
        rect: Rect::new(column_x(col), bottom, COLUMN_WIDTH, h),
    };
    [
        Panel { caption: "Refractor", rect: Rect::new(column_x(0), top, span_width(COLUMNS), h) },
        cell(0, "Source"),
        cell(1, "Retrigger"),
        cell(2, "Crush"),
        cell(3, "Filter"),
        cell(4, "Master"),
    ]
}

/// Every control hotspot, in hit-test priority order.
pub const HOT_REGIONS: [HotRegion; 7] = [
    HotRegion::continuous(ParamKey::Bitcrush, Rect::new(411.0, 341.0, 138.0, 83.0), Axis::Normal, "Bitcrush"),
    HotRegion::continuous(ParamKey::Distortion, Rect::new(411.0, 434.0, 138.0, 82.0), Axis::Normal, "Distort"),
    HotRegion::continuous(ParamKey::Highpass, Rect::new(594.0, 341.0, 138.0, 83.0), Axis::Inverted, "Highpass"),
    HotRegion::continuous(ParamKey::Lowpass, Rect::new(594.0, 434.0, 138.0, 82.0), Axis::Inverted, "Lowpass"),
    HotRegion {
        key: ParamKey::Retrigger,
        rect: Rect::new(226.0, 340.0, 138.0, 175.0),
        kind: ControlKind::DiscreteGrid,
        label: "Retrigger",
    },
    HotRegion::continuous(ParamKey::MasterVolume, Rect::new(859.0, 341.0, 58.0, 175.0), Axis::Normal, "Volume"),
    HotRegion::continuous(ParamKey::Pitch, Rect::new(127.0, 341.0, 58.0, 175.0), Axis::Normal, "Pitch"),
];

/// The hotspot bound to `key`.
#[must_use]
pub fn region_for(key: ParamKey) -> Option<&'static HotRegion> {
    HOT_REGIONS.iter().find(|r| r.key == key)
}

/// Whether `pt` is over the project link in the header graphic.
///
/// The link runs from its left edge to the right side of the window.
#[must_use]
pub fn is_over_link(pt: Point) -> bool {
    pt.x > LINK_LEFT && pt.y > LINK_TOP && pt.y < LINK_BOTTOM
}

/// Whether hovering at `pt` should show the link cursor.
#[must_use]
pub fn is_near_link(pt: Point) -> bool {
    pt.x > LINK_LEFT && pt.y > LINK_HOVER_TOP && pt.y < LINK_BOTTOM
}
