//! Shared numeric constants for the control panel.
//!
//! Hit-testing, damage scoping and rendering all read geometry from here so
//! the three can never drift apart.

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 956.0;

/// Default canvas height in pixels. Also the drag normalization divisor until a resize arrives.
pub const CANVAS_HEIGHT: f64 = 546.0;

// ── Panel tiling ────────────────────────────────────────────────

/// Left edge of the first panel column.
pub const LEFT_MARGIN: f64 = 33.0;

/// Top edge of the first panel row; the header graphic sits above it.
pub const TOP_MARGIN: f64 = 74.0;

/// Width of one panel column.
pub const COLUMN_WIDTH: f64 = 159.0;

/// Space between neighbouring columns and rows.
pub const GUTTER: f64 = 24.0;

/// Height of a standard panel row.
pub const ROW_HEIGHT: f64 = 135.0;

/// Height of a tall panel row.
pub const TALL_ROW_HEIGHT: f64 = 215.0;

/// Number of panel columns.
pub const COLUMNS: usize = 5;

// ── Panel decoration ────────────────────────────────────────────

/// Height of the caption strip at the top of each panel.
pub const PANEL_HEADER_HEIGHT: f64 = 20.0;

/// Caption inset from the panel's left edge.
pub const PANEL_CAPTION_X: f64 = 10.0;

/// Caption baseline offset from the panel's top edge.
pub const PANEL_CAPTION_Y: f64 = 14.0;

/// Font size for panel captions and control labels.
pub const CAPTION_FONT_SIZE: f64 = 10.0;

/// Horizontal distance between hatch lines.
pub const HATCH_SPACING: f64 = 4.0;

/// On/off lengths of the hatch dash pattern.
pub const HATCH_DASH: [f64; 2] = [2.0, 2.0];

/// Alpha of the hatch stroke.
pub const HATCH_ALPHA: f32 = 0.5;

// ── Dial ────────────────────────────────────────────────────────

/// Dial centre offset from the widget origin.
pub const DIAL_CENTER_DX: f64 = 16.0;
pub const DIAL_CENTER_DY: f64 = 22.0;

/// Radius of the background travel arc.
pub const DIAL_RADIUS: f64 = 14.0;

/// Radii of the two value strokes (inner sweep, outer outline).
pub const DIAL_VALUE_INNER_RADIUS: f64 = 13.0;
pub const DIAL_VALUE_OUTER_RADIUS: f64 = 17.0;

/// Angle where travel begins, in radians.
pub const DIAL_START_ANGLE: f64 = 2.46;

/// Angle where the background arc ends (wraps through zero).
pub const DIAL_END_ANGLE: f64 = 0.75;

/// Radians of sweep per unit of normalized value.
pub const DIAL_SWEEP: f64 = 4.54;

/// Line widths for the background arc and the value strokes.
pub const DIAL_TRACK_WIDTH: f64 = 2.4;
pub const DIAL_VALUE_WIDTH: f64 = 1.7;

/// Label baseline offset from the widget origin, below the dial.
pub const DIAL_LABEL_DX: f64 = 4.0;
pub const DIAL_LABEL_DY: f64 = 54.0;

/// Margin added around a hotspot so its damage rect covers the dial strokes.
pub const DAMAGE_MARGIN: f64 = 4.0;

// ── Interaction ─────────────────────────────────────────────────

/// Value change per canvas-height of pointer travel.
pub const DRAG_SCALE: f32 = 3.0;

/// Retrigger grid: slices along y, levels along x.
pub const GRID_SLICES: usize = 16;
pub const GRID_LEVELS: usize = 5;

/// Divisor used to pack a level into the fractional part of the slice index.
pub const GRID_LEVEL_DIVISOR: f32 = 10.0;

// ── Header ──────────────────────────────────────────────────────

/// Well-known install locations of the header graphic, tried in order.
pub const HEADER_PATHS: [&str; 2] = ["/usr/lib/lv2/source.lv2/header.png", "/usr/local/lib/lv2/source.lv2/header.png"];

/// Left edge of the clickable project link inside the header graphic.
pub const LINK_LEFT: f64 = 623.0;

/// Vertical band of the project link.
pub const LINK_TOP: f64 = 26.0;
pub const LINK_BOTTOM: f64 = 70.0;

/// Top of the band where hovering shows the link cursor; a little taller than the clickable band.
pub const LINK_HOVER_TOP: f64 = 20.0;

/// Where the header link points.
pub const PROJECT_URL: &str = "http://www.openavproductions.com";
