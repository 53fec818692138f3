//! Rendering: draws the panel onto a [`Surface`].
//!
//! Everything here is a pure function of its arguments. Renderers read the
//! parameter cache and the layout tables and produce drawing calls; they never
//! mutate application state.
//!
//! All fallible surface calls propagate errors. The top-level caller
//! ([`crate::canvas::Canvas::paint`]) decides what to do with them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::color::{Colour, Rgba};
use crate::consts::{
    CAPTION_FONT_SIZE, DIAL_CENTER_DX, DIAL_CENTER_DY, DIAL_END_ANGLE, DIAL_LABEL_DX, DIAL_LABEL_DY, DIAL_RADIUS,
    DIAL_START_ANGLE, DIAL_SWEEP, DIAL_TRACK_WIDTH, DIAL_VALUE_INNER_RADIUS, DIAL_VALUE_OUTER_RADIUS,
    DIAL_VALUE_WIDTH, GRID_LEVELS, GRID_SLICES, HATCH_ALPHA, HATCH_DASH, HATCH_SPACING, PANEL_CAPTION_X,
    PANEL_CAPTION_Y, PANEL_HEADER_HEIGHT,
};
use crate::geom::{Point, Rect};
use crate::header::HeaderImage;
use crate::layout::{ControlKind, HOT_REGIONS, HotRegion, panels};
use crate::params::{ParamKey, ParameterCache};
use crate::surface::{LineCap, Surface};

/// Fill behind everything in a damaged area.
const CLEAR_COLOUR: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

/// Gap between neighbouring grid cells.
const GRID_CELL_INSET: f64 = 1.0;

/// Read-only view of everything a repaint needs.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub params: &'a ParameterCache,
    /// Parameter being dragged; its dial draws highlighted.
    pub active: Option<ParamKey>,
    pub header: Option<&'a HeaderImage>,
}

/// Redraw `damaged`: background, header, panels, then controls.
///
/// Controls whose damage rect misses `damaged` are skipped; panels are
/// always drawn, in layout order.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_scene<S: Surface>(surface: &mut S, scene: &Scene<'_>, damaged: Rect) -> Result<(), S::Error> {
    surface.save();
    surface.clip(damaged);

    surface.rectangle(damaged);
    surface.set_colour(CLEAR_COLOUR);
    surface.fill();

    if let Some(header) = scene.header {
        surface.save();
        surface.clip(header.bounds());
        surface.draw_image(header, 0.0, 0.0)?;
        surface.restore();
    }

    for panel in panels() {
        draw_panel(surface, panel.rect, panel.caption)?;
    }

    for region in HOT_REGIONS.iter().filter(|r| r.damage_rect().intersect(&damaged).is_some()) {
        draw_control(surface, region, scene)?;
    }

    surface.restore();
    Ok(())
}

// =============================================================
// Panels
// =============================================================

/// Draw a hatched, captioned panel background.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_panel<S: Surface>(surface: &mut S, rect: Rect, caption: &str) -> Result<(), S::Error> {
    surface.rectangle(rect);
    surface.set_colour(Colour::Grey3.rgba());
    surface.fill();

    // Vertical dotted hatch.
    surface.set_line_cap(LineCap::Butt);
    surface.set_dash(&HATCH_DASH)?;
    surface.set_line_width(1.0);
    let mut x = rect.x;
    while x < rect.right() {
        surface.move_to(x, rect.y);
        surface.line_to(x, rect.bottom());
        x += HATCH_SPACING;
    }
    surface.set_colour(Colour::Grey4.with_alpha(HATCH_ALPHA));
    surface.stroke();
    surface.set_dash(&[])?;

    // Caption strip.
    surface.rectangle(Rect::new(rect.x, rect.y, rect.width, PANEL_HEADER_HEIGHT));
    surface.set_colour(Colour::Grey4.rgba());
    surface.fill();

    surface.set_colour(Colour::Blue1.rgba());
    surface.show_text(rect.x + PANEL_CAPTION_X, rect.y + PANEL_CAPTION_Y, CAPTION_FONT_SIZE, caption)?;

    surface.move_to(rect.x, rect.y + PANEL_HEADER_HEIGHT);
    surface.line_to(rect.right(), rect.y + PANEL_HEADER_HEIGHT);
    surface.stroke();

    // Rim.
    surface.rectangle(rect);
    surface.stroke();
    Ok(())
}

// =============================================================
// Dials
// =============================================================

/// End angle of a dial's value sweep.
///
/// Negative values are treated as 0. Values above 1 are not clamped here.
#[must_use]
pub fn dial_angle(value: f32) -> f64 {
    DIAL_START_ANGLE + DIAL_SWEEP * f64::from(value.max(0.0))
}

/// Draw a rotary indicator with its top-left at `origin`.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_dial<S: Surface>(surface: &mut S, active: bool, origin: Point, value: f32) -> Result<(), S::Error> {
    let xc = origin.x + DIAL_CENTER_DX;
    let yc = origin.y + DIAL_CENTER_DY;

    surface.save();
    surface.set_line_cap(LineCap::Round);

    // Travel track.
    surface.set_line_width(DIAL_TRACK_WIDTH);
    surface.set_colour((if active { Colour::Grey4 } else { Colour::Grey3 }).rgba());
    surface.arc(xc, yc, DIAL_RADIUS, DIAL_START_ANGLE, DIAL_END_ANGLE)?;
    surface.stroke();

    // Value sweep, inner and outer.
    let angle = dial_angle(value);
    surface.set_colour((if active { Colour::Grey1 } else { Colour::Grey2 }).rgba());
    surface.set_line_width(DIAL_VALUE_WIDTH);
    for radius in [DIAL_VALUE_INNER_RADIUS, DIAL_VALUE_OUTER_RADIUS] {
        surface.arc(xc, yc, radius, DIAL_START_ANGLE, angle)?;
        surface.line_to(xc, yc);
        surface.stroke();
    }

    surface.restore();
    Ok(())
}

// =============================================================
// Retrigger grid
// =============================================================

/// Draw the slice × level step grid.
///
/// Each slice is a row; cells up to its level are lit, the level cell itself brightest.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
#[allow(clippy::cast_precision_loss)]
pub fn draw_retrigger_grid<S: Surface>(
    surface: &mut S,
    rect: Rect,
    levels: &[u8; GRID_SLICES],
) -> Result<(), S::Error> {
    let cell_h = rect.height / GRID_SLICES as f64;
    let cell_w = rect.width / GRID_LEVELS as f64;

    surface.save();
    surface.set_line_width(1.0);
    for (slice, &level) in levels.iter().enumerate() {
        for cell in 0..GRID_LEVELS {
            let cell_rect = Rect::new(
                rect.x + cell as f64 * cell_w + GRID_CELL_INSET,
                rect.y + slice as f64 * cell_h + GRID_CELL_INSET,
                cell_w - 2.0 * GRID_CELL_INSET,
                cell_h - 2.0 * GRID_CELL_INSET,
            );
            surface.rectangle(cell_rect);
            match cell.cmp(&usize::from(level)) {
                std::cmp::Ordering::Less => {
                    surface.set_colour(Colour::Blue2.rgba());
                    surface.fill();
                }
                std::cmp::Ordering::Equal => {
                    surface.set_colour(Colour::Blue1.rgba());
                    surface.fill();
                }
                std::cmp::Ordering::Greater => {
                    surface.set_colour(Colour::Grey4.rgba());
                    surface.stroke();
                }
            }
        }
    }
    surface.restore();
    Ok(())
}

// =============================================================
// Controls
// =============================================================

/// Draw one control from the hotspot table.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_control<S: Surface>(surface: &mut S, region: &HotRegion, scene: &Scene<'_>) -> Result<(), S::Error> {
    match region.kind {
        ControlKind::DiscreteGrid => draw_retrigger_grid(surface, region.rect, scene.params.levels()),
        ControlKind::Continuous(_) => {
            let origin = Point::new(region.rect.x, region.rect.y);
            let active = scene.active == Some(region.key);
            draw_dial(surface, active, origin, scene.params.get(region.key))?;
            surface.set_colour(Colour::Blue1.rgba());
            surface.show_text(origin.x + DIAL_LABEL_DX, origin.y + DIAL_LABEL_DY, CAPTION_FONT_SIZE, region.label)
        }
    }
}
