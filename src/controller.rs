//! The interaction state machine.
//!
//! DESIGN
//! ======
//! A press is hit-tested against the hotspot table. Dials start a drag whose
//! baseline is reset after every motion event, so value change follows
//! pointer velocity per event rather than total displacement. The retrigger
//! grid is addressed directly by pointer position and never starts a drag.
//!
//! Both axes are normalized by the canvas *height*, including the
//! horizontally dragged filter dials.
//!
//! Handlers never fail. A press, motion or release that lands on nothing is
//! a no-op and returns no actions. Entering or leaving a drag repaints the
//! dragged dial, which draws highlighted while active.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::debug;

use crate::consts::{DRAG_SCALE, GRID_SLICES, PROJECT_URL};
use crate::damage::DamageTracker;
use crate::geom::{Point, Rect};
use crate::hit::{Hit, grid_cell, hit_test};
use crate::input::{Button, Cursor, DragSession, InputState};
use crate::layout::{Axis, ControlKind, HotRegion, is_near_link, region_for};
use crate::params::{ParamKey, ParameterCache, clamp_unit, pack_retrigger};

/// Side effects requested by the controller, in the order they must happen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send a value to the host.
    WriteParameter { key: ParamKey, value: f32 },
    /// Ask the window to redraw this area.
    Repaint(Rect),
    /// Change the pointer shape.
    SetCursor(Cursor),
    /// Ask the window system to open a URL.
    OpenLink(&'static str),
}

/// Owns the drag session and turns pointer events into [`Action`]s.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    input: InputState,
    damage: DamageTracker,
    cursor: Cursor,
}

/// Value after dragging from the session baseline to `pt`.
///
/// Pixel delta is divided by `height` on both axes and scaled by
/// [`DRAG_SCALE`]. Moving up raises a normal dial; moving right raises an
/// inverted one.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn drag_value(session: &DragSession, pt: Point, height: f64) -> f32 {
    let delta = match session.axis {
        Axis::Normal => (pt.y - session.baseline_pointer.y) / height,
        Axis::Inverted => (pt.x - session.baseline_pointer.x) / height,
    } as f32;
    let value = match session.axis {
        Axis::Normal => session.baseline_value - delta * DRAG_SCALE,
        Axis::Inverted => session.baseline_value + delta * DRAG_SCALE,
    };
    clamp_unit(value)
}

impl InteractionController {
    #[must_use]
    pub fn new(damage: DamageTracker) -> Self {
        Self { input: InputState::Idle, damage, cursor: Cursor::Default }
    }

    // --- Queries ---

    /// Current state machine state.
    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.input
    }

    /// Parameter currently being dragged, if any.
    #[must_use]
    pub fn active_key(&self) -> Option<ParamKey> {
        self.input.session().map(|s| s.key)
    }

    #[must_use]
    pub fn damage(&self) -> &DamageTracker {
        &self.damage
    }

    // --- Window events ---

    /// Track a new canvas size. Always repaints everything.
    pub fn resize(&mut self, width: f64, height: f64) -> Action {
        self.damage.resize(width, height);
        self.damage.request_repaint()
    }

    /// Handle a button press at `pt`.
    ///
    /// Starting or replacing a drag repaints the dial whose highlight changes.
    pub fn press(&mut self, pt: Point, button: Button, cache: &mut ParameterCache) -> Vec<Action> {
        let mut actions = Vec::new();
        if let InputState::Dragging(session) = self.input {
            debug!(key = %session.key, "drag replaced by new press");
            self.input = InputState::Idle;
            actions.extend(self.repaint_control(session.key));
        }

        let Some(hit) = hit_test(pt) else {
            return actions;
        };

        match hit {
            Hit::Control(region) => match (region.kind, button) {
                (ControlKind::Continuous(axis), Button::Primary) => {
                    actions.extend(self.begin_drag(region, axis, pt, cache));
                }
                (ControlKind::Continuous(_), Button::Secondary) => actions.extend(self.reset(region, cache)),
                (ControlKind::DiscreteGrid, Button::Primary) => actions.extend(self.set_cell(region, pt, cache)),
                (ControlKind::DiscreteGrid, Button::Secondary) => actions.extend(self.clear_grid(region, cache)),
                (_, Button::Middle) => {}
            },
            Hit::Link if button != Button::Middle => actions.push(Action::OpenLink(PROJECT_URL)),
            Hit::Link => {}
        }
        actions
    }

    /// Handle pointer motion to `pt`.
    pub fn motion(&mut self, pt: Point, cache: &mut ParameterCache) -> Vec<Action> {
        let mut actions = Vec::new();

        let cursor = if is_near_link(pt) { Cursor::Link } else { Cursor::Default };
        if cursor != self.cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }

        let height = self.damage.height();
        let InputState::Dragging(session) = &mut self.input else {
            return actions;
        };
        if height <= 0.0 {
            return actions;
        }

        let value = cache.set(session.key, drag_value(session, pt, height));
        session.baseline_value = value;
        session.baseline_pointer = pt;
        let key = session.key;

        actions.extend(self.repaint_control(key));
        actions.push(Action::WriteParameter { key, value });
        actions
    }

    /// Handle a button release. Ends any drag; the last motion's write stands.
    ///
    /// Repaints the released dial so its highlight clears.
    pub fn release(&mut self) -> Vec<Action> {
        let InputState::Dragging(session) = self.input else {
            return Vec::new();
        };
        debug!(key = %session.key, value = session.baseline_value, "drag ended");
        self.input = InputState::Idle;
        self.repaint_control(session.key).into_iter().collect()
    }

    /// Rebase an active drag after the host changed the dragged value.
    pub fn rebase(&mut self, key: ParamKey, value: f32) {
        if let InputState::Dragging(session) = &mut self.input {
            if session.key == key {
                session.baseline_value = value;
            }
        }
    }

    /// Repaint request for the control bound to `key`.
    #[must_use]
    pub fn repaint_control(&self, key: ParamKey) -> Option<Action> {
        region_for(key).and_then(|region| self.damage.request_repaint_rect(region.damage_rect()))
    }

    // --- Press handlers ---

    fn begin_drag(&mut self, region: &HotRegion, axis: Axis, pt: Point, cache: &ParameterCache) -> Option<Action> {
        let baseline_value = cache.get(region.key);
        debug!(key = %region.key, baseline_value, "drag started");
        self.input = InputState::Dragging(DragSession { key: region.key, axis, baseline_value, baseline_pointer: pt });
        self.repaint_control(region.key)
    }

    fn reset(&self, region: &HotRegion, cache: &mut ParameterCache) -> Vec<Action> {
        let value = cache.set(region.key, region.default_value());
        debug!(key = %region.key, value, "reset to default");
        let mut actions = vec![Action::WriteParameter { key: region.key, value }];
        actions.extend(self.damage.request_repaint_rect(region.damage_rect()));
        actions
    }

    fn set_cell(&self, region: &HotRegion, pt: Point, cache: &mut ParameterCache) -> Vec<Action> {
        let (slice, level) = grid_cell(&region.rect, pt);
        let (slice, level) = cache.set_level(slice, level);
        debug!(slice, level, "retrigger cell set");
        let mut actions: Vec<Action> = self.damage.request_repaint_rect(region.damage_rect()).into_iter().collect();
        actions.push(Action::WriteParameter { key: region.key, value: pack_retrigger(slice, level) });
        actions
    }

    fn clear_grid(&self, region: &HotRegion, cache: &mut ParameterCache) -> Vec<Action> {
        debug!("retrigger grid cleared");
        let mut actions = Vec::with_capacity(GRID_SLICES * 2);
        for slice in 0..GRID_SLICES {
            let (slice, level) = cache.set_level(slice, 0);
            actions.push(Action::WriteParameter { key: region.key, value: pack_retrigger(slice, level) });
            actions.extend(self.damage.request_repaint_rect(region.damage_rect()));
        }
        actions
    }
}
