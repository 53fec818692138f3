//! Input model: pointer buttons, cursors, and the drag state machine state.
//!
//! `InputState` is the gesture being tracked between a press and the next
//! release. It carries the baseline needed to turn each motion event into a
//! parameter delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::layout::Axis;
use crate::params::ParamKey;

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left button: drag a dial or set a grid cell.
    Primary,
    /// Middle button. Not bound to anything.
    Middle,
    /// Right button: reset a dial or clear the grid.
    Secondary,
}

impl Button {
    /// Map a conventional 1-based button number (1 left, 2 middle, 3 right).
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Primary),
            2 => Some(Self::Middle),
            3 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Pointer shape the window should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Hovering a clickable link.
    Link,
}

/// Baseline of an in-progress dial drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Parameter being dragged.
    pub key: ParamKey,
    /// Pointer axis and sign convention.
    pub axis: Axis,
    /// Value at the previous event.
    pub baseline_value: f32,
    /// Pointer position at the previous event.
    pub baseline_pointer: Point,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// A dial is being dragged.
    Dragging(DragSession),
}

impl InputState {
    /// The active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
