//! Composition root.
//!
//! [`Canvas`] owns the parameter mirror, the interaction controller and the
//! header graphic, and sits between two collaborators: the host (which
//! receives parameter writes and pushes state back) and the window (which
//! delivers pointer events, repaints on request and paints via a
//! [`Surface`]). Everything runs on the caller's thread; nothing here blocks.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::controller::{Action, InteractionController};
use crate::damage::DamageTracker;
use crate::geom::{Point, Rect};
use crate::header::{HeaderImage, load_header};
use crate::input::{Button, Cursor};
use crate::params::{ParamKey, ParameterCache, unpack_retrigger};
use crate::render::{self, Scene};
use crate::surface::Surface;

/// Outbound parameter channel to the audio engine.
pub trait ParameterWriter {
    /// Send `value` for `key`. Calls arrive in emission order.
    fn write_parameter(&mut self, key: ParamKey, value: f32);
}

/// The window the panel lives in.
pub trait WindowHandle {
    /// Schedule a repaint of `rect`.
    fn invalidate(&mut self, rect: Rect);

    /// Change the pointer shape. Ignored unless overridden.
    fn set_cursor(&mut self, _cursor: Cursor) {}

    /// Open `url` in a browser. Ignored unless overridden.
    fn open_link(&mut self, _url: &str) {}
}

/// The control panel.
pub struct Canvas<H, W> {
    params: ParameterCache,
    controller: InteractionController,
    header: Option<HeaderImage>,
    host: H,
    window: W,
}

impl<H: ParameterWriter, W: WindowHandle> Canvas<H, W> {
    /// Build the panel, loading the header graphic from `config.header_paths`.
    ///
    /// A missing or unreadable header is logged and otherwise ignored.
    pub fn new(config: &UiConfig, host: H, window: W) -> Self {
        let header = match load_header(&config.header_paths) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!(%err, "continuing without header image");
                None
            }
        };
        Self::with_header(config, header, host, window)
    }

    /// Build the panel with an already loaded (or absent) header graphic.
    pub fn with_header(config: &UiConfig, header: Option<HeaderImage>, host: H, window: W) -> Self {
        Self {
            params: ParameterCache::new(),
            controller: InteractionController::new(DamageTracker::new(config.width, config.height)),
            header,
            host,
            window,
        }
    }

    // --- Window events ---

    pub fn on_press(&mut self, x: f64, y: f64, button: Button) {
        let actions = self.controller.press(Point::new(x, y), button, &mut self.params);
        self.dispatch(actions);
    }

    pub fn on_release(&mut self, _x: f64, _y: f64, _button: Button) {
        let actions = self.controller.release();
        self.dispatch(actions);
    }

    pub fn on_motion(&mut self, x: f64, y: f64) {
        let actions = self.controller.motion(Point::new(x, y), &mut self.params);
        self.dispatch(actions);
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        let action = self.controller.resize(width, height);
        self.dispatch(vec![action]);
    }

    /// Redraw `damaged` onto `surface`.
    ///
    /// Surface failures are logged and swallowed; a failed frame is simply
    /// incomplete until the next repaint.
    pub fn paint<S: Surface>(&self, surface: &mut S, damaged: Rect) {
        let scene = Scene {
            params: &self.params,
            active: self.controller.active_key(),
            header: self.header.as_ref(),
        };
        if let Err(err) = render::draw_scene(surface, &scene, damaged) {
            warn!(?err, ?damaged, "paint failed");
        }
    }

    // --- Host pushes ---

    /// Accept a value pushed by the host under its parameter name.
    ///
    /// Unknown names are ignored.
    pub fn set_parameter(&mut self, name: &str, value: f32) {
        match name.parse::<ParamKey>() {
            Ok(key) => self.set_param(key, value),
            Err(err) => debug!(%err, value, "ignoring host push"),
        }
    }

    /// Accept a value pushed by the host on a control port.
    ///
    /// Unknown ports are ignored.
    pub fn set_parameter_port(&mut self, port: u32, value: f32) {
        match ParamKey::from_port(port) {
            Some(key) => self.set_param(key, value),
            None => debug!(port, value, "ignoring host push on unknown port"),
        }
    }

    /// Accept a value pushed by the host for `key`.
    ///
    /// Dials clamp into `[0, 1]`. Retrigger values carry a packed
    /// `slice + level / 10` cell; values that name no cell are ignored.
    pub fn set_param(&mut self, key: ParamKey, value: f32) {
        if key == ParamKey::Retrigger && unpack_retrigger(value).is_none() {
            debug!(value, "ignoring retrigger push outside the grid");
            return;
        }
        let stored = self.params.set(key, value);
        self.controller.rebase(key, stored);
        let repaint = self.controller.repaint_control(key);
        self.dispatch(repaint.into_iter().collect());
    }

    // --- Queries ---

    #[must_use]
    pub fn params(&self) -> &ParameterCache {
        &self.params
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[must_use]
    pub fn header_loaded(&self) -> bool {
        self.header.is_some()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn window(&self) -> &W {
        &self.window
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::WriteParameter { key, value } => self.host.write_parameter(key, value),
                Action::Repaint(rect) => self.window.invalidate(rect),
                Action::SetCursor(cursor) => self.window.set_cursor(cursor),
                Action::OpenLink(url) => self.window.open_link(url),
            }
        }
    }
}
