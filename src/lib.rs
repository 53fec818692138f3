//! Control panel for the Refractor slicing/retrigger audio effect.
//!
//! The panel mirrors seven host parameters, draws them as dials and a step
//! grid, and turns pointer gestures into parameter writes. It is backend
//! agnostic: drawing goes through the [`surface::Surface`] trait and window
//! side effects through [`canvas::WindowHandle`]. With the `web` feature a
//! browser 2-D canvas context implements `Surface` directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`canvas`] | Composition root: wires host, window, controller and renderer |
//! | [`controller`] | Pointer state machine producing [`controller::Action`]s |
//! | [`params`] | Parameter keys, ports, defaults and the local value cache |
//! | [`layout`] | Panel tiling and the hotspot table |
//! | [`hit`] | Hit-testing against hotspots and the header link |
//! | [`input`] | Button, cursor and drag-session types |
//! | [`damage`] | Repaint requests scoped to the canvas |
//! | [`render`] | Panel, dial and grid renderers |
//! | [`surface`] | Drawing trait and the recording [`surface::DrawList`] |
//! | [`header`] | Header graphic loading |
//! | [`color`] | Named palette |
//! | [`geom`] | Points and rectangles |
//! | [`config`] | Environment-driven configuration |
//! | [`consts`] | Shared geometry and interaction constants |

pub mod canvas;
pub mod color;
pub mod config;
pub mod consts;
pub mod controller;
pub mod damage;
pub mod geom;
pub mod header;
pub mod hit;
pub mod input;
pub mod layout;
pub mod params;
pub mod render;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;
