//! Browser backend: [`Surface`] over a 2-D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. All fallible `Canvas2D` calls
//! propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use crate::color::Rgba;
use crate::geom::Rect;
use crate::header::HeaderImage;
use crate::surface::{LineCap, Surface};

const FONT_FAMILY: &str = "sans-serif";

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn clip(&mut self, rect: Rect) {
        self.begin_path();
        self.rect(rect.x, rect.y, rect.width, rect.height);
        CanvasRenderingContext2d::clip(self);
        self.begin_path();
    }

    fn set_colour(&mut self, colour: Rgba) {
        let css = colour.to_css();
        self.set_fill_style_str(&css);
        self.set_stroke_style_str(&css);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        let (cap, join) = match cap {
            LineCap::Butt => ("butt", "miter"),
            LineCap::Round => ("round", "round"),
        };
        CanvasRenderingContext2d::set_line_cap(self, cap);
        self.set_line_join(join);
    }

    fn set_dash(&mut self, dashes: &[f64]) -> Result<(), JsValue> {
        let dash_array = js_sys::Array::new();
        for &dash in dashes {
            dash_array.push(&dash.into());
        }
        self.set_line_dash(&dash_array)
    }

    fn rectangle(&mut self, rect: Rect) {
        self.rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, xc, yc, radius, angle1, angle2)
    }

    // Canvas keeps the path after painting it; the surface contract consumes it.
    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
        self.begin_path();
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
        self.begin_path();
    }

    fn show_text(&mut self, x: f64, y: f64, size: f64, text: &str) -> Result<(), JsValue> {
        self.set_font(&format!("{size:.0}px {FONT_FAMILY}"));
        self.fill_text(text, x, y)
    }

    fn draw_image(&mut self, image: &HeaderImage, x: f64, y: f64) -> Result<(), JsValue> {
        let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(image.rgba.as_slice()), image.width, image.height)?;
        self.put_image_data(&data, x, y)
    }
}
