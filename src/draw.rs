//! Drawing a vector as a line sprite, through a small capability interface
//! so the host's image and sprite types stay outside the core.

use glam::DVec2;
use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::VectorError;
use crate::geometry::compute_line_geometry;
use crate::math::Point;
use crate::vector::Vector;

/// Something with a world-space position, e.g. a sprite.
pub trait PointEntity {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn position(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }
}

impl PointEntity for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PointEntity for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// A raster the line is drawn into. Colors are host palette indices.
pub trait Surface {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8);
    fn set_pixel(&mut self, x: i32, y: i32, color: u8);
}

/// A placed object whose top-left corner sits at (`left`, `top`).
pub trait Drawable {
    fn set_left(&mut self, left: f64);
    fn set_top(&mut self, top: f64);
}

/// Factory for surfaces and the drawables that display them.
pub trait Host {
    type Surface: Surface;
    type Drawable: Drawable;

    fn create_surface(&mut self, width: u32, height: u32) -> Self::Surface;
    fn create_drawable(&mut self, surface: Self::Surface, kind: i32) -> Self::Drawable;
}

/// How vector lines are painted. Every field is optional when loaded, so
/// `{}` gives the default style.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LineStyle {
    pub line_color: u8,
    /// Marks the far endpoint so the line reads as an arrow.
    pub tip_color: Option<u8>,
    /// Host sprite kind for the created drawable.
    pub kind: i32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_color: 2,
            tip_color: None,
            kind: 1,
        }
    }
}

impl LineStyle {
    pub fn from_json(json: &str) -> Result<LineStyle, VectorError> {
        serde_json::from_str(json).map_err(|e| {
            warn!("rejecting line style {:?}: {}", json, e);
            VectorError::InvalidStyle(e.to_string())
        })
    }

    /// `undefined` and `null` mean the default style.
    pub fn from_js(value: JsValue) -> Result<LineStyle, VectorError> {
        if value.is_undefined() || value.is_null() {
            return Ok(LineStyle::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| {
            warn!("rejecting line style: {}", e);
            VectorError::InvalidStyle(e.to_string())
        })
    }
}

/// Draws `vector` as a line starting at `anchor` and returns the placed
/// drawable. Nothing is retained after the call.
pub fn draw_vector_line<H, P>(
    host: &mut H,
    anchor: &P,
    vector: &Vector,
    style: &LineStyle,
) -> H::Drawable
where
    H: Host,
    P: PointEntity + ?Sized,
{
    let g = compute_line_geometry(vector.x(), vector.y());
    let (x0, y0) = g.origin();
    let (x1, y1) = g.far_end();

    let mut surface = host.create_surface(g.size, g.size);
    surface.draw_line(x0 as i32, y0 as i32, x1 as i32, y1 as i32, style.line_color);
    if let Some(tip) = style.tip_color {
        surface.set_pixel(x1 as i32, y1 as i32, tip);
    }

    let mut drawable = host.create_drawable(surface, style.kind);
    let left = anchor.x() + f64::from(g.offset_x);
    let top = anchor.y() + f64::from(g.offset_y);
    drawable.set_left(left);
    drawable.set_top(top);

    debug!(
        "drew vector ({}, {}) on a {}px surface at ({}, {})",
        vector.x(),
        vector.y(),
        g.size,
        left,
        top
    );
    drawable
}

/// Same as [`draw_vector_line`], starting from a `"<mag>|<dir>"` token.
pub fn draw_text_line<H, P>(
    host: &mut H,
    anchor: &P,
    token: &str,
    style: &LineStyle,
) -> Result<H::Drawable, VectorError>
where
    H: Host,
    P: PointEntity + ?Sized,
{
    let vector = Vector::from_text(token)?;
    Ok(draw_vector_line(host, anchor, &vector, style))
}
