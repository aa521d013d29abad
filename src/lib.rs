pub mod draw;
pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod raster;
pub mod text;
pub mod vector;

use wasm_bindgen::prelude::*;

pub use crate::draw::{draw_text_line, draw_vector_line, LineStyle};
pub use crate::error::{TextFault, VectorError};
pub use crate::geometry::{compute_line_geometry, LineGeometry};
pub use crate::math::Point;
pub use crate::vector::{add_texts, Vector};

use crate::draw::PointEntity;
use crate::host::{HostRuntime, Sprite};

// --- BLOCK EXPORTS ---
// Each function below backs one block in the host's "Vectors" toolbox.
// Fallible ones throw a JS `Error` carrying the `VectorError` message.

#[wasm_bindgen(start)]
pub fn start() {
    // Panic hook for better error logging in browser console
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = createVector)]
pub fn create_vector(mag: f64, dir: f64) -> Vector {
    Vector::from_polar(mag, dir)
}

#[wasm_bindgen(js_name = createVectorXY)]
pub fn create_vector_xy(x: f64, y: f64) -> Vector {
    Vector::from_cartesian(x, y)
}

#[wasm_bindgen(js_name = createVectorFromSprites)]
pub fn create_vector_from_sprites(from: &Sprite, to: &Sprite) -> Vector {
    Vector::from_points(from.position(), to.position())
}

/// Same as `createVectorFromSprites` for plain `{x, y}` objects.
#[wasm_bindgen(js_name = createVectorFromPoints)]
pub fn create_vector_from_points(origin: JsValue, target: JsValue) -> Result<Vector, JsError> {
    let origin = point_from_js(origin)?;
    let target = point_from_js(target)?;
    Ok(Vector::from_points(origin.to_glam(), target.to_glam()))
}

#[wasm_bindgen(js_name = createVectorFromText)]
pub fn create_vector_from_text(mag_dir_text: &str) -> Result<Vector, JsError> {
    Ok(Vector::from_text(mag_dir_text)?)
}

#[wasm_bindgen]
pub fn text(v: &Vector) -> String {
    v.to_text()
}

#[wasm_bindgen(js_name = addVectors)]
pub fn add_vectors(a: &str, b: &str) -> Result<Vector, JsError> {
    Ok(add_texts(a, b)?)
}

/// Kept so block programs that call "destroy" still run. The vector is a
/// value owned by the caller; nothing is released here.
#[wasm_bindgen]
pub fn destroy(_v: &Vector) {}

#[wasm_bindgen(js_name = computeLineGeometry)]
pub fn compute_line_geometry_js(dx: i32, dy: i32) -> LineGeometry {
    compute_line_geometry(dx, dy)
}

/// `style` may be omitted; see [`LineStyle`] for the accepted fields.
#[wasm_bindgen(js_name = drawLineFromSpriteAlongVector)]
pub fn draw_line_from_sprite_along_vector(
    from: &Sprite,
    vector_text: &str,
    style: JsValue,
) -> Result<Sprite, JsError> {
    let style = LineStyle::from_js(style)?;
    Ok(draw_text_line(&mut HostRuntime, from, vector_text, &style)?)
}

fn point_from_js(value: JsValue) -> Result<Point, VectorError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| VectorError::InvalidPoint(e.to_string()))
}
