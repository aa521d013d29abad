use wasm_bindgen::prelude::*;

/// Where to draw a vector inside its square raster, and how far to shift
/// that raster so the line starts on the anchor point.
///
/// The raster only has non-negative coordinates, so a component pointing
/// left (or up) starts the line on the far edge and moves the raster back
/// by the same amount.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineGeometry {
    /// Side of the square surface, one pixel more than the longest component.
    pub size: u32,
    pub x_from: u32,
    pub y_from: u32,
    pub x_to: u32,
    pub y_to: u32,
    /// Added to the anchor's x to get the surface's left edge.
    pub offset_x: i32,
    /// Added to the anchor's y to get the surface's top edge.
    pub offset_y: i32,
}

impl LineGeometry {
    pub fn origin(&self) -> (u32, u32) {
        (self.x_from, self.y_from)
    }

    pub fn far_end(&self) -> (u32, u32) {
        (self.x_to, self.y_to)
    }
}

/// Returns `(from, to, offset)` for one axis.
fn axis(d: i32) -> (u32, u32, i32) {
    if d >= 0 {
        (0, d.unsigned_abs(), 0)
    } else {
        (d.unsigned_abs(), 0, d)
    }
}

pub fn compute_line_geometry(dx: i32, dy: i32) -> LineGeometry {
    let (x_from, x_to, offset_x) = axis(dx);
    let (y_from, y_to, offset_y) = axis(dy);
    LineGeometry {
        size: dx.unsigned_abs().max(dy.unsigned_abs()).saturating_add(1),
        x_from,
        y_from,
        x_to,
        y_to,
        offset_x,
        offset_y,
    }
}
