use glam::DVec2;
use serde::{Deserialize, Serialize};

// Degrees <-> radians never round. Rounding only happens when a vector is
// projected onto integer Cartesian components or serialized to text.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Rounds half away from zero and saturates into `i32`.
/// `2.5 -> 3`, `-2.5 -> -3`.
pub fn round_component(value: f64) -> i32 {
    value.round() as i32
}

// We use f64 throughout because host numbers are JS doubles.
// A `Point` is anything with world-space `x`/`y`, read from JS via serde.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_glam(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_glam(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
