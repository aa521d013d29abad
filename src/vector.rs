use std::ops::Add;

use glam::DVec2;
use log::debug;
use wasm_bindgen::prelude::*;

use crate::error::VectorError;
use crate::math::{deg_to_rad, rad_to_deg, round_component};
use crate::text;

/// A 2D vector kept in polar form, with its integer Cartesian projection
/// recomputed by every mutator.
///
/// Direction is stored exactly as given. It is never wrapped into
/// `[0, 360)`, so `450` stays `450` and only the projection reflects it.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    magnitude: f64,
    direction_degrees: f64,
    direction_radians: f64,
    x: i32,
    y: i32,
}

impl Vector {
    /// Length and angle of the segment `origin -> target`. The magnitude is
    /// not rounded.
    pub fn from_points(origin: DVec2, target: DVec2) -> Vector {
        let delta = target - origin;
        Vector::from_polar(delta.length(), rad_to_deg(delta.y.atan2(delta.x)))
    }

    pub fn from_text(token: &str) -> Result<Vector, VectorError> {
        let (mag, dir) = text::parse(token)?;
        debug!("decoded vector text {:?} as {}|{}", token, mag, dir);
        Ok(Vector::from_polar(mag as f64, dir as f64))
    }

    /// Unrounded Cartesian projection.
    pub fn cartesian(&self) -> DVec2 {
        let (sin, cos) = self.direction_radians.sin_cos();
        DVec2::new(cos, sin) * self.magnitude
    }

    fn recompute_cartesian(&mut self) {
        self.x = round_component(self.magnitude * self.direction_radians.cos());
        self.y = round_component(self.magnitude * self.direction_radians.sin());
    }
}

#[wasm_bindgen]
impl Vector {
    #[wasm_bindgen(constructor)]
    pub fn from_polar(magnitude: f64, direction_degrees: f64) -> Vector {
        let mut v = Vector {
            magnitude,
            ..Vector::default()
        };
        v.set_direction_degrees(direction_degrees);
        v
    }

    /// Magnitude is rounded to the nearest integer; direction comes from the
    /// two-argument arctangent and lies in `(-180, 180]`.
    #[wasm_bindgen(js_name = fromCartesian)]
    pub fn from_cartesian(x: f64, y: f64) -> Vector {
        Vector::from_polar(x.hypot(y).round(), rad_to_deg(y.atan2(x)))
    }

    #[wasm_bindgen(js_name = toText)]
    pub fn to_text(&self) -> String {
        text::format(self.magnitude, self.direction_degrees)
    }

    #[wasm_bindgen(getter = mag)]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[wasm_bindgen(setter = mag)]
    pub fn set_magnitude(&mut self, value: f64) {
        self.magnitude = value;
        self.recompute_cartesian();
    }

    #[wasm_bindgen(getter = dir)]
    pub fn direction_degrees(&self) -> f64 {
        self.direction_degrees
    }

    #[wasm_bindgen(setter = dir)]
    pub fn set_direction_degrees(&mut self, value: f64) {
        self.direction_degrees = value;
        self.direction_radians = deg_to_rad(value);
        self.recompute_cartesian();
    }

    #[wasm_bindgen(getter = theta)]
    pub fn direction_radians(&self) -> f64 {
        self.direction_radians
    }

    #[wasm_bindgen(setter = theta)]
    pub fn set_direction_radians(&mut self, value: f64) {
        self.direction_radians = value;
        self.direction_degrees = rad_to_deg(value);
        self.recompute_cartesian();
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Sums the integer components and rebuilds the polar form from them.
impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::from_cartesian(
            f64::from(self.x) + f64::from(other.x),
            f64::from(self.y) + f64::from(other.y),
        )
    }
}

/// Decodes two tokens and adds them.
pub fn add_texts(a: &str, b: &str) -> Result<Vector, VectorError> {
    Ok(Vector::from_text(a)? + Vector::from_text(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextFault;

    const EPS: f64 = 1e-9;

    fn assert_consistent(v: &Vector) {
        let rad = v.direction_radians();
        assert_eq!(v.x(), (v.magnitude() * rad.cos()).round() as i32, "x of {:?}", v);
        assert_eq!(v.y(), (v.magnitude() * rad.sin()).round() as i32, "y of {:?}", v);
    }

    #[test]
    fn polar_projects_to_rounded_components() {
        let v = Vector::from_polar(10.0, 30.0);
        assert_eq!((v.x(), v.y()), (9, 5));
        assert_eq!(v.direction_radians(), deg_to_rad(30.0));
        assert_consistent(&v);
    }

    #[test]
    fn axis_aligned_directions_are_exact() {
        for (dir, expected) in [(0.0, (7, 0)), (90.0, (0, 7)), (180.0, (-7, 0)), (270.0, (0, -7))] {
            let v = Vector::from_polar(7.0, dir);
            assert_eq!((v.x(), v.y()), expected, "direction {}", dir);
        }
    }

    #[test]
    fn zero_magnitude_keeps_direction() {
        let v = Vector::from_polar(0.0, 123.0);
        assert_eq!(v.direction_degrees(), 123.0);
        assert_eq!((v.x(), v.y()), (0, 0));
    }

    #[test]
    fn direction_is_not_normalized() {
        let v = Vector::from_polar(10.0, 450.0);
        assert_eq!(v.direction_degrees(), 450.0);
        assert_eq!((v.x(), v.y()), (0, 10));

        let v = Vector::from_polar(10.0, -90.0);
        assert_eq!(v.direction_degrees(), -90.0);
        assert_eq!((v.x(), v.y()), (0, -10));
    }

    #[test]
    fn negative_magnitude_is_accepted() {
        let v = Vector::from_polar(-4.0, 0.0);
        assert_eq!(v.magnitude(), -4.0);
        assert_eq!((v.x(), v.y()), (-4, 0));
    }

    #[test]
    fn cartesian_covers_all_quadrants() {
        assert!((Vector::from_cartesian(1.0, 1.0).direction_degrees() - 45.0).abs() < EPS);
        assert!((Vector::from_cartesian(-1.0, 1.0).direction_degrees() - 135.0).abs() < EPS);
        assert!((Vector::from_cartesian(-1.0, -1.0).direction_degrees() + 135.0).abs() < EPS);
        assert!((Vector::from_cartesian(1.0, -1.0).direction_degrees() + 45.0).abs() < EPS);
        assert!((Vector::from_cartesian(0.0, 1.0).direction_degrees() - 90.0).abs() < EPS);
        assert!((Vector::from_cartesian(-1.0, 0.0).direction_degrees() - 180.0).abs() < EPS);
    }

    #[test]
    fn cartesian_rounds_magnitude() {
        let v = Vector::from_cartesian(1.0, 1.0);
        assert_eq!(v.magnitude(), 1.0);
        let v = Vector::from_cartesian(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!((v.x(), v.y()), (3, 4));
        assert_consistent(&v);
    }

    #[test]
    fn from_points_measures_the_segment() {
        let v = Vector::from_points(DVec2::ZERO, DVec2::new(3.0, 4.0));
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!((v.direction_degrees() - 53.130_102_354).abs() < 1e-6);
        assert_eq!((v.x(), v.y()), (3, 4));

        let v = Vector::from_points(DVec2::new(10.0, 10.0), DVec2::new(10.0, 7.5));
        assert!((v.magnitude() - 2.5).abs() < EPS);
        assert!((v.direction_degrees() + 90.0).abs() < EPS);
        assert_eq!((v.x(), v.y()), (0, -3));
    }

    #[test]
    fn mutators_keep_projection_current() {
        let mut v = Vector::from_polar(10.0, 0.0);
        v.set_magnitude(20.0);
        assert_eq!((v.x(), v.y()), (20, 0));
        assert_consistent(&v);

        v.set_direction_degrees(60.0);
        assert_eq!((v.x(), v.y()), (10, 17));
        assert_consistent(&v);

        v.set_direction_radians(std::f64::consts::PI);
        assert!((v.direction_degrees() - 180.0).abs() < EPS);
        assert_eq!((v.x(), v.y()), (-20, 0));
        assert_consistent(&v);

        v.set_direction_degrees(0.4);
        assert!(v.direction_radians() > 0.0);
        assert_consistent(&v);
    }

    #[test]
    fn unrounded_projection_agrees_with_components() {
        let v = Vector::from_polar(2.5, 270.0);
        let c = v.cartesian();
        assert!(c.x.abs() < EPS);
        assert!((c.y + 2.5).abs() < EPS);
        assert_eq!((v.x(), v.y()), (0, -3));
    }

    #[test]
    fn setting_same_magnitude_is_idempotent() {
        let mut v = Vector::from_polar(13.0, 77.0);
        let before = v;
        v.set_magnitude(v.magnitude());
        assert_eq!(v, before);
    }

    #[test]
    fn text_roundtrip_for_integer_vectors() {
        for (m, d) in [(0, 0), (5, 90), (12, 45), (199, 359)] {
            let v = Vector::from_polar(m as f64, d as f64);
            assert_eq!(v.to_text(), format!("{}|{}", m, d));
        }
    }

    #[test]
    fn text_rounds_fractional_fields() {
        let v = Vector::from_points(DVec2::ZERO, DVec2::new(3.0, 4.0));
        assert_eq!(v.to_text(), "5|53");
    }

    #[test]
    fn from_text_rejects_malformed_tokens() {
        assert!(matches!(
            Vector::from_text("bad"),
            Err(VectorError::MalformedVectorText { reason: TextFault::MissingSeparator, .. })
        ));
        assert!(matches!(
            Vector::from_text("1|2|3"),
            Err(VectorError::MalformedVectorText { reason: TextFault::ExtraSeparator, .. })
        ));
    }

    #[test]
    fn addition_sums_components() {
        let a = Vector::from_polar(5.0, 0.0);
        let b = Vector::from_polar(5.0, 90.0);
        let sum = a + b;
        assert_eq!((sum.x(), sum.y()), (5, 5));
        assert_eq!(sum.magnitude(), 7.0);
        assert!((sum.direction_degrees() - 45.0).abs() < EPS);
    }

    #[test]
    fn add_texts_decodes_both_operands() {
        let sum = add_texts("3|0", "4|90").unwrap();
        assert_eq!(sum.to_text(), "5|53");
        assert!(add_texts("3|0", "oops").is_err());
    }
}
