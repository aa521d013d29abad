//! In-memory surfaces, for running the line pipeline without a host.

use crate::draw::{Drawable, Host, Surface};

/// Row-major palette indices. `0` is transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for PixelBuffer {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    // Integer Bresenham, both endpoints included.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// A surface placed in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Placed {
    pub surface: PixelBuffer,
    pub kind: i32,
    pub left: f64,
    pub top: f64,
}

impl Drawable for Placed {
    fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    fn set_top(&mut self, top: f64) {
        self.top = top;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Host for Headless {
    type Surface = PixelBuffer;
    type Drawable = Placed;

    fn create_surface(&mut self, width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(width, height)
    }

    fn create_drawable(&mut self, surface: PixelBuffer, kind: i32) -> Placed {
        Placed {
            surface,
            kind,
            left: 0.0,
            top: 0.0,
        }
    }
}
