//! Bindings to the sprite host's image and sprite API.

use wasm_bindgen::prelude::*;

use crate::draw::{Drawable, Host, PointEntity, Surface};

#[wasm_bindgen]
extern "C" {
    pub type Image;

    #[wasm_bindgen(js_namespace = image, js_name = create)]
    fn create_image(width: i32, height: i32) -> Image;

    #[wasm_bindgen(method, js_name = drawLine)]
    fn image_draw_line(this: &Image, x0: i32, y0: i32, x1: i32, y1: i32, color: i32);

    #[wasm_bindgen(method, js_name = setPixel)]
    fn image_set_pixel(this: &Image, x: i32, y: i32, color: i32);

    pub type Sprite;

    #[wasm_bindgen(js_namespace = sprites, js_name = create)]
    fn create_sprite(img: &Image, kind: i32) -> Sprite;

    #[wasm_bindgen(method, getter = x)]
    fn sprite_x(this: &Sprite) -> f64;

    #[wasm_bindgen(method, getter = y)]
    fn sprite_y(this: &Sprite) -> f64;

    #[wasm_bindgen(method, setter = left)]
    fn set_sprite_left(this: &Sprite, left: f64);

    #[wasm_bindgen(method, setter = top)]
    fn set_sprite_top(this: &Sprite, top: f64);
}

impl Surface for Image {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        self.image_draw_line(x0, y0, x1, y1, i32::from(color));
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        self.image_set_pixel(x, y, i32::from(color));
    }
}

impl PointEntity for Sprite {
    fn x(&self) -> f64 {
        self.sprite_x()
    }

    fn y(&self) -> f64 {
        self.sprite_y()
    }
}

impl Drawable for Sprite {
    fn set_left(&mut self, left: f64) {
        self.set_sprite_left(left);
    }

    fn set_top(&mut self, top: f64) {
        self.set_sprite_top(top);
    }
}

/// The live host: `image.create` and `sprites.create`.
pub struct HostRuntime;

impl Host for HostRuntime {
    type Surface = Image;
    type Drawable = Sprite;

    fn create_surface(&mut self, width: u32, height: u32) -> Image {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        create_image(width, height)
    }

    fn create_drawable(&mut self, surface: Image, kind: i32) -> Sprite {
        create_sprite(&surface, kind)
    }
}
