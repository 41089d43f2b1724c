#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use marquee_core::engine::{CropEngine, PointerEvent};
use marquee_core::io::loader::LoadedImage;
use marquee_core::options::CropOptions;
use marquee_core::surface::RecordingSurface;

/// Image whose pixel at (x, y) encodes its own coordinates:
/// red = x % 256, green = y % 256, blue = 255.
pub fn coordinate_image(width: u32, height: u32) -> LoadedImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 255, 255])
    });
    LoadedImage::from_rgba(pixels)
}

/// Engine on a 400x300 surface showing an 800x400 image (factor 0.5,
/// image drawn at (0, 50)-(400, 250)).
pub fn letterboxed_engine(options: CropOptions) -> CropEngine<RecordingSurface> {
    let mut engine = CropEngine::create(RecordingSurface::new(400.0, 300.0), options);
    engine.image_ready(coordinate_image(800, 400));
    engine
}

pub fn free_options() -> CropOptions {
    CropOptions {
        constrain: false,
        ..CropOptions::default()
    }
}

pub fn at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(x, y)
}

/// Press at `from`, move to `to`, release. Returns the events of the release.
pub fn drag(
    engine: &mut CropEngine<RecordingSurface>,
    from: (f32, f32),
    to: (f32, f32),
) -> Vec<marquee_core::engine::CropEvent> {
    engine.handle_pointer_down(at(from.0, from.1));
    engine.handle_pointer_move(at(to.0, to.1));
    engine.handle_pointer_up()
}
