use marquee_core::geometry::{Bounds, Point, Rgba};
use marquee_core::io::loader::LoadedImage;

/// Upload-ready copy of a decoded image.
pub fn loaded_to_color_image(image: &LoadedImage) -> egui::ColorImage {
    let size = [
        image.metrics.natural_width as usize,
        image.metrics.natural_height as usize,
    ];
    egui::ColorImage::from_rgba_unmultiplied(size, image.pixels.as_raw())
}

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

pub fn rect(b: Bounds) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(b.x, b.y), egui::vec2(b.w, b.h))
}
