//! Conversions between pointer, surface and image-native coordinates.
//!
//! The image is drawn centered on the surface and scaled down to fit, never
//! up. Everything here is recomputed from the current surface size on every
//! call, since a host may resize the surface between events.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE_FACTOR, MIN_SCALE_FACTOR};
use crate::geometry::{Bounds, Point};
use crate::io::crop::CropRect;

/// Intrinsic pixel size of the loaded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetrics {
    pub natural_width: u32,
    pub natural_height: u32,
}

impl ImageMetrics {
    pub const fn new(natural_width: u32, natural_height: u32) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }
}

/// Size of the drawing surface in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f32,
    pub height: f32,
}

impl SurfaceMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where the image lands on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledDimensions {
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub w: f32,
    pub h: f32,
}

impl ScaledDimensions {
    pub fn bounds(&self) -> Bounds {
        Bounds::normalized(self.x, self.y, self.w, self.h)
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.max(self.x).min(self.x2)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.max(self.y).min(self.y2)
    }

    /// Shrink `b` to at most the image size, then slide it inside the image.
    pub fn fit(&self, b: &Bounds) -> Bounds {
        let w = b.w.min(self.w).max(0.0);
        let h = b.h.min(self.h).max(0.0);
        let x = b.x.min(self.x2 - w).max(self.x);
        let y = b.y.min(self.y2 - h).max(self.y);
        Bounds::normalized(x, y, w, h)
    }
}

/// Pixel offsets between page coordinates and the surface's content box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffsets {
    /// Cumulative offset of the surface and its positioned ancestors.
    pub ancestor: Point,
    pub border: Point,
    pub padding: Point,
    /// Offset of the document root itself (fixed-position bars).
    pub document: Point,
}

impl PointerOffsets {
    pub fn total(&self) -> Point {
        self.ancestor + self.border + self.padding + self.document
    }
}

/// `min(1, surface_w / image_w, surface_h / image_h)`.
pub fn scale_factor(image: ImageMetrics, surface: SurfaceMetrics) -> f32 {
    if image.natural_width == 0 || image.natural_height == 0 {
        return MAX_SCALE_FACTOR;
    }
    let x_scale = surface.width / image.natural_width as f32;
    let y_scale = surface.height / image.natural_height as f32;
    x_scale.min(y_scale).min(MAX_SCALE_FACTOR).max(0.0)
}

pub fn scaled_dimensions(image: ImageMetrics, surface: SurfaceMetrics) -> ScaledDimensions {
    let factor = scale_factor(image, surface);
    let w = image.natural_width as f32 * factor;
    let h = image.natural_height as f32 * factor;
    let x = (surface.width - w) / 2.0;
    let y = (surface.height - h) / 2.0;

    ScaledDimensions {
        x,
        y,
        x2: x + w,
        y2: y + h,
        w,
        h,
    }
}

/// Map marquee bounds on the surface to a rectangle in image pixels.
///
/// The result is clipped to `[0, natural]` on both axes. With `floor` set
/// every field is truncated on its own, so `x + w` may end one pixel short
/// of the unrounded right edge.
pub fn to_image_space(
    bounds: &Bounds,
    dims: &ScaledDimensions,
    image: ImageMetrics,
    factor: f32,
    floor: bool,
) -> CropRect {
    if factor <= MIN_SCALE_FACTOR {
        return CropRect::default();
    }

    let (x, w) = clip_span(
        (bounds.x - dims.x) / factor,
        bounds.w / factor,
        image.natural_width as f32,
    );
    let (y, h) = clip_span(
        (bounds.y - dims.y) / factor,
        bounds.h / factor,
        image.natural_height as f32,
    );
    let rect = CropRect { x, y, w, h };

    if floor {
        rect.floor()
    } else {
        rect
    }
}

fn clip_span(start: f32, len: f32, limit: f32) -> (f32, f32) {
    let lo = start.clamp(0.0, limit);
    let hi = (start + len).clamp(0.0, limit);
    (lo, (hi - lo).max(0.0))
}

/// Inverse of [`to_image_space`] for unfloored rectangles.
pub fn to_surface_space(rect: &CropRect, dims: &ScaledDimensions, factor: f32) -> Bounds {
    Bounds::normalized(
        rect.x * factor + dims.x,
        rect.y * factor + dims.y,
        rect.w * factor,
        rect.h * factor,
    )
}

/// Translate page coordinates into surface coordinates.
///
/// Without offsets the page coordinates are the best available guess and
/// are returned unchanged.
pub fn pointer_to_surface(page: Point, offsets: Option<&PointerOffsets>) -> Point {
    match offsets {
        Some(o) => page - o.total(),
        None => page,
    }
}
