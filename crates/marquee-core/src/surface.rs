use crate::geometry::{Bounds, PathCommand, Rgba};
use crate::io::loader::LoadedImage;
use crate::mapper::{PointerOffsets, ScaledDimensions, SurfaceMetrics};

/// The drawing target a crop engine renders onto.
///
/// Implementations mirror a retained 2D canvas: whatever was drawn stays
/// until the next `clear`.
pub trait Surface {
    /// Current size. Read on every geometry computation.
    fn metrics(&self) -> SurfaceMetrics;

    /// Offsets between page and surface coordinates, if the host knows them.
    fn pointer_offsets(&self) -> Option<PointerOffsets> {
        None
    }

    fn clear(&mut self);

    fn draw_image(&mut self, image: &LoadedImage, dest: &ScaledDimensions);

    fn fill_rect(&mut self, rect: Bounds, color: Rgba);

    fn stroke_path(&mut self, path: &[PathCommand], color: Rgba);

    /// Draw the image again, visible only inside `clip`.
    fn draw_image_clipped(&mut self, image: &LoadedImage, dest: &ScaledDimensions, clip: &[PathCommand]);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Image(ScaledDimensions),
    FillRect(Bounds, Rgba),
    StrokePath(Vec<PathCommand>, Rgba),
    ImageClipped(ScaledDimensions, Vec<PathCommand>),
}

/// Surface that keeps the draw calls of the current frame instead of pixels.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    metrics: SurfaceMetrics,
    offsets: Option<PointerOffsets>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            metrics: SurfaceMetrics::new(width, height),
            offsets: None,
            ops: Vec::new(),
        }
    }

    pub fn with_offsets(mut self, offsets: PointerOffsets) -> Self {
        self.offsets = Some(offsets);
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.metrics = SurfaceMetrics::new(width, height);
    }

    /// Draw calls since the last clear, including the clear itself.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    fn pointer_offsets(&self) -> Option<PointerOffsets> {
        self.offsets
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn draw_image(&mut self, _image: &LoadedImage, dest: &ScaledDimensions) {
        self.ops.push(DrawOp::Image(*dest));
    }

    fn fill_rect(&mut self, rect: Bounds, color: Rgba) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_path(&mut self, path: &[PathCommand], color: Rgba) {
        self.ops.push(DrawOp::StrokePath(path.to_vec(), color));
    }

    fn draw_image_clipped(&mut self, _image: &LoadedImage, dest: &ScaledDimensions, clip: &[PathCommand]) {
        self.ops.push(DrawOp::ImageClipped(*dest, clip.to_vec()));
    }
}
