use marquee_core::consts::BEZIER_FLATTEN_SEGMENTS;
use marquee_core::geometry::{flatten_path, Bounds, PathCommand, Point, Rgba};
use marquee_core::io::loader::LoadedImage;
use marquee_core::mapper::{PointerOffsets, ScaledDimensions, SurfaceMetrics};
use marquee_core::surface::Surface;

use crate::convert::{color32, pos2, rect};

const MARQUEE_LINE_WIDTH: f32 = 1.0;

/// Surface backed by an egui painter region.
///
/// Draw calls are buffered as screen-space shapes and handed to the painter
/// once per frame. The region moves and resizes with the central panel.
pub struct CanvasSurface {
    viewport: egui::Rect,
    texture: Option<egui::TextureId>,
    shapes: Vec<egui::Shape>,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self {
            viewport: egui::Rect::ZERO,
            texture: None,
            shapes: Vec::new(),
        }
    }
}

impl CanvasSurface {
    pub fn set_viewport(&mut self, viewport: egui::Rect) {
        self.viewport = viewport;
    }

    pub fn set_texture(&mut self, texture: Option<egui::TextureId>) {
        self.texture = texture;
    }

    pub fn paint(&self, painter: &egui::Painter) {
        painter.extend(self.shapes.iter().cloned());
    }

    fn to_screen(&self, p: Point) -> egui::Pos2 {
        pos2(p) + self.viewport.min.to_vec2()
    }

    fn image_rect(&self, dest: &ScaledDimensions) -> egui::Rect {
        rect(dest.bounds()).translate(self.viewport.min.to_vec2())
    }
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

impl Surface for CanvasSurface {
    fn metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics::new(self.viewport.width(), self.viewport.height())
    }

    /// Pointer positions arrive in window coordinates; the panel's corner is
    /// the only offset.
    fn pointer_offsets(&self) -> Option<PointerOffsets> {
        Some(PointerOffsets {
            ancestor: Point::new(self.viewport.min.x, self.viewport.min.y),
            ..Default::default()
        })
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw_image(&mut self, _image: &LoadedImage, dest: &ScaledDimensions) {
        let Some(texture) = self.texture else {
            return;
        };
        self.shapes.push(egui::Shape::image(
            texture,
            self.image_rect(dest),
            full_uv(),
            egui::Color32::WHITE,
        ));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgba) {
        let r = rect(bounds).translate(self.viewport.min.to_vec2());
        self.shapes
            .push(egui::Shape::rect_filled(r, 0.0, color32(color)));
    }

    fn stroke_path(&mut self, path: &[PathCommand], color: Rgba) {
        let points: Vec<egui::Pos2> = flatten_path(path, BEZIER_FLATTEN_SEGMENTS)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect();
        if points.len() < 2 {
            return;
        }
        self.shapes.push(egui::Shape::closed_line(
            points,
            egui::Stroke::new(MARQUEE_LINE_WIDTH, color32(color)),
        ));
    }

    /// Textured triangle fan over the outline. Marquee outlines are convex,
    /// so fanning from the centroid covers exactly the inside.
    fn draw_image_clipped(&mut self, _image: &LoadedImage, dest: &ScaledDimensions, clip: &[PathCommand]) {
        let Some(texture) = self.texture else {
            return;
        };
        let outline = flatten_path(clip, BEZIER_FLATTEN_SEGMENTS);
        if outline.len() < 3 || dest.w <= 0.0 || dest.h <= 0.0 {
            return;
        }

        let n = outline.len() as f32;
        let centroid = outline
            .iter()
            .fold(Point::default(), |acc, &p| acc + p);
        let centroid = Point::new(centroid.x / n, centroid.y / n);

        let uv = |p: Point| {
            egui::pos2(
                ((p.x - dest.x) / dest.w).clamp(0.0, 1.0),
                ((p.y - dest.y) / dest.h).clamp(0.0, 1.0),
            )
        };

        let mut mesh = egui::Mesh::with_texture(texture);
        mesh.vertices.push(egui::epaint::Vertex {
            pos: self.to_screen(centroid),
            uv: uv(centroid),
            color: egui::Color32::WHITE,
        });
        for &p in &outline {
            mesh.vertices.push(egui::epaint::Vertex {
                pos: self.to_screen(p),
                uv: uv(p),
                color: egui::Color32::WHITE,
            });
        }
        let rim = outline.len() as u32;
        for i in 1..=rim {
            let next = if i == rim { 1 } else { i + 1 };
            mesh.add_triangle(0, i, next);
        }
        self.shapes.push(egui::Shape::mesh(mesh));
    }
}
