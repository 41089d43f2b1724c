use tracing::{debug, info};

use crate::consts::OVERLAY_FILL;
use crate::error::{CropError, Result};
use crate::geometry::Point;
use crate::io::crop::CropRect;
use crate::io::export::{PngExport, RasterExport, RawCropData};
use crate::io::loader::{ImageLoader, LoadedImage};
use crate::mapper::{
    pointer_to_surface, scale_factor, scaled_dimensions, to_image_space, PointerOffsets,
    ScaledDimensions,
};
use crate::options::CropOptions;
use crate::session::{DragMode, InteractionSession, SessionUpdate};
use crate::shape::{Marquee, MarqueeKind};
use crate::surface::Surface;

/// A pointer event in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub page: Point,
    /// Shift was held when the event fired.
    pub shift: bool,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            page: Point::new(x, y),
            shift: false,
        }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

/// Notifications returned by the pointer handlers, in the order they fired.
#[derive(Debug)]
pub enum CropEvent {
    Reposition(CropRect),
    Resize(CropRect),
    Finish(CropRect),
    Data(Result<RawCropData>),
}

impl CropEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reposition(_) => "crop.reposition",
            Self::Resize(_) => "crop.resize",
            Self::Finish(_) => "crop.finish",
            Self::Data(_) => "crop.data",
        }
    }
}

/// Cursor a host should show at a pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Move,
    Grabbing,
}

/// Owns the marquee, the drag session and the surface they are drawn on.
pub struct CropEngine<S: Surface> {
    surface: S,
    options: CropOptions,
    image: Option<LoadedImage>,
    marquee: Option<Marquee>,
    session: InteractionSession,
    /// Resolved once per press and reused until release.
    pointer_offsets: Option<PointerOffsets>,
    exporter: Box<dyn RasterExport>,
}

impl<S: Surface> CropEngine<S> {
    /// Attach an engine to `surface`. No image is loaded yet; see
    /// [`CropEngine::load_image`] and [`CropEngine::image_ready`].
    pub fn create(surface: S, options: CropOptions) -> Self {
        Self {
            surface,
            options,
            image: None,
            marquee: None,
            session: InteractionSession::new(),
            pointer_offsets: None,
            exporter: Box::new(PngExport),
        }
    }

    pub fn with_exporter(mut self, exporter: Box<dyn RasterExport>) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn marquee(&self) -> Option<&Marquee> {
        self.marquee.as_ref()
    }

    pub fn drag_mode(&self) -> DragMode {
        self.session.mode()
    }

    /// Load `options.image_source` through `loader`. An empty source is a no-op.
    pub fn load_image(&mut self, loader: &impl ImageLoader) -> Result<()> {
        if self.options.image_source.is_empty() {
            return Ok(());
        }
        let image = loader.load(&self.options.image_source)?;
        self.image_ready(image);
        Ok(())
    }

    /// Accept a loaded image. Any previous marquee belonged to the old image
    /// and is dropped.
    pub fn image_ready(&mut self, image: LoadedImage) {
        info!(
            width = image.metrics.natural_width,
            height = image.metrics.natural_height,
            "Image ready"
        );
        self.image = Some(image);
        self.marquee = None;
        self.session.cancel();
        self.pointer_offsets = None;
        self.redraw();
    }

    pub fn scale_factor(&self) -> Option<f32> {
        let image = self.image.as_ref()?;
        Some(scale_factor(image.metrics, self.surface.metrics()))
    }

    pub fn scaled_dimensions(&self) -> Option<ScaledDimensions> {
        let image = self.image.as_ref()?;
        Some(scaled_dimensions(image.metrics, self.surface.metrics()))
    }

    pub fn set_shift_held(&mut self, held: bool) {
        self.session.set_shift_held(held);
    }

    /// Switch shape. An existing marquee keeps its geometry.
    pub fn set_marquee_kind(&mut self, kind: MarqueeKind) {
        self.options.marquee_type = kind;
        self.marquee = self.marquee.map(|m| m.with_kind(kind));
        self.redraw();
    }

    pub fn set_constrain(&mut self, constrain: bool) {
        self.options.constrain = constrain;
    }

    pub fn set_raw_output(&mut self, enabled: bool) {
        self.options.enable_raw_output = enabled;
    }

    pub fn clear_marquee(&mut self) {
        self.marquee = None;
        self.session.cancel();
        self.redraw();
    }

    pub fn handle_pointer_down(&mut self, event: PointerEvent) {
        if self.image.is_none() {
            debug!("Pointer down ignored: no image loaded");
            return;
        }
        self.fit_marquee();
        self.pointer_offsets = self.surface.pointer_offsets();
        let point = self.to_surface(event.page);
        self.session.press(point, self.marquee.as_ref());
    }

    pub fn handle_pointer_move(&mut self, event: PointerEvent) -> Vec<CropEvent> {
        if !self.session.is_active() {
            return Vec::new();
        }
        let Some(dims) = self.scaled_dimensions() else {
            return Vec::new();
        };

        self.fit_marquee();
        let point = self.to_surface(event.page);
        let constrain = self.options.constrain || event.shift;
        let update = self
            .session
            .drag(point, self.marquee.as_ref(), &dims, constrain);

        let kind = self.options.marquee_type;
        let event = match update {
            Some(SessionUpdate::Repositioned(bounds)) => {
                self.marquee = Some(Marquee::from_bounds(kind, bounds));
                self.redraw();
                self.crop_rectangle(true).map(CropEvent::Reposition)
            }
            Some(SessionUpdate::Resized { bounds, commit }) if commit => {
                self.marquee = Some(Marquee::from_bounds(kind, bounds));
                self.redraw();
                self.crop_rectangle(true).map(CropEvent::Resize)
            }
            _ => None,
        };

        event.into_iter().collect()
    }

    /// Finish the drag. Emits `Finish` (and `Data` when raw output is enabled)
    /// if the marquee covers at least one image pixel.
    pub fn handle_pointer_up(&mut self) -> Vec<CropEvent> {
        let left = self.session.release();
        self.pointer_offsets = None;

        let finished = match left {
            DragMode::Idle => false,
            DragMode::Repositioning { .. } => true,
            DragMode::Resizing { committed, .. } => committed,
        };
        if !finished {
            return Vec::new();
        }

        let Some(rect) = self.crop_rectangle(true).filter(CropRect::has_area) else {
            debug!("Drag released with an empty marquee");
            return Vec::new();
        };

        info!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "Crop finished");
        let mut events = vec![CropEvent::Finish(rect)];
        if self.options.enable_raw_output {
            events.push(CropEvent::Data(self.export_raw_pixels()));
        }
        events
    }

    /// Abandon the current drag. The marquee stays as last drawn.
    pub fn cancel(&mut self) {
        self.session.cancel();
        self.pointer_offsets = None;
    }

    /// Cursor for a pointer hovering at `event`.
    pub fn cursor_hint(&self, event: PointerEvent) -> CursorHint {
        if self.session.is_repositioning() {
            return CursorHint::Grabbing;
        }
        let offsets = self.surface.pointer_offsets();
        let point = pointer_to_surface(event.page, offsets.as_ref());
        match self.fitted_marquee() {
            Some(m) if m.contains(point) => CursorHint::Move,
            _ => CursorHint::Crosshair,
        }
    }

    /// Current marquee in image pixels, or `None` without a marquee or image.
    pub fn crop_rectangle(&self, floor: bool) -> Option<CropRect> {
        let marquee = self.fitted_marquee()?;
        let image = self.image.as_ref()?;
        let surface = self.surface.metrics();
        let factor = scale_factor(image.metrics, surface);
        let dims = scaled_dimensions(image.metrics, surface);
        Some(to_image_space(
            &marquee.bounds(),
            &dims,
            image.metrics,
            factor,
            floor,
        ))
    }

    /// Encode the pixels under the marquee. Expensive; call once per crop.
    pub fn export_raw_pixels(&self) -> Result<RawCropData> {
        let image = self.image.as_ref().ok_or(CropError::NoImage)?;
        let crop = self.crop_rectangle(true).ok_or(CropError::NoMarquee)?;
        let rect = crop.to_pixel_rect(image.metrics);
        let blob = self.exporter.export(image, &rect)?;

        Ok(RawCropData {
            rect,
            image: image.metrics,
            blob,
        })
    }

    /// Repaint image, dimming overlay and marquee. Does nothing before an
    /// image is loaded.
    pub fn redraw(&mut self) {
        self.fit_marquee();
        let Some(image) = self.image.as_ref() else {
            return;
        };
        let dims = scaled_dimensions(image.metrics, self.surface.metrics());

        self.surface.clear();
        self.surface.draw_image(image, &dims);

        if let Some(marquee) = self.marquee {
            self.surface.fill_rect(dims.bounds(), OVERLAY_FILL);
            marquee.draw(&mut self.surface);
            self.surface.draw_image_clipped(image, &dims, &marquee.path());
        }
    }

    /// The marquee as it must appear on the current surface. The surface
    /// may have shrunk since the marquee was drawn.
    fn fitted_marquee(&self) -> Option<Marquee> {
        let marquee = self.marquee?;
        match self.scaled_dimensions() {
            Some(dims) => Some(marquee.with_bounds(dims.fit(&marquee.bounds()))),
            None => Some(marquee),
        }
    }

    fn fit_marquee(&mut self) {
        self.marquee = self.fitted_marquee();
    }

    fn to_surface(&self, page: Point) -> Point {
        let offsets = self.pointer_offsets.or_else(|| self.surface.pointer_offsets());
        pointer_to_surface(page, offsets.as_ref())
    }
}
