use crate::geometry::Rgba;

/// Control-point distance for approximating a quarter ellipse with one cubic
/// Bézier, as a fraction of the half extent.
pub const BEZIER_KAPPA: f32 = 0.552_284_8;

/// Upper bound of the display scale factor: images are never upscaled.
pub const MAX_SCALE_FACTOR: f32 = 1.0;

/// Scale factors at or below this value are treated as a collapsed surface.
pub const MIN_SCALE_FACTOR: f32 = 1e-6;

/// Outline colour of the marquee (white, half transparent).
pub const MARQUEE_STROKE: Rgba = Rgba::new(255, 255, 255, 128);

/// Dimming overlay drawn over the whole image area while a marquee exists.
pub const OVERLAY_FILL: Rgba = Rgba::new(0, 0, 0, 128);

/// Line segments used per cubic Bézier when a host needs a polygon.
pub const BEZIER_FLATTEN_SEGMENTS: usize = 16;

/// Prefix of the data URL produced for exported crops.
pub const DATA_URL_PNG_PREFIX: &str = "data:image/png;base64,";
