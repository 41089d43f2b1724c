use serde::{Deserialize, Serialize};

use crate::shape::MarqueeKind;

/// Construction options of a crop engine.
///
/// Missing keys take their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    pub marquee_type: MarqueeKind,
    /// Lock the marquee to 1:1 (square or circle).
    pub constrain: bool,
    /// Image to load. Empty means no image, and drawing does nothing.
    pub image_source: String,
    /// Export the cropped pixels automatically when a drag finishes.
    pub enable_raw_output: bool,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            marquee_type: MarqueeKind::Rectangle,
            constrain: true,
            image_source: String::new(),
            enable_raw_output: false,
        }
    }
}
