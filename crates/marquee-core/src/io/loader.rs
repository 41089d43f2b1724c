use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::{CropError, Result};
use crate::mapper::ImageMetrics;

/// Where the pixels came from. Pixels of foreign origin may be displayed but
/// not read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Local,
    Foreign,
}

/// A decoded image ready to draw.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub metrics: ImageMetrics,
    pub pixels: RgbaImage,
    pub origin: Origin,
}

impl LoadedImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (w, h) = pixels.dimensions();
        Self {
            metrics: ImageMetrics::new(w, h),
            pixels,
            origin: Origin::Local,
        }
    }

    pub fn from_dynamic(img: DynamicImage) -> Self {
        Self::from_rgba(img.to_rgba8())
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Resolves an image source into pixels.
pub trait ImageLoader {
    fn load(&self, source: &str) -> Result<LoadedImage>;
}

/// Loads images from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, source: &str) -> Result<LoadedImage> {
        if is_remote(source) {
            return Err(CropError::ImageUnavailable(format!(
                "remote sources are not supported: {source}"
            )));
        }

        let path = Path::new(source);
        if !path.is_file() {
            return Err(CropError::ImageUnavailable(format!(
                "no such file: {}",
                path.display()
            )));
        }

        load_image(path)
    }
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)?;
    let loaded = LoadedImage::from_dynamic(img);
    debug!(
        path = %path.display(),
        width = loaded.metrics.natural_width,
        height = loaded.metrics.natural_height,
        "Image loaded"
    );
    Ok(loaded)
}

/// Decode an in-memory encoded image.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(LoadedImage::from_dynamic(img))
}

fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
