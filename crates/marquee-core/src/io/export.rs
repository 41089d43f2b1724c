use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat};
use tracing::{info, warn};

use crate::consts::DATA_URL_PNG_PREFIX;
use crate::error::{CropError, Result};
use crate::io::crop::{crop_pixels, PixelRect};
use crate::io::loader::{LoadedImage, Origin};
use crate::mapper::ImageMetrics;

/// Encoded pixels of a cropped region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBlob {
    pub width: u32,
    pub height: u32,
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
}

impl PixelBlob {
    pub fn to_data_url(&self) -> String {
        format!("{DATA_URL_PNG_PREFIX}{}", BASE64.encode(&self.png))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// Exported crop together with the geometry it was cut from.
#[derive(Clone, Debug, PartialEq)]
pub struct RawCropData {
    pub rect: PixelRect,
    pub image: ImageMetrics,
    pub blob: PixelBlob,
}

/// Rasterizes and encodes a region of an image.
///
/// This is the slow path of the engine and only runs on release.
pub trait RasterExport {
    fn export(&self, image: &LoadedImage, rect: &PixelRect) -> Result<PixelBlob>;
}

/// Crops in memory and encodes PNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngExport;

impl RasterExport for PngExport {
    fn export(&self, image: &LoadedImage, rect: &PixelRect) -> Result<PixelBlob> {
        if image.origin == Origin::Foreign {
            warn!("Refusing to read back pixels of foreign origin");
            return Err(CropError::SecurityRestricted(
                "image pixels come from a foreign origin".into(),
            ));
        }

        let cropped = crop_pixels(&image.pixels, rect)?;
        let (width, height) = cropped.dimensions();

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(cropped).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        info!(width, height, bytes = png.len(), "Crop exported");
        Ok(PixelBlob { width, height, png })
    }
}
