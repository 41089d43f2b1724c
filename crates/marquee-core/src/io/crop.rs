use image::RgbaImage;

use crate::error::{CropError, Result};
use crate::mapper::ImageMetrics;

/// Selection in image-native pixels, possibly fractional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CropRect {
    /// Truncate every field independently.
    pub fn floor(&self) -> CropRect {
        CropRect {
            x: self.x.floor(),
            y: self.y.floor(),
            w: self.w.floor(),
            h: self.h.floor(),
        }
    }

    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Integer rectangle clipped to the image.
    pub fn to_pixel_rect(&self, image: ImageMetrics) -> PixelRect {
        let x = (self.x.max(0.0) as u32).min(image.natural_width);
        let y = (self.y.max(0.0) as u32).min(image.natural_height);
        let width = (self.w.max(0.0) as u32).min(image.natural_width - x);
        let height = (self.h.max(0.0) as u32).min(image.natural_height - y);

        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// A rectangle of whole image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Check the rect has area and fits inside a `src_w`x`src_h` image.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<PixelRect> {
        if self.width == 0 || self.height == 0 {
            return Err(CropError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }

        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= src_w);
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= src_h);
        if !fits_x || !fits_y {
            return Err(CropError::CropOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width: src_w,
                image_height: src_h,
            });
        }

        Ok(*self)
    }
}

/// Copy the pixels under `rect` into a new image, row by row.
pub fn crop_pixels(src: &RgbaImage, rect: &PixelRect) -> Result<RgbaImage> {
    let (src_w, src_h) = src.dimensions();
    let validated = rect.validated(src_w, src_h)?;

    const BYTES_PER_PIXEL: usize = 4;
    let src_row_stride = src_w as usize * BYTES_PER_PIXEL;
    let col_byte_offset = validated.x as usize * BYTES_PER_PIXEL;
    let crop_row_bytes = validated.width as usize * BYTES_PER_PIXEL;

    let raw = src.as_raw();
    let mut crop_buf = vec![0u8; crop_row_bytes * validated.height as usize];

    for row in 0..validated.height as usize {
        let src_row = validated.y as usize + row;
        let src_start = src_row * src_row_stride + col_byte_offset;
        let dst_start = row * crop_row_bytes;
        crop_buf[dst_start..dst_start + crop_row_bytes]
            .copy_from_slice(&raw[src_start..src_start + crop_row_bytes]);
    }

    RgbaImage::from_raw(validated.width, validated.height, crop_buf).ok_or(
        CropError::InvalidGeometry {
            width: validated.width,
            height: validated.height,
        },
    )
}
