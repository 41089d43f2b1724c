use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid crop geometry: {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("Crop region ({x},{y} {width}x{height}) exceeds image dimensions ({image_width}x{image_height})")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Raster export refused: {0}")]
    SecurityRestricted(String),

    #[error("Unimplemented marquee capability: {0}")]
    UnimplementedCapability(String),

    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    #[error("No image loaded")]
    NoImage,

    #[error("No marquee selected")]
    NoMarquee,
}

pub type Result<T> = std::result::Result<T, CropError>;
