use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use marquee_core::io::loader::load_image;
use marquee_core::mapper::{scale_factor, scaled_dimensions, SurfaceMetrics};

use crate::script::parse_size;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    /// Surface size to fit the image into, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub surface: Option<SurfaceMetrics>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)?;
    let m = image.metrics;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", m.natural_width, m.natural_height);

    if let Some(surface) = args.surface {
        let factor = scale_factor(m, surface);
        let dims = scaled_dimensions(m, surface);
        println!("Surface:     {}x{}", surface.width, surface.height);
        println!("Scale:       {:.4}", factor);
        println!(
            "Displayed:   {:.1}x{:.1} at ({:.1}, {:.1})",
            dims.w, dims.h, dims.x, dims.y
        );
    }

    Ok(())
}
