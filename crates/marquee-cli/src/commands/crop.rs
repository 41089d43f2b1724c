use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use marquee_core::engine::{CropEngine, CropEvent, PointerEvent};
use marquee_core::geometry::Point;
use marquee_core::io::export::RawCropData;
use marquee_core::io::loader::FsImageLoader;
use marquee_core::mapper::SurfaceMetrics;
use marquee_core::options::CropOptions;
use marquee_core::shape::MarqueeKind;
use marquee_core::surface::RecordingSurface;
use tracing::debug;

use super::config::load_options;
use crate::script::{parse_drag, parse_size, Action, GestureScript};
use crate::summary;

#[derive(Args)]
pub struct CropArgs {
    /// Input image
    pub file: PathBuf,

    /// Surface size the image is displayed on, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub surface: SurfaceMetrics,

    /// Single drag in page coordinates, as X1,Y1:X2,Y2
    #[arg(long, value_parser = parse_drag, conflicts_with = "script", required_unless_present = "script")]
    pub drag: Option<(Point, Point)>,

    /// Gesture script (TOML with [[steps]])
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Hold shift during --drag
    #[arg(long)]
    pub shift: bool,

    /// Use an elliptical marquee
    #[arg(long)]
    pub ellipse: bool,

    /// Do not lock the marquee to 1:1
    #[arg(long)]
    pub free: bool,

    /// Crop options file (TOML); flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the cropped pixels as PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the cropped pixels as a data URL
    #[arg(long)]
    pub data_url: bool,

    /// Print the draw calls of the last frame
    #[arg(long)]
    pub trace: bool,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let options = build_options(args)?;
    let script = match (&args.script, args.drag) {
        (Some(path), _) => GestureScript::load(path)?,
        (None, Some((from, to))) => GestureScript::drag(from, to, args.shift),
        (None, None) => bail!("either --drag or --script is required"),
    };

    let surface = RecordingSurface::new(args.surface.width, args.surface.height);
    let mut engine = CropEngine::create(surface, options);
    engine
        .load_image(&FsImageLoader)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let Some(image) = engine.image() else {
        bail!("no image loaded from {}", args.file.display());
    };
    summary::print_crop_summary(
        &args.file,
        image.metrics,
        args.surface,
        engine.scale_factor().unwrap_or(1.0),
        engine.options(),
    );

    let mut finished = false;
    let mut data = None;
    for (i, step) in script.steps.iter().enumerate() {
        debug!(step = i, action = ?step.action, x = step.x, y = step.y, "Replaying step");
        engine.set_shift_held(step.shift);
        let event = PointerEvent::new(step.x, step.y).with_shift(step.shift);
        let events = match step.action {
            Action::Down => {
                engine.handle_pointer_down(event);
                Vec::new()
            }
            Action::Move => engine.handle_pointer_move(event),
            Action::Up => engine.handle_pointer_up(),
            Action::Cancel => {
                engine.cancel();
                Vec::new()
            }
        };

        for event in events {
            summary::print_event(&event);
            match event {
                CropEvent::Finish(_) => finished = true,
                CropEvent::Data(result) => data = Some(result),
                _ => {}
            }
        }
    }

    if args.trace {
        summary::print_trace(engine.surface().ops());
    }

    if !finished {
        summary::print_no_crop();
        println!();
        return Ok(());
    }

    if let Some(result) = data {
        let data = result.context("Failed to export the cropped pixels")?;
        write_outputs(args, &data)?;
    }
    println!();
    Ok(())
}

fn build_options(args: &CropArgs) -> Result<CropOptions> {
    let mut options = match args.config {
        Some(ref path) => load_options(path)?,
        None => CropOptions::default(),
    };
    options.image_source = source_string(&args.file)?;
    if args.ellipse {
        options.marquee_type = MarqueeKind::Ellipse;
    }
    if args.free {
        options.constrain = false;
    }
    if args.output.is_some() || args.data_url {
        options.enable_raw_output = true;
    }
    Ok(options)
}

fn source_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))
}

fn write_outputs(args: &CropArgs, data: &RawCropData) -> Result<()> {
    if let Some(ref path) = args.output {
        data.blob
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!("Saved to {}", path.display());
    }
    if args.data_url {
        println!();
        println!("{}", data.blob.to_data_url());
    }
    Ok(())
}
