use std::path::Path;

use console::Style;
use marquee_core::engine::CropEvent;
use marquee_core::io::crop::CropRect;
use marquee_core::mapper::{ImageMetrics, SurfaceMetrics};
use marquee_core::options::CropOptions;
use marquee_core::surface::DrawOp;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    event: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            event: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crop_summary(
    input: &Path,
    image: ImageMetrics,
    surface: SurfaceMetrics,
    factor: f32,
    options: &CropOptions,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Marquee Crop"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value
            .apply_to(format!("{}x{}", image.natural_width, image.natural_height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Surface"),
        s.value.apply_to(format!("{}x{}", surface.width, surface.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{factor:.4}"))
    );
    println!();

    println!("  {}", s.header.apply_to("Marquee"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Shape"),
        s.value.apply_to(options.marquee_type)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Constrain"),
        if options.constrain {
            s.value.apply_to("1:1")
        } else {
            s.disabled.apply_to("free")
        }
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Raw output"),
        if options.enable_raw_output {
            s.value.apply_to("enabled")
        } else {
            s.disabled.apply_to("disabled")
        }
    );
    println!();
    println!("  {}", s.header.apply_to("Events"));
}

pub fn print_event(event: &CropEvent) {
    let s = Styles::new();
    let detail = match event {
        CropEvent::Reposition(r) | CropEvent::Resize(r) | CropEvent::Finish(r) => format_rect(r),
        CropEvent::Data(Ok(data)) => format!(
            "{}x{} at ({}, {}), {} bytes",
            data.rect.width,
            data.rect.height,
            data.rect.x,
            data.rect.y,
            data.blob.png.len()
        ),
        CropEvent::Data(Err(e)) => format!("failed: {e}"),
    };
    println!(
        "    {:<16}{}",
        s.event.apply_to(event.name()),
        s.value.apply_to(detail)
    );
}

pub fn print_no_crop() {
    let s = Styles::new();
    println!(
        "    {}",
        s.disabled.apply_to("no crop: the marquee covers no image pixels")
    );
}

pub fn print_trace(ops: &[DrawOp]) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to("Last frame"));
    for (i, op) in ops.iter().enumerate() {
        let line = match op {
            DrawOp::Clear => "clear".to_string(),
            DrawOp::Image(d) => format!("image {:.1}x{:.1} at ({:.1}, {:.1})", d.w, d.h, d.x, d.y),
            DrawOp::FillRect(b, c) => format!(
                "fill {:.1}x{:.1} at ({:.1}, {:.1}) rgba({}, {}, {}, {})",
                b.w, b.h, b.x, b.y, c.r, c.g, c.b, c.a
            ),
            DrawOp::StrokePath(path, c) => format!(
                "stroke {} commands rgba({}, {}, {}, {})",
                path.len(),
                c.r,
                c.g,
                c.b,
                c.a
            ),
            DrawOp::ImageClipped(_, clip) => format!("image clipped to {} commands", clip.len()),
        };
        println!("    {}. {}", s.label.apply_to(i + 1), line);
    }
}

fn format_rect(r: &CropRect) -> String {
    format!("{}x{} at ({}, {})", r.w, r.h, r.x, r.y)
}
