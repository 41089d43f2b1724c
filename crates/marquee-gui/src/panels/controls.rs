use marquee_core::shape::MarqueeKind;

use crate::app::MarqueeApp;
use crate::panels::section_header;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut MarqueeApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                marquee_section(ui, app);
                ui.separator();
                crop_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut MarqueeApp) {
    section_header(ui, "File", None);

    let name = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());
    match (name, app.engine.image()) {
        (Some(name), Some(image)) => {
            ui.label(name);
            ui.small(format!(
                "{}x{}",
                image.metrics.natural_width, image.metrics.natural_height
            ));
        }
        _ => {
            ui.small("No image");
        }
    }
}

/// Returns `true` if the value changed.
fn kind_combo(ui: &mut egui::Ui, current: &mut MarqueeKind) -> bool {
    let resp = egui::ComboBox::from_label("Shape")
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in MarqueeKind::ALL {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

fn marquee_section(ui: &mut egui::Ui, app: &mut MarqueeApp) {
    section_header(ui, "Marquee", None);

    let mut kind = app.engine.options().marquee_type;
    if kind_combo(ui, &mut kind) {
        app.engine.set_marquee_kind(kind);
    }

    let mut constrain = app.engine.options().constrain;
    if ui
        .checkbox(&mut constrain, "Constrain 1:1")
        .on_hover_text("Square or circle. Hold Shift to constrain temporarily.")
        .changed()
    {
        app.engine.set_constrain(constrain);
    }

    let mut raw = app.engine.options().enable_raw_output;
    if ui
        .checkbox(&mut raw, "Export pixels on release")
        .changed()
    {
        app.engine.set_raw_output(raw);
    }
}

fn crop_section(ui: &mut egui::Ui, app: &mut MarqueeApp) {
    let status = app.ui_state.last_data.as_ref().map(|d| {
        format!("{} bytes", d.blob.png.len())
    });
    section_header(ui, "Crop", status.as_deref());

    if let Some(rect) = app.engine.crop_rectangle(true) {
        egui::Grid::new("crop_grid").num_columns(2).show(ui, |ui| {
            ui.label("X");
            ui.label(format!("{}", rect.x));
            ui.end_row();
            ui.label("Y");
            ui.label(format!("{}", rect.y));
            ui.end_row();
            ui.label("Width");
            ui.label(format!("{}", rect.w));
            ui.end_row();
            ui.label("Height");
            ui.label(format!("{}", rect.h));
            ui.end_row();
        });
    } else {
        ui.small("Drag on the image to select");
    }

    let has_marquee = app.engine.marquee().is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(has_marquee, egui::Button::new("Save crop..."))
            .clicked()
        {
            app.save_crop();
        }
        if ui.add_enabled(has_marquee, egui::Button::new("Clear")).clicked() {
            app.engine.clear_marquee();
            app.ui_state.current_rect = None;
        }
    });
}
