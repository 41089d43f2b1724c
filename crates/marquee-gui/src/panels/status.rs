use crate::app::MarqueeApp;

pub fn show(ctx: &egui::Context, app: &mut MarqueeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(image) = app.engine.image() {
                ui.label(format!(
                    "{}x{}",
                    image.metrics.natural_width, image.metrics.natural_height
                ));
                ui.separator();
            }
            if let Some(factor) = app.engine.scale_factor() {
                ui.label(format!("Scale: {:.0}%", factor * 100.0));
                ui.separator();
            }
            ui.label(format!("Shape: {}", app.engine.options().marquee_type));
            if let Some(rect) = app.ui_state.current_rect {
                ui.separator();
                ui.label(format!("Selection: {}x{} at ({}, {})", rect.w, rect.h, rect.x, rect.y));
            }
        });

        ui.add_space(2.0);
    });
}
