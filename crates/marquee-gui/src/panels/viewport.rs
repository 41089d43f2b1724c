use crate::app::MarqueeApp;
use crate::convert::rect;
use crate::panels::crop_interaction;

pub fn show(ctx: &egui::Context, app: &mut MarqueeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.engine.image().is_none() {
            show_placeholder(ui, app.ui_state.loading);
            return;
        }

        // Pointer mapping and layout both read the current panel rect.
        app.engine.surface_mut().set_viewport(rect);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        crop_interaction::handle_crop_interaction(ctx, &response, app);

        app.engine.redraw();
        app.engine.surface().paint(ui.painter());

        draw_dimensions_label(ui, app, rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_dimensions_label(ui: &egui::Ui, app: &MarqueeApp, panel: egui::Rect) {
    let (Some(marquee), Some(crop)) = (app.engine.marquee(), app.engine.crop_rectangle(true)) else {
        return;
    };
    let on_screen = rect(marquee.bounds()).translate(panel.min.to_vec2());
    let label = format!("{}x{}", crop.w, crop.h);
    ui.painter().text(
        egui::pos2(on_screen.right() - 4.0, on_screen.bottom() + 4.0),
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    let text = if loading {
        "Loading image..."
    } else {
        "Open an image to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
