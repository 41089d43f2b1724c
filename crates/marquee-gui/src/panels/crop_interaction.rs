use marquee_core::engine::{CursorHint, PointerEvent};

use crate::app::MarqueeApp;

fn pointer_event(pos: egui::Pos2, shift: bool) -> PointerEvent {
    PointerEvent::new(pos.x, pos.y).with_shift(shift)
}

/// Feed primary-button drags on the canvas to the engine and set the cursor.
pub fn handle_crop_interaction(ctx: &egui::Context, response: &egui::Response, app: &mut MarqueeApp) {
    let shift = ctx.input(|i| i.modifiers.shift);
    app.engine.set_shift_held(shift);

    handle_crop_drag(ctx, response, app, shift);
    update_crop_cursor(ctx, response, app, shift);
}

fn handle_crop_drag(ctx: &egui::Context, response: &egui::Response, app: &mut MarqueeApp, shift: bool) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.engine.handle_pointer_down(pointer_event(pos, shift));
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            let events = app.engine.handle_pointer_move(pointer_event(pos, shift));
            app.record_events(events);
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        let events = app.engine.handle_pointer_up();
        app.record_events(events);
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.engine.cancel();
    }
}

fn update_crop_cursor(ctx: &egui::Context, response: &egui::Response, app: &MarqueeApp, shift: bool) {
    let Some(hover) = ctx.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    if !response.rect.contains(hover) {
        return;
    }

    let icon = match app.engine.cursor_hint(pointer_event(hover, shift)) {
        CursorHint::Crosshair => egui::CursorIcon::Crosshair,
        CursorHint::Move => egui::CursorIcon::Move,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
    };
    ctx.set_cursor_icon(icon);
}
