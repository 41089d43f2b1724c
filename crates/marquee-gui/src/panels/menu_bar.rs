use std::path::Path;

use anyhow::{Context, Result};
use marquee_core::options::CropOptions;

use crate::app::MarqueeApp;
use crate::messages::{WorkerCommand, WorkerResult};

pub fn show(ctx: &egui::Context, app: &mut MarqueeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_save = app.engine.marquee().is_some();
                if ui
                    .add_enabled(
                        can_save,
                        egui::Button::new("Save Crop...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.save_crop();
                }

                ui.separator();

                if ui.button("Import Options...").clicked() {
                    ui.close();
                    import_options(app);
                }

                if ui.button("Export Options...").clicked() {
                    ui.close();
                    export_options(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Clear Marquee").clicked() {
                    ui.close();
                    app.engine.clear_marquee();
                    app.ui_state.current_rect = None;
                }
                if ui.button("Reset Options").clicked() {
                    ui.close();
                    let defaults = CropOptions::default();
                    app.engine.set_marquee_kind(defaults.marquee_type);
                    app.engine.set_constrain(defaults.constrain);
                    app.engine.set_raw_output(defaults.enable_raw_output);
                    app.ui_state.add_log("Options reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S)))
            && app.engine.marquee().is_some()
        {
            app.save_crop();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(app: &mut MarqueeApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

fn import_options(app: &mut MarqueeApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let _ = match read_options(&path) {
            Ok(options) => result_tx.send(WorkerResult::OptionsImported { options }),
            Err(e) => result_tx.send(WorkerResult::Error {
                message: format!("{e:#}"),
            }),
        };
    });
}

fn export_options(app: &mut MarqueeApp) {
    let mut options = app.engine.options().clone();
    if let Some(ref path) = app.ui_state.file_path {
        options.image_source = path.display().to_string();
    }

    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("marquee.toml")
            .save_file()
        {
            let _ = match write_options(&path, &options) {
                Ok(()) => result_tx.send(WorkerResult::Log {
                    message: format!("Options exported to {}", path.display()),
                }),
                Err(e) => result_tx.send(WorkerResult::Error {
                    message: format!("{e:#}"),
                }),
            };
        }
    });
}

fn read_options(path: &Path) -> Result<CropOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid options {}", path.display()))
}

fn write_options(path: &Path, options: &CropOptions) -> Result<()> {
    let content = toml::to_string_pretty(options)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write options {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::shape::MarqueeKind;

    #[test]
    fn options_survive_export_and_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.toml");
        let options = CropOptions {
            marquee_type: MarqueeKind::Ellipse,
            constrain: false,
            image_source: "photo.png".into(),
            enable_raw_output: true,
        };

        write_options(&path, &options).unwrap();
        assert_eq!(read_options(&path).unwrap(), options);
    }

    #[test]
    fn import_errors_name_the_file_and_cause() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        let message = format!("{:#}", read_options(&missing).unwrap_err());
        assert!(message.starts_with("Failed to read options"));
        assert!(message.contains("missing.toml"));

        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "marquee_type = \"triangle\"\n").unwrap();
        let message = format!("{:#}", read_options(&invalid).unwrap_err());
        assert!(message.starts_with("Invalid options"));
        assert!(message.contains("triangle"));
    }
}
