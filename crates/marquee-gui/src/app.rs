use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc;

use marquee_core::engine::{CropEngine, CropEvent};
use marquee_core::io::crop::CropRect;
use marquee_core::io::export::RawCropData;
use marquee_core::io::loader::LoadedImage;
use marquee_core::options::CropOptions;

use crate::convert::loaded_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::surface::CanvasSurface;
use crate::worker;

/// Oldest log lines are dropped past this many.
const MAX_LOG_LINES: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    pub file_path: Option<PathBuf>,
    pub loading: bool,
    /// Marquee in image pixels as of the last notification.
    pub current_rect: Option<CropRect>,
    /// Export produced by the last finished drag with raw output on.
    pub last_data: Option<RawCropData>,
    pub log_messages: VecDeque<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        if self.log_messages.len() == MAX_LOG_LINES {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(msg);
    }
}

pub struct MarqueeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub engine: CropEngine<CanvasSurface>,
    pub texture: Option<egui::TextureHandle>,
    pub ui_state: UiState,
    pub show_about: bool,
}

impl MarqueeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            engine: CropEngine::create(CanvasSurface::default(), CropOptions::default()),
            texture: None,
            ui_state: UiState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    image,
                    elapsed,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, {:.0}ms)",
                        path.display(),
                        image.metrics.natural_width,
                        image.metrics.natural_height,
                        elapsed.as_secs_f32() * 1000.0
                    ));
                    self.ui_state.loading = false;
                    self.ui_state.file_path = Some(path);
                    self.ui_state.current_rect = None;
                    self.ui_state.last_data = None;
                    self.accept_image(ctx, image);
                }
                WorkerResult::CropSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::OptionsImported { options } => {
                    self.apply_options(options);
                    self.ui_state.add_log("Options imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Upload the texture first so the engine's first redraw can show it.
    fn accept_image(&mut self, ctx: &egui::Context, image: LoadedImage) {
        let texture = ctx.load_texture(
            "marquee-image",
            loaded_to_color_image(&image),
            egui::TextureOptions::LINEAR,
        );
        self.engine.surface_mut().set_texture(Some(texture.id()));
        self.texture = Some(texture);
        self.engine.image_ready(image);
    }

    fn apply_options(&mut self, options: CropOptions) {
        self.engine.set_marquee_kind(options.marquee_type);
        self.engine.set_constrain(options.constrain);
        self.engine.set_raw_output(options.enable_raw_output);
        if !options.image_source.is_empty() {
            self.load_image(PathBuf::from(options.image_source));
        }
    }

    pub fn load_image(&mut self, path: PathBuf) {
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::LoadImage { path });
    }

    /// Export the current marquee, then ask where to write it.
    pub fn save_crop(&mut self) {
        let data = match self.engine.export_raw_pixels() {
            Ok(data) => data,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };

        let file_name = format!("crop_{}x{}.png", data.rect.width, data.rect.height);
        let cmd_tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name(file_name)
                .save_file()
            {
                let _ = cmd_tx.send(WorkerCommand::SaveCrop {
                    path,
                    blob: data.blob,
                });
            }
        });
    }

    /// Fold engine notifications into UI state.
    pub fn record_events(&mut self, events: Vec<CropEvent>) {
        for event in events {
            let name = event.name();
            match event {
                CropEvent::Reposition(rect) | CropEvent::Resize(rect) => {
                    self.ui_state.current_rect = Some(rect);
                }
                CropEvent::Finish(rect) => {
                    self.ui_state.current_rect = Some(rect);
                    self.ui_state.add_log(format!(
                        "{name}: {}x{} at ({}, {})",
                        rect.w,
                        rect.h,
                        rect.x,
                        rect.y
                    ));
                }
                CropEvent::Data(Ok(data)) => {
                    self.ui_state.add_log(format!(
                        "{name}: {} byte PNG",
                        data.blob.png.len()
                    ));
                    self.ui_state.last_data = Some(data);
                }
                CropEvent::Data(Err(e)) => {
                    self.ui_state.last_data = None;
                    self.ui_state.add_log(format!("ERROR: {e}"));
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for MarqueeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Marquee")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Marquee");
                        ui.label("Rectangle and ellipse image cropping");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_only_the_newest_lines() {
        let mut state = UiState::default();
        for i in 0..MAX_LOG_LINES + 25 {
            state.add_log(format!("line {i}"));
        }
        assert_eq!(state.log_messages.len(), MAX_LOG_LINES);
        assert_eq!(state.log_messages.front().map(String::as_str), Some("line 25"));
        let last = format!("line {}", MAX_LOG_LINES + 24);
        assert_eq!(state.log_messages.back(), Some(&last));
    }
}
