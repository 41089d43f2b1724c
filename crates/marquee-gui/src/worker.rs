use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use marquee_core::io::export::PixelBlob;
use marquee_core::io::loader::load_image;
use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("marquee-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => handle_load_image(&path, &tx, &ctx),
            WorkerCommand::SaveCrop { path, blob } => handle_save_crop(&path, &blob, &tx, &ctx),
        }
    }
}

fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    match load_image(path) {
        Ok(image) => {
            info!(path = %path.display(), "Image decoded");
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    path: path.to_path_buf(),
                    image,
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to open {}: {e}", path.display())),
    }
}

fn handle_save_crop(
    path: &Path,
    blob: &PixelBlob,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match blob.save(path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::CropSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}
