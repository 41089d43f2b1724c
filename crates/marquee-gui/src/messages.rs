use std::path::PathBuf;
use std::time::Duration;

use marquee_core::io::export::PixelBlob;
use marquee_core::io::loader::LoadedImage;
use marquee_core::options::CropOptions;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file.
    LoadImage { path: PathBuf },

    /// Write an exported crop to disk.
    SaveCrop { path: PathBuf, blob: PixelBlob },
}

/// Results sent from worker (or dialog) threads back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: LoadedImage,
        elapsed: Duration,
    },
    CropSaved {
        path: PathBuf,
    },
    OptionsImported {
        options: CropOptions,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
