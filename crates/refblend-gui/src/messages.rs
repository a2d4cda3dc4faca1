use std::path::PathBuf;
use std::time::Duration;

use refblend_core::config::{AppConfig, GenerationConfig};
use refblend_core::request::{GeneratedImage, GenerationRequest, ImagePayload};

/// Which reference slot a loaded file goes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotTarget {
    /// Character slot by index (0-based).
    Character(usize),
    Background,
}

impl std::fmt::Display for SlotTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character(i) => write!(f, "Image {}", i + 1),
            Self::Background => write!(f, "Background"),
        }
    }
}

/// A generated image together with its decoded pixels for display.
pub struct ResultImage {
    pub image: GeneratedImage,
    /// `None` when the returned bytes could not be decoded.
    pub pixels: Option<egui::ColorImage>,
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read an image file into a reference slot.
    LoadReference { target: SlotTarget, path: PathBuf },

    /// Run one generation batch. `batch` identifies it so that results of
    /// a superseded batch can be dropped.
    Generate {
        batch: u64,
        request: GenerationRequest,
        count: usize,
        config: GenerationConfig,
    },

    /// Write one result to an explicit path.
    SaveImage { image: GeneratedImage, path: PathBuf },

    /// Write every result into a directory.
    SaveAll {
        images: Vec<GeneratedImage>,
        dir: PathBuf,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ReferenceLoaded {
        target: SlotTarget,
        path: PathBuf,
        payload: ImagePayload,
        thumbnail: egui::ColorImage,
    },

    /// A call of batch `batch` came back.
    Progress {
        batch: u64,
        done: usize,
        total: usize,
    },

    /// Batch finished. `Err` carries the message to show the user.
    GenerationComplete {
        batch: u64,
        outcome: Result<Vec<ResultImage>, String>,
        elapsed: Duration,
    },

    ImageSaved {
        path: PathBuf,
    },
    AllSaved {
        dir: PathBuf,
        count: usize,
    },
    ConfigImported {
        config: AppConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
