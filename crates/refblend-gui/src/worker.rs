use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use refblend_core::config::GenerationConfig;
use refblend_core::generate::{generate_batch_reported, GeminiGenerator};
use refblend_core::io::{decode_image, decode_thumbnail, load_payload, save_all, save_generated_as};
use refblend_core::request::{GeneratedImage, GenerationRequest};
use tracing::warn;

use crate::convert::decoded_to_color_image;
use crate::messages::{ResultImage, SlotTarget, WorkerCommand, WorkerResult};
use crate::progress::ChannelBatchReporter;

/// Longest side of the slot previews, in pixels.
const THUMBNAIL_SIDE: u32 = 256;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("refblend-worker".into())
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

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
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
            WorkerCommand::LoadReference { target, path } => {
                handle_load_reference(target, &path, &tx, &ctx);
            }
            WorkerCommand::Generate {
                batch,
                request,
                count,
                config,
            } => {
                // Batches run on their own thread so that slot loading and
                // saving stay responsive while the service is busy.
                let thread_tx = tx.clone();
                let thread_ctx = ctx.clone();
                let spawned = std::thread::Builder::new()
                    .name(format!("refblend-batch-{batch}"))
                    .spawn(move || {
                        handle_generate(batch, &request, count, &config, &thread_tx, &thread_ctx)
                    });
                if let Err(e) = spawned {
                    send_error(&tx, &ctx, format!("Could not start generation: {e}"));
                }
            }
            WorkerCommand::SaveImage { image, path } => {
                handle_save_image(&image, &path, &tx, &ctx);
            }
            WorkerCommand::SaveAll { images, dir } => {
                handle_save_all(&images, &dir, &tx, &ctx);
            }
        }
    }
}

fn handle_load_reference(
    target: SlotTarget,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let loaded = load_payload(path).and_then(|payload| {
        let bytes = payload.decode()?;
        let thumbnail = decode_thumbnail(&bytes, THUMBNAIL_SIDE)?;
        Ok((payload, decoded_to_color_image(&thumbnail)))
    });

    match loaded {
        Ok((payload, thumbnail)) => send(
            tx,
            ctx,
            WorkerResult::ReferenceLoaded {
                target,
                path: path.to_path_buf(),
                payload,
                thumbnail,
            },
        ),
        Err(e) => send_error(
            tx,
            ctx,
            format!("{target}: cannot use {}: {e}", path.display()),
        ),
    }
}

fn handle_generate(
    batch: u64,
    request: &GenerationRequest,
    count: usize,
    config: &GenerationConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let generator = match GeminiGenerator::from_env(config) {
        Ok(g) => g,
        Err(e) => {
            send_log(tx, ctx, format!("ERROR: {e}"));
            send(
                tx,
                ctx,
                WorkerResult::GenerationComplete {
                    batch,
                    outcome: Err(e.user_message()),
                    elapsed: start.elapsed(),
                },
            );
            return;
        }
    };

    send_log(
        tx,
        ctx,
        format!(
            "Generating {count} image(s) from {} reference(s)...",
            request.references.len()
        ),
    );

    let reporter = ChannelBatchReporter::new(tx.clone(), ctx.clone(), batch);
    let outcome = match generate_batch_reported(&generator, request, count, &reporter) {
        Ok(images) => Ok(images.into_iter().map(decode_result).collect()),
        Err(e) => {
            send_log(tx, ctx, format!("ERROR: {e}"));
            Err(e.user_message())
        }
    };

    send(
        tx,
        ctx,
        WorkerResult::GenerationComplete {
            batch,
            outcome,
            elapsed: start.elapsed(),
        },
    );
}

fn decode_result(image: GeneratedImage) -> ResultImage {
    let pixels = match image.decode_png().and_then(|bytes| decode_image(&bytes)) {
        Ok(decoded) => Some(decoded_to_color_image(&decoded)),
        Err(e) => {
            warn!(index = image.index, error = %e, "Generated image could not be decoded");
            None
        }
    };
    ResultImage { image, pixels }
}

fn handle_save_image(
    image: &GeneratedImage,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_generated_as(image, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Save failed: {e}")),
    }
}

fn handle_save_all(
    images: &[GeneratedImage],
    dir: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_all(images, dir) {
        Ok(paths) => send(
            tx,
            ctx,
            WorkerResult::AllSaved {
                dir: PathBuf::from(dir),
                count: paths.len(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Save failed: {e}")),
    }
}
