use std::sync::mpsc;

use refblend_core::config::AppConfig;
use refblend_core::status::GenerationStatus;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{CompositionState, ResultsState, UIState, ViewportState};
use crate::worker;

pub struct RefblendApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub composition: CompositionState,
    pub results: ResultsState,
    pub viewport: ViewportState,
    pub config: AppConfig,
    pub show_about: bool,
}

impl RefblendApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let config = AppConfig::default();

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            composition: CompositionState::new(&config.generation),
            results: ResultsState::default(),
            viewport: ViewportState::new(config.viewer.scale_limits()),
            config,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ReferenceLoaded {
                    target,
                    path,
                    payload,
                    thumbnail,
                } => {
                    let texture = ctx.load_texture(
                        format!("reference-{target}"),
                        thumbnail,
                        egui::TextureOptions::LINEAR,
                    );
                    self.ui_state
                        .add_log(format!("{target}: loaded {}", path.display()));
                    self.composition.set_reference(target, payload, texture, &path);
                }
                WorkerResult::Progress { batch, done, total } => {
                    if self.ui_state.is_current(batch) {
                        self.ui_state.progress_done = done;
                        self.ui_state.progress_total = total;
                    }
                }
                WorkerResult::GenerationComplete {
                    batch,
                    outcome,
                    elapsed,
                } => {
                    if !self.ui_state.is_current(batch) {
                        tracing::debug!(batch, "Dropping results of superseded batch");
                        continue;
                    }
                    match outcome {
                        Ok(images) => {
                            self.ui_state.add_log(format!(
                                "{} of {} image(s) generated in {}",
                                images.len(),
                                self.ui_state.progress_total,
                                format_duration(elapsed)
                            ));
                            self.results.replace(ctx, images);
                            let generated = self.results.generated();
                            self.ui_state
                                .finish_batch(GenerationStatus::Ready(generated));
                        }
                        Err(message) => {
                            self.results.clear();
                            self.ui_state.finish_batch(GenerationStatus::Failed(message));
                        }
                    }
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::AllSaved { dir, count } => {
                    self.ui_state
                        .add_log(format!("Saved {count} image(s) to {}", dir.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn apply_config(&mut self, config: AppConfig) {
        self.composition.apply_config(&config.generation);
        self.viewport.set_limits(config.viewer.scale_limits());
        self.config = config;
    }

    /// Validate the composition and start a new batch.
    ///
    /// Any batch still running is superseded: its results are ignored when
    /// they arrive.
    pub fn start_generation(&mut self) {
        let request = match self.composition.job.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.ui_state.validation_error = Some(e.user_message());
                return;
            }
        };

        let count = self.config.generation.batch_size.max(1);
        let batch = self.ui_state.begin_batch(count);
        self.results.clear();
        self.viewport.close();

        self.send_command(WorkerCommand::Generate {
            batch,
            request,
            count,
            config: self.config.generation.clone(),
        });
    }

    pub fn open_viewer(&mut self, index: usize) {
        if let Some(entry) = self.results.entries.get(index) {
            self.viewport.open(index, entry.texture.clone());
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for RefblendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        if self.viewport.is_open() {
            panels::viewer::show(ctx, self);
        } else {
            panels::results::show(ctx, self);
        }

        // Keep the loading message rotating without input events.
        if let Some(ticker) = self.ui_state.ticker {
            ctx.request_repaint_after(ticker.until_next());
        }

        if self.show_about {
            egui::Window::new("About Refblend")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Refblend");
                        ui.label("Blend reference images with a prompt");
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

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
