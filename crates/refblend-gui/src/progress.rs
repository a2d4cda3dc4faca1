use std::sync::mpsc;

use refblend_core::generate::BatchReporter;

use crate::messages::WorkerResult;

/// Batch reporter that sends updates over an mpsc channel to the UI thread.
pub struct ChannelBatchReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    batch: u64,
}

impl ChannelBatchReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context, batch: u64) -> Self {
        Self { tx, ctx, batch }
    }
}

impl BatchReporter for ChannelBatchReporter {
    fn call_finished(&self, done: usize, total: usize, _succeeded: bool) {
        let _ = self.tx.send(WorkerResult::Progress {
            batch: self.batch,
            done,
            total,
        });
        self.ctx.request_repaint();
    }
}
