use refblend_core::status::{GenerationStatus, LoadingTicker};

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// What the results area is showing.
    pub status: GenerationStatus,

    /// Id of the newest batch; results tagged with an older id are dropped.
    pub batch: u64,
    pub ticker: Option<LoadingTicker>,

    /// Progress.
    pub progress_done: usize,
    pub progress_total: usize,

    /// Input problem from the last generate attempt.
    pub validation_error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.status.is_loading()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Enter the loading state for a new batch and return its id.
    pub fn begin_batch(&mut self, total: usize) -> u64 {
        self.batch += 1;
        self.status = GenerationStatus::Loading;
        self.ticker = Some(LoadingTicker::start());
        self.progress_done = 0;
        self.progress_total = total;
        self.validation_error = None;
        self.batch
    }

    pub fn finish_batch(&mut self, status: GenerationStatus) {
        self.status = status;
        self.ticker = None;
    }

    pub fn is_current(&self, batch: u64) -> bool {
        batch == self.batch
    }
}
