use std::time::{Duration, Instant};

use crate::consts::LOADING_MESSAGE_INTERVAL_MS;
use crate::error::RefblendError;
use crate::request::GeneratedImage;

pub const LOADING_TITLE: &str = "Generating your images...";

pub const LOADING_MESSAGES: [&str; 5] = [
    "Summoning the AI artists...",
    "Blending digital colours...",
    "Focusing the creative lens...",
    "Arranging the pixels...",
    "A little AI magic is happening...",
];

/// Tips shown next to a failed generation.
pub const RETRY_TIPS: [&str; 4] = [
    "Try a simpler, clearer prompt.",
    "Check that every image was uploaded correctly.",
    "The API may be overloaded; wait a moment and try again.",
    "Make sure your network connection is stable.",
];

/// Loading message to show after `elapsed` time in the loading state.
pub fn loading_message_at(elapsed: Duration) -> &'static str {
    let step = (elapsed.as_millis() / LOADING_MESSAGE_INTERVAL_MS as u128) as usize;
    LOADING_MESSAGES[step % LOADING_MESSAGES.len()]
}

/// Tracks how long a batch has been running and which message to show.
#[derive(Clone, Copy, Debug)]
pub struct LoadingTicker {
    started: Instant,
}

impl LoadingTicker {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn message(&self) -> &'static str {
        loading_message_at(self.elapsed())
    }

    /// Time left until the message changes; hosts schedule a redraw with it.
    pub fn until_next(&self) -> Duration {
        let interval = LOADING_MESSAGE_INTERVAL_MS as u128;
        let into_step = self.elapsed().as_millis() % interval;
        Duration::from_millis((interval - into_step) as u64)
    }
}

/// What the results area is showing.
#[derive(Clone, Debug, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    /// A message fit for the user, with a retry action.
    Failed(String),
    Ready(Vec<GeneratedImage>),
}

impl GenerationStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn images(&self) -> &[GeneratedImage] {
        match self {
            Self::Ready(images) => images,
            _ => &[],
        }
    }

    /// Status after a batch finishes.
    pub fn from_outcome(outcome: Result<Vec<GeneratedImage>, RefblendError>) -> Self {
        match outcome {
            Ok(images) => Self::Ready(images),
            Err(e) => Self::Failed(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_message_rotation() {
        assert_eq!(loading_message_at(Duration::ZERO), LOADING_MESSAGES[0]);
        assert_eq!(loading_message_at(Duration::from_millis(2_499)), LOADING_MESSAGES[0]);
        assert_eq!(loading_message_at(Duration::from_millis(2_500)), LOADING_MESSAGES[1]);
        assert_eq!(loading_message_at(Duration::from_millis(12_500)), LOADING_MESSAGES[0]);
    }

    #[test]
    fn test_ticker_next_change_within_interval() {
        let ticker = LoadingTicker::start();
        let wait = ticker.until_next();
        assert!(wait > Duration::ZERO);
        assert!(wait <= Duration::from_millis(LOADING_MESSAGE_INTERVAL_MS));
    }
}
