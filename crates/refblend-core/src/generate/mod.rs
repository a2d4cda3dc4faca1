pub mod gemini;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{GenerationError, Result};
use crate::request::{GeneratedImage, GenerationRequest};

pub use gemini::GeminiGenerator;

/// The external image-generation capability.
pub trait ImageGenerator: Send + Sync {
    /// One independent generation call. `Ok(None)` means the service
    /// answered but returned no image.
    fn generate(&self, request: &GenerationRequest) -> Result<Option<String>>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Progress hook for a batch. All methods default to no-ops.
pub trait BatchReporter: Send + Sync {
    /// A call finished; `done` of `total` calls have now returned.
    fn call_finished(&self, _done: usize, _total: usize, _succeeded: bool) {}
}

struct NoOpReporter;
impl BatchReporter for NoOpReporter {}

/// Run `count` generation calls concurrently and keep whatever succeeds.
///
/// A failing call is logged and dropped; it never aborts the batch. Results
/// keep call order and are numbered from 1. Only when every call comes back
/// empty is [`GenerationError::AllFailed`] returned.
pub fn generate_batch(
    generator: &dyn ImageGenerator,
    request: &GenerationRequest,
    count: usize,
) -> Result<Vec<GeneratedImage>> {
    generate_batch_reported(generator, request, count, &NoOpReporter)
}

pub fn generate_batch_reported(
    generator: &dyn ImageGenerator,
    request: &GenerationRequest,
    count: usize,
    reporter: &dyn BatchReporter,
) -> Result<Vec<GeneratedImage>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    info!(
        backend = generator.name(),
        calls = count,
        references = request.references.len(),
        "Starting generation batch"
    );

    let done = AtomicUsize::new(0);
    let run = || -> Vec<Option<String>> {
        (0..count)
            .into_par_iter()
            .map(|call| {
                let outcome = match generator.generate(request) {
                    Ok(Some(data)) => Some(data),
                    Ok(None) => {
                        warn!(call = call + 1, "Generation call returned no image");
                        None
                    }
                    Err(e) => {
                        warn!(call = call + 1, error = %e, "Generation call failed");
                        None
                    }
                };
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.call_finished(finished, count, outcome.is_some());
                outcome
            })
            .collect()
    };

    // Calls are network-bound: give each one its own thread instead of
    // queueing behind the CPU-sized global pool.
    let outcomes = match rayon::ThreadPoolBuilder::new().num_threads(count).build() {
        Ok(pool) => pool.install(run),
        Err(e) => {
            warn!(error = %e, "Could not build generation pool, using global pool");
            run()
        }
    };

    let images: Vec<GeneratedImage> = outcomes
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, data_base64)| GeneratedImage {
            index: i + 1,
            data_base64,
        })
        .collect();

    if images.is_empty() {
        return Err(GenerationError::AllFailed { attempted: count }.into());
    }

    info!(
        produced = images.len(),
        attempted = count,
        "Generation batch complete"
    );
    Ok(images)
}
