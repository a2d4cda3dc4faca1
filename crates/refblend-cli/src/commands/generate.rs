use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use refblend_core::generate::{generate_batch_reported, BatchReporter, GeminiGenerator, ImageGenerator};
use refblend_core::io::save_all;
use refblend_core::status::LoadingTicker;

use super::compose::CompositionArgs;
use super::load_config;
use crate::summary;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub composition: CompositionArgs,

    /// Number of images to request (config default when omitted)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Directory for the generated PNG files
    #[arg(short, long, default_value = "generated")]
    pub output: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Advances the bar as calls come back.
struct BarReporter<'a> {
    pb: &'a ProgressBar,
}

impl BatchReporter for BarReporter<'_> {
    fn call_finished(&self, done: usize, _total: usize, _succeeded: bool) {
        self.pb.set_position(done as u64);
    }
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let job = args.composition.to_composition(&config.generation)?;
    let request = job.to_request()?;
    let count = args.count.unwrap_or(config.generation.batch_size).max(1);

    let generator =
        GeminiGenerator::from_env(&config.generation).context("Cannot create generation client")?;

    summary::print_request_summary(&job, &request);
    summary::print_batch_header(generator.name(), count, &args.output);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} {msg:36} [{bar:20}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.enable_steady_tick(Duration::from_millis(120));

    let ticker = LoadingTicker::start();
    let finished = AtomicBool::new(false);
    let outcome = std::thread::scope(|s| {
        s.spawn(|| {
            while !finished.load(Ordering::Relaxed) {
                pb.set_message(ticker.message());
                std::thread::sleep(Duration::from_millis(200));
            }
        });
        let outcome = generate_batch_reported(&generator, &request, count, &BarReporter { pb: &pb });
        finished.store(true, Ordering::Relaxed);
        outcome
    });

    let images = match outcome {
        Ok(images) => {
            pb.finish_with_message(format!("{} of {} images generated", images.len(), count));
            images
        }
        Err(e) => {
            pb.abandon_with_message("Generation failed");
            summary::print_failure(&e.user_message());
            return Err(e).context("Generation failed");
        }
    };

    let paths = save_all(&images, &args.output)
        .with_context(|| format!("Failed to save images to {}", args.output.display()))?;
    summary::print_saved(&paths);

    Ok(())
}
