use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use refblend_core::config::GenerationConfig;
use refblend_core::consts::CHARACTER_SLOT_COUNT;
use refblend_core::io::load_payload;
use refblend_core::job::Composition;
use refblend_core::prompt::decorate_prompt;
use refblend_core::request::{AspectRatio, ImagePayload, Resolution};

use super::load_config;
use crate::summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ResolutionArg {
    #[value(name = "2k")]
    TwoK,
    #[value(name = "4k")]
    FourK,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::TwoK => Resolution::TwoK,
            ResolutionArg::FourK => Resolution::FourK,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AspectArg {
    #[value(name = "1:1")]
    Square,
    #[value(name = "16:9")]
    Landscape,
    #[value(name = "9:16")]
    Portrait,
}

impl From<AspectArg> for AspectRatio {
    fn from(arg: AspectArg) -> Self {
        match arg {
            AspectArg::Square => AspectRatio::Square,
            AspectArg::Landscape => AspectRatio::Landscape,
            AspectArg::Portrait => AspectRatio::Portrait,
        }
    }
}

/// References, toggles and prompt shared by `compose` and `generate`.
#[derive(Args)]
pub struct CompositionArgs {
    /// What to create
    pub prompt: String,

    /// Character reference image; repeat to fill slots 1-4 in order
    #[arg(short, long = "image", value_name = "PATH")]
    pub images: Vec<PathBuf>,

    /// Remove the background of character slot N (repeatable)
    #[arg(long, value_name = "SLOT")]
    pub remove_bg: Vec<usize>,

    /// Use only the style of character slot N (repeatable)
    #[arg(long, value_name = "SLOT")]
    pub style_only: Vec<usize>,

    /// Background reference image
    #[arg(short, long, value_name = "PATH")]
    pub background: Option<PathBuf>,

    /// Remove the background of the background image
    #[arg(long)]
    pub remove_bg_background: bool,

    /// Output resolution (config default when omitted)
    #[arg(long, value_enum)]
    pub resolution: Option<ResolutionArg>,

    /// Output aspect ratio (config default when omitted)
    #[arg(long, value_enum)]
    pub aspect: Option<AspectArg>,
}

impl CompositionArgs {
    pub fn to_composition(&self, config: &GenerationConfig) -> Result<Composition> {
        if self.images.len() > CHARACTER_SLOT_COUNT {
            bail!(
                "At most {} character images are supported, got {}",
                CHARACTER_SLOT_COUNT,
                self.images.len()
            );
        }

        let mut job = Composition::default();
        for (slot, path) in job.slots.iter_mut().zip(&self.images) {
            slot.image = Some(read_reference(path)?);
        }
        for &n in &self.remove_bg {
            job.slots[slot_index(n)?].toggles.remove_background = true;
        }
        for &n in &self.style_only {
            job.slots[slot_index(n)?].toggles.use_only_style = true;
        }

        if let Some(ref path) = self.background {
            job.background.set_image(Some(read_reference(path)?));
            job.background.set_remove_background(self.remove_bg_background);
        } else if self.remove_bg_background {
            tracing::warn!("--remove-bg-background ignored without --background");
        }

        job.prompt = self.prompt.clone();
        job.resolution = self.resolution.map(Into::into).unwrap_or(config.resolution);
        job.aspect_ratio = self.aspect.map(Into::into).unwrap_or(config.aspect_ratio);
        Ok(job)
    }
}

fn read_reference(path: &Path) -> Result<ImagePayload> {
    load_payload(path)
        .with_context(|| format!("Failed to load reference image {}", path.display()))
}

/// 1-based slot number from the command line to a slot index.
fn slot_index(n: usize) -> Result<usize> {
    if n == 0 || n > CHARACTER_SLOT_COUNT {
        bail!("Slot must be between 1 and {}, got {}", CHARACTER_SLOT_COUNT, n);
    }
    Ok(n - 1)
}

#[derive(Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub composition: CompositionArgs,

    /// Also print the prompt with the quality suffix sent to the service
    #[arg(long)]
    pub decorated: bool,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let job = args.composition.to_composition(&config.generation)?;
    let request = job.to_request()?;

    summary::print_request_summary(&job, &request);
    println!("{}", request.prompt);
    if args.decorated {
        println!();
        println!(
            "{}",
            decorate_prompt(&request.prompt, request.resolution, request.aspect_ratio)
        );
    }
    Ok(())
}
