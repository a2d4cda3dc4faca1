mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "refblend", about = "Blend reference images into new images from a prompt")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the final prompt built from references, toggles and a prompt
    Compose(commands::compose::ComposeArgs),
    /// Generate a batch of images and save them
    Generate(commands::generate::GenerateArgs),
    /// Compute viewer fit, zoom and pan transforms for an image
    Fit(commands::fit::FitArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
