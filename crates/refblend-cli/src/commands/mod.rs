pub mod compose;
pub mod config;
pub mod fit;
pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};
use refblend_core::config::AppConfig;

/// Config from `path`, or the defaults when no file was given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}
