use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::request::GeneratedImage;

/// Write one result as `generated_image_{index}.png` inside `dir`.
pub fn save_generated(image: &GeneratedImage, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(image.file_name());
    save_generated_as(image, &path)?;
    Ok(path)
}

/// Write one result to an explicit path.
pub fn save_generated_as(image: &GeneratedImage, path: &Path) -> Result<()> {
    let bytes = image.decode_png()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), "Saved generated image");
    Ok(())
}

/// Write every result into `dir`. Stops at the first failure.
pub fn save_all(images: &[GeneratedImage], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    images.iter().map(|img| save_generated(img, dir)).collect()
}
