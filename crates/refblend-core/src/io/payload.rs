use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::error::{RefblendError, Result};
use crate::request::ImagePayload;
use crate::viewer::ImageDimensions;

/// Read an image file into a reference payload.
///
/// The mime type comes from the file contents, falling back to the
/// extension when the format cannot be sniffed.
pub fn load_payload(path: &Path) -> Result<ImagePayload> {
    let bytes = std::fs::read(path)?;
    let mime = detect_mime(&bytes, path)?;
    debug!(path = %path.display(), mime = %mime, bytes = bytes.len(), "Loaded reference image");
    Ok(ImagePayload::from_bytes(mime, &bytes))
}

/// Mime type for image bytes, using `path`'s extension as a fallback.
pub fn detect_mime(bytes: &[u8], path: &Path) -> Result<String> {
    let format = image::guess_format(bytes).ok().or_else(|| {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
    });

    match format {
        Some(f) => Ok(f.to_mime_type().to_string()),
        None => Err(RefblendError::UnsupportedMime(
            path.extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".into()),
        )),
    }
}

/// A decoded image as tightly packed RGBA8.
#[derive(Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width as f32, self.height as f32)
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...).
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(RefblendError::InvalidDimensions { width, height });
    }
    Ok(DecodedImage {
        width,
        height,
        rgba: img.to_rgba8().into_raw(),
    })
}

/// Decode and shrink so neither side exceeds `max_side`, keeping aspect.
/// Images already small enough are returned at full size.
pub fn decode_thumbnail(bytes: &[u8], max_side: u32) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(RefblendError::InvalidDimensions { width, height });
    }
    let img = if width.max(height) > max_side {
        img.thumbnail(max_side, max_side)
    } else {
        img
    };
    Ok(DecodedImage {
        width: img.width(),
        height: img.height(),
        rgba: img.to_rgba8().into_raw(),
    })
}

/// Natural size of encoded image bytes.
pub fn image_dimensions(bytes: &[u8]) -> Result<ImageDimensions> {
    decode_image(bytes).map(|d| d.dimensions())
}
