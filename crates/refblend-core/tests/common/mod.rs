#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{ImageFormat, RgbaImage};

use refblend_core::error::{GenerationError, Result};
use refblend_core::generate::ImageGenerator;
use refblend_core::request::{AspectRatio, GenerationRequest, ImagePayload, Resolution};

/// Encode a solid-colour RGBA image as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 90, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

pub fn png_payload(width: u32, height: u32) -> ImagePayload {
    ImagePayload::from_bytes("image/png", &png_bytes(width, height))
}

pub fn sample_request() -> GenerationRequest {
    GenerationRequest {
        prompt: "two friends at a cafe".into(),
        references: vec![png_payload(2, 2)],
        resolution: Resolution::TwoK,
        aspect_ratio: AspectRatio::Square,
    }
}

/// Succeeds on every call except the (1-based) call numbers in `fail_on`.
///
/// Each call returns `"img-{n}"` so the caller can see which calls made it.
pub struct ScriptedGenerator {
    calls: AtomicUsize,
    fail_on: Vec<usize>,
}

impl ScriptedGenerator {
    pub fn new(fail_on: &[usize]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: fail_on.to_vec(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageGenerator for ScriptedGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<Option<String>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on.contains(&n) {
            return Err(GenerationError::Status {
                status: 503,
                body: "overloaded".into(),
            }
            .into());
        }
        Ok(Some(format!("img-{n}")))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Answers every call but never with an image.
pub struct EmptyGenerator;

impl ImageGenerator for EmptyGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "empty"
    }
}
