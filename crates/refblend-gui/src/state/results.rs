use refblend_core::request::GeneratedImage;

use crate::messages::ResultImage;

pub struct ResultEntry {
    pub image: GeneratedImage,
    pub texture: Option<egui::TextureHandle>,
}

/// Images of the last successful batch.
#[derive(Default)]
pub struct ResultsState {
    pub entries: Vec<ResultEntry>,
}

impl ResultsState {
    pub fn replace(&mut self, ctx: &egui::Context, images: Vec<ResultImage>) {
        self.entries = images
            .into_iter()
            .map(|r| {
                let texture = r.pixels.map(|pixels| {
                    ctx.load_texture(
                        format!("result-{}", r.image.index),
                        pixels,
                        egui::TextureOptions::LINEAR,
                    )
                });
                ResultEntry {
                    image: r.image,
                    texture,
                }
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn generated(&self) -> Vec<GeneratedImage> {
        self.entries.iter().map(|e| e.image.clone()).collect()
    }
}
