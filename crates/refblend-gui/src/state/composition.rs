use std::path::Path;

use refblend_core::config::GenerationConfig;
use refblend_core::consts::CHARACTER_SLOT_COUNT;
use refblend_core::job::Composition;
use refblend_core::request::ImagePayload;

use crate::messages::SlotTarget;

/// Preview of a loaded reference.
pub struct SlotPreview {
    pub texture: egui::TextureHandle,
    pub file_name: String,
}

/// The composition being edited plus what the UI needs to draw it.
pub struct CompositionState {
    pub job: Composition,
    pub slot_previews: Vec<Option<SlotPreview>>,
    pub background_preview: Option<SlotPreview>,
}

impl CompositionState {
    pub fn new(config: &GenerationConfig) -> Self {
        let mut job = Composition::default();
        job.resolution = config.resolution;
        job.aspect_ratio = config.aspect_ratio;
        Self {
            job,
            slot_previews: (0..CHARACTER_SLOT_COUNT).map(|_| None).collect(),
            background_preview: None,
        }
    }

    /// Output defaults changed (config imported or reset).
    pub fn apply_config(&mut self, config: &GenerationConfig) {
        self.job.resolution = config.resolution;
        self.job.aspect_ratio = config.aspect_ratio;
    }

    pub fn set_reference(
        &mut self,
        target: SlotTarget,
        payload: ImagePayload,
        texture: egui::TextureHandle,
        path: &Path,
    ) {
        let preview = SlotPreview {
            texture,
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        };
        match target {
            SlotTarget::Character(i) => {
                if let Some(slot) = self.job.slots.get_mut(i) {
                    slot.image = Some(payload);
                    self.slot_previews[i] = Some(preview);
                }
            }
            SlotTarget::Background => {
                self.job.background.set_image(Some(payload));
                self.background_preview = Some(preview);
            }
        }
    }

    /// Empty a slot. Toggles of a character slot are kept; the background
    /// toggle is cleared with its image.
    pub fn clear_reference(&mut self, target: SlotTarget) {
        match target {
            SlotTarget::Character(i) => {
                if let Some(slot) = self.job.slots.get_mut(i) {
                    slot.image = None;
                    self.slot_previews[i] = None;
                }
            }
            SlotTarget::Background => {
                self.job.background.set_image(None);
                self.background_preview = None;
            }
        }
    }

    /// First empty character slot, for "add image" actions.
    pub fn first_free_slot(&self) -> Option<usize> {
        self.job.slots.iter().position(|s| !s.is_active())
    }
}
