use tracing::debug;

use crate::consts::CHARACTER_SLOT_COUNT;
use crate::error::{Result, ValidationError};
use crate::prompt::{compose, fragment_texts, BackgroundToggles, CharacterToggles};
use crate::request::{AspectRatio, GenerationRequest, ImagePayload, Resolution};

/// One of the character reference slots.
#[derive(Clone, Debug)]
pub struct CharacterSlot {
    pub label: String,
    pub image: Option<ImagePayload>,
    pub toggles: CharacterToggles,
}

impl CharacterSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image: None,
            toggles: CharacterToggles::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.image.is_some()
    }
}

/// The optional background reference.
#[derive(Clone, Debug, Default)]
pub struct BackgroundSlot {
    image: Option<ImagePayload>,
    toggles: BackgroundToggles,
}

impl BackgroundSlot {
    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn toggles(&self) -> BackgroundToggles {
        self.toggles
    }

    /// Replace the image. Clearing it also clears the toggle.
    pub fn set_image(&mut self, image: Option<ImagePayload>) {
        if image.is_none() {
            self.toggles = BackgroundToggles::default();
        }
        self.image = image;
    }

    pub fn set_remove_background(&mut self, on: bool) {
        self.toggles.remove_background = on;
    }
}

/// Everything the user has entered for one generate action.
#[derive(Clone, Debug)]
pub struct Composition {
    pub slots: Vec<CharacterSlot>,
    pub background: BackgroundSlot,
    pub prompt: String,
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            slots: (1..=CHARACTER_SLOT_COUNT)
                .map(|i| CharacterSlot::new(format!("Image {i}")))
                .collect(),
            background: BackgroundSlot::default(),
            prompt: String::new(),
            resolution: Resolution::default(),
            aspect_ratio: AspectRatio::default(),
        }
    }
}

impl Composition {
    fn active_slots(&self) -> impl Iterator<Item = &CharacterSlot> {
        self.slots.iter().filter(|s| s.is_active())
    }

    /// References in generation order: active character slots, then background.
    pub fn reference_images(&self) -> Vec<ImagePayload> {
        self.active_slots()
            .filter_map(|s| s.image.clone())
            .chain(self.background.image().cloned())
            .collect()
    }

    pub fn instruction_fragments(&self) -> Vec<String> {
        let characters: Vec<CharacterToggles> = self.active_slots().map(|s| s.toggles).collect();
        let background = self.background.image().map(|_| self.background.toggles());
        fragment_texts(&characters, background)
    }

    /// Check there is something to send. References are checked before the prompt.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.active_slots().next().is_none() && self.background.image().is_none() {
            return Err(ValidationError::NoReferenceImages);
        }
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(())
    }

    /// The composed instruction text sent to the generator.
    pub fn final_prompt(&self) -> String {
        compose(&self.prompt, &self.instruction_fragments())
    }

    /// Validate and build the request.
    pub fn to_request(&self) -> Result<GenerationRequest> {
        self.validate()?;
        let references = self.reference_images();
        let prompt = self.final_prompt();
        debug!(
            references = references.len(),
            prompt_len = prompt.len(),
            "Composed generation request"
        );
        Ok(GenerationRequest {
            prompt,
            references,
            resolution: self.resolution,
            aspect_ratio: self.aspect_ratio,
        })
    }
}
