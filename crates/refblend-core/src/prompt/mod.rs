pub mod composer;
pub mod instructions;

pub use composer::{compose, decorate_prompt};
pub use instructions::{
    fragment_texts, fragments, BackgroundToggles, CharacterToggles, Clause, Fragment,
};
