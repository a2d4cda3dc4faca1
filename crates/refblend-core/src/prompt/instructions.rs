use std::fmt;

use serde::{Deserialize, Serialize};

/// One natural-language instruction about a character reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clause {
    RemoveBackground,
    UseOnlyStyle,
}

impl Clause {
    pub fn text(self) -> &'static str {
        match self {
            Self::RemoveBackground => "remove the background",
            Self::UseOnlyStyle => {
                "use only the style (e.g., clothing, aesthetic), not the person's face or body"
            }
        }
    }
}

/// Toggles on a character slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterToggles {
    pub remove_background: bool,
    pub use_only_style: bool,
}

impl CharacterToggles {
    /// Clauses in their fixed order.
    pub fn clauses(self) -> Vec<Clause> {
        let mut clauses = Vec::with_capacity(2);
        if self.remove_background {
            clauses.push(Clause::RemoveBackground);
        }
        if self.use_only_style {
            clauses.push(Clause::UseOnlyStyle);
        }
        clauses
    }
}

/// Toggles on the background slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundToggles {
    pub remove_background: bool,
}

/// Instruction attached to one reference image. `index` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Character { index: usize, clauses: Vec<Clause> },
    Background { index: usize },
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character { index, clauses } => {
                let joined = clauses
                    .iter()
                    .map(|c| c.text())
                    .collect::<Vec<_>>()
                    .join(" and ");
                write!(f, "For reference image {index}: {joined}.")
            }
            Self::Background { index } => write!(
                f,
                "For reference image {index} (the background image): remove its background."
            ),
        }
    }
}

/// Instructions for the references in generation order.
///
/// `characters` holds the toggles of the slots that actually carry an image,
/// in slot order. `background` is `Some` when a background image is present;
/// it is numbered after every character.
pub fn fragments(characters: &[CharacterToggles], background: Option<BackgroundToggles>) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = characters
        .iter()
        .enumerate()
        .filter_map(|(i, toggles)| {
            let clauses = toggles.clauses();
            (!clauses.is_empty()).then_some(Fragment::Character {
                index: i + 1,
                clauses,
            })
        })
        .collect();

    if let Some(bg) = background {
        if bg.remove_background {
            out.push(Fragment::Background {
                index: characters.len() + 1,
            });
        }
    }

    out
}

/// Same as [`fragments`], rendered to text.
pub fn fragment_texts(
    characters: &[CharacterToggles],
    background: Option<BackgroundToggles>,
) -> Vec<String> {
    fragments(characters, background)
        .iter()
        .map(ToString::to_string)
        .collect()
}
