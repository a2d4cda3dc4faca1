use refblend_core::prompt::{
    compose, decorate_prompt, fragment_texts, fragments, BackgroundToggles, CharacterToggles,
    Clause, Fragment,
};
use refblend_core::request::{AspectRatio, Resolution};

const BOTH: CharacterToggles = CharacterToggles {
    remove_background: true,
    use_only_style: true,
};
const REMOVE_BG: CharacterToggles = CharacterToggles {
    remove_background: true,
    use_only_style: false,
};
const STYLE: CharacterToggles = CharacterToggles {
    remove_background: false,
    use_only_style: true,
};
const NONE: CharacterToggles = CharacterToggles {
    remove_background: false,
    use_only_style: false,
};

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

#[test]
fn test_compose_without_fragments_returns_prompt() {
    let empty: [&str; 0] = [];
    assert_eq!(compose("draw a cat", &empty), "draw a cat");
}

#[test]
fn test_compose_single_fragment() {
    let out = compose(
        "draw a cat",
        &["For reference image 1: remove the background."],
    );
    assert_eq!(
        out,
        "Please follow these instructions for the provided reference images: \
         For reference image 1: remove the background.. After applying these changes, \
         create an image based on the following prompt: draw a cat"
    );
}

#[test]
fn test_compose_joins_with_space() {
    let out = compose("p", &["A.".to_string(), "B.".to_string()]);
    assert!(out.contains("images: A. B.. After"), "got: {out}");
    assert!(out.ends_with("prompt: p"));
}

#[test]
fn test_compose_deterministic() {
    let frags = ["For reference image 2: remove the background."];
    assert_eq!(compose("x", &frags), compose("x", &frags));
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

#[test]
fn test_clause_text() {
    assert_eq!(Clause::RemoveBackground.text(), "remove the background");
    assert_eq!(
        Clause::UseOnlyStyle.text(),
        "use only the style (e.g., clothing, aesthetic), not the person's face or body"
    );
}

#[test]
fn test_no_toggles_no_fragments() {
    assert!(fragments(&[NONE, NONE], None).is_empty());
    assert!(fragments(&[NONE], Some(BackgroundToggles::default())).is_empty());
}

#[test]
fn test_toggles_combine_with_and() {
    let texts = fragment_texts(&[BOTH], None);
    assert_eq!(
        texts,
        vec![
            "For reference image 1: remove the background and use only the style \
             (e.g., clothing, aesthetic), not the person's face or body."
                .to_string()
        ]
    );
}

#[test]
fn test_numbering_follows_active_slot_order() {
    let frags = fragments(&[NONE, STYLE, REMOVE_BG], None);
    assert_eq!(
        frags,
        vec![
            Fragment::Character {
                index: 2,
                clauses: vec![Clause::UseOnlyStyle]
            },
            Fragment::Character {
                index: 3,
                clauses: vec![Clause::RemoveBackground]
            },
        ]
    );
}

#[test]
fn test_background_numbered_last() {
    let texts = fragment_texts(
        &[REMOVE_BG, NONE],
        Some(BackgroundToggles {
            remove_background: true,
        }),
    );
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], "For reference image 1: remove the background.");
    assert_eq!(
        texts[1],
        "For reference image 3 (the background image): remove its background."
    );
}

#[test]
fn test_background_only() {
    let texts = fragment_texts(
        &[],
        Some(BackgroundToggles {
            remove_background: true,
        }),
    );
    assert_eq!(
        texts,
        vec!["For reference image 1 (the background image): remove its background.".to_string()]
    );
}

// ---------------------------------------------------------------------------
// decorate_prompt
// ---------------------------------------------------------------------------

#[test]
fn test_decorate_prompt() {
    assert_eq!(
        decorate_prompt("two heroes", Resolution::TwoK, AspectRatio::Portrait),
        "two heroes, masterpiece, best quality, ultra high detail, 2k resolution, 9:16 aspect ratio"
    );
}
