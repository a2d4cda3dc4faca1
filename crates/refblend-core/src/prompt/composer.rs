use crate::request::{AspectRatio, Resolution};

const INSTRUCTION_PREFIX: &str =
    "Please follow these instructions for the provided reference images: ";
const PROMPT_BRIDGE: &str =
    ". After applying these changes, create an image based on the following prompt: ";

/// Build the final instruction text from the user's prompt and the
/// per-reference instruction fragments. With no fragments the prompt is
/// returned unchanged.
pub fn compose<S: AsRef<str>>(prompt: &str, fragments: &[S]) -> String {
    if fragments.is_empty() {
        return prompt.to_string();
    }

    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::with_capacity(
        INSTRUCTION_PREFIX.len() + joined.len() + PROMPT_BRIDGE.len() + prompt.len(),
    );
    out.push_str(INSTRUCTION_PREFIX);
    out.push_str(&joined);
    out.push_str(PROMPT_BRIDGE);
    out.push_str(prompt);
    out
}

/// Append the quality and output-format hints sent with every request.
pub fn decorate_prompt(prompt: &str, resolution: Resolution, aspect_ratio: AspectRatio) -> String {
    format!(
        "{prompt}, masterpiece, best quality, ultra high detail, {resolution} resolution, {aspect_ratio} aspect ratio"
    )
}
