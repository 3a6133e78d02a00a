//! Extraction of the generated script from the model's free-form reply.
//!
//! The agent is asked to wrap its Three.js output in a fixed pair of
//! plain-text tags. Replies are free-form, so every malformed-tag case
//! degrades to a defined fallback instead of an error.

/// The tag opening the script section of a reply.
pub const SCENE_START_TAG: &str = "<threejs_output>";

/// The tag closing the script section of a reply.
pub const SCENE_END_TAG: &str = "</threejs_output>";

/// Returns the substring of `text` strictly between the first occurrence of
/// `start_tag` and the first occurrence of `end_tag` after it, with leading
/// and trailing whitespace trimmed.
///
/// Tags are matched as exact, case-sensitive substrings; there is no
/// escaping or nesting support.
///
/// # Fallbacks
///
/// - `start_tag` absent: the input is returned unmodified, untrimmed.
/// - `start_tag` present but `end_tag` absent after it: everything from just
///   after `start_tag` to the end of the input, trimmed.
pub fn extract_between<'a>(text: &'a str, start_tag: &str, end_tag: &str) -> &'a str {
    let Some(start_idx) = text.find(start_tag) else {
        return text;
    };
    let after_start = &text[start_idx + start_tag.len()..];
    match after_start.find(end_tag) {
        Some(end_idx) => after_start[..end_idx].trim(),
        None => after_start.trim(),
    }
}

/// Extracts the Three.js script from a reply, using the fixed
/// [`SCENE_START_TAG`] / [`SCENE_END_TAG`] delimiter pair.
pub fn extract_scene_code(text: &str) -> &str {
    extract_between(text, SCENE_START_TAG, SCENE_END_TAG)
}

/// Reports whether both output tags occur anywhere in `text`, regardless of
/// order. Informational only; extraction does not depend on it.
pub fn has_scene_output(text: &str) -> bool {
    text.contains(SCENE_START_TAG) && text.contains(SCENE_END_TAG)
}
