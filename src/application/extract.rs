//! Typed JSON extraction from free-form model output.
//!
//! Models wrap JSON in prose or markdown fences. Every inference-backed
//! stage goes through [`extract_json`] so they all fail the same way.

use serde::de::DeserializeOwned;

use crate::error::ExtractError;

/// Decode the first JSON object embedded in `text` into `T`.
///
/// Code-fence markers are stripped, then the first balanced `{...}` region
/// is decoded. If the braces never balance, the span from the first `{` to
/// the last `}` is tried instead.
///
/// # Errors
///
/// Returns [`ExtractError::NoJson`] if no object-shaped region exists and
/// [`ExtractError::Invalid`] if the region does not decode into `T`.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Result<T, ExtractError> {
    let cleaned = strip_fences(text);
    let object = object_span(&cleaned).ok_or(ExtractError::NoJson)?;
    serde_json::from_str(object).map_err(ExtractError::Invalid)
}

fn strip_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
}

fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    // Unbalanced; fall back to the widest candidate.
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
