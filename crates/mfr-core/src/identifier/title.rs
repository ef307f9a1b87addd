//! Stop-word-filtered, length-bounded title derivation.

use serde::Serialize;

use crate::catalog::{is_stop_word, TITLE_MAX_CHARS};

/// A title derived from a description, plus whether tokens were left out
/// because of the length cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedTitle {
    pub title: String,
    pub truncated: bool,
}

impl DerivedTitle {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Derives a title from a free-text description.
///
/// Lower-cases the text, turns anything outside `[a-z0-9-]` and whitespace
/// into a space, drops stop words, then joins tokens with `_` while the
/// result stays within 25 characters. The first token that would overflow
/// stops accumulation and sets `truncated`.
///
/// # Examples
///
/// - `"Regional Grant Application for Transportation"` → `regional_grant` (truncated)
/// - `"The Budget Overview"` → `budget_overview`
/// - `"of the and"` → empty, not truncated
pub fn derive_title(description: &str) -> DerivedTitle {
    let tokens = title_tokens(description);
    let Some(first) = tokens.first() else {
        return DerivedTitle::default();
    };

    let mut title = String::with_capacity(TITLE_MAX_CHARS);
    let mut truncated = false;
    for token in &tokens {
        let candidate_len = if title.is_empty() {
            token.len()
        } else {
            title.len() + 1 + token.len()
        };
        if candidate_len > TITLE_MAX_CHARS {
            truncated = true;
            break;
        }
        if !title.is_empty() {
            title.push('_');
        }
        title.push_str(token);
    }

    // First token alone is over the cap.
    if title.is_empty() {
        title = first.chars().take(TITLE_MAX_CHARS).collect();
    }

    DerivedTitle { title, truncated }
}

/// Normalized, stop-word-free tokens. Only ASCII survives normalization, so
/// byte length equals character count.
fn title_tokens(description: &str) -> Vec<String> {
    let normalized: String = description
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
