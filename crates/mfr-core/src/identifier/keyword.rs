//! Attachment keyword suggestion from free text.

use crate::catalog::{COMMON_KEYWORDS, SUGGESTION_MAX_CHARS};

/// Suggests an attachment keyword for `text`.
///
/// Returns the first curated keyword found anywhere in the text
/// (case-insensitive substring match). Otherwise falls back to the first
/// whitespace-delimited token, lower-cased, stripped to `[a-z0-9-]` and cut
/// to 30 characters. Empty input yields an empty suggestion.
pub fn suggest_keyword(text: &str) -> String {
    let lower = text.to_lowercase();
    if let Some(keyword) = COMMON_KEYWORDS.iter().find(|k| lower.contains(*k)) {
        return (*keyword).to_string();
    }

    lower
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .take(SUGGESTION_MAX_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_keyword_wins() {
        assert_eq!(suggest_keyword("FY26 Budget detail"), "budget");
        assert_eq!(suggest_keyword("GRANT award letter"), "grant");
    }

    #[test]
    fn list_order_breaks_ties() {
        // Both "map" and "grant" occur; "map" is earlier in the list.
        assert_eq!(suggest_keyword("grant area map"), "map");
    }

    #[test]
    fn substring_match_inside_words() {
        assert_eq!(suggest_keyword("Transit roadmap"), "map");
    }

    #[test]
    fn falls_back_to_first_token() {
        assert_eq!(suggest_keyword("Photos of site visit"), "photos");
        assert_eq!(suggest_keyword("Traffic-Counts (2025) spreadsheet"), "traffic-counts");
        assert_eq!(suggest_keyword("#42! notes"), "42");
    }

    #[test]
    fn fallback_is_capped() {
        let long = "a".repeat(45);
        assert_eq!(suggest_keyword(&long).len(), SUGGESTION_MAX_CHARS);
    }

    #[test]
    fn empty_input() {
        assert_eq!(suggest_keyword(""), "");
        assert_eq!(suggest_keyword("   "), "");
    }
}
