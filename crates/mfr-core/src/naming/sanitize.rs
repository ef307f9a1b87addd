//! Keyword sanitization for filename components.

/// Sanitizes an attachment keyword for use inside a filename.
///
/// - Lower-cases
/// - Drops anything outside `[a-z0-9-_]` and whitespace
/// - Turns whitespace runs into `_` and collapses consecutive underscores
/// - Trims leading/trailing underscores
pub fn sanitize_keyword(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut prev_underscore = false;

    for c in keyword.to_lowercase().chars() {
        let replacement = if c.is_whitespace() || c == '_' {
            '_'
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            c
        } else {
            continue;
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_map_example() {
        assert_eq!(sanitize_keyword("Site Map #3"), "site_map_3");
    }

    #[test]
    fn removes_disallowed_without_splitting() {
        assert_eq!(sanitize_keyword("a#b"), "ab");
        assert_eq!(sanitize_keyword("Q&A"), "qa");
        assert_eq!(sanitize_keyword("a # b"), "a_b");
    }

    #[test]
    fn collapses_underscores_and_whitespace() {
        assert_eq!(sanitize_keyword("traffic   counts__2025"), "traffic_counts_2025");
        assert_eq!(sanitize_keyword("a\tb\nc"), "a_b_c");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(sanitize_keyword("  _budget_  "), "budget");
    }

    #[test]
    fn keeps_hyphens() {
        assert_eq!(sanitize_keyword("Pre-Award Memo"), "pre-award_memo");
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(sanitize_keyword("#!?"), "");
        assert_eq!(sanitize_keyword(""), "");
    }
}
