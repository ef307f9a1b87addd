//! Static lookup data: meeting lists, stop words, curated keywords, limits.
//!
//! Everything here is compile-time data. Nothing is loaded or mutated at runtime.

/// Selectable meeting types, in display order.
pub const MEETING_TYPES: &[&str] = &["CAECD Board of Managers", "CAPCOG Executive Committee"];

/// Selectable meeting dates (`MM-DD-YYYY`), in display order.
pub const MEETING_DATES: &[&str] = &[
    "09-17-2025",
    "10-15-2025",
    "11-12-2025",
    "12-10-2025",
    "01-14-2026",
    "02-11-2026",
];

/// Words dropped from descriptions before building a title.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "can", "this", "that",
    "these", "those", "it", "its", "their", "there", "they", "them", "we", "us", "our", "you",
    "your", "i", "me", "my", "he", "him", "his", "she", "her", "hers",
];

/// Domain keywords offered as attachment keyword suggestions, checked in order.
pub const COMMON_KEYWORDS: &[&str] = &[
    "budget",
    "map",
    "grant",
    "contract",
    "resolution",
    "minutes",
    "agenda",
    "presentation",
    "report",
    "memo",
    "letter",
    "invoice",
    "amendment",
    "ordinance",
    "proposal",
    "schedule",
    "exhibit",
    "application",
    "summary",
    "plan",
];

/// File extensions the picker offers. Advisory only.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["doc", "docx", "pdf"];

/// Maximum characters in an agenda description.
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// Maximum characters in an attachment keyword.
pub const KEYWORD_MAX_CHARS: usize = 30;

/// Maximum characters in a derived title.
pub const TITLE_MAX_CHARS: usize = 25;

/// Maximum characters in a fallback keyword suggestion.
pub const SUGGESTION_MAX_CHARS: usize = 30;

/// Returns true if `word` (already lower-cased) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Returns true if `ext` is one of the accepted extensions (case-insensitive).
pub fn is_accepted_extension(ext: &str) -> bool {
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(ext))
}
