//! Canonical filename composition.
//!
//! Builds the on-disk name for a packet file from the meeting date, the
//! agenda title, the file's role, and its original extension:
//!
//! - agenda summary: `AS_<date>_<title>.<ext>`
//! - attachment N: `ATT<N>_<date>_<title>_<keyword>.<ext>`
//!
//! Attachment names always carry the agenda title between the date and the
//! keyword. When the original name has no extension the canonical name has
//! no trailing dot either.

mod extension;
mod sanitize;

pub use extension::extension_of;
pub use sanitize::sanitize_keyword;

use crate::meeting::MeetingContext;

/// Prefix for the agenda summary document.
pub const PRIMARY_PREFIX: &str = "AS";

/// Prefix for attachments, followed by the 1-based position.
pub const ATTACHMENT_PREFIX: &str = "ATT";

/// What a file is within a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole<'a> {
    /// The agenda summary.
    Primary,
    /// Supporting file at 1-based `position` with an already-sanitized keyword.
    Attachment { position: usize, keyword: &'a str },
}

/// Composes the canonical filename for a file.
///
/// Pure: the result depends only on the arguments.
///
/// # Examples
///
/// - `Primary`, date `09-17-2025`, title `budget_overview`, `budget.pdf`
///   → `AS_09-17-2025_budget_overview.pdf`
/// - `Attachment { position: 2, keyword: "site_map_3" }`, same meeting,
///   title `budget_overview`, `map.pdf`
///   → `ATT2_09-17-2025_budget_overview_site_map_3.pdf`
pub fn compose_filename(
    role: FileRole<'_>,
    meeting: &MeetingContext,
    title: &str,
    original_name: &str,
) -> String {
    let stem = match role {
        FileRole::Primary => format!("{PRIMARY_PREFIX}_{}_{title}", meeting.date()),
        FileRole::Attachment { position, keyword } => {
            debug_assert!(position >= 1, "attachment positions are 1-based");
            format!(
                "{ATTACHMENT_PREFIX}{position}_{}_{title}_{keyword}",
                meeting.date()
            )
        }
    };

    match extension_of(original_name) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}
