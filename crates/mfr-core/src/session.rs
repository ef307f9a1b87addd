//! Editing session: meeting selection, agenda slot, ordered attachment slots.
//!
//! Every mutation goes through [`Session`] so the slot invariants hold:
//! the attachment sequence is never empty, a new slot can only be added once
//! the last one is complete, and the agenda title always matches the current
//! description. Derived names are never stored; [`Session::rename_plan`]
//! recomputes them from the current inputs on each call.

use thiserror::Error;

use crate::blob::FileBlob;
use crate::catalog::{DESCRIPTION_MAX_CHARS, KEYWORD_MAX_CHARS};
use crate::identifier::{derive_title, DerivedTitle};
use crate::meeting::MeetingContext;
use crate::naming::{compose_filename, sanitize_keyword, FileRole};
use crate::plan::RenamePlan;

/// A rejected session mutation. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("description is {len} characters; the limit is {max}")]
    DescriptionTooLong { len: usize, max: usize },
    #[error("keyword is {len} characters; the limit is {max}")]
    KeywordTooLong { len: usize, max: usize },
    #[error("attachment {} needs a file and a keyword before another can be added", .index + 1)]
    LastAttachmentIncomplete { index: usize },
    #[error("the last remaining attachment slot cannot be removed")]
    CannotRemoveLastSlot,
    #[error("no attachment {} (there are {len})", .index + 1)]
    NoSuchAttachment { index: usize, len: usize },
}

/// The agenda summary slot.
#[derive(Debug, Clone, Default)]
pub struct DocumentSlot {
    file: Option<FileBlob>,
    description: String,
    derived: DerivedTitle,
}

impl DocumentSlot {
    pub fn file(&self) -> Option<&FileBlob> {
        self.file.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn derived(&self) -> &DerivedTitle {
        &self.derived
    }

    pub fn title(&self) -> &str {
        &self.derived.title
    }

    pub fn truncated(&self) -> bool {
        self.derived.truncated
    }
}

/// One supporting file slot.
#[derive(Debug, Clone, Default)]
pub struct AttachmentSlot {
    file: Option<FileBlob>,
    keyword: String,
}

impl AttachmentSlot {
    pub fn file(&self) -> Option<&FileBlob> {
        self.file.as_ref()
    }

    /// Keyword as typed.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Keyword as it appears in the filename.
    pub fn sanitized_keyword(&self) -> String {
        sanitize_keyword(&self.keyword)
    }

    /// Has a file and a keyword that survives sanitization.
    pub fn is_complete(&self) -> bool {
        self.file.is_some() && !self.sanitized_keyword().is_empty()
    }

    /// Has neither a file nor any keyword text.
    pub fn is_blank(&self) -> bool {
        self.file.is_none() && self.keyword.trim().is_empty()
    }
}

/// All user input for one packet.
#[derive(Debug, Clone)]
pub struct Session {
    meeting: MeetingContext,
    primary: DocumentSlot,
    attachments: Vec<AttachmentSlot>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MeetingContext::default())
    }
}

impl Session {
    /// Empty session for `meeting`, with one blank attachment slot.
    pub fn new(meeting: MeetingContext) -> Self {
        Self {
            meeting,
            primary: DocumentSlot::default(),
            attachments: vec![AttachmentSlot::default()],
        }
    }

    pub fn meeting(&self) -> &MeetingContext {
        &self.meeting
    }

    pub fn set_meeting(&mut self, meeting: MeetingContext) {
        self.meeting = meeting;
    }

    pub fn primary(&self) -> &DocumentSlot {
        &self.primary
    }

    /// Selects, replaces, or clears the agenda file.
    pub fn set_primary_file(&mut self, file: Option<FileBlob>) {
        self.primary.file = file;
    }

    /// Updates the agenda description and recomputes its title.
    pub fn set_description(&mut self, description: &str) -> Result<&DerivedTitle, SessionError> {
        let len = description.chars().count();
        if len > DESCRIPTION_MAX_CHARS {
            return Err(SessionError::DescriptionTooLong {
                len,
                max: DESCRIPTION_MAX_CHARS,
            });
        }
        self.primary.description = description.to_string();
        self.primary.derived = derive_title(description);
        tracing::trace!(
            title = %self.primary.derived.title,
            truncated = self.primary.derived.truncated,
            "agenda title recomputed"
        );
        Ok(&self.primary.derived)
    }

    pub fn attachments(&self) -> &[AttachmentSlot] {
        &self.attachments
    }

    /// Appends a blank attachment slot and returns its index.
    ///
    /// Refused while the current last slot is incomplete.
    pub fn add_attachment(&mut self) -> Result<usize, SessionError> {
        let last = self.attachments.len() - 1;
        if !self.attachments[last].is_complete() {
            return Err(SessionError::LastAttachmentIncomplete { index: last });
        }
        self.attachments.push(AttachmentSlot::default());
        Ok(self.attachments.len() - 1)
    }

    /// Removes the slot at `index`. Refused when it is the only slot.
    pub fn remove_attachment(&mut self, index: usize) -> Result<AttachmentSlot, SessionError> {
        self.check_index(index)?;
        if self.attachments.len() == 1 {
            return Err(SessionError::CannotRemoveLastSlot);
        }
        Ok(self.attachments.remove(index))
    }

    /// Moves the slot at `from` to `to`, shifting the slots in between.
    pub fn move_attachment(&mut self, from: usize, to: usize) -> Result<(), SessionError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let slot = self.attachments.remove(from);
        self.attachments.insert(to, slot);
        Ok(())
    }

    pub fn set_attachment_file(
        &mut self,
        index: usize,
        file: Option<FileBlob>,
    ) -> Result<(), SessionError> {
        self.check_index(index)?;
        self.attachments[index].file = file;
        Ok(())
    }

    pub fn set_attachment_keyword(&mut self, index: usize, keyword: &str) -> Result<(), SessionError> {
        self.check_index(index)?;
        let len = keyword.chars().count();
        if len > KEYWORD_MAX_CHARS {
            return Err(SessionError::KeywordTooLong {
                len,
                max: KEYWORD_MAX_CHARS,
            });
        }
        self.attachments[index].keyword = keyword.to_string();
        Ok(())
    }

    /// Fills the trailing blank slot, or adds a new one, with `file` and
    /// `keyword`. Returns the slot index.
    pub fn attach(&mut self, file: FileBlob, keyword: &str) -> Result<usize, SessionError> {
        let last = self.attachments.len() - 1;
        let index = if self.attachments[last].is_blank() {
            last
        } else {
            self.add_attachment()?
        };
        if let Err(e) = self.set_attachment_keyword(index, keyword) {
            if index != last {
                self.attachments.pop();
            }
            return Err(e);
        }
        self.attachments[index].file = Some(file);
        Ok(index)
    }

    /// Canonical name of the agenda file, if it has a file and a title.
    pub fn primary_canonical_name(&self) -> Option<String> {
        let file = self.primary.file.as_ref()?;
        if self.primary.derived.is_empty() {
            return None;
        }
        Some(compose_filename(
            FileRole::Primary,
            &self.meeting,
            self.primary.title(),
            file.name(),
        ))
    }

    /// Canonical name of the attachment at `index`, if it has a file and a
    /// usable keyword.
    pub fn attachment_canonical_name(&self, index: usize) -> Option<String> {
        let slot = self.attachments.get(index)?;
        let file = slot.file.as_ref()?;
        let keyword = slot.sanitized_keyword();
        if keyword.is_empty() {
            return None;
        }
        Some(compose_filename(
            FileRole::Attachment {
                position: index + 1,
                keyword: &keyword,
            },
            &self.meeting,
            self.primary.title(),
            file.name(),
        ))
    }

    /// Current old-name → new-name preview.
    pub fn rename_plan(&self) -> RenamePlan {
        RenamePlan::build(self)
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index >= self.attachments.len() {
            return Err(SessionError::NoSuchAttachment {
                index,
                len: self.attachments.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> FileBlob {
        FileBlob::from_bytes(name, b"%PDF".to_vec())
    }

    #[test]
    fn new_session_has_one_blank_attachment() {
        let s = Session::default();
        assert_eq!(s.attachments().len(), 1);
        assert!(s.attachments()[0].is_blank());
        assert!(s.primary().file().is_none());
        assert_eq!(s.primary().title(), "");
    }

    #[test]
    fn description_recomputes_title() {
        let mut s = Session::default();
        let d = s
            .set_description("Regional Grant Application for Transportation")
            .unwrap()
            .clone();
        assert_eq!(d.title, "regional_grant");
        assert!(d.truncated);
        s.set_description("Budget Overview").unwrap();
        assert_eq!(s.primary().title(), "budget_overview");
        assert!(!s.primary().truncated());
        s.set_description("").unwrap();
        assert_eq!(s.primary().title(), "");
        assert!(!s.primary().truncated());
    }

    #[test]
    fn description_limit() {
        let mut s = Session::default();
        s.set_description("Budget").unwrap();
        let long = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            s.set_description(&long),
            Err(SessionError::DescriptionTooLong { len: 51, max: 50 })
        );
        assert_eq!(s.primary().description(), "Budget");
        assert!(s.set_description(&"x".repeat(DESCRIPTION_MAX_CHARS)).is_ok());
    }

    #[test]
    fn keyword_limit() {
        let mut s = Session::default();
        let long = "k".repeat(KEYWORD_MAX_CHARS + 1);
        assert!(matches!(
            s.set_attachment_keyword(0, &long),
            Err(SessionError::KeywordTooLong { .. })
        ));
        assert_eq!(s.attachments()[0].keyword(), "");

        let exact = "k".repeat(KEYWORD_MAX_CHARS);
        s.set_attachment_keyword(0, &exact).unwrap();
        assert_eq!(s.attachments()[0].keyword(), exact);
    }

    #[test]
    fn add_is_gated_on_complete_last_slot() {
        let mut s = Session::default();
        assert_eq!(
            s.add_attachment(),
            Err(SessionError::LastAttachmentIncomplete { index: 0 })
        );
        s.set_attachment_file(0, Some(pdf("map.pdf"))).unwrap();
        assert!(s.add_attachment().is_err(), "keyword still missing");
        s.set_attachment_keyword(0, "###").unwrap();
        assert!(s.add_attachment().is_err(), "keyword sanitizes to nothing");
        s.set_attachment_keyword(0, "Map").unwrap();
        assert_eq!(s.add_attachment(), Ok(1));
        assert_eq!(s.attachments().len(), 2);
    }

    #[test]
    fn remove_keeps_at_least_one_slot() {
        let mut s = Session::default();
        assert_eq!(s.remove_attachment(0).unwrap_err(), SessionError::CannotRemoveLastSlot);
        s.attach(pdf("a.pdf"), "a").unwrap();
        s.attach(pdf("b.pdf"), "b").unwrap();
        let removed = s.remove_attachment(0).unwrap();
        assert_eq!(removed.keyword(), "a");
        assert_eq!(s.attachments().len(), 1);
        assert_eq!(s.attachments()[0].keyword(), "b");
        assert!(matches!(
            s.remove_attachment(3),
            Err(SessionError::NoSuchAttachment { index: 3, len: 1 })
        ));
    }

    #[test]
    fn attach_fills_blank_slot_first() {
        let mut s = Session::default();
        assert_eq!(s.attach(pdf("a.pdf"), "alpha").unwrap(), 0);
        assert_eq!(s.attach(pdf("b.pdf"), "beta").unwrap(), 1);
        assert_eq!(s.attachments().len(), 2);
    }

    #[test]
    fn attach_rolls_back_on_bad_keyword() {
        let mut s = Session::default();
        s.attach(pdf("a.pdf"), "alpha").unwrap();
        assert!(s.attach(pdf("b.pdf"), &"z".repeat(40)).is_err());
        assert_eq!(s.attachments().len(), 1);
    }

    #[test]
    fn move_renumbers() {
        let mut s = Session::default();
        s.set_primary_file(Some(pdf("agenda.pdf")));
        s.set_description("Budget").unwrap();
        s.attach(pdf("a.pdf"), "first").unwrap();
        s.attach(pdf("b.pdf"), "second").unwrap();
        s.attach(pdf("c.pdf"), "third").unwrap();

        s.move_attachment(2, 0).unwrap();
        let keywords: Vec<&str> = s.attachments().iter().map(|a| a.keyword()).collect();
        assert_eq!(keywords, ["third", "first", "second"]);
        assert_eq!(
            s.attachment_canonical_name(0).as_deref(),
            Some("ATT1_09-17-2025_budget_third.pdf")
        );
        assert_eq!(
            s.attachment_canonical_name(2).as_deref(),
            Some("ATT3_09-17-2025_budget_second.pdf")
        );
        assert!(s.move_attachment(0, 3).is_err());
    }

    #[test]
    fn primary_name_needs_file_and_title() {
        let mut s = Session::default();
        s.set_description("Budget Overview").unwrap();
        assert_eq!(s.primary_canonical_name(), None);
        s.set_primary_file(Some(pdf("budget.pdf")));
        assert_eq!(
            s.primary_canonical_name().as_deref(),
            Some("AS_09-17-2025_budget_overview.pdf")
        );
        s.set_description("the of and").unwrap();
        assert_eq!(s.primary_canonical_name(), None);
    }

    #[test]
    fn meeting_change_is_reflected_immediately() {
        let mut s = Session::default();
        s.set_primary_file(Some(pdf("budget.pdf")));
        s.set_description("Budget Overview").unwrap();
        s.set_meeting(s.meeting().with_date("02-11-2026").unwrap());
        assert_eq!(
            s.primary_canonical_name().as_deref(),
            Some("AS_02-11-2026_budget_overview.pdf")
        );
    }
}
