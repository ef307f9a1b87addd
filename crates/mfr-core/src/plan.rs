//! Rename plan: the old-name → new-name preview for a session.

use serde::Serialize;

use crate::session::Session;

/// Which slot an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum EntryRole {
    Primary,
    /// 1-based position in the attachment sequence.
    Attachment { position: usize },
}

/// One file in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub original: String,
    pub canonical: String,
    #[serde(flatten)]
    pub role: EntryRole,
}

/// Ordered preview: agenda first, then attachments in sequence order. Only
/// slots that currently yield a name are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    entries: Vec<RenameEntry>,
}

impl RenamePlan {
    pub fn build(session: &Session) -> Self {
        let mut entries = Vec::with_capacity(session.attachments().len() + 1);

        if let (Some(file), Some(canonical)) =
            (session.primary().file(), session.primary_canonical_name())
        {
            entries.push(RenameEntry {
                original: file.name().to_string(),
                canonical,
                role: EntryRole::Primary,
            });
        }

        for (index, slot) in session.attachments().iter().enumerate() {
            if let (Some(file), Some(canonical)) =
                (slot.file(), session.attachment_canonical_name(index))
            {
                entries.push(RenameEntry {
                    original: file.name().to_string(),
                    canonical,
                    role: EntryRole::Attachment { position: index + 1 },
                });
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn attachment_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.role, EntryRole::Attachment { .. }))
            .count()
    }
}
