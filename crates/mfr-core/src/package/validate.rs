//! Completeness checks run before any archive work starts.

use crate::blob::FileBlob;
use crate::session::Session;

use super::error::{Missing, ValidationError};

/// One file to write: its bytes and the name it gets in the archive.
#[derive(Debug, Clone)]
pub struct PackageItem {
    pub canonical: String,
    pub blob: FileBlob,
}

/// A session that passed validation, frozen into the items to archive.
#[derive(Debug, Clone)]
pub struct ValidatedPackage {
    pub archive_name: String,
    pub items: Vec<PackageItem>,
}

/// Checks that the agenda has a file and a title and that every attachment
/// has a file and a keyword, then resolves canonical names in archive order.
///
/// The session always holds at least one attachment slot, so a packet
/// always carries at least one attachment.
pub fn validate(session: &Session) -> Result<ValidatedPackage, ValidationError> {
    let primary = session.primary();
    let primary_file = primary.file().ok_or(ValidationError::MissingPrimaryFile)?;
    let primary_name = session
        .primary_canonical_name()
        .ok_or(ValidationError::MissingPrimaryTitle)?;

    let mut items = vec![PackageItem {
        canonical: primary_name,
        blob: primary_file.clone(),
    }];

    for (index, slot) in session.attachments().iter().enumerate() {
        let position = index + 1;
        let has_keyword = !slot.sanitized_keyword().is_empty();
        let (file, canonical) = match (slot.file(), has_keyword) {
            (Some(file), true) => {
                let canonical = session.attachment_canonical_name(index).ok_or(
                    ValidationError::IncompleteAttachment {
                        position,
                        missing: Missing::Keyword,
                    },
                )?;
                (file, canonical)
            }
            (Some(_), false) => {
                return Err(ValidationError::IncompleteAttachment {
                    position,
                    missing: Missing::Keyword,
                })
            }
            (None, true) => {
                return Err(ValidationError::IncompleteAttachment {
                    position,
                    missing: Missing::File,
                })
            }
            (None, false) => {
                return Err(ValidationError::IncompleteAttachment {
                    position,
                    missing: Missing::FileAndKeyword,
                })
            }
        };
        items.push(PackageItem {
            canonical,
            blob: file.clone(),
        });
    }

    for item in &items {
        if !item.blob.is_accepted_type() {
            tracing::warn!(
                file = %item.blob.name(),
                "file type is not one of doc/docx/pdf; packaging it anyway"
            );
        }
    }

    Ok(ValidatedPackage {
        archive_name: session.meeting().archive_name(),
        items,
    })
}
