//! Packet manifest: a TOML description of one meeting's files.
//!
//! ```toml
//! meeting_type = "CAECD Board of Managers"
//! date = "09-17-2025"
//!
//! [agenda]
//! file = "agenda.pdf"
//! description = "Budget Overview"
//!
//! [[attachments]]
//! file = "maps/site.pdf"
//! keyword = "Site Map #3"
//! ```
//!
//! Relative paths resolve against the manifest's directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::blob::FileBlob;
use crate::catalog::MEETING_TYPES;
use crate::meeting::MeetingContext;
use crate::naming::sanitize_keyword;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketManifest {
    /// Falls back to the configured default, then the first listed type.
    #[serde(default)]
    pub meeting_type: Option<String>,
    pub date: String,
    pub agenda: AgendaEntry,
    #[serde(default)]
    pub attachments: Vec<AttachmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    pub file: PathBuf,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentEntry {
    pub file: PathBuf,
    pub keyword: String,
}

impl PacketManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("invalid manifest {}", path.display()))
    }

    /// Builds a session, resolving relative file paths against `base_dir`.
    /// Every referenced file must exist.
    pub fn into_session(self, base_dir: &Path, default_meeting_type: Option<&str>) -> Result<Session> {
        let meeting_type = self
            .meeting_type
            .as_deref()
            .or(default_meeting_type)
            .unwrap_or(MEETING_TYPES[0]);
        let meeting = MeetingContext::new(meeting_type, &self.date)?;
        let mut session = Session::new(meeting);

        let agenda_path = resolve(base_dir, &self.agenda.file);
        session.set_primary_file(Some(existing_blob(&agenda_path, "agenda")?));
        session
            .set_description(&self.agenda.description)
            .context("agenda description")?;

        for (i, att) in self.attachments.into_iter().enumerate() {
            let path = resolve(base_dir, &att.file);
            let blob = existing_blob(&path, "attachment")?;
            if sanitize_keyword(&att.keyword).is_empty() {
                anyhow::bail!(
                    "attachment {}: keyword {:?} has no letters or digits to name the file with",
                    i + 1,
                    att.keyword
                );
            }
            session
                .attach(blob, &att.keyword)
                .with_context(|| format!("attachment {}", i + 1))?;
        }

        Ok(session)
    }
}

fn resolve(base_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base_dir.join(file)
    }
}

fn existing_blob(path: &Path, what: &str) -> Result<FileBlob> {
    if !path.is_file() {
        anyhow::bail!("{what} file not found: {}", path.display());
    }
    FileBlob::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        date = "10-15-2025"

        [agenda]
        file = "agenda.pdf"
        description = "Regional Grant Application for Transportation"

        [[attachments]]
        file = "maps/site.pdf"
        keyword = "Site Map #3"

        [[attachments]]
        file = "budget.docx"
        keyword = "Budget"
    "#;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("maps")).unwrap();
        fs::write(dir.path().join("agenda.pdf"), b"agenda").unwrap();
        fs::write(dir.path().join("maps/site.pdf"), b"map").unwrap();
        fs::write(dir.path().join("budget.docx"), b"budget").unwrap();
        dir
    }

    #[test]
    fn parses_sample() {
        let m: PacketManifest = toml::from_str(SAMPLE).unwrap();
        assert!(m.meeting_type.is_none());
        assert_eq!(m.date, "10-15-2025");
        assert_eq!(m.attachments.len(), 2);
        assert_eq!(m.attachments[0].keyword, "Site Map #3");
    }

    #[test]
    fn attachments_default_to_empty() {
        let m: PacketManifest = toml::from_str(
            r#"
            date = "09-17-2025"
            [agenda]
            file = "a.pdf"
            description = "Budget"
            "#,
        )
        .unwrap();
        assert!(m.attachments.is_empty());
    }

    #[test]
    fn builds_session_with_resolved_paths() {
        let dir = fixture_dir();
        let manifest_path = dir.path().join("packet.toml");
        fs::write(&manifest_path, SAMPLE).unwrap();

        let session = PacketManifest::load(&manifest_path)
            .unwrap()
            .into_session(dir.path(), Some("CAPCOG Executive Committee"))
            .unwrap();
        assert_eq!(session.meeting().meeting_type(), "CAPCOG Executive Committee");
        assert_eq!(session.meeting().date(), "10-15-2025");
        assert_eq!(session.primary().title(), "regional_grant");
        assert!(session.primary().truncated());

        let plan = session.rename_plan();
        let names: Vec<&str> = plan.entries().iter().map(|e| e.canonical.as_str()).collect();
        assert_eq!(
            names,
            [
                "AS_10-15-2025_regional_grant.pdf",
                "ATT1_10-15-2025_regional_grant_site_map_3.pdf",
                "ATT2_10-15-2025_regional_grant_budget.docx",
            ]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let m: PacketManifest = toml::from_str(SAMPLE).unwrap();
        let err = m.into_session(dir.path(), None).unwrap_err();
        assert!(format!("{err:#}").contains("agenda file not found"));
    }

    #[test]
    fn unknown_date_is_reported() {
        let dir = fixture_dir();
        let mut m: PacketManifest = toml::from_str(SAMPLE).unwrap();
        m.date = "13-45-2025".into();
        let err = m.into_session(dir.path(), None).unwrap_err();
        assert!(format!("{err:#}").contains("unknown meeting date"));
    }

    #[test]
    fn overlong_keyword_is_reported_with_position() {
        let dir = fixture_dir();
        let mut m: PacketManifest = toml::from_str(SAMPLE).unwrap();
        m.attachments[1].keyword = "k".repeat(31);
        let err = m.into_session(dir.path(), None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("attachment 2"), "{msg}");
        assert!(msg.contains("limit is 30"), "{msg}");
    }

    #[test]
    fn unusable_keyword_is_reported_with_position() {
        let dir = fixture_dir();
        let mut m: PacketManifest = toml::from_str(SAMPLE).unwrap();
        m.attachments[0].keyword = "###".into();
        let err = m.into_session(dir.path(), None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("attachment 1"), "{msg}");
        assert!(msg.contains("\"###\""), "{msg}");
        assert!(!msg.contains("before another can be added"), "{msg}");
    }
}
