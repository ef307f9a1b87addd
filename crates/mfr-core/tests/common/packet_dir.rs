//! On-disk packet fixture: an agenda and a few attachments in a temp dir.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct PacketDir {
    pub dir: TempDir,
}

impl PacketDir {
    /// Writes `agenda.pdf`, `area.docx`, and `maps/site.pdf` with distinct bodies.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("maps")).unwrap();
        fs::write(dir.path().join("agenda.pdf"), b"%PDF agenda").unwrap();
        fs::write(dir.path().join("area.docx"), b"service area").unwrap();
        fs::write(dir.path().join("maps/site.pdf"), b"%PDF site map").unwrap();
        Self { dir }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Writes a manifest referencing the fixture files and returns its path.
    pub fn write_manifest(&self, date: &str, description: &str) -> PathBuf {
        let manifest = format!(
            r#"
meeting_type = "CAECD Board of Managers"
date = "{date}"

[agenda]
file = "agenda.pdf"
description = "{description}"

[[attachments]]
file = "area.docx"
keyword = "Service Area"

[[attachments]]
file = "maps/site.pdf"
keyword = "Site Map #3"
"#
        );
        let path = self.path("packet.toml");
        fs::write(&path, manifest).unwrap();
        path
    }
}
