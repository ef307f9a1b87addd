//! Packet inputs shared by `preview` and `pack`: a manifest or individual flags.

use anyhow::{Context, Result};
use clap::Args;
use mfr_core::config::MfrConfig;
use mfr_core::manifest::{AgendaEntry, AttachmentEntry, PacketManifest};
use mfr_core::session::Session;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct PacketArgs {
    /// TOML packet manifest (instead of --type/--date/--agenda/--description/--attach).
    #[arg(
        long,
        short,
        value_name = "FILE",
        conflicts_with_all = ["meeting_type", "date", "agenda", "description", "attach"]
    )]
    pub manifest: Option<PathBuf>,

    /// Meeting type (default: config default_meeting_type, else the first listed type).
    #[arg(long = "type", value_name = "TYPE")]
    pub meeting_type: Option<String>,

    /// Meeting date as listed by `mfr meetings`.
    #[arg(long, value_name = "MM-DD-YYYY")]
    pub date: Option<String>,

    /// Agenda summary file.
    #[arg(long, value_name = "FILE")]
    pub agenda: Option<PathBuf>,

    /// Agenda description the title is derived from (up to 50 characters).
    #[arg(long, short, default_value = "")]
    pub description: String,

    /// Attachment as KEYWORD=FILE, in packet order. Repeatable; a packet needs at least one.
    #[arg(long, value_name = "KEYWORD=FILE", value_parser = parse_attachment)]
    pub attach: Vec<AttachmentEntry>,
}

impl PacketArgs {
    /// Builds the session described by the manifest or the flags.
    pub fn into_session(self, cfg: &MfrConfig) -> Result<Session> {
        let default_type = cfg.default_meeting_type.as_deref();

        if let Some(path) = self.manifest {
            let base_dir = manifest_dir(&path);
            tracing::debug!(manifest = %path.display(), "loading packet manifest");
            return PacketManifest::load(&path)?.into_session(&base_dir, default_type);
        }

        let manifest = PacketManifest {
            meeting_type: self.meeting_type,
            date: self
                .date
                .context("--date is required unless --manifest is given")?,
            agenda: AgendaEntry {
                file: self
                    .agenda
                    .context("--agenda is required unless --manifest is given")?,
                description: self.description,
            },
            attachments: self.attach,
        };
        let cwd = std::env::current_dir()?;
        manifest.into_session(&cwd, default_type)
    }
}

fn manifest_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Parses `KEYWORD=FILE`, splitting at the first `=`.
pub(crate) fn parse_attachment(s: &str) -> Result<AttachmentEntry, String> {
    let (keyword, file) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEYWORD=FILE, got {s:?}"))?;
    if keyword.trim().is_empty() {
        return Err(format!("missing keyword in {s:?}"));
    }
    if file.is_empty() {
        return Err(format!("missing file in {s:?}"));
    }
    Ok(AttachmentEntry {
        file: PathBuf::from(file),
        keyword: keyword.to_string(),
    })
}
