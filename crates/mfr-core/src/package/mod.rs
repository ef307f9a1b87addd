//! Packet assembly: validate a session, write every file under its
//! canonical name into one ZIP, and hand the archive to a [`Delivery`].
//!
//! Only one assembly runs at a time per [`PackageAssembler`]. Callers see a
//! busy flag and a final result, nothing in between. The busy flag is cleared
//! on every exit path, success or failure.

mod archive;
mod delivery;
mod error;
mod guard;
mod validate;

pub use archive::{ArchiveWriter, ZipArchiveWriter};
pub use delivery::{temp_path, Delivery, DirectoryDelivery, TEMP_SUFFIX};
pub use error::{Missing, PackageError, ValidationError};
pub use validate::{validate, PackageItem, ValidatedPackage};

use anyhow::Context;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::checksum;
use crate::config::ArchiveCompression;
use crate::session::Session;
use guard::BusyGuard;

/// A finished archive.
#[derive(Debug, Clone)]
pub struct Package {
    /// Suggested filename, e.g. `meeting_files_09-17-2025.zip`.
    pub archive_name: String,
    /// Entry names in archive order.
    pub entries: Vec<String>,
    pub bytes: Vec<u8>,
}

impl Package {
    /// SHA-256 of the archive bytes as lowercase hex.
    pub fn sha256(&self) -> String {
        checksum::sha256_bytes(&self.bytes)
    }
}

/// Builds packets from sessions, one at a time.
#[derive(Debug, Default)]
pub struct PackageAssembler {
    busy: AtomicBool,
    compression: ArchiveCompression,
}

impl PackageAssembler {
    pub fn new(compression: ArchiveCompression) -> Self {
        Self {
            busy: AtomicBool::new(false),
            compression,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Validates `session` and builds its archive without delivering it.
    pub async fn assemble(&self, session: &Session) -> Result<Package, PackageError> {
        let _busy = BusyGuard::acquire(&self.busy)?;
        self.build(session).await
    }

    /// Validates, builds, and delivers. Nothing is delivered on any failure.
    pub async fn assemble_and_deliver<D>(
        &self,
        session: &Session,
        delivery: &D,
    ) -> Result<Package, PackageError>
    where
        D: Delivery + ?Sized,
    {
        let _busy = BusyGuard::acquire(&self.busy)?;
        let package = self.build(session).await?;
        delivery
            .deliver(&package.archive_name, &package.bytes)
            .map_err(PackageError::unknown)?;
        Ok(package)
    }

    async fn build(&self, session: &Session) -> Result<Package, PackageError> {
        let validated = validate(session)?;
        tracing::info!(
            archive = %validated.archive_name,
            files = validated.items.len(),
            "assembling packet"
        );

        let compression = self.compression;
        let package = tokio::task::spawn_blocking(move || write_archive(validated, compression))
            .await
            .map_err(PackageError::unknown)?
            .map_err(|e| {
                tracing::error!("packet assembly failed: {:#}", e);
                PackageError::unknown(e)
            })?;

        tracing::info!(
            archive = %package.archive_name,
            bytes = package.bytes.len(),
            "packet assembled"
        );
        Ok(package)
    }
}

/// Writes every validated item into a fresh archive.
fn write_archive(
    validated: ValidatedPackage,
    compression: ArchiveCompression,
) -> anyhow::Result<Package> {
    let mut writer = ZipArchiveWriter::new(compression);
    let mut entries = Vec::with_capacity(validated.items.len());
    for item in validated.items {
        let mut reader = item
            .blob
            .open()
            .with_context(|| format!("failed to open {}", item.blob.name()))?;
        let n = writer
            .add_file(&item.canonical, &mut reader)
            .with_context(|| format!("failed to add {} as {}", item.blob.name(), item.canonical))?;
        tracing::debug!(from = %item.blob.name(), to = %item.canonical, bytes = n, "archived");
        entries.push(item.canonical);
    }
    let bytes = writer.finish().context("failed to finish archive")?;
    Ok(Package {
        archive_name: validated.archive_name,
        entries,
        bytes,
    })
}
