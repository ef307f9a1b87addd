//! Handing a finished archive to the user.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Receives the finished archive bytes under a suggested filename.
pub trait Delivery {
    fn deliver(&self, archive_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes the archive into a directory: `<dir>/<name>.part` first, then
/// publishes it as `<dir>/<name>`.
///
/// With `overwrite` the temp file is renamed over any existing archive.
/// Without it the temp file is hard-linked into place, which fails if the
/// name was taken after the up-front existence check, so an archive created
/// concurrently is never replaced.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            dir: dir.into(),
            overwrite,
        }
    }

    /// Where an archive named `archive_name` ends up.
    pub fn path_for(&self, archive_name: &str) -> PathBuf {
        self.dir.join(archive_name)
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&self, archive_name: &str, bytes: &[u8]) -> Result<()> {
        let final_path = self.path_for(archive_name);
        if !self.overwrite && final_path.exists() {
            anyhow::bail!(
                "{} already exists; pass --overwrite or set overwrite = true in config",
                final_path.display()
            );
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output dir {}", self.dir.display()))?;

        let tmp = temp_path(&final_path);
        if let Err(e) = write_synced(&tmp, bytes) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        let published = publish(&tmp, &final_path, self.overwrite);
        let _ = std::fs::remove_file(&tmp);
        published?;
        tracing::info!(path = %final_path.display(), bytes = bytes.len(), "archive delivered");
        Ok(())
    }
}

/// Path for the temp file: appends `.part` to the final path (e.g. `a.zip` → `a.zip.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Moves `tmp` to `final_path`. Without `overwrite` an existing
/// `final_path` is an error and is left untouched. `tmp` may remain and is
/// the caller's to remove.
fn publish(tmp: &Path, final_path: &Path, overwrite: bool) -> Result<()> {
    if overwrite {
        return std::fs::rename(tmp, final_path).with_context(|| {
            format!("failed to rename {} to {}", tmp.display(), final_path.display())
        });
    }
    match std::fs::hard_link(tmp, final_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => anyhow::bail!(
            "{} already exists; pass --overwrite or set overwrite = true in config",
            final_path.display()
        ),
        Err(e) => Err(anyhow::Error::new(e).context(format!(
            "failed to link {} to {}",
            tmp.display(),
            final_path.display()
        ))),
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut f = File::create(path)
        .with_context(|| format!("failed to create temp file: {}", path.display()))?;
    f.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    f.sync_all().context("archive sync failed")?;
    Ok(())
}
