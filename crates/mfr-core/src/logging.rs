//! Tracing setup for the `mfr` binary.
//!
//! Events go to `$XDG_STATE_HOME/mfr/mfr.log` (appended, no ANSI). If that
//! file cannot be opened the CLI calls [`init_logging_stderr`] instead.
//! `RUST_LOG` overrides [`DEFAULT_FILTER`] in both cases.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,mfr=debug,mfr_core=debug";

const LOG_FILE: &str = "mfr.log";

/// `$XDG_STATE_HOME/mfr/mfr.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mfr")?;
    Ok(xdg_dirs.get_state_home().join("mfr").join(LOG_FILE))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the file subscriber. Errors leave no subscriber installed.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}

/// Installs a stderr subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
