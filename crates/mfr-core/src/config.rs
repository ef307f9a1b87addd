use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::MEETING_TYPES;

/// Compression used for archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveCompression {
    Stored,
    #[default]
    Deflated,
}

/// Global configuration loaded from `~/.config/mfr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MfrConfig {
    /// Directory archives are written to when `--out` is not given
    /// (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Archive compression: "deflated" (default) or "stored".
    #[serde(default)]
    pub compression: ArchiveCompression,
    /// Replace an existing archive with the same name instead of failing.
    #[serde(default)]
    pub overwrite: bool,
    /// Meeting type preselected when the command line does not name one.
    #[serde(default)]
    pub default_meeting_type: Option<String>,
}

/// `$XDG_CONFIG_HOME/mfr/config.toml`, creating the directory if needed.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mfr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Loads the user's config, writing the defaults on first run.
pub fn load_or_init() -> Result<MfrConfig> {
    load_from(&config_path()?)
}

/// Loads `path`, or writes and returns the defaults when it does not exist.
pub fn load_from(path: &Path) -> Result<MfrConfig> {
    if !path.exists() {
        let cfg = MfrConfig::default();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(&cfg)?)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote default config");
        return Ok(cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: MfrConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.check()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

impl MfrConfig {
    /// A configured default meeting type must be one of the listed types.
    fn check(&self) -> Result<()> {
        if let Some(t) = self.default_meeting_type.as_deref() {
            if !MEETING_TYPES.contains(&t) {
                anyhow::bail!("default_meeting_type {t:?} is not a listed meeting type");
            }
        }
        Ok(())
    }
}
