//! `mfr pack` – assemble the archive and write it to the output directory.

use anyhow::{Context, Result};
use mfr_core::checksum;
use mfr_core::config::MfrConfig;
use mfr_core::package::{DirectoryDelivery, PackageAssembler};
use mfr_core::session::Session;
use std::path::Path;

pub async fn run_pack(
    session: &Session,
    cfg: &MfrConfig,
    out: Option<&Path>,
    overwrite: bool,
) -> Result<()> {
    let dir = match out.or(cfg.output_dir.as_deref()) {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let delivery = DirectoryDelivery::new(dir, overwrite || cfg.overwrite);
    let assembler = PackageAssembler::new(cfg.compression);

    let package = match assembler.assemble_and_deliver(session, &delivery).await {
        Ok(p) => p,
        Err(e) if e.is_validation() => {
            return Err(e).context("packet is incomplete; run `mfr preview` to see what is missing")
        }
        Err(e) => return Err(e.into()),
    };

    let path = delivery.path_for(&package.archive_name);
    let digest = checksum::sha256_path(&path)?;
    if digest != package.sha256() {
        anyhow::bail!(
            "archive on disk does not match the assembled packet: {}",
            path.display()
        );
    }
    tracing::info!(path = %path.display(), sha256 = %digest, "packet written");

    println!("Wrote {} ({} files)", path.display(), package.entries.len());
    for name in &package.entries {
        println!("  {name}");
    }
    println!("sha256 {digest}");
    Ok(())
}
