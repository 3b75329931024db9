//! `pwa-assets check-dims` – print the size of every known asset.

use anyhow::Result;
use pwa_assets_core::catalog;
use pwa_assets_core::imaging;
use std::io::Write;
use std::path::Path;

pub fn run_check_dims<W: Write>(out: &mut W, public_dir: &Path) -> Result<()> {
    for asset in catalog::all() {
        let path = asset.path_in(public_dir);
        match imaging::inspect(&path) {
            Ok(info) if info.dimensions != asset.manifest_size => writeln!(
                out,
                "{}: {} (manifest declares {})",
                path.display(),
                info.dimensions,
                asset.manifest_size
            )?,
            Ok(info) => writeln!(out, "{}: {}", path.display(), info.dimensions)?,
            Err(e) if e.is_not_found() => writeln!(out, "{}: Not found", path.display())?,
            Err(e) => {
                tracing::warn!(path = %path.display(), "inspect failed: {}", e);
                writeln!(out, "{}: Error {}", path.display(), e)?
            }
        }
    }
    Ok(())
}
