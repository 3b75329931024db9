//! CLI command handlers, one file per command.
//!
//! Per-file failures are printed and the walk continues; only failing to
//! write the report itself aborts a command.

mod check_dims;
mod fix_icons;
mod resize_icons;

pub use check_dims::run_check_dims;
pub use fix_icons::run_fix_icons;
pub use resize_icons::run_resize_icons;

use anyhow::Result;
use pwa_assets_core::error::AssetError;
use pwa_assets_core::imaging::{self, format_name};
use std::io::Write;
use std::path::Path;

/// Re-open `path` and print what is now on disk.
fn write_verified<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    let info = imaging::inspect(path)?;
    writeln!(
        out,
        "Verified {}: Format={}, Size={}",
        path.display(),
        format_name(info.format),
        info.dimensions
    )?;
    Ok(())
}

/// Print the outcome of one file's processing. Errors that are not asset errors
/// (i.e. the report itself could not be written) are returned.
fn report_file_result<W: Write>(out: &mut W, path: &Path, res: Result<()>) -> Result<()> {
    let Err(err) = res else {
        return Ok(());
    };
    match err.downcast_ref::<AssetError>() {
        Some(e) if e.is_not_found() => {
            writeln!(out, "File not found: {}", path.display())?;
        }
        Some(e) => {
            tracing::warn!(path = %path.display(), "processing failed: {}", e);
            writeln!(out, "Error processing {}: {}", path.display(), e)?;
        }
        None => return Err(err),
    }
    Ok(())
}
