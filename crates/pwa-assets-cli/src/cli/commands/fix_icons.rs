//! `pwa-assets fix-icons` – make sure every icon is actually PNG-encoded.

use anyhow::Result;
use pwa_assets_core::catalog;
use pwa_assets_core::imaging::{self, format_name};
use std::io::Write;
use std::path::Path;

use super::{report_file_result, write_verified};

pub fn run_fix_icons<W: Write>(out: &mut W, public_dir: &Path) -> Result<()> {
    for asset in catalog::icons() {
        let path = asset.path_in(public_dir);
        let res = fix_one(out, &path);
        report_file_result(out, &path, res)?;
    }
    Ok(())
}

fn fix_one<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    let info = imaging::inspect(path)?;
    writeln!(
        out,
        "Processing {}: Format={}, Size={}",
        path.display(),
        format_name(info.format),
        info.dimensions
    )?;

    if imaging::needs_png_conversion(&info) {
        writeln!(out, "Converting {} to PNG...", path.display())?;
        imaging::convert_to_png(path)?;
        writeln!(out, "Saved {} as PNG.", path.display())?;
    }

    write_verified(out, path)
}
