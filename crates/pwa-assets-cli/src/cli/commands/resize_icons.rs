//! `pwa-assets resize-icons` – enforce each icon's target dimensions.

use anyhow::Result;
use pwa_assets_core::catalog::{self, Dimensions};
use pwa_assets_core::imaging;
use pwa_assets_core::imaging::FilterType;
use std::io::Write;
use std::path::Path;

use super::{report_file_result, write_verified};

pub fn run_resize_icons<W: Write>(out: &mut W, public_dir: &Path, filter: FilterType) -> Result<()> {
    for asset in catalog::icons() {
        let Some(target) = asset.target() else {
            continue;
        };
        let path = asset.path_in(public_dir);
        let res = resize_one(out, &path, target, filter);
        report_file_result(out, &path, res)?;
    }
    Ok(())
}

fn resize_one<W: Write>(
    out: &mut W,
    path: &Path,
    target: Dimensions,
    filter: FilterType,
) -> Result<()> {
    let info = imaging::inspect(path)?;
    writeln!(
        out,
        "Processing {}: Current Size={}, Target Size={}",
        path.display(),
        info.dimensions,
        target
    )?;

    if imaging::needs_resize(&info, target) {
        writeln!(out, "Resizing {}...", path.display())?;
        imaging::resize_to(path, target, filter)?;
        writeln!(out, "Resized and saved {}.", path.display())?;
    }

    write_verified(out, path)
}
