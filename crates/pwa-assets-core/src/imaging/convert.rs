use image::ImageFormat;
use std::path::Path;

use super::{decode, save_png, ImageInfo};
use crate::error::AssetError;

/// True when the detected format is anything other than PNG.
pub fn needs_png_conversion(info: &ImageInfo) -> bool {
    info.format != ImageFormat::Png
}

/// Re-encode the image at `path` as PNG, overwriting it.
pub fn convert_to_png(path: &Path) -> Result<(), AssetError> {
    convert_into(path, path)
}

fn convert_into(src: &Path, dst: &Path) -> Result<(), AssetError> {
    let img = decode(src)?;
    save_png(&img, dst)?;
    tracing::info!(path = %dst.display(), "converted to PNG");
    Ok(())
}
