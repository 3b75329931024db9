use image::ImageFormat;
use std::path::Path;

use super::open_guessed;
use crate::catalog::Dimensions;
use crate::error::AssetError;

/// What `inspect` learns about an image without decoding its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub dimensions: Dimensions,
}

/// Upper-case display name for a format, e.g. `PNG`, `JPEG`, `WEBP`.
pub fn format_name(format: ImageFormat) -> String {
    format!("{format:?}").to_uppercase()
}

/// Detect the format and read the dimensions from the image header.
pub fn inspect(path: &Path) -> Result<ImageInfo, AssetError> {
    let reader = open_guessed(path)?;
    let format = reader
        .format()
        .ok_or_else(|| AssetError::UnknownFormat(path.to_path_buf()))?;
    let dimensions = reader
        .into_dimensions()
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let info = ImageInfo {
        format,
        dimensions: dimensions.into(),
    };
    tracing::debug!(
        path = %path.display(),
        format = %format_name(format),
        size = %info.dimensions,
        "inspected image"
    );
    Ok(info)
}
