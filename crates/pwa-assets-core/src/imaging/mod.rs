//! Image inspection and in-place rewriting.
//!
//! Formats are detected from file content rather than the extension, so an
//! icon named `.png` that is really a JPEG is reported (and converted) as such.
//! Rewrites go straight to the original path.

mod convert;
mod inspect;
mod resize;

pub use convert::{convert_to_png, needs_png_conversion};
pub use inspect::{format_name, inspect, ImageInfo};
pub use resize::{needs_resize, resize_to};

pub use image::imageops::FilterType;
pub use image::ImageFormat;

use crate::error::AssetError;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open `path` with its format guessed from content (extension as fallback).
fn open_guessed(path: &Path) -> Result<ImageReader<BufReader<File>>, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    let io_err = |source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)
}

/// Fully decode the image at `path`.
fn decode(path: &Path) -> Result<DynamicImage, AssetError> {
    let reader = open_guessed(path)?;
    if reader.format().is_none() {
        return Err(AssetError::UnknownFormat(path.to_path_buf()));
    }
    reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `img` encoded as PNG.
fn save_png(img: &DynamicImage, path: &Path) -> Result<(), AssetError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
    use std::path::Path;

    pub fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    /// JPEG bytes under whatever name `path` has (typically `*.png`).
    pub fn write_jpeg(path: &Path, width: u32, height: u32) {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200, 40, 40]),
        ));
        img.save_with_format(path, ImageFormat::Jpeg).unwrap();
    }
}
