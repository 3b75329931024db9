use image::imageops::FilterType;
use std::path::Path;

use super::{decode, save_png, ImageInfo};
use crate::catalog::Dimensions;
use crate::error::AssetError;

pub fn needs_resize(info: &ImageInfo, target: Dimensions) -> bool {
    info.dimensions != target
}

/// Resize the image at `path` to exactly `target` (aspect ratio is not kept)
/// and overwrite it as PNG.
pub fn resize_to(path: &Path, target: Dimensions, filter: FilterType) -> Result<(), AssetError> {
    resize_into(path, path, target, filter)
}

fn resize_into(
    src: &Path,
    dst: &Path,
    target: Dimensions,
    filter: FilterType,
) -> Result<(), AssetError> {
    let img = decode(src)?;
    let from = Dimensions::new(img.width(), img.height());
    let resized = img.resize_exact(target.width, target.height, filter);
    save_png(&resized, dst)?;
    tracing::info!(path = %dst.display(), %from, to = %target, ?filter, "resized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::inspect;
    use crate::imaging::test_support::{write_jpeg, write_png};
    use image::ImageFormat;

    #[test]
    fn matching_size_needs_no_resize() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("a.png");
        write_png(&p, 192, 192);
        let info = inspect(&p).unwrap();
        assert!(!needs_resize(&info, Dimensions::new(192, 192)));
        assert!(needs_resize(&info, Dimensions::new(512, 512)));
    }

    #[test]
    fn resize_changes_size_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("pwa-192x192.png");
        write_png(&p, 300, 100);
        resize_to(&p, Dimensions::new(192, 192), FilterType::Lanczos3).unwrap();
        let info = inspect(&p).unwrap();
        assert_eq!(info.dimensions, Dimensions::new(192, 192));
        assert_eq!(info.format, ImageFormat::Png);
    }

    #[test]
    fn resize_writes_png_even_from_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("pwa-512x512.png");
        write_jpeg(&p, 64, 64);
        resize_to(&p, Dimensions::new(128, 128), FilterType::Nearest).unwrap();
        let info = inspect(&p).unwrap();
        assert_eq!(info.format, ImageFormat::Png);
        assert_eq!(info.dimensions, Dimensions::new(128, 128));
    }

    #[test]
    fn resize_unwritable_destination_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pwa-512x512.png");
        write_png(&src, 40, 20);
        let dst = dir.path().join("out.png");
        std::fs::create_dir(&dst).unwrap();

        let err = resize_into(&src, &dst, Dimensions::new(16, 16), FilterType::Lanczos3)
            .unwrap_err();
        assert!(matches!(err, AssetError::Encode { .. }), "got {err:?}");
        assert_eq!(inspect(&src).unwrap().dimensions, Dimensions::new(40, 20));
    }

    #[test]
    fn resize_corrupt_file_reports_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("bad.png");
        std::fs::write(&p, b"\x89PNG\r\n\x1a\ntruncated").unwrap();
        let err = resize_to(&p, Dimensions::new(8, 8), FilterType::Lanczos3).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }), "got {err:?}");
    }
}
