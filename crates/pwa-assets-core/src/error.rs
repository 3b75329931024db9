//! Per-file errors for asset operations.
//!
//! Callers report these per file and keep going; only `NotFound` is
//! rendered differently from the rest. Display text leaves the path out
//! because every report line already starts with it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset file does not exist.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("read failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither the content nor the extension identify a supported format.
    #[error("unrecognized image format")]
    UnknownFormat(PathBuf),

    #[error("decode failed: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG encode failed: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}
