//! The fixed table of PWA assets and the sizes the web-app manifest declares for them.

use std::fmt;
use std::path::{Path, PathBuf};

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Home-screen / install icon. Its size is enforced.
    Icon,
    /// Store-style screenshot. Its size is only reported.
    Screenshot,
}

/// One entry of the built-in asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAsset {
    /// File name inside the public directory.
    pub file_name: &'static str,
    pub kind: AssetKind,
    /// `sizes` as declared in the web-app manifest.
    pub manifest_size: Dimensions,
}

impl KnownAsset {
    /// Size the resize operation enforces; `None` for screenshots.
    pub fn target(&self) -> Option<Dimensions> {
        match self.kind {
            AssetKind::Icon => Some(self.manifest_size),
            AssetKind::Screenshot => None,
        }
    }

    pub fn path_in(&self, public_dir: &Path) -> PathBuf {
        public_dir.join(self.file_name)
    }
}

pub const ASSETS: &[KnownAsset] = &[
    KnownAsset {
        file_name: "pwa-192x192.png",
        kind: AssetKind::Icon,
        manifest_size: Dimensions::new(192, 192),
    },
    KnownAsset {
        file_name: "pwa-512x512.png",
        kind: AssetKind::Icon,
        manifest_size: Dimensions::new(512, 512),
    },
    KnownAsset {
        file_name: "screenshot-desktop.png",
        kind: AssetKind::Screenshot,
        manifest_size: Dimensions::new(1024, 1024),
    },
    KnownAsset {
        file_name: "screenshot-mobile.png",
        kind: AssetKind::Screenshot,
        manifest_size: Dimensions::new(625, 718),
    },
];

/// All assets in table order.
pub fn all() -> impl Iterator<Item = &'static KnownAsset> {
    ASSETS.iter()
}

/// Icons only, in table order.
pub fn icons() -> impl Iterator<Item = &'static KnownAsset> {
    ASSETS.iter().filter(|a| a.kind == AssetKind::Icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_the_two_pwa_pngs_in_order() {
        let names: Vec<_> = icons().map(|a| a.file_name).collect();
        assert_eq!(names, ["pwa-192x192.png", "pwa-512x512.png"]);
    }

    #[test]
    fn all_lists_icons_then_screenshots() {
        let names: Vec<_> = all().map(|a| a.file_name).collect();
        assert_eq!(
            names,
            [
                "pwa-192x192.png",
                "pwa-512x512.png",
                "screenshot-desktop.png",
                "screenshot-mobile.png",
            ]
        );
    }

    #[test]
    fn only_icons_have_targets() {
        for asset in all() {
            match asset.kind {
                AssetKind::Icon => assert_eq!(asset.target(), Some(asset.manifest_size)),
                AssetKind::Screenshot => assert!(asset.target().is_none()),
            }
        }
        assert_eq!(ASSETS[1].target(), Some(Dimensions::new(512, 512)));
    }

    #[test]
    fn path_in_joins_public_dir() {
        let p = ASSETS[0].path_in(Path::new("public"));
        assert_eq!(p, Path::new("public").join("pwa-192x192.png"));
    }

    #[test]
    fn dimensions_display() {
        assert_eq!(Dimensions::new(625, 718).to_string(), "625x718");
        assert_eq!(Dimensions::from((3, 4)), Dimensions::new(3, 4));
    }
}
