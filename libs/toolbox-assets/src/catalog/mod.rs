//! # Asset Catalog
//!
//! The fixed set of pre-made assets and where they live.
//!
//! ## Example
//!
//! ```rust
//! use toolbox_assets::Asset;
//!
//! assert_eq!(
//!     Asset::Logo.url("https://assets.example.com/blender/"),
//!     "https://assets.example.com/blender/logo.blend"
//! );
//! ```


use std::fmt;

/// A pre-made asset file in the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Brand logo, placed on a selected face.
    Logo,
    /// Ear components.
    Ears,
    /// NRH lock components.
    LockNrh,
    /// GB/T A2 reference head, scaled to the wearer.
    ReferenceHeadA2,
    /// Eye hole cutter, mirrored across X.
    EyeHole,
}

impl Asset {
    /// Every asset in the catalog.
    pub const ALL: [Asset; 5] = [
        Asset::Logo,
        Asset::Ears,
        Asset::LockNrh,
        Asset::ReferenceHeadA2,
        Asset::EyeHole,
    ];

    /// File name inside the bucket.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Logo => "logo.blend",
            Asset::Ears => "ears.blend",
            Asset::LockNrh => "lock_nrh.blend",
            Asset::ReferenceHeadA2 => "ref_head_a2.blend",
            Asset::EyeHole => "eye_hole.blend",
        }
    }

    /// Full URL under `bucket`; a trailing slash on the bucket is ignored.
    #[must_use]
    pub fn url(self, bucket: &str) -> String {
        format!("{}/{}", bucket.trim_end_matches('/'), self.file_name())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
