//! The optional `showroom.json` manifest at the root of a portfolio folder.
//!
//! Everything in it is optional; a missing manifest yields defaults and the
//! scan fills in the rest from the folder itself. A manifest that exists but
//! does not parse is a real error — silently ignoring a typo'd file would be
//! worse than refusing it.

use crate::content::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Manifest file name, looked up in the portfolio root.
pub const MANIFEST_FILE: &str = "showroom.json";

/// One animated statistic on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSpec {
    pub label: String,
    pub value: u64,
}

/// One testimonial slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

/// Per-image overrides, keyed by the image's path relative to the portfolio
/// root (forward slashes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOverride {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// The manifest as written by the studio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub studio: String,
    pub tagline: String,
    pub stats: Vec<StatSpec>,
    pub marquee: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub images: HashMap<String, ImageOverride>,
}

impl Manifest {
    /// Loads the manifest from `root`, or defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self, ContentError> {
        let path = root.join(MANIFEST_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ContentError::Io { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| ContentError::Manifest { path, source })
    }

    /// Override lookup by root-relative path.
    pub fn image_override(&self, relative: &str) -> Option<&ImageOverride> {
        self.images.get(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_manifest_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_partial_manifest_parses() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "studio": "North Light Studio",
                "stats": [{ "label": "Shoots", "value": 340 }],
                "images": {
                    "weddings/dawn.jpg": { "caption": "Dawn at the pier" }
                }
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.studio, "North Light Studio");
        assert_eq!(manifest.tagline, "");
        assert_eq!(manifest.stats.len(), 1);
        assert_eq!(
            manifest
                .image_override("weddings/dawn.jpg")
                .and_then(|o| o.caption.as_deref()),
            Some("Dawn at the pier")
        );
        assert!(manifest.image_override("unknown.jpg").is_none());
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = Manifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Manifest { .. }));
    }
}
