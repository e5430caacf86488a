//! Portfolio content: the folder scan, the optional manifest, and async
//! thumbnail loading.

pub mod loader;
pub mod manifest;
pub mod scan;

use crate::state::gallery::GalleryItem;
use self::manifest::{StatSpec, Testimonial};
use std::path::PathBuf;

/// Everything a portfolio folder contributes to the app, cooked and ready
/// for the state layer.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub studio: String,
    pub tagline: String,
    pub stats: Vec<StatSpec>,
    pub marquee: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub items: Vec<GalleryItem>,
}

/// Failures while loading a portfolio folder.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
}
