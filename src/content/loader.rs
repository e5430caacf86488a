//! Async thumbnail decoding for gallery tiles.
//!
//! Tiles defer their pixels until they scroll into view; the decode and
//! downscale then run on a blocking task and come back as a ready-to-draw
//! image handle. Failures degrade the one tile, never the gallery.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Longest edge of a decoded tile thumbnail.
pub const THUMBNAIL_SIZE: u32 = 512;

/// Decodes and downscales one thumbnail off the UI thread.
pub async fn load_thumbnail(path: PathBuf) -> Result<Handle, String> {
    tokio::task::spawn_blocking(move || decode_thumbnail(&path))
        .await
        .map_err(|e| format!("thumbnail task failed: {e}"))?
}

fn decode_thumbnail(path: &Path) -> Result<Handle, String> {
    let img = image::open(path)
        .map_err(|e| format!("cannot decode {}: {e}", path.display()))?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
