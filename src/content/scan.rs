//! Walks a portfolio folder and cooks its contents into `SiteContent`.

use crate::content::manifest::Manifest;
use crate::content::{ContentError, SiteContent};
use crate::state::gallery::GalleryItem;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raster formats the gallery accepts.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Category assigned to images sitting directly in the portfolio root.
const DEFAULT_CATEGORY: &str = "general";

/// Scans `root` and merges manifest overrides. Items come back sorted by
/// relative path, which is the gallery's document order for the lifetime of
/// the app.
pub fn scan_portfolio(root: &Path) -> Result<SiteContent, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let manifest = Manifest::load(root)?;

    let mut found: Vec<(String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || !is_image(path) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        found.push((relative_key(relative), path.to_path_buf()));
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));

    let items = found
        .into_iter()
        .map(|(key, path)| {
            let meta = manifest.image_override(&key);
            let category = meta
                .and_then(|o| o.category.clone())
                .unwrap_or_else(|| category_from_key(&key));
            let caption = meta
                .and_then(|o| o.caption.clone())
                .unwrap_or_else(|| caption_from_path(&path));
            GalleryItem::new(category, path.to_string_lossy().into_owned(), caption)
        })
        .collect::<Vec<_>>();

    let studio = if manifest.studio.is_empty() {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Showroom".to_string())
    } else {
        manifest.studio
    };

    log::info!(
        "scanned {}: {} images, {} testimonials",
        root.display(),
        items.len(),
        manifest.testimonials.len()
    );

    Ok(SiteContent {
        studio,
        tagline: manifest.tagline,
        stats: manifest.stats,
        marquee: manifest.marquee,
        testimonials: manifest.testimonials,
        items,
    })
}

/// Async wrapper: runs the scan on a blocking task so the UI thread never
/// waits on the filesystem.
pub async fn scan_portfolio_async(root: PathBuf) -> Result<SiteContent, String> {
    tokio::task::spawn_blocking(move || scan_portfolio(&root).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("scan task failed: {e}"))?
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Root-relative path with forward slashes, the manifest's key form.
fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// First path component of a nested image, `general` otherwise.
fn category_from_key(key: &str) -> String {
    match key.split_once('/') {
        Some((first, _)) => first.to_string(),
        None => DEFAULT_CATEGORY.to_string(),
    }
}

/// Prettified file stem: `sunset-beach_01.jpg` becomes `Sunset Beach 01`.
fn caption_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::manifest::MANIFEST_FILE;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"not really pixels").unwrap();
    }

    #[test]
    fn test_scan_collects_images_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("weddings/dawn.jpg"));
        touch(&dir.path().join("portraits/ada.png"));
        touch(&dir.path().join("cover.webp"));
        touch(&dir.path().join("notes.txt"));

        let content = scan_portfolio(dir.path()).unwrap();
        let categories: Vec<&str> = content.items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["general", "portraits", "weddings"]);
        assert_eq!(content.items.len(), 3);
    }

    #[test]
    fn test_captions_are_prettified_stems() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("weddings/sunset-beach_01.jpg"));

        let content = scan_portfolio(dir.path()).unwrap();
        assert_eq!(content.items[0].caption, "Sunset Beach 01");
    }

    #[test]
    fn test_manifest_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("weddings/dawn.jpg"));
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "studio": "North Light",
                "images": {
                    "weddings/dawn.jpg": { "category": "featured", "caption": "Dawn" }
                }
            }"#,
        )
        .unwrap();

        let content = scan_portfolio(dir.path()).unwrap();
        assert_eq!(content.studio, "North Light");
        assert_eq!(content.items[0].category, "featured");
        assert_eq!(content.items[0].caption, "Dawn");
    }

    #[test]
    fn test_studio_falls_back_to_folder_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("atelier");
        touch(&root.join("one.jpg"));

        let content = scan_portfolio(&root).unwrap();
        assert_eq!(content.studio, "atelier");
    }

    #[test]
    fn test_scan_of_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = scan_portfolio(&missing).unwrap_err();
        assert!(matches!(err, ContentError::NotADirectory { .. }));
    }
}
