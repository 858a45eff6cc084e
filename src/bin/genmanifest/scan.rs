// scan.rs - Recursive image discovery
//
// Walks the directory tree and derives a manifest entry per image
// file: title from the basename, category from the containing
// subdirectory, stable ordering by path.

use std::path::Path;

use walkdir::WalkDir;

use exhibition_engine::catalog::{ManifestEntry, title_from_filename};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif"];

/// Collect manifest entries for every image file under `root`.
pub fn scan_images(root: &Path) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for item in walker.filter_map(Result::ok) {
        if !item.file_type().is_file() {
            continue;
        }
        let Some(ext) = item.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            continue;
        }
        let Ok(rel) = item.path().strip_prefix(root) else {
            continue;
        };

        let filename = rel.to_string_lossy().replace('\\', "/");

        // The containing subdirectory names the category; files at the
        // root fall back to the generic one.
        let category = rel
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|| "artwork".to_owned());

        log::debug!("found {filename}");
        entries.push(ManifestEntry {
            title: title_from_filename(&filename),
            category,
            filename,
            ..ManifestEntry::default()
        });
    }

    entries
}
