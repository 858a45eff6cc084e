// catalog/ - Image descriptors and the startup manifest
//
// Descriptors are built once from the manifest and held for the
// session; the layout layer only ever borrows them.

mod manifest;

pub use manifest::{CatalogError, Manifest, ManifestEntry, parse_manifest};

use serde::{Deserialize, Serialize};

/// One piece in the exhibition. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: String,
    pub url: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub description: String,
    pub category: String,
}

impl ImageDescriptor {
    /// Build a descriptor from a manifest entry, filling in the
    /// gallery defaults for anything the entry leaves blank.
    pub fn from_entry(entry: &ManifestEntry) -> Self {
        let url = format!("/images/{}", entry.filename);
        Self {
            id: stable_id(&url),
            title: if entry.title.is_empty() {
                title_from_filename(&entry.filename)
            } else {
                entry.title.clone()
            },
            artist: if entry.artist.is_empty() {
                "Unknown Artist".to_owned()
            } else {
                entry.artist.clone()
            },
            year: entry.year.clone(),
            description: entry.description.clone(),
            category: if entry.category.is_empty() {
                "artwork".to_owned()
            } else {
                entry.category.clone()
            },
            url,
        }
    }
}

/// Display title derived from a filename: stem, hyphens to spaces.
pub fn title_from_filename(filename: &str) -> String {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    let stem = name.split('.').next().unwrap_or(name);
    stem.replace('-', " ")
}

/// Stable id for a url: FNV-1a digest in hex. Unique as long as urls
/// are unique, which the manifest guarantees.
pub fn stable_id(url: &str) -> String {
    format!("img-{:08x}", fnv1a(url))
}

// 32-bit FNV-1a; id generation and the classifier fallthrough share it.
pub(crate) fn fnv1a(input: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
