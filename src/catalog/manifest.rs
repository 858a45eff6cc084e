// manifest.rs - images-list.json read side
//
// The manifest is produced offline by genmanifest and fetched by the
// client at startup; parsing it yields the session's descriptors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ImageDescriptor;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest io: {0}")]
    Io(#[from] std::io::Error),
}

/// One scanned file, as written by genmanifest. Everything but the
/// filename is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub generated: String,
    pub count: usize,
    pub images: Vec<ManifestEntry>,
}

/// Parse a manifest and build descriptors for every entry, in
/// manifest order.
pub fn parse_manifest(json: &str) -> Result<Vec<ImageDescriptor>, CatalogError> {
    let manifest: Manifest = serde_json::from_str(json)?;
    Ok(manifest
        .images
        .iter()
        .map(ImageDescriptor::from_entry)
        .collect())
}
