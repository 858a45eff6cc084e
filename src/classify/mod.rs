// classify/ - Artwork style classification
//
// Two classifiers behind one trait: an ONNX model (native only, may be
// missing or broken) and a filename heuristic that always answers.
// Callers try the model first and fall back on any error.

mod heuristic;
#[cfg(not(target_arch = "wasm32"))]
mod model;

pub use heuristic::{HeuristicClassifier, categorize};
#[cfg(not(target_arch = "wasm32"))]
pub use model::ModelBackedClassifier;

use std::path::Path;

use thiserror::Error;

/// Styles the exhibition distinguishes, in alphabetical order — the
/// model's output scores follow the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtCategory {
    DigitalArt,
    Painting,
    Sculpture,
}

impl ArtCategory {
    pub const ALL: [ArtCategory; 3] = [
        ArtCategory::DigitalArt,
        ArtCategory::Painting,
        ArtCategory::Sculpture,
    ];

    /// Manifest category token.
    pub fn slug(self) -> &'static str {
        match self {
            ArtCategory::DigitalArt => "digital_art",
            ArtCategory::Painting => "painting",
            ArtCategory::Sculpture => "sculpture",
        }
    }

    /// Label shown on the frame plaque.
    pub fn label(self) -> &'static str {
        match self {
            ArtCategory::DigitalArt => "Digital Art",
            ArtCategory::Painting => "Painting",
            ArtCategory::Sculpture => "Sculpture",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("model not found at {0}")]
    ModelMissing(std::path::PathBuf),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("inference failed: {0}")]
    Inference(#[from] ort::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("unexpected model output shape")]
    BadOutput,
}

/// Something that can name the style of an image file.
pub trait Classifier {
    fn classify(&self, path: &Path) -> Result<ArtCategory, ClassifyError>;
}

/// Model first, filename heuristic on any failure. The heuristic is
/// total, so this always produces a category.
#[cfg(not(target_arch = "wasm32"))]
pub fn classify_with_fallback(model: &ModelBackedClassifier, path: &Path) -> ArtCategory {
    match model.classify(path) {
        Ok(category) => category,
        Err(err) => {
            log::warn!(
                "model classification failed for {}: {err}; using heuristic",
                path.display()
            );
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            categorize(name)
        }
    }
}
