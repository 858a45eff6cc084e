// heuristic.rs - Filename-based classification
//
// Pattern match on the name; anything unrecognized lands on a stable
// digest of the name, so repeated calls always agree.

use std::path::Path;

use super::{ArtCategory, Classifier, ClassifyError};
use crate::catalog::fnv1a;

// Checked in this order; the first hit wins.
const PAINTING_HINTS: &[&str] = &["paint", "art", "canvas"];
const DIGITAL_HINTS: &[&str] = &["digital", "render", "pixel"];
const SCULPTURE_HINTS: &[&str] = &["sculpt", "statue", "model"];

pub struct HeuristicClassifier;

impl Classifier for HeuristicClassifier {
    fn classify(&self, path: &Path) -> Result<ArtCategory, ClassifyError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        Ok(categorize(name))
    }
}

/// Classify by filename alone. Accepts a bare name or a full url;
/// only the last path segment is looked at, so directory names never
/// leak into the match. Total: always returns a category.
pub fn categorize(name: &str) -> ArtCategory {
    let name = name.rsplit('/').next().unwrap_or(name).to_lowercase();

    if PAINTING_HINTS.iter().any(|hint| name.contains(hint)) {
        return ArtCategory::Painting;
    }
    if DIGITAL_HINTS.iter().any(|hint| name.contains(hint)) {
        return ArtCategory::DigitalArt;
    }
    if SCULPTURE_HINTS.iter().any(|hint| name.contains(hint)) {
        return ArtCategory::Sculpture;
    }

    // No hint matched: spread deterministically across the categories.
    ArtCategory::ALL[fnv1a(&name) as usize % ArtCategory::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_obvious_hints() {
        assert_eq!(categorize("oil-painting.jpg"), ArtCategory::Painting);
        assert_eq!(categorize("Pixel-Scape.png"), ArtCategory::DigitalArt);
        assert_eq!(categorize("marble-statue.webp"), ArtCategory::Sculpture);
        assert_eq!(categorize("wire-model.png"), ArtCategory::Sculpture);
        assert_eq!(categorize("model-of-venus.webp"), ArtCategory::Sculpture);
    }

    #[test]
    fn urls_match_on_the_basename_only() {
        // The directory name must not contribute hints: a nested file
        // classifies exactly like its bare name, hash fallthrough
        // included.
        assert_eq!(
            categorize("/images/paintings/wave.jpg"),
            categorize("wave.jpg")
        );
        assert_eq!(
            categorize("/images/paintings/zzz-0417.jpg"),
            categorize("zzz-0417.jpg")
        );
        assert_eq!(
            categorize("/images/prints/render-farm.png"),
            ArtCategory::DigitalArt
        );
    }

    #[test]
    fn painting_hints_win_ties() {
        // "digital-art" carries both hints; painting is checked first.
        assert_eq!(categorize("digital-art.png"), ArtCategory::Painting);
    }

    #[test]
    fn unrecognized_names_classify_deterministically() {
        let first = categorize("zzz-0417.jpg");
        let second = categorize("zzz-0417.jpg");
        assert_eq!(first, second);
    }

    #[test]
    fn classifier_trait_uses_the_basename() {
        let by_trait = HeuristicClassifier
            .classify(Path::new("/some/dir/bronze-statue.jpg"))
            .unwrap();
        assert_eq!(by_trait, ArtCategory::Sculpture);
    }
}
