// model.rs - ONNX-backed classification
//
// A small CNN over 256x256 RGB with three style scores out. Pixels are
// normalized to [0, 1], batch of one, NHWC as the converted model
// expects. Every failure surfaces as an error; the caller decides
// whether to fall back.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use ndarray::Array4;
use ort::session::Session;
use ort::value::Value;

use super::{ArtCategory, Classifier, ClassifyError};

const INPUT_SIZE: u32 = 256;

pub struct ModelBackedClassifier {
    model_path: PathBuf,
}

impl ModelBackedClassifier {
    /// Classifier over the model shipped next to the crate.
    pub fn new() -> Self {
        Self {
            model_path: Path::new(env!("CARGO_MANIFEST_DIR")).join("models/art_classifier.onnx"),
        }
    }

    pub fn with_model(model_path: PathBuf) -> Self {
        Self { model_path }
    }
}

impl Classifier for ModelBackedClassifier {
    fn classify(&self, path: &Path) -> Result<ArtCategory, ClassifyError> {
        if !self.model_path.exists() {
            return Err(ClassifyError::ModelMissing(self.model_path.clone()));
        }

        let mut session = Session::builder()?.commit_from_file(&self.model_path)?;

        let img = image::open(path)?;
        let rgb = img
            .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Lanczos3)
            .to_rgb8();

        let mut input = Array4::<f32>::zeros((1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3));
        for (x, y, p) in rgb.enumerate_pixels() {
            for c in 0..3 {
                input[[0, y as usize, x as usize, c]] = p[c] as f32 / 255.0;
            }
        }

        let input_val = Value::from_array(input)?;
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input_1".into());
        let outputs = session.run(ort::inputs![input_name => input_val])?;
        let scores = outputs[0].try_extract_array::<f32>()?;

        let flat: Vec<f32> = scores.iter().copied().collect();
        if flat.len() < ArtCategory::ALL.len() {
            return Err(ClassifyError::BadOutput);
        }

        let mut best = 0;
        for (i, &score) in flat.iter().take(ArtCategory::ALL.len()).enumerate() {
            if score > flat[best] {
                best = i;
            }
        }

        log::debug!(
            "model scores for {}: {:?}",
            path.display(),
            &flat[..ArtCategory::ALL.len()]
        );
        Ok(ArtCategory::ALL[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_is_an_error_not_a_panic() {
        let classifier = ModelBackedClassifier::with_model(PathBuf::from("/nonexistent.onnx"));
        let result = classifier.classify(Path::new("whatever.jpg"));
        assert!(matches!(result, Err(ClassifyError::ModelMissing(_))));
    }
}
