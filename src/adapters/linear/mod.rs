//! Linear adapter: Implementation of `Classifier` for exported linear models.
//!
//! The training pipeline exports each fitted logistic-regression model as a
//! JSON artifact holding its column layout, coefficients, intercept, optional
//! standard-scaler statistics and decision threshold.
//!
//! # Integrity
//!
//! - Every parameter vector must have one entry per column
//! - The SHA-256 digest of the artifact is logged on load so a deployment can
//!   be traced back to the exact file it used
//! - Column names are checked against the encoder layout by the caller
//!   (see [`crate::ports::ensure_layout`])

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{ClassifierError, PredictionLabel};
use crate::ports::Classifier;

/// Model parameters as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    pub name: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler_mean: Option<Vec<f64>>,
    #[serde(default)]
    pub scaler_scale: Option<Vec<f64>>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

fn sha256_hex_bytes(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Logistic-regression classifier backed by an exported artifact.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    model: ExportedLinearModel,
    source: Option<PathBuf>,
    digest: Option<String>,
}

impl LinearClassifier {
    /// Load and validate a model artifact from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or its
    /// parameters are inconsistent.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let bytes = std::fs::read(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: ExportedLinearModel = serde_json::from_slice(&bytes)
            .map_err(|e| ClassifierError::InvalidModel(format!("{}: {e}", path.display())))?;

        let mut classifier = Self::from_model(model)?;
        let digest = sha256_hex_bytes(&bytes);

        tracing::info!(
            "Loaded model '{}' from {:?} (n_features={}, threshold={}, sha256={})",
            classifier.model.name,
            path,
            classifier.model.feature_names.len(),
            classifier.model.threshold,
            digest
        );

        classifier.source = Some(path.to_path_buf());
        classifier.digest = Some(digest);
        Ok(classifier)
    }

    /// Build a classifier from in-memory parameters.
    ///
    /// # Errors
    /// Returns `ClassifierError::InvalidModel` if the parameters are inconsistent.
    pub fn from_model(model: ExportedLinearModel) -> Result<Self, ClassifierError> {
        Self::validate(&model)?;
        Ok(Self {
            model,
            source: None,
            digest: None,
        })
    }

    fn validate(model: &ExportedLinearModel) -> Result<(), ClassifierError> {
        let n = model.feature_names.len();
        if n == 0 {
            return Err(ClassifierError::InvalidModel(format!(
                "model '{}' declares no features",
                model.name
            )));
        }
        if model.coefficients.len() != n {
            return Err(ClassifierError::InvalidModel(format!(
                "model '{}' has {} coefficients for {n} features",
                model.name,
                model.coefficients.len()
            )));
        }

        match (&model.scaler_mean, &model.scaler_scale) {
            (None, None) => {}
            (Some(mean), Some(scale)) => {
                if mean.len() != n || scale.len() != n {
                    return Err(ClassifierError::InvalidModel(format!(
                        "model '{}' scaler lengths do not match feature count {n}",
                        model.name
                    )));
                }
                if scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                    return Err(ClassifierError::InvalidModel(format!(
                        "model '{}' scaler_scale must be finite and non-zero",
                        model.name
                    )));
                }
            }
            _ => {
                return Err(ClassifierError::InvalidModel(format!(
                    "model '{}' must set both scaler_mean and scaler_scale or neither",
                    model.name
                )));
            }
        }

        if !(model.threshold > 0.0 && model.threshold < 1.0) {
            return Err(ClassifierError::InvalidModel(format!(
                "model '{}' threshold {} must lie in (0, 1)",
                model.name, model.threshold
            )));
        }

        Ok(())
    }

    /// Path the model was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// SHA-256 hex digest of the loaded artifact, if loaded from disk.
    #[must_use]
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Positive-class probability for a feature vector of the right shape.
    fn probability(&self, features: &[f64]) -> f64 {
        let m = &self.model;
        let mut z = m.intercept;
        for (i, (x, coef)) in features.iter().zip(&m.coefficients).enumerate() {
            let x = match (&m.scaler_mean, &m.scaler_scale) {
                (Some(mean), Some(scale)) => (x - mean[i]) / scale[i],
                _ => *x,
            };
            z += coef * x;
        }
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LinearClassifier {
    fn name(&self) -> &str {
        &self.model.name
    }

    fn feature_names(&self) -> &[String] {
        &self.model.feature_names
    }

    fn predict(&self, features: &[f64]) -> Result<PredictionLabel, ClassifierError> {
        let expected = self.model.feature_names.len();
        if features.len() != expected {
            return Err(ClassifierError::ShapeMismatch {
                got: features.len(),
                expected,
            });
        }

        let raw = u8::from(self.probability(features) >= self.model.threshold);
        PredictionLabel::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DETECTION_FEATURE_NAMES, RISK_FEATURE_NAMES};
    use crate::ports::ensure_layout;
    use tempfile::tempdir;

    fn single_feature_model(intercept: f64) -> ExportedLinearModel {
        ExportedLinearModel {
            name: "unit".into(),
            feature_names: vec!["x".into()],
            coefficients: vec![1.0],
            intercept,
            scaler_mean: None,
            scaler_scale: None,
            threshold: 0.5,
        }
    }

    #[test]
    fn test_predict_respects_threshold() {
        let clf = LinearClassifier::from_model(single_feature_model(0.0)).expect("valid model");
        assert_eq!(clf.predict(&[2.0]).expect("predict"), PredictionLabel::Positive);
        assert_eq!(clf.predict(&[-2.0]).expect("predict"), PredictionLabel::Negative);
        // sigmoid(0) == 0.5 sits on the threshold and counts as positive
        assert_eq!(clf.predict(&[0.0]).expect("predict"), PredictionLabel::Positive);
    }

    #[test]
    fn test_predict_applies_scaler() {
        let mut model = single_feature_model(0.0);
        model.scaler_mean = Some(vec![100.0]);
        model.scaler_scale = Some(vec![10.0]);
        let clf = LinearClassifier::from_model(model).expect("valid model");
        assert_eq!(clf.predict(&[90.0]).expect("predict"), PredictionLabel::Negative);
        assert_eq!(clf.predict(&[110.0]).expect("predict"), PredictionLabel::Positive);
    }

    #[test]
    fn test_predict_rejects_wrong_shape() {
        let clf = LinearClassifier::from_model(single_feature_model(0.0)).expect("valid model");
        let err = clf.predict(&[1.0, 2.0]).expect_err("shape mismatch");
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch { got: 2, expected: 1 }
        ));
    }

    #[test]
    fn test_rejects_inconsistent_parameters() {
        let mut model = single_feature_model(0.0);
        model.coefficients.push(1.0);
        assert!(LinearClassifier::from_model(model).is_err());

        let mut model = single_feature_model(0.0);
        model.scaler_mean = Some(vec![0.0]);
        assert!(LinearClassifier::from_model(model).is_err());

        let mut model = single_feature_model(0.0);
        model.scaler_mean = Some(vec![0.0]);
        model.scaler_scale = Some(vec![0.0]);
        assert!(LinearClassifier::from_model(model).is_err());

        let mut model = single_feature_model(0.0);
        model.threshold = 1.0;
        assert!(LinearClassifier::from_model(model).is_err());

        let mut model = single_feature_model(0.0);
        model.feature_names.clear();
        model.coefficients.clear();
        assert!(LinearClassifier::from_model(model).is_err());
    }

    #[test]
    fn test_load_from_disk_records_digest() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("model.json");
        let json = serde_json::to_vec(&single_feature_model(-1.0)).expect("serialize");
        std::fs::write(&path, &json).expect("write model");

        let clf = LinearClassifier::load(&path).expect("load model");
        assert_eq!(clf.source(), Some(path.as_path()));
        assert_eq!(clf.digest().map(str::len), Some(64));
        assert_eq!(clf.digest(), Some(sha256_hex_bytes(&json).as_str()));
    }

    #[test]
    fn test_load_defaults_threshold() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("model.json");
        std::fs::write(
            &path,
            r#"{"name":"m","feature_names":["x"],"coefficients":[1.0],"intercept":0.0}"#,
        )
        .expect("write model");

        let clf = LinearClassifier::load(&path).expect("load model");
        assert_eq!(clf.predict(&[1.0]).expect("predict"), PredictionLabel::Positive);
    }

    #[test]
    fn test_load_missing_or_malformed_file() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            LinearClassifier::load(&missing),
            Err(ClassifierError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").expect("write");
        assert!(matches!(
            LinearClassifier::load(&bad),
            Err(ClassifierError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_bundled_models_match_encoder_layouts() {
        let detection =
            LinearClassifier::load(Path::new("models/heart_model.json")).expect("detection model");
        ensure_layout(&detection, &DETECTION_FEATURE_NAMES).expect("detection layout");

        let risk = LinearClassifier::load(Path::new("models/heart_risk_model.json"))
            .expect("risk model");
        ensure_layout(&risk, &RISK_FEATURE_NAMES).expect("risk layout");
    }

    #[test]
    fn test_reordered_columns_are_rejected() {
        let mut model = ExportedLinearModel {
            name: "risk".into(),
            feature_names: RISK_FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: vec![0.0; RISK_FEATURE_NAMES.len()],
            intercept: 0.0,
            scaler_mean: None,
            scaler_scale: None,
            threshold: 0.5,
        };
        model.feature_names.swap(7, 8);
        let clf = LinearClassifier::from_model(model).expect("self-consistent model");
        assert!(matches!(
            ensure_layout(&clf, &RISK_FEATURE_NAMES),
            Err(ClassifierError::LayoutMismatch { .. })
        ));
    }
}
