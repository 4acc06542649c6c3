//! Prediction service: Orchestrates one assessment request.
//!
//! Each request runs synchronously:
//! 1. Encode form answers into the classifier's column layout
//! 2. Ask the classifier for a label
//! 3. Select the static recommendation content for that label
//!
//! Neither the answers nor the predicted label are logged.

use std::sync::Arc;

use crate::adapters::LinearClassifier;
use crate::config::AppConfig;
use crate::domain::{
    encode_detection_features, encode_risk_features, Assessment, DetectionInput, Outcome,
    RiskInput, DETECTION_FEATURE_NAMES, RISK_FEATURE_NAMES,
};
use crate::ports::{ensure_layout, Classifier};
use crate::{HeartwiseError, Result};

/// Service running detection and risk assessments.
///
/// Both classifiers are loaded once and shared read-only for the lifetime of
/// the process. Construction checks that each classifier was trained on the
/// column layout its encoder produces.
#[derive(Clone)]
pub struct PredictionService {
    detection: Arc<dyn Classifier>,
    risk: Arc<dyn Classifier>,
}

impl PredictionService {
    /// Create a service from already-loaded classifiers.
    ///
    /// # Errors
    /// Returns `ClassifierError::LayoutMismatch` if either classifier expects a
    /// different column layout than its encoder produces.
    pub fn new(detection: Arc<dyn Classifier>, risk: Arc<dyn Classifier>) -> Result<Self> {
        ensure_layout(detection.as_ref(), &DETECTION_FEATURE_NAMES)?;
        ensure_layout(risk.as_ref(), &RISK_FEATURE_NAMES)?;
        Ok(Self { detection, risk })
    }

    /// Load both model artifacts named by the configuration.
    ///
    /// # Errors
    /// Returns error if either artifact cannot be loaded or has the wrong layout.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        tracing::info!("Loading classifiers...");
        for (path, var) in [
            (&config.detection_model, "HEARTWISE_DETECTION_MODEL"),
            (&config.risk_model, "HEARTWISE_RISK_MODEL"),
        ] {
            if !path.is_file() {
                return Err(HeartwiseError::Config(format!(
                    "Model artifact not found at {path:?}. Set {var} or HEARTWISE_MODEL_DIR."
                )));
            }
        }

        let detection = LinearClassifier::load(&config.detection_model)?;
        let risk = LinearClassifier::load(&config.risk_model)?;
        Self::new(Arc::new(detection), Arc::new(risk))
    }

    /// Name of the detection model.
    #[must_use]
    pub fn detection_model(&self) -> &str {
        self.detection.name()
    }

    /// Name of the risk model.
    #[must_use]
    pub fn risk_model(&self) -> &str {
        self.risk.name()
    }

    /// Check whether the user currently shows signs of heart disease.
    ///
    /// # Errors
    /// Returns error if the classifier rejects the vector or returns an invalid label.
    pub fn assess_detection(&self, input: &DetectionInput) -> Result<Outcome> {
        tracing::debug!("Running detection assessment ({})", self.detection.name());
        let features = encode_detection_features(input);
        let label = self.detection.predict(features.as_slice())?;
        Ok(Outcome::for_label(Assessment::Detection, label))
    }

    /// Estimate the user's lifestyle-based risk of developing heart disease.
    ///
    /// # Errors
    /// Returns error if the classifier rejects the vector or returns an invalid label.
    pub fn assess_risk(&self, input: &RiskInput) -> Result<Outcome> {
        tracing::debug!("Running risk assessment ({})", self.risk.name());
        let features = encode_risk_features(input).to_array();
        let label = self.risk.predict(&features)?;
        Ok(Outcome::for_label(Assessment::Risk, label))
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("detection", &self.detection.name())
            .field("risk", &self.risk.name())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{
        ChestPainType, ClassifierError, DietQuality, PredictionLabel, RestingEcg, Sex, StSlope,
        StressLevel,
    };
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Classifier returning a fixed label and recording what it was given.
    pub(crate) struct StubClassifier {
        name: String,
        columns: Vec<String>,
        label: PredictionLabel,
        pub seen: Mutex<Vec<Vec<f64>>>,
    }

    impl StubClassifier {
        pub(crate) fn new(name: &str, columns: &[&str], label: PredictionLabel) -> Self {
            Self {
                name: name.to_string(),
                columns: columns.iter().map(|c| (*c).to_string()).collect(),
                label,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Classifier for StubClassifier {
        fn name(&self) -> &str {
            &self.name
        }

        fn feature_names(&self) -> &[String] {
            &self.columns
        }

        fn predict(
            &self,
            features: &[f64],
        ) -> std::result::Result<PredictionLabel, ClassifierError> {
            if features.len() != self.columns.len() {
                return Err(ClassifierError::ShapeMismatch {
                    got: features.len(),
                    expected: self.columns.len(),
                });
            }
            self.seen
                .lock()
                .expect("stub lock")
                .push(features.to_vec());
            Ok(self.label)
        }
    }

    pub(crate) fn stub_service(
        detection: PredictionLabel,
        risk: PredictionLabel,
    ) -> PredictionService {
        PredictionService::new(
            Arc::new(StubClassifier::new("detect", &DETECTION_FEATURE_NAMES, detection)),
            Arc::new(StubClassifier::new("risk", &RISK_FEATURE_NAMES, risk)),
        )
        .expect("stub layouts match")
    }

    fn reference_detection() -> DetectionInput {
        DetectionInput {
            age: 45,
            sex: Sex::Male,
            resting_bp: 130,
            cholesterol: 250,
            fasting_blood_sugar_high: false,
            max_heart_rate: 170,
            exercise_angina: false,
            oldpeak: 1.5,
            chest_pain_type: ChestPainType::AtypicalAngina,
            resting_ecg: RestingEcg::Normal,
            st_slope: StSlope::Up,
        }
    }

    fn reference_risk() -> RiskInput {
        RiskInput {
            age: 30,
            sex: Sex::Female,
            smoker: false,
            exercise_days_per_week: 5,
            diet_quality: DietQuality::Good,
            family_history: false,
            stress_level: StressLevel::Low,
            sleep_hours: 7,
        }
    }

    #[test]
    fn test_detection_passes_encoded_vector() {
        let stub = Arc::new(StubClassifier::new(
            "detect",
            &DETECTION_FEATURE_NAMES,
            PredictionLabel::Positive,
        ));
        let service = PredictionService::new(
            stub.clone(),
            Arc::new(StubClassifier::new("risk", &RISK_FEATURE_NAMES, PredictionLabel::Negative)),
        )
        .expect("service");

        let outcome = service
            .assess_detection(&reference_detection())
            .expect("assessment");
        assert_eq!(outcome.assessment, Assessment::Detection);
        assert!(outcome.is_positive());

        let seen = stub.seen.lock().expect("stub lock");
        assert_eq!(
            seen.as_slice(),
            &[vec![
                45.0, 1.0, 130.0, 250.0, 0.0, 170.0, 0.0, 1.5, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0
            ]]
        );
    }

    #[test]
    fn test_risk_passes_encoded_vector() {
        let stub = Arc::new(StubClassifier::new(
            "risk",
            &RISK_FEATURE_NAMES,
            PredictionLabel::Negative,
        ));
        let service = PredictionService::new(
            Arc::new(StubClassifier::new(
                "detect",
                &DETECTION_FEATURE_NAMES,
                PredictionLabel::Negative,
            )),
            stub.clone(),
        )
        .expect("service");

        let outcome = service.assess_risk(&reference_risk()).expect("assessment");
        assert_eq!(outcome.assessment, Assessment::Risk);
        assert_eq!(outcome.headline, "Your risk level is low. Well done!");

        let seen = stub.seen.lock().expect("stub lock");
        assert_eq!(seen.as_slice(), &[vec![30.0, 5.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_swapped_classifiers_are_rejected() {
        let result = PredictionService::new(
            Arc::new(StubClassifier::new("risk", &RISK_FEATURE_NAMES, PredictionLabel::Negative)),
            Arc::new(StubClassifier::new(
                "detect",
                &DETECTION_FEATURE_NAMES,
                PredictionLabel::Negative,
            )),
        );
        assert!(matches!(
            result,
            Err(HeartwiseError::Classifier(ClassifierError::LayoutMismatch { .. }))
        ));
    }

    #[test]
    fn test_from_config_with_bundled_models() {
        let config = AppConfig {
            detection_model: PathBuf::from("models/heart_model.json"),
            risk_model: PathBuf::from("models/heart_risk_model.json"),
            ..AppConfig::default()
        };
        let service = PredictionService::from_config(&config).expect("bundled models load");
        assert_eq!(service.detection_model(), "heart_model_demo");
        assert_eq!(service.risk_model(), "heart_risk_model_demo");

        let outcome = service.assess_risk(&reference_risk()).expect("assessment");
        assert!(!outcome.is_positive());
    }

    #[test]
    fn test_from_config_missing_model_is_fatal() {
        let config = AppConfig {
            detection_model: PathBuf::from("models/does_not_exist.json"),
            ..AppConfig::default()
        };
        assert!(matches!(
            PredictionService::from_config(&config),
            Err(HeartwiseError::Config(_))
        ));
    }
}
