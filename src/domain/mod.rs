//! Domain layer: Core business types and logic.
//!
//! Pure types with no I/O: form answers, their feature encodings, the
//! navigation state machine and the recommendation catalogue.

mod detection;
mod diagnosis;
mod navigation;
mod patient;
mod risk;

pub use detection::{
    encode_detection_features, ChestPainType, DetectionFeatureVector, DetectionInput, RestingEcg,
    StSlope, DETECTION_FEATURE_COUNT, DETECTION_FEATURE_NAMES,
};
pub use diagnosis::{Assessment, ClassifierError, Outcome, PredictionLabel};
pub use navigation::{NavAction, NavigationState, Screen, Transition};
pub use patient::{Choice, FieldRange, Sex};
pub use risk::{
    encode_risk_features, DietQuality, RiskFeatureVector, RiskInput, StressLevel,
    RISK_FEATURE_COUNT, RISK_FEATURE_NAMES,
};
