//! Classifier labels and the recommendations they select.
//!
//! Both assessments share one mapping: a positive label shows care or
//! prevention tips, a negative label shows maintenance tips. No probability or
//! explanation is surfaced.

use std::path::PathBuf;

/// Errors raised by a classifier or while loading one.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("model '{model}' column layout {found:?} does not match encoder layout {expected:?}")]
    LayoutMismatch {
        model: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("feature count mismatch: got {got}, expected {expected}")]
    ShapeMismatch { got: usize, expected: usize },

    #[error("classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
}

/// Binary class predicted by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    /// Class 0: no disease / low risk
    Negative,
    /// Class 1: disease present / at risk
    Positive,
}

impl TryFrom<u8> for PredictionLabel {
    type Error = ClassifierError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            other => Err(ClassifierError::InvalidLabel(other)),
        }
    }
}

impl From<PredictionLabel> for u8 {
    fn from(label: PredictionLabel) -> Self {
        match label {
            PredictionLabel::Negative => 0,
            PredictionLabel::Positive => 1,
        }
    }
}

/// Which question the user asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    /// "Do I currently have heart disease?"
    Detection,
    /// "Am I at risk of developing heart disease?"
    Risk,
}

/// Static recommendation content selected by a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub assessment: Assessment,
    pub label: PredictionLabel,
    pub headline: &'static str,
    pub heading: &'static str,
    pub tips: &'static [&'static str],
}

const DETECTION_POSITIVE_TIPS: &[&str] = &[
    "See a cardiologist immediately.",
    "Cut down on salt and fried food.",
    "Engage in light exercises (if approved).",
    "Stick to your medications.",
    "Reduce stress with yoga or breathing.",
];

const DETECTION_NEGATIVE_TIPS: &[&str] = &[
    "Maintain a balanced diet.",
    "Stay active regularly.",
    "Stay hydrated and rest well.",
];

const RISK_POSITIVE_TIPS: &[&str] = &[
    "Quit smoking immediately.",
    "Exercise 30 min/day.",
    "Improve your diet (fiber, fish, grains).",
    "Reduce stress regularly.",
    "Sleep at least 7-8 hours.",
];

const RISK_NEGATIVE_TIPS: &[&str] = &[
    "Maintain your healthy habits.",
    "Stay physically active.",
    "Drink water and manage stress.",
];

impl Outcome {
    /// Select the recommendation content for a prediction.
    #[must_use]
    pub fn for_label(assessment: Assessment, label: PredictionLabel) -> Self {
        let (headline, heading, tips) = match (assessment, label) {
            (Assessment::Detection, PredictionLabel::Positive) => (
                "You may currently have heart disease.",
                "Care Tips If You Have Heart Disease:",
                DETECTION_POSITIVE_TIPS,
            ),
            (Assessment::Detection, PredictionLabel::Negative) => (
                "You are not currently showing signs of heart disease.",
                "Keep Living Healthy:",
                DETECTION_NEGATIVE_TIPS,
            ),
            (Assessment::Risk, PredictionLabel::Positive) => (
                "You may be at high risk of developing heart disease.",
                "Prevention Tips:",
                RISK_POSITIVE_TIPS,
            ),
            (Assessment::Risk, PredictionLabel::Negative) => (
                "Your risk level is low. Well done!",
                "Keep it up:",
                RISK_NEGATIVE_TIPS,
            ),
        };

        Self {
            assessment,
            label,
            headline,
            heading,
            tips,
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.label == PredictionLabel::Positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_raw() {
        assert_eq!(PredictionLabel::try_from(0).ok(), Some(PredictionLabel::Negative));
        assert_eq!(PredictionLabel::try_from(1).ok(), Some(PredictionLabel::Positive));
        assert!(matches!(
            PredictionLabel::try_from(2),
            Err(ClassifierError::InvalidLabel(2))
        ));
        assert_eq!(u8::from(PredictionLabel::Positive), 1);
    }

    #[test]
    fn test_detection_outcomes() {
        let positive = Outcome::for_label(Assessment::Detection, PredictionLabel::Positive);
        assert!(positive.is_positive());
        assert_eq!(positive.tips.len(), 5);
        assert_eq!(positive.tips[0], "See a cardiologist immediately.");

        let negative = Outcome::for_label(Assessment::Detection, PredictionLabel::Negative);
        assert!(!negative.is_positive());
        assert_eq!(negative.heading, "Keep Living Healthy:");
        assert_eq!(negative.tips.len(), 3);
    }

    #[test]
    fn test_risk_outcomes() {
        let positive = Outcome::for_label(Assessment::Risk, PredictionLabel::Positive);
        assert_eq!(positive.heading, "Prevention Tips:");
        assert_eq!(positive.tips[0], "Quit smoking immediately.");

        let negative = Outcome::for_label(Assessment::Risk, PredictionLabel::Negative);
        assert_eq!(negative.headline, "Your risk level is low. Well done!");
        assert_eq!(negative.assessment, Assessment::Risk);
    }
}
