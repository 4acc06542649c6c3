//! Classifier port: Trait for the pre-trained binary models.
//!
//! The application treats a classifier as opaque: it exposes the column layout
//! it was trained on and maps a feature vector of that shape to a label.

use crate::domain::{ClassifierError, PredictionLabel};

/// A pre-trained binary classifier.
///
/// Implementations are loaded once at startup and shared read-only, hence the
/// `Send + Sync` bound.
pub trait Classifier: Send + Sync {
    /// Human-readable model name, used in logs and errors.
    fn name(&self) -> &str;

    /// Column names the model was trained on, in input order.
    fn feature_names(&self) -> &[String];

    /// Predict the class of one feature vector.
    ///
    /// # Errors
    /// Returns `ClassifierError::ShapeMismatch` if `features` does not have one
    /// value per column of [`Classifier::feature_names`].
    fn predict(&self, features: &[f64]) -> Result<PredictionLabel, ClassifierError>;
}

/// Check that a classifier was trained on exactly the given column layout.
///
/// # Errors
/// Returns `ClassifierError::LayoutMismatch` when names or order differ.
pub fn ensure_layout(
    classifier: &dyn Classifier,
    expected: &[&str],
) -> Result<(), ClassifierError> {
    let found = classifier.feature_names();
    let matches = found.len() == expected.len()
        && found.iter().zip(expected).all(|(f, e)| f == e);
    if matches {
        return Ok(());
    }

    Err(ClassifierError::LayoutMismatch {
        model: classifier.name().to_string(),
        expected: expected.iter().map(|s| (*s).to_string()).collect(),
        found: found.to_vec(),
    })
}
