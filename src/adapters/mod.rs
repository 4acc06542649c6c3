//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: logistic-regression classifiers loaded from JSON artifacts

pub mod linear;

pub use linear::{ExportedLinearModel, LinearClassifier};
