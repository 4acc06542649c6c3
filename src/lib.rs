//! # HeartWise
//!
//! Terminal heart health predictor.
//!
//! This crate provides:
//! - Heart disease detection from clinical measurements
//! - Lifestyle-based risk estimation
//! - Terminal UI for local-only use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (form answers, feature encoders, navigation, outcomes)
//! - `ports`: Trait definitions for external collaborators (classifiers)
//! - `adapters`: Concrete implementations (JSON linear models)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use config::AppConfig;
pub use domain::{
    encode_detection_features, encode_risk_features, DetectionInput, Outcome, RiskInput,
};

/// Result type for HeartWise operations
pub type Result<T> = std::result::Result<T, HeartwiseError>;

/// Main error type for HeartWise
#[derive(Debug, thiserror::Error)]
pub enum HeartwiseError {
    #[error("Classifier error: {0}")]
    Classifier(#[from] domain::ClassifierError),

    #[error("Configuration error: {0}")]
    Config(String),
}
