//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the assessments offered by the application.

mod prediction;

pub use prediction::PredictionService;

#[cfg(test)]
pub(crate) use prediction::tests::stub_service;
