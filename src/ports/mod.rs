//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary between
//! the application and the pre-trained models it consults.

mod classifier;

pub use classifier::{ensure_layout, Classifier};
