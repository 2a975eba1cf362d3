//! Unified error types for slidechart.
//!
//! This module provides the single error type shared by the axis, plot-area,
//! style and template layers.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
