//! Common types, traits, and utilities shared across the chart model.
//!
//! This module provides the unified error type, the appearance records, and
//! the style-identity layer (fingerprints and the de-duplication registry).

// Submodule declarations
pub mod error;
pub mod hash;
pub mod hash_table;
pub mod style;

// Re-exports for convenience
pub use error::{Error, Result};
pub use hash::{ComparableObject, Fingerprint};
pub use hash_table::HashTable;
pub use style::{Color, Fill, FillType, Font, Outline, Underline};
