//! Common style and formatting types.
//!
//! Appearance records referenced by chart axes, series and gridlines.

// Submodule declarations
pub mod color;
pub mod fill;
pub mod font;
pub mod outline;

// Re-exports
pub use color::Color;
pub use fill::{Fill, FillType};
pub use font::{Font, Underline};
pub use outline::Outline;
