//! Line (outline) settings.

use serde::{Deserialize, Serialize};

use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::Fill;

/// Default outline width in points.
pub const DEFAULT_OUTLINE_WIDTH: f64 = 1.0;

/// Outline of a shape, axis line or gridline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Outline {
    fill: Fill,
    width: f64,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl Outline {
    /// Create a new outline with no fill and the default width.
    #[inline]
    pub fn new() -> Self {
        Self {
            fill: Fill::new(),
            width: DEFAULT_OUTLINE_WIDTH,
            hash_index: None,
        }
    }

    /// Line fill.
    #[inline]
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Mutable line fill.
    #[inline]
    pub fn fill_mut(&mut self) -> &mut Fill {
        &mut self.fill
    }

    /// Replace the line fill.
    #[inline]
    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.fill = fill;
        self
    }

    /// Width in points.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width in points.
    #[inline]
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }
}

impl PartialEq for Outline {
    fn eq(&self, other: &Self) -> bool {
        self.fill == other.fill
            && self.width == other.width
    }
}

impl Default for Outline {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ComparableObject for Outline {
    fn hash_code(&self) -> String {
        Fingerprint::new()
            .part(&self.fill.hash_code())
            .float(self.width)
            .part("Outline")
            .finish()
    }

    #[inline]
    fn hash_index(&self) -> Option<usize> {
        self.hash_index
    }

    #[inline]
    fn set_hash_index(&mut self, index: Option<usize>) {
        self.hash_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::{Color, FillType};

    #[test]
    fn test_defaults() {
        let outline = Outline::new();
        assert_eq!(outline.width(), DEFAULT_OUTLINE_WIDTH);
        assert_eq!(outline.fill().fill_type(), FillType::None);
    }

    #[test]
    fn test_hash_follows_fill() {
        let mut outline = Outline::new();
        let before = outline.hash_code();
        outline.fill_mut().set_fill_type(FillType::Solid).set_start_color(Color::WHITE);
        assert_ne!(before, outline.hash_code());
    }
}
