//! Axis gridlines.

use serde::{Deserialize, Serialize};

use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::Outline;

/// Major or minor gridlines drawn across the plot area from an axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gridlines {
    outline: Outline,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl Gridlines {
    /// Create gridlines with a default outline.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create gridlines drawn with `outline`.
    #[inline]
    pub fn with_outline(outline: Outline) -> Self {
        Self {
            outline,
            hash_index: None,
        }
    }

    /// Line style.
    #[inline]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Mutable line style.
    #[inline]
    pub fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    /// Replace the line style.
    #[inline]
    pub fn set_outline(&mut self, outline: Outline) -> &mut Self {
        self.outline = outline;
        self
    }
}

impl PartialEq for Gridlines {
    fn eq(&self, other: &Self) -> bool {
        self.outline == other.outline
    }
}

impl ComparableObject for Gridlines {
    fn hash_code(&self) -> String {
        Fingerprint::new()
            .part(&self.outline.hash_code())
            .part("Gridlines")
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
