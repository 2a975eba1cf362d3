//! Fill definitions for shapes, series and outlines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};
use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::Color;

/// Fill type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillType {
    /// No fill
    #[default]
    None,
    /// Solid color
    Solid,
    /// Linear gradient between start and end color
    GradientLinear,
    /// Path gradient between start and end color
    GradientPath,
}

impl FillType {
    /// Returns the identifier used for this fill type.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::GradientLinear => "linear",
            Self::GradientPath => "path",
        }
    }
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

impl FromStr for FillType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "solid" => Ok(Self::Solid),
            "linear" => Ok(Self::GradientLinear),
            "path" => Ok(Self::GradientPath),
            _ => Err(Error::invalid_parameter("fillType", s)),
        }
    }
}

/// Fill settings.
///
/// Solid fills only use the start color; gradients run from the start to
/// the end color along `rotation` degrees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fill {
    fill_type: FillType,
    rotation: f64,
    start_color: Color,
    end_color: Color,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl Fill {
    /// Create an empty (`none`) fill.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid fill.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            fill_type: FillType::Solid,
            start_color: color,
            end_color: color,
            ..Self::default()
        }
    }

    /// Fill type.
    #[inline]
    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    /// Set the fill type.
    #[inline]
    pub fn set_fill_type(&mut self, fill_type: FillType) -> &mut Self {
        self.fill_type = fill_type;
        self
    }

    /// Gradient rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Set the gradient rotation in degrees.
    #[inline]
    pub fn set_rotation(&mut self, rotation: f64) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Start (or solid) color.
    #[inline]
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    /// Set the start color.
    #[inline]
    pub fn set_start_color(&mut self, color: Color) -> &mut Self {
        self.start_color = color;
        self
    }

    /// End color.
    #[inline]
    pub fn end_color(&self) -> Color {
        self.end_color
    }

    /// Set the end color.
    #[inline]
    pub fn set_end_color(&mut self, color: Color) -> &mut Self {
        self.end_color = color;
        self
    }
}

impl PartialEq for Fill {
    fn eq(&self, other: &Self) -> bool {
        self.fill_type == other.fill_type
            && self.rotation == other.rotation
            && self.start_color == other.start_color
            && self.end_color == other.end_color
    }
}

impl ComparableObject for Fill {
    fn hash_code(&self) -> String {
        Fingerprint::new()
            .part(self.fill_type.xml_value())
            .float(self.rotation)
            .part(&self.start_color.to_hex())
            .part(&self.end_color.to_hex())
            .part("Fill")
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

    #[test]
    fn test_solid_fill() {
        let fill = Fill::solid(Color::rgb(1, 2, 3));
        assert_eq!(fill.fill_type(), FillType::Solid);
        assert_eq!(fill.start_color(), Color::rgb(1, 2, 3));
        assert_eq!(fill.end_color(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_hash_tracks_state() {
        let mut fill = Fill::new();
        let before = fill.hash_code();
        fill.set_rotation(45.0);
        assert_ne!(before, fill.hash_code());
        fill.set_rotation(0.0);
        assert_eq!(before, fill.hash_code());
    }

    #[test]
    fn test_fill_type_parse() {
        assert_eq!("linear".parse::<FillType>(), Ok(FillType::GradientLinear));
        assert!("radial".parse::<FillType>().is_err());
    }
}
