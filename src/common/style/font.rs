//! Font information and definitions.

use serde::{Deserialize, Serialize};

use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::Color;

/// Default typeface.
pub const DEFAULT_FONT_NAME: &str = "Calibri";
/// Default size in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Underline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single line
    Single,
    /// Double line
    Double,
    /// Dashed line
    Dash,
    /// Dotted line
    Dotted,
    /// Thick line
    Heavy,
    /// Wavy line
    Wavy,
}

impl Underline {
    /// Returns the XML value for this underline style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "sng",
            Self::Double => "dbl",
            Self::Dash => "dash",
            Self::Dotted => "dotted",
            Self::Heavy => "heavy",
            Self::Wavy => "wavy",
        }
    }
}

/// Font information.
///
/// Defines the visual appearance of chart text: typeface, size, color and
/// decoration. Superscript and subscript are mutually exclusive; turning
/// one on turns the other off. A deserialized font that sets both keeps
/// superscript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "FontRecord", rename_all = "camelCase")]
pub struct Font {
    name: String,
    size: f64,
    bold: bool,
    italic: bool,
    superscript: bool,
    subscript: bool,
    underline: Underline,
    strikethrough: bool,
    color: Color,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl Font {
    /// Create a new default font.
    #[inline]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            superscript: false,
            subscript: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::BLACK,
            hash_index: None,
        }
    }

    /// Typeface name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the typeface name.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Size in points.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Set the size in points.
    #[inline]
    pub fn set_size(&mut self, size: f64) -> &mut Self {
        self.size = size;
        self
    }

    /// Bold flag.
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Set the bold flag.
    #[inline]
    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    /// Italic flag.
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Set the italic flag.
    #[inline]
    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    /// Superscript flag.
    #[inline]
    pub fn is_superscript(&self) -> bool {
        self.superscript
    }

    /// Set the superscript flag.
    pub fn set_superscript(&mut self, superscript: bool) -> &mut Self {
        self.superscript = superscript;
        if superscript {
            self.subscript = false;
        }
        self
    }

    /// Subscript flag.
    #[inline]
    pub fn is_subscript(&self) -> bool {
        self.subscript
    }

    /// Set the subscript flag.
    pub fn set_subscript(&mut self, subscript: bool) -> &mut Self {
        self.subscript = subscript;
        if subscript {
            self.superscript = false;
        }
        self
    }

    /// Underline style.
    #[inline]
    pub fn underline(&self) -> Underline {
        self.underline
    }

    /// Set the underline style.
    #[inline]
    pub fn set_underline(&mut self, underline: Underline) -> &mut Self {
        self.underline = underline;
        self
    }

    /// Strikethrough flag.
    #[inline]
    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough
    }

    /// Set the strikethrough flag.
    #[inline]
    pub fn set_strikethrough(&mut self, strikethrough: bool) -> &mut Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Text color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the text color.
    #[inline]
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    /// Check if the font has any special formatting.
    #[inline]
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.strikethrough
            || self.superscript
            || self.subscript
            || self.underline != Underline::None
    }
}

impl Default for Font {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size == other.size
            && self.bold == other.bold
            && self.italic == other.italic
            && self.superscript == other.superscript
            && self.subscript == other.subscript
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.color == other.color
    }
}

/// Serialized form of [`Font`], routed through the setters on load.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FontRecord {
    name: String,
    size: f64,
    bold: bool,
    italic: bool,
    superscript: bool,
    subscript: bool,
    underline: Underline,
    strikethrough: bool,
    color: Color,
}

impl Default for FontRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            superscript: false,
            subscript: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::BLACK,
        }
    }
}

impl From<FontRecord> for Font {
    fn from(record: FontRecord) -> Self {
        let mut font = Font::new();
        font.set_name(record.name)
            .set_size(record.size)
            .set_bold(record.bold)
            .set_italic(record.italic)
            .set_subscript(record.subscript)
            .set_superscript(record.superscript)
            .set_underline(record.underline)
            .set_strikethrough(record.strikethrough)
            .set_color(record.color);
        font
    }
}

impl ComparableObject for Font {
    fn hash_code(&self) -> String {
        Fingerprint::new()
            .part(&self.name)
            .float(self.size)
            .flag(self.bold)
            .flag(self.italic)
            .flag(self.superscript)
            .flag(self.subscript)
            .part(self.underline.xml_value())
            .flag(self.strikethrough)
            .part(&self.color.to_hex())
            .part("Font")
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
    fn test_defaults() {
        let font = Font::new();
        assert_eq!(font.name(), DEFAULT_FONT_NAME);
        assert_eq!(font.size(), DEFAULT_FONT_SIZE);
        assert!(!font.has_formatting());
    }

    #[test]
    fn test_super_and_subscript_exclusive() {
        let mut font = Font::new();
        font.set_superscript(true);
        font.set_subscript(true);
        assert!(font.is_subscript());
        assert!(!font.is_superscript());

        font.set_superscript(true);
        assert!(!font.is_subscript());
    }

    #[test]
    fn test_hash_ignores_hash_index() {
        let mut font = Font::new();
        let before = font.hash_code();
        font.set_hash_index(Some(3));
        assert_eq!(before, font.hash_code());

        font.set_bold(true);
        assert_ne!(before, font.hash_code());
    }

    #[test]
    fn test_equality_ignores_hash_index() {
        let mut stamped = Font::new();
        stamped.set_hash_index(Some(7));
        assert_eq!(stamped, Font::new());

        stamped.set_italic(true);
        assert_ne!(stamped, Font::new());
    }

    #[test]
    fn test_from_record_keeps_scripts_exclusive() {
        let font = Font::from(FontRecord {
            superscript: true,
            subscript: true,
            ..FontRecord::default()
        });
        assert!(font.is_superscript());
        assert!(!font.is_subscript());

        let font = Font::from(FontRecord {
            subscript: true,
            ..FontRecord::default()
        });
        assert!(font.is_subscript());
    }
}
