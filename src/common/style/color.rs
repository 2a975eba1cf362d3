use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};

/// ARGB color representation.
///
/// Represents a color using alpha, red, green, and blue components, each in
/// the range 0-255. Serialized as an 8-digit hex string (`AARRGGBB`).
///
/// # Examples
///
/// ```rust
/// use slidechart::common::Color;
///
/// // Create a red color
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.to_hex(), "FFFF0000");
///
/// // Create from hex string, alpha defaults to opaque
/// let blue = Color::from_hex("0000FF").unwrap();
/// assert_eq!(blue.alpha(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a new color from all four components.
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `AARRGGBB` or `RRGGBB`, with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        let invalid = || Error::invalid_parameter("color", hex);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let component =
            |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::rgb(component(0..2)?, component(2..4)?, component(4..6)?)),
            8 => Ok(Self::argb(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
                component(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Convert to an `AARRGGBB` hex string.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Convert to an `RRGGBB` hex string, as written into `a:srgbClr`.
    pub fn to_rgb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Alpha component.
    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// Red component.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green component.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue component.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.b
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
