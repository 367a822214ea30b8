use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::EncodingError;

/// An opaque 24-bit sRGB color.
///
/// Displayed (and written to CSV) as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse a hex color (`#rrggbb`, `rrggbb`, `#rgb`) or a CSS/SVG color name
    /// such as `firebrick`. Names are matched case-insensitively.
    pub fn parse(value: &str) -> Result<Self, EncodingError> {
        let trimmed = value.trim();
        if let Ok(rgb) = trimmed.parse::<Srgb<u8>>() {
            return Ok(rgb.into());
        }
        palette::named::from_str(&trimmed.to_ascii_lowercase())
            .map(Color::from)
            .ok_or_else(|| EncodingError::InvalidColor {
                value: value.to_string(),
            })
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        let (r, g, b) = rgb.into_components();
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
