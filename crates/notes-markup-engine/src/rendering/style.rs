use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque RGB color carried through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("Color must have exactly six hex digits: {0:?}")]
    BadLength(String),
    #[error("Invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Style inputs for flattening: base size, heading size table, text color
/// and the glyph used for unordered list items.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub base_font_size: f32,
    /// Sizes for heading levels 1 to 6; deeper levels use the last entry.
    pub heading_sizes: [f32; 6],
    pub color: Color,
    pub bullet: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            base_font_size: 12.0,
            heading_sizes: [32.0, 24.0, 18.72, 16.0, 12.28, 10.72],
            color: Color::WHITE,
            bullet: "•".to_string(),
        }
    }
}

impl RenderStyle {
    pub fn heading_size(&self, level: usize) -> f32 {
        self.heading_sizes[level.clamp(1, self.heading_sizes.len()) - 1]
    }
}
