//! RGBA color type and its string codecs.
//!
//! Skins store colors as `#RRGGBB` strings. The parser also accepts the
//! 8-digit `#AARRGGBB` form and the named colors a watch toolkit understands,
//! so hand-edited skins keep working.

use serde::{Deserialize, Serialize};

use crate::error::{CwfError, Result};

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Format as `#RRGGBB`. Alpha is dropped.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.rgb_u32())
    }

    /// Packed `0xRRGGBB`.
    pub fn rgb_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Named colors accepted in place of a hex string.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("darkgray", Color::rgb(0x44, 0x44, 0x44)),
    ("darkgrey", Color::rgb(0x44, 0x44, 0x44)),
    ("gray", Color::rgb(0x88, 0x88, 0x88)),
    ("grey", Color::rgb(0x88, 0x88, 0x88)),
    ("lightgray", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("lightgrey", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0xFF, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
];

/// Parse `#RRGGBB`, `#AARRGGBB`, or a named color (case-insensitive).
pub fn parse_color(s: &str) -> Result<Color> {
    let invalid = || CwfError::InvalidColorSpec(s.to_string());
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        return match hex.len() {
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(invalid()),
        };
    }
    let lower = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, c)| *c)
        .ok_or_else(invalid)
}
