use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 8-bit RGBA color, written as `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);
    pub const DARK_GRAY: Self = Self::opaque(0x44, 0x44, 0x44);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Packed `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        match hex.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}

/// Terminal cells have no alpha channel; the color is taken as opaque.
impl From<Rgba> for ratatui::style::Color {
    fn from(value: Rgba) -> Self {
        ratatui::style::Color::Rgb(value.r, value.g, value.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_as_opaque() {
        assert_eq!(Rgba::parse("#444444").unwrap(), Rgba::DARK_GRAY);
        assert_eq!(Rgba::parse("#ffffff").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn parses_argb() {
        let c = Rgba::parse("#80FF0010").unwrap();
        assert_eq!(c, Rgba { r: 0xFF, g: 0x00, b: 0x10, a: 0x80 });
    }

    #[test]
    fn rejects_malformed() {
        for text in ["444444", "#44444", "#GG0000", "#+12345", ""] {
            assert!(
                matches!(Rgba::parse(text), Err(Error::InvalidColor(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for c in [Rgba::WHITE, Rgba::DARK_GRAY, Rgba::from_argb(0x1234_5678)] {
            assert_eq!(Rgba::parse(&c.to_string()).unwrap(), c);
        }
    }

    #[test]
    fn converts_to_ratatui_rgb() {
        let color: ratatui::style::Color = Rgba::DARK_GRAY.into();
        assert_eq!(color, ratatui::style::Color::Rgb(0x44, 0x44, 0x44));
    }
}
