//! Hex colors used by the asset styles and config.

use resvg::tiny_skia;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color `{0}`, expected `#rrggbb` or `#rgb`")]
pub struct ColorParseError(pub String);

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Accent green used for the icon glyphs and the preview rule.
    pub const ACCENT: Self = Self::new(0x00, 0xff, 0x88);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #rgb expands each digit: #0f8 == #00ff88
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!("#00ff88".parse::<Rgb>(), Ok(Rgb::ACCENT));
        assert_eq!("#FFFFFF".parse::<Rgb>(), Ok(Rgb::WHITE));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!("#0f8".parse::<Rgb>(), Ok(Rgb::new(0x00, 0xff, 0x88)));
        assert_eq!("#000".parse::<Rgb>(), Ok(Rgb::BLACK));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for input in ["000000", "#00ff8", "#gg0000", "", "#", "#ééé", "#+f+f+f", "#+0+0+0+0"] {
            assert!(input.parse::<Rgb>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Rgb::ACCENT.to_string(), "#00ff88");
    }
}
