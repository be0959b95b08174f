//! `[icon]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [icon]
//! text = "OP"
//! background = "#000000"
//! foreground = "#00ff88"
//! ```
//!
//! One style is shared by every favicon, touch and launcher icon.

use serde::Deserialize;

use super::{parse_color, validate_color};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::Rgb;
use crate::image::generate::IconStyle;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Text centered on each icon.
    pub text: String,
    pub background: String,
    pub foreground: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        let style = IconStyle::default();
        Self {
            text: style.text,
            background: style.background.to_string(),
            foreground: style.foreground.to_string(),
        }
    }
}

impl IconConfig {
    pub const TEXT: FieldPath = FieldPath::new("icon.text");
    pub const BACKGROUND: FieldPath = FieldPath::new("icon.background");
    pub const FOREGROUND: FieldPath = FieldPath::new("icon.foreground");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let text = self.text.trim();
        if text.is_empty() {
            diag.error(Self::TEXT, "must not be empty");
        } else if text.chars().count() > 3 {
            diag.warn(
                Self::TEXT,
                "long text will not fit on 16x16 favicons",
            );
        }
        validate_color(Self::BACKGROUND, &self.background, diag);
        validate_color(Self::FOREGROUND, &self.foreground, diag);
    }

    pub fn style(&self) -> IconStyle {
        IconStyle {
            text: self.text.trim().to_string(),
            background: parse_color(&self.background, Rgb::BLACK),
            foreground: parse_color(&self.foreground, Rgb::ACCENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_icon_defaults_match_style() {
        let config = test_parse_config("");
        assert_eq!(config.icon.style(), IconStyle::default());
    }

    #[test]
    fn test_icon_custom() {
        let config = test_parse_config(
            "[icon]\ntext = \"AB\"\nbackground = \"#fff\"\nforeground = \"#123456\"",
        );
        let style = config.icon.style();
        assert_eq!(style.text, "AB");
        assert_eq!(style.background, Rgb::WHITE);
        assert_eq!(style.foreground, Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_icon_validation() {
        let icon = IconConfig {
            text: "  ".to_string(),
            background: "black".to_string(),
            foreground: "#00ff88".to_string(),
        };
        let mut diag = ConfigDiagnostics::new();
        icon.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, [IconConfig::TEXT, IconConfig::BACKGROUND]);
    }

    #[test]
    fn test_long_icon_text_warns() {
        let icon = IconConfig {
            text: "ABCD".to_string(),
            ..IconConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        icon.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
