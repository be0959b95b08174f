//! `[social]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [social]
//! title = "Om Patel"
//! subtitle = "Backend Developer"
//! background = "#000000"
//! foreground = "#ffffff"      # Title
//! accent = "#00ff88"          # Subtitle and the rule under it
//! quality = 95                # JPEG quality, 1-100
//! ```

use serde::Deserialize;

use super::{parse_color, validate_color};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::Rgb;
use crate::image::generate::SocialStyle;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub title: String,
    pub subtitle: String,
    pub background: String,
    pub foreground: String,
    pub accent: String,
    /// JPEG quality, also used by `convert` for `.jpg` outputs.
    pub quality: u8,
}

impl Default for SocialConfig {
    fn default() -> Self {
        let style = SocialStyle::default();
        Self {
            title: style.title,
            subtitle: style.subtitle,
            background: style.background.to_string(),
            foreground: style.foreground.to_string(),
            accent: style.accent.to_string(),
            quality: style.quality,
        }
    }
}

impl SocialConfig {
    pub const TITLE: FieldPath = FieldPath::new("social.title");
    pub const BACKGROUND: FieldPath = FieldPath::new("social.background");
    pub const FOREGROUND: FieldPath = FieldPath::new("social.foreground");
    pub const ACCENT: FieldPath = FieldPath::new("social.accent");
    pub const QUALITY: FieldPath = FieldPath::new("social.quality");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "empty title, the preview shows only the subtitle");
        }
        validate_color(Self::BACKGROUND, &self.background, diag);
        validate_color(Self::FOREGROUND, &self.foreground, diag);
        validate_color(Self::ACCENT, &self.accent, diag);

        if !(1..=100).contains(&self.quality) {
            diag.error_with_hint(
                Self::QUALITY,
                format!("must be between 1 and 100, got {}", self.quality),
                "95 keeps previews sharp at a reasonable size",
            );
        }
    }

    pub fn style(&self) -> SocialStyle {
        SocialStyle {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            background: parse_color(&self.background, Rgb::BLACK),
            foreground: parse_color(&self.foreground, Rgb::WHITE),
            accent: parse_color(&self.accent, Rgb::ACCENT),
            quality: self.quality,
        }
    }
}
