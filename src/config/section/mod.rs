//! Configuration section definitions.
//!
//! Each module corresponds to a section in `assets.toml`:
//!
//! | Module   | TOML Section | Purpose                                 |
//! |----------|--------------|-----------------------------------------|
//! | `fonts`  | `[fonts]`    | Preferred families, extra font dirs     |
//! | `icon`   | `[icon]`     | Icon placeholder text and colors        |
//! | `paths`  | `[paths]`    | Static image directory                  |
//! | `social` | `[social]`   | Social preview text, colors and quality |

mod fonts;
mod icon;
mod paths;
mod social;

pub use fonts::FontsConfig;
pub use icon::IconConfig;
pub use paths::PathsConfig;
pub use social::SocialConfig;

use super::{ConfigDiagnostics, FieldPath};
use crate::image::Rgb;

/// Check a hex color field, recording an error when it does not parse.
fn validate_color(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if let Err(err) = value.parse::<Rgb>() {
        diag.error_with_hint(field, err.to_string(), "use a hex color such as \"#00ff88\"");
    }
}

/// Parse a color field that already passed validation.
fn parse_color(value: &str, fallback: Rgb) -> Rgb {
    value.parse().unwrap_or(fallback)
}
