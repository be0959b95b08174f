//! Config field path used in diagnostics.

use owo_colors::{Stream, Style};
use std::fmt;

use crate::logger::paint;

/// Dotted path of a config field, e.g. `social.quality`.
///
/// Sections declare their paths as constants so diagnostics and hints
/// always name the same key the user would write in `assets.toml`:
///
/// ```ignore
/// impl SocialConfig {
///     pub const QUALITY: FieldPath = FieldPath::new("social.quality");
/// }
///
/// diag.error(SocialConfig::QUALITY, "must be between 1 and 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", paint(Stream::Stderr, quoted, Style::new().bright_blue()))
    }
}
