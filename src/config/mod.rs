//! Project configuration from the optional `assets.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── fonts      # [fonts]
//! │   ├── icon       # [icon]
//! │   ├── paths      # [paths]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # AssetsConfig (this file)
//! ```
//!
//! Without a config file every section keeps its defaults, which reproduce
//! the stock assets: `myapp/static/img`, black/green "OP" icons and the
//! "Om Patel / Backend Developer" preview.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{FontsConfig, IconConfig, PathsConfig, SocialConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::image::generate::{IconStyle, SocialStyle};
use crate::log;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for when `--config` is not given.
pub const CONFIG_FILE: &str = "assets.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `assets.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Config file that was loaded, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub paths: PathsConfig,
    pub icon: IconConfig,
    pub social: SocialConfig,
    pub fonts: FontsConfig,
}

impl AssetsConfig {
    /// Load configuration for the current invocation.
    ///
    /// The project root is `--root` when given, otherwise the directory of
    /// the config file found by searching upward from cwd, otherwise cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(&cwd, cli.root.as_deref(), cli.config.as_deref())
    }

    fn load_from(cwd: &Path, root: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let root = root.map(|root| cwd.join(root));
        let config_path = Self::resolve_config_path(cwd, root.as_deref(), config)?;

        let mut parsed = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = root
            .or_else(|| {
                config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| cwd.to_path_buf());

        // Absolute paths must be rejected before they are joined onto the root
        let mut diag = ConfigDiagnostics::new();
        parsed.paths.validate(&mut diag);
        parsed.icon.validate(&mut diag);
        parsed.social.validate(&mut diag);

        parsed.root = crate::utils::fs::normalize_path(&root);
        parsed.config_path = config_path.map(|path| crate::utils::fs::normalize_path(&path));
        parsed.fonts.normalize(&parsed.root);
        parsed.fonts.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(parsed)
    }

    /// Pick the config file to read, if any.
    ///
    /// An explicit `--config` must exist. The default name is optional.
    fn resolve_config_path(
        cwd: &Path,
        root: Option<&Path>,
        config: Option<&Path>,
    ) -> Result<Option<PathBuf>> {
        let base = root.unwrap_or(cwd);

        if let Some(config) = config {
            let path = base.join(config);
            if !path.is_file() {
                let err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
                return Err(ConfigError::Io(path, err).into());
            }
            return Ok(Some(path));
        }

        let default = Path::new(CONFIG_FILE);
        Ok(match root {
            Some(root) => Some(root.join(default)).filter(|path| path.is_file()),
            None => find_config_file(cwd, default),
        })
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Directory holding the SVG sources and generated images.
    pub fn static_dir(&self) -> PathBuf {
        self.paths.resolve(&self.root)
    }

    pub fn icon_style(&self) -> IconStyle {
        self.icon.style()
    }

    pub fn social_style(&self) -> SocialStyle {
        self.social.style()
    }

    /// JPEG quality for any `.jpg` output.
    pub const fn jpeg_quality(&self) -> u8 {
        self.social.quality
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AssetsConfig {
    let (parsed, ignored) = AssetsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
