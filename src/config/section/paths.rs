//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! static_dir = "myapp/static/img"   # Relative to the project root
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Where source SVGs live and generated images are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Static image directory, relative to the project root.
    pub static_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("myapp/static/img"),
        }
    }
}

impl PathsConfig {
    pub const STATIC_DIR: FieldPath = FieldPath::new("paths.static_dir");

    /// Must run before the directory is joined onto the root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.static_dir.as_os_str().is_empty() {
            diag.error(Self::STATIC_DIR, "must not be empty");
        } else if self.static_dir.is_absolute() {
            diag.error_with_hint(
                Self::STATIC_DIR,
                format!("must be relative, got `{}`", self.static_dir.display()),
                "paths are resolved against the project root",
            );
        }
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        crate::utils::fs::normalize_path(&root.join(&self.static_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_paths_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.paths.static_dir, Path::new("myapp/static/img"));
    }

    #[test]
    fn test_paths_custom() {
        let config = test_parse_config("[paths]\nstatic_dir = \"public/img\"");
        assert_eq!(config.paths.static_dir, Path::new("public/img"));
    }

    #[test]
    fn test_absolute_static_dir_rejected() {
        let paths = PathsConfig {
            static_dir: PathBuf::from("/var/www/img"),
        };
        let mut diag = ConfigDiagnostics::new();
        paths.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field, PathsConfig::STATIC_DIR);
    }

    #[test]
    fn test_resolve_against_root() {
        let paths = PathsConfig::default();
        let resolved = paths.resolve(Path::new("/srv/site"));
        assert_eq!(resolved, Path::new("/srv/site/myapp/static/img"));
    }
}
