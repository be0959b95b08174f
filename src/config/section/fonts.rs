//! `[fonts]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [fonts]
//! families = ["Inter"]        # Tried before the built-in family list
//! dirs = ["assets/fonts"]     # Extra directories, relative to the root
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Preferred font families, in order.
    pub families: Vec<String>,
    /// Extra font directories loaded after the system fonts.
    pub dirs: Vec<PathBuf>,
}

impl FontsConfig {
    pub const DIRS: FieldPath = FieldPath::new("fonts.dirs");

    /// Run after `normalize`, so every dir is absolute.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for dir in &self.dirs {
            if !dir.is_dir() {
                diag.warn(
                    Self::DIRS,
                    format!("font directory `{}` does not exist", dir.display()),
                );
            }
        }
    }

    /// Resolve relative font directories against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.dirs = self
            .dirs
            .iter()
            .map(|dir| crate::utils::fs::normalize_path(&root.join(dir)))
            .collect();
    }
}
