//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/myapp/static/  ← start
/// /home/user/site/assets.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("myapp/static/img");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("assets.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("assets.toml"));
        assert_eq!(found, Some(dir.path().join("assets.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("assets.toml"), "").unwrap();
        fs::write(nested.join("assets.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("assets.toml"));
        assert_eq!(found, Some(nested.join("assets.toml")));
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("odd-name.toml")).unwrap();

        assert_eq!(
            find_config_file(dir.path(), Path::new("odd-name.toml")),
            None
        );
    }

    #[test]
    fn test_absolute_config_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(Path::new("/"), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }
}
