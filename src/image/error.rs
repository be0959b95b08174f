//! Per-job error taxonomy.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single asset job failed.
///
/// None of these abort a batch: the runner records the failure and moves
/// on to the next manifest entry. An existing destination is not an error
/// (see [`Generated::AlreadyExists`](crate::image::generate::Generated)).
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to rasterize {}: {message}", path.display())]
    RasterizationFailed { path: PathBuf, message: String },

    #[error("failed to write {}: {message}", path.display())]
    EncodeFailed { path: PathBuf, message: String },
}

impl AssetError {
    pub fn rasterization(path: &Path, message: impl ToString) -> Self {
        Self::RasterizationFailed {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn encode(path: &Path, message: impl ToString) -> Self {
        Self::EncodeFailed {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Short classification used in status lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) => "source not found",
            Self::RasterizationFailed { .. } => "rasterization failed",
            Self::EncodeFailed { .. } => "encode failed",
        }
    }

    /// Underlying message without the path prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::SourceNotFound(path) => path.display().to_string(),
            Self::RasterizationFailed { message, .. } | Self::EncodeFailed { message, .. } => {
                message.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_underlying_message() {
        let err = AssetError::rasterization(Path::new("img/og.svg"), "unexpected end of stream");
        let display = err.to_string();
        assert!(display.contains("img/og.svg"));
        assert!(display.contains("unexpected end of stream"));
        assert_eq!(err.kind(), "rasterization failed");
        assert_eq!(err.detail(), "unexpected end of stream");
    }

    #[test]
    fn test_source_not_found() {
        let err = AssetError::SourceNotFound(PathBuf::from("missing.svg"));
        assert_eq!(err.to_string(), "source not found: missing.svg");
        assert_eq!(err.kind(), "source not found");
    }
}
