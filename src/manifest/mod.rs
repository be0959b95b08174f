//! Static job manifests.
//!
//! Each batch command works over a fixed, ordered table of [`JobSpec`]s
//! declared here. At run time the table is resolved against the static
//! image directory into [`AssetJob`]s; nothing about the job set is read
//! from disk.
//!
//! # Icon colors
//!
//! The two upstream icon scripts disagreed on colors: favicon jobs relied on
//! library defaults while touch and launcher icons hard-coded black/green.
//! Every icon job here uses one [`IconStyle`](crate::image::generate::IconStyle)
//! (black background, green "OP" by default) so all icon outputs match.

mod batch;

pub use batch::{BatchSummary, ConversionResult, JobOutcome, run_batch};

use std::fmt;
use std::path::{Path, PathBuf};

/// Which asset a job produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Favicon,
    AppleTouchIcon,
    AndroidIcon,
    OgImage,
}

impl AssetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favicon => "favicon",
            Self::AppleTouchIcon => "apple-touch-icon",
            Self::AndroidIcon => "android-icon",
            Self::OgImage => "og-image",
        }
    }

    /// Square icon outputs (everything but the social preview).
    pub const fn is_icon(self) -> bool {
        !matches!(self, Self::OgImage)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time job description with paths relative to the image directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSpec {
    pub kind: AssetKind,
    pub source: Option<&'static str>,
    pub destination: &'static str,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub description: &'static str,
}

impl JobSpec {
    const fn convert(
        kind: AssetKind,
        source: &'static str,
        destination: &'static str,
        width: u32,
        height: u32,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            source: Some(source),
            destination,
            width: Some(width),
            height: Some(height),
            description,
        }
    }

    const fn icon(
        kind: AssetKind,
        destination: &'static str,
        size: u32,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            source: None,
            destination,
            width: Some(size),
            height: Some(size),
            description,
        }
    }
}

/// SVG sources rasterized by `convert`.
pub const CONVERSIONS: &[JobSpec] = &[
    JobSpec::convert(
        AssetKind::OgImage,
        "og-image.svg",
        "og-image.jpg",
        1200,
        630,
        "Social media sharing image",
    ),
    JobSpec::convert(
        AssetKind::Favicon,
        "favicon-16x16.svg",
        "favicon-16x16.png",
        16,
        16,
        "Small favicon",
    ),
    JobSpec::convert(
        AssetKind::Favicon,
        "favicon-32x32.svg",
        "favicon-32x32.png",
        32,
        32,
        "Standard favicon",
    ),
    JobSpec::convert(
        AssetKind::AppleTouchIcon,
        "apple-touch-icon.svg",
        "apple-touch-icon.png",
        180,
        180,
        "iOS app icon",
    ),
    JobSpec::convert(
        AssetKind::AndroidIcon,
        "android-chrome-192x192.svg",
        "android-chrome-192x192.png",
        192,
        192,
        "Android icon (medium)",
    ),
    JobSpec::convert(
        AssetKind::AndroidIcon,
        "android-chrome-512x512.svg",
        "android-chrome-512x512.png",
        512,
        512,
        "Android icon (large)",
    ),
];

/// Placeholders drawn by `generate`.
pub const GENERATIONS: &[JobSpec] = &[
    JobSpec::icon(AssetKind::Favicon, "favicon-16x16.png", 16, "Small favicon"),
    JobSpec::icon(AssetKind::Favicon, "favicon-32x32.png", 32, "Standard favicon"),
    JobSpec::icon(
        AssetKind::AppleTouchIcon,
        "apple-touch-icon.png",
        180,
        "iOS app icon",
    ),
    JobSpec::icon(
        AssetKind::AndroidIcon,
        "android-chrome-192x192.png",
        192,
        "Android icon (medium)",
    ),
    JobSpec::icon(
        AssetKind::AndroidIcon,
        "android-chrome-512x512.png",
        512,
        "Android icon (large)",
    ),
    // Fixed 1200x630 preset, no explicit size.
    JobSpec {
        kind: AssetKind::OgImage,
        source: None,
        destination: "og-image.jpg",
        width: None,
        height: None,
        description: "Social media sharing image",
    },
];

/// A resolved, immutable job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetJob {
    kind: AssetKind,
    source_path: Option<PathBuf>,
    destination_path: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    description: String,
}

impl AssetJob {
    pub fn new(
        kind: AssetKind,
        source_path: Option<PathBuf>,
        destination_path: PathBuf,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        Self {
            kind,
            source_path,
            destination_path,
            width,
            height,
            description: kind.as_str().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Resolve a spec's relative paths against `dir`.
    pub fn resolve(spec: &JobSpec, dir: &Path) -> Self {
        Self::new(
            spec.kind,
            spec.source.map(|source| dir.join(source)),
            dir.join(spec.destination),
            spec.width,
            spec.height,
        )
        .with_description(spec.description)
    }

    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn source(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn destination(&self) -> &Path {
        &self.destination_path
    }

    pub const fn width(&self) -> Option<u32> {
        self.width
    }

    pub const fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Edge length for square icon jobs.
    pub fn icon_size(&self) -> Option<u32> {
        match (self.width, self.height) {
            (Some(width), Some(height)) if width == height => Some(width),
            _ => None,
        }
    }

    /// Destination file name for status lines.
    pub fn display_name(&self) -> String {
        self.destination_path
            .file_name()
            .map_or_else(
                || self.destination_path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// `WxH` when both dimensions are known.
    pub fn dimensions_label(&self) -> Option<String> {
        Some(format!("{}x{}", self.width?, self.height?))
    }
}

/// Resolve a manifest table against the image directory.
pub fn resolve(specs: &[JobSpec], dir: &Path) -> Vec<AssetJob> {
    specs.iter().map(|spec| AssetJob::resolve(spec, dir)).collect()
}
