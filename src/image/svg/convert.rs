//! SVG rasterization.
//!
//! Converts SVG documents to raster images with resvg. The backend sits
//! behind [`Rasterize`] so the batch runner can be exercised without
//! rendering.

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use std::fs;
use std::path::Path;

use crate::image::canvas::pixmap_to_rgba;
use crate::image::encode::write_image;
use crate::image::error::AssetError;
use crate::image::text::FontBook;

/// Requested output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSize {
    /// The SVG's own width/height, rounded up to whole pixels.
    Intrinsic,
    /// Exact pixel dimensions; the drawing is scaled on each axis to fill them.
    Explicit { width: u32, height: u32 },
}

impl TargetSize {
    /// Both dimensions set → explicit; otherwise the intrinsic size is used.
    ///
    /// An explicit zero is rejected.
    pub fn from_dimensions(width: Option<u32>, height: Option<u32>) -> Result<Self> {
        match (width, height) {
            (Some(width), Some(height)) if width == 0 || height == 0 => {
                bail!("invalid target size {width}x{height}: dimensions must be positive")
            }
            (Some(width), Some(height)) => Ok(Self::Explicit { width, height }),
            _ => Ok(Self::Intrinsic),
        }
    }
}

/// SVG → pixels backend.
pub trait Rasterize {
    fn rasterize(&self, svg: &[u8], size: TargetSize) -> Result<RgbaImage>;
}

/// Production backend: usvg parsing + resvg rendering.
pub struct ResvgRasterizer<'a> {
    fonts: &'a FontBook,
}

impl<'a> ResvgRasterizer<'a> {
    /// `fonts` resolves any `<text>` elements in the sources.
    pub fn new(fonts: &'a FontBook) -> Self {
        Self { fonts }
    }
}

impl Rasterize for ResvgRasterizer<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn rasterize(&self, svg: &[u8], size: TargetSize) -> Result<RgbaImage> {
        let tree = usvg::Tree::from_data(svg, &self.fonts.usvg_options())
            .context("Failed to parse SVG")?;

        let svg_size = tree.size();
        let (width, height, transform) = match size {
            TargetSize::Intrinsic => {
                let int_size = svg_size.to_int_size();
                (int_size.width(), int_size.height(), Transform::identity())
            }
            TargetSize::Explicit { width, height } => (
                width,
                height,
                Transform::from_scale(
                    width as f32 / svg_size.width(),
                    height as f32 / svg_size.height(),
                ),
            ),
        };

        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("Failed to allocate {width}x{height} pixmap"))?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap_to_rgba(&pixmap))
    }
}

/// Rasterize `source` into `destination`.
///
/// The whole source is read into memory, rendered and encoded before the
/// destination (and any missing parent directory) is touched.
pub fn rasterize_file(
    backend: &dyn Rasterize,
    source: &Path,
    destination: &Path,
    width: Option<u32>,
    height: Option<u32>,
    jpeg_quality: u8,
) -> Result<(), AssetError> {
    if !source.exists() {
        return Err(AssetError::SourceNotFound(source.to_path_buf()));
    }

    let size = TargetSize::from_dimensions(width, height)
        .map_err(|err| AssetError::rasterization(source, err))?;
    let svg = fs::read(source).map_err(|err| AssetError::rasterization(source, err))?;

    let image = backend
        .rasterize(&svg, size)
        .map_err(|err| AssetError::rasterization(source, format!("{err:#}")))?;

    write_image(&image, destination, jpeg_quality)
}
