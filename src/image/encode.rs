//! Raster encoding and output.
//!
//! The output format is picked from the destination extension, the image is
//! encoded fully in memory and only then written (atomically) to disk.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb as RgbPixel, RgbImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::color::Rgb;
use super::error::AssetError;
use crate::utils::fs::write_atomic;

/// Default JPEG quality for the social preview.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// Pick the format from a destination path's extension.
    pub fn from_path(path: &Path, jpeg_quality: u8) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg {
                quality: jpeg_quality.clamp(1, 100),
            }),
            _ => None,
        }
    }
}

/// Encode an image into `format`.
///
/// Fully opaque images are written as RGB PNGs. JPEG has no alpha channel,
/// so transparent pixels are composited onto white first.
pub fn encode(image: &RgbaImage, format: OutputFormat) -> image::ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        OutputFormat::Png => {
            let dynamic = if image.pixels().all(|p| p[3] == u8::MAX) {
                DynamicImage::ImageRgb8(flatten(image, Rgb::WHITE))
            } else {
                DynamicImage::ImageRgba8(image.clone())
            };
            dynamic.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        OutputFormat::Jpeg { quality } => {
            let rgb = flatten(image, Rgb::WHITE);
            JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
        }
    }
    Ok(bytes)
}

/// Encode `image` according to the extension of `destination` and write it.
pub fn write_image(
    image: &RgbaImage,
    destination: &Path,
    jpeg_quality: u8,
) -> Result<(), AssetError> {
    let format = OutputFormat::from_path(destination, jpeg_quality).ok_or_else(|| {
        AssetError::encode(destination, "unsupported output extension (use .png or .jpg)")
    })?;
    let bytes = encode(image, format).map_err(|err| AssetError::encode(destination, err))?;
    write_atomic(destination, &bytes).map_err(|err| AssetError::encode(destination, err))
}

/// Composite straight-alpha RGBA over an opaque background.
fn flatten(image: &RgbaImage, background: Rgb) -> RgbImage {
    let bg = background.to_array();
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let blend = |c: u8, bg: u8| {
            let a = u16::from(a);
            ((u16::from(c) * a + u16::from(bg) * (255 - a) + 127) / 255) as u8
        };
        RgbPixel([blend(r, bg[0]), blend(g, bg[1]), blend(b, bg[2])])
    })
}
