//! Square icon placeholders (favicons, touch and launcher icons).

use image::RgbaImage;
use std::path::Path;

use super::{Generated, centered};
use crate::image::canvas::Canvas;
use crate::image::color::Rgb;
use crate::image::encode::{DEFAULT_JPEG_QUALITY, write_image};
use crate::image::error::AssetError;
use crate::image::text::{FontBook, TextRun};

/// Text and colors of an icon placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    pub text: String,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            text: "OP".to_string(),
            background: Rgb::BLACK,
            foreground: Rgb::ACCENT,
        }
    }
}

/// Draw a `size`×`size` icon with the style's text centered.
///
/// The font is `size / 2` pixels. Text wider than the canvas is not wrapped
/// and simply runs off both edges. Returns `None` for `size == 0`.
#[allow(clippy::cast_precision_loss)]
pub fn render_icon(size: u32, style: &IconStyle, fonts: &FontBook) -> Option<RgbaImage> {
    let mut canvas = Canvas::new(size, size, style.background)?;

    let font_size = (size / 2).max(1) as f32;
    let run = TextRun::new(fonts, &style.text, font_size, style.foreground);

    let x = centered(size, run.width());
    let y = centered(size, run.height());
    run.draw(&mut canvas, x, y);

    Some(canvas.into_image())
}

/// Generate an icon placeholder at `destination` unless it already exists.
pub fn generate_icon_placeholder(
    size: u32,
    destination: &Path,
    style: &IconStyle,
    fonts: &FontBook,
) -> Result<Generated, AssetError> {
    if destination.exists() {
        return Ok(Generated::AlreadyExists);
    }

    let image = render_icon(size, style, fonts)
        .ok_or_else(|| AssetError::encode(destination, format!("invalid icon size {size}")))?;
    write_image(&image, destination, DEFAULT_JPEG_QUALITY)?;
    Ok(Generated::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use std::fs;
    use tempfile::TempDir;

    fn corners(image: &RgbaImage) -> [[u8; 4]; 4] {
        let (w, h) = image.dimensions();
        [
            image.get_pixel(0, 0).0,
            image.get_pixel(w - 1, 0).0,
            image.get_pixel(0, h - 1).0,
            image.get_pixel(w - 1, h - 1).0,
        ]
    }

    #[test]
    fn test_render_icon_is_square() {
        let fonts = FontBook::empty();
        for size in [1, 2, 16, 32, 180, 192, 512] {
            let image = render_icon(size, &IconStyle::default(), &fonts).unwrap();
            assert_eq!(image.dimensions(), (size, size), "size {size}");
        }
    }

    #[test]
    fn test_render_icon_zero_size() {
        let fonts = FontBook::empty();
        assert!(render_icon(0, &IconStyle::default(), &fonts).is_none());
    }

    #[test]
    fn test_render_icon_draws_centered_text() {
        let fonts = FontBook::empty();
        let image = render_icon(32, &IconStyle::default(), &fonts).unwrap();

        // "OP" at scale 2 is 22x14, placed at (5, 9).
        assert_eq!(image.get_pixel(5, 11).0, [0x00, 0xff, 0x88, 0xff]);
        assert_eq!(image.get_pixel(4, 11).0, [0, 0, 0, 0xff]);
        assert_eq!(image.get_pixel(16, 8).0, [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_favicon_corners_match_background() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("favicon-32x32.png");
        let style = IconStyle {
            text: "OP".to_string(),
            background: Rgb::BLACK,
            foreground: Rgb::ACCENT,
        };

        let fonts = FontBook::system(&[], &[]);
        let result = generate_icon_placeholder(32, &dest, &style, &fonts).unwrap();
        assert_eq!(result, Generated::Created);

        let decoded = image::open(&dest).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(corners(&decoded.to_rgba8()), [[0, 0, 0, 0xff]; 4]);
    }

    #[test]
    fn test_existing_destination_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("apple-touch-icon.png");
        let fonts = FontBook::empty();

        let first = generate_icon_placeholder(180, &dest, &IconStyle::default(), &fonts).unwrap();
        let before = fs::read(&dest).unwrap();
        let mtime = fs::metadata(&dest).unwrap().modified().unwrap();

        let second = generate_icon_placeholder(180, &dest, &IconStyle::default(), &fonts).unwrap();

        assert_eq!(first, Generated::Created);
        assert_eq!(second, Generated::AlreadyExists);
        assert_eq!(fs::read(&dest).unwrap(), before);
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), mtime);
    }

    #[test]
    fn test_curated_file_is_not_clobbered() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("favicon-16x16.png");
        fs::write(&dest, b"hand-made").unwrap();

        let fonts = FontBook::empty();
        let result = generate_icon_placeholder(16, &dest, &IconStyle::default(), &fonts).unwrap();

        assert_eq!(result, Generated::AlreadyExists);
        assert_eq!(fs::read(&dest).unwrap(), b"hand-made");
    }

    #[test]
    fn test_zero_size_is_encode_failure() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("zero.png");
        let fonts = FontBook::empty();

        let err = generate_icon_placeholder(0, &dest, &IconStyle::default(), &fonts).unwrap_err();
        assert!(matches!(err, AssetError::EncodeFailed { .. }));
        assert!(!dest.exists());
    }
}
