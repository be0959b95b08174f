//! Open Graph / social card preview image.

use image::RgbaImage;
use std::path::Path;

use super::{Generated, centered};
use crate::image::canvas::Canvas;
use crate::image::color::Rgb;
use crate::image::encode::{DEFAULT_JPEG_QUALITY, write_image};
use crate::image::error::AssetError;
use crate::image::text::{FontBook, TextRun};

/// Recommended Open Graph size (Facebook/LinkedIn).
pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

/// Title is 1.5x the subtitle size.
const TITLE_SIZE: f32 = 72.0;
const SUBTITLE_SIZE: f32 = 48.0;
/// Gap between the title box and the subtitle.
const SUBTITLE_GAP: i32 = 30;
/// Gap between the subtitle box and the accent rule.
const RULE_GAP: i32 = 40;
const RULE_WIDTH: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialStyle {
    pub title: String,
    pub subtitle: String,
    pub background: Rgb,
    pub foreground: Rgb,
    pub accent: Rgb,
    /// JPEG quality when the destination is a `.jpg`.
    pub quality: u8,
}

impl Default for SocialStyle {
    fn default() -> Self {
        Self {
            title: "Om Patel".to_string(),
            subtitle: "Backend Developer".to_string(),
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
            accent: Rgb::ACCENT,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Positions of every element on the preview canvas.
///
/// Text positions are the top-left corners of the measured text boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLayout {
    pub title: (i32, i32),
    pub subtitle: (i32, i32),
    pub rule_start: (i32, i32),
    pub rule_end: (i32, i32),
}

impl SocialLayout {
    /// Lay out title and subtitle boxes of the given `(width, height)`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn compute(title: (u32, u32), subtitle: (u32, u32)) -> Self {
        let canvas_width = OG_WIDTH as i32;
        let canvas_height = OG_HEIGHT as i32;

        let title_x = centered(OG_WIDTH, title.0);
        let title_y = canvas_height / 3;

        let subtitle_x = centered(OG_WIDTH, subtitle.0);
        let subtitle_y = title_y + title.1 as i32 + SUBTITLE_GAP;

        let rule_y = subtitle_y + subtitle.1 as i32 + RULE_GAP;

        Self {
            title: (title_x, title_y),
            subtitle: (subtitle_x, subtitle_y),
            rule_start: (canvas_width / 4, rule_y),
            rule_end: (3 * canvas_width / 4, rule_y),
        }
    }
}

/// Draw the 1200x630 preview.
#[allow(clippy::cast_precision_loss)]
pub fn render_social(style: &SocialStyle, fonts: &FontBook) -> Option<RgbaImage> {
    let mut canvas = Canvas::new(OG_WIDTH, OG_HEIGHT, style.background)?;

    let title = TextRun::new(fonts, &style.title, TITLE_SIZE, style.foreground);
    let subtitle = TextRun::new(fonts, &style.subtitle, SUBTITLE_SIZE, style.accent);
    let layout = SocialLayout::compute(
        (title.width(), title.height()),
        (subtitle.width(), subtitle.height()),
    );

    title.draw(&mut canvas, layout.title.0, layout.title.1);
    subtitle.draw(&mut canvas, layout.subtitle.0, layout.subtitle.1);
    canvas.draw_line(
        (layout.rule_start.0 as f32, layout.rule_start.1 as f32),
        (layout.rule_end.0 as f32, layout.rule_end.1 as f32),
        RULE_WIDTH,
        style.accent,
    );

    Some(canvas.into_image())
}

/// Generate the social preview at `destination` unless it already exists.
///
/// `.jpg`/`.jpeg` destinations are encoded as JPEG at `style.quality`,
/// `.png` as PNG.
pub fn generate_social_preview(
    destination: &Path,
    style: &SocialStyle,
    fonts: &FontBook,
) -> Result<Generated, AssetError> {
    if destination.exists() {
        return Ok(Generated::AlreadyExists);
    }

    let image = render_social(style, fonts)
        .ok_or_else(|| AssetError::encode(destination, "failed to allocate canvas"))?;
    write_image(&image, destination, style.quality)?;
    Ok(Generated::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_layout_reference_geometry() {
        let layout = SocialLayout::compute((400, 60), (500, 40));

        assert_eq!(layout.title, (400, 210));
        assert_eq!(layout.subtitle, (350, 210 + 60 + 30));
        assert_eq!(layout.rule_start, (300, 300 + 40 + 40));
        assert_eq!(layout.rule_end, (900, 380));
    }

    #[test]
    fn test_layout_odd_widths_floor() {
        let layout = SocialLayout::compute((401, 0), (1199, 0));
        assert_eq!(layout.title.0, 399);
        assert_eq!(layout.subtitle.0, 0);
    }

    #[test]
    fn test_layout_text_wider_than_canvas() {
        let layout = SocialLayout::compute((1500, 60), (10, 10));
        assert_eq!(layout.title.0, -150);
    }

    #[test]
    fn test_render_is_fixed_size() {
        let fonts = FontBook::empty();
        let long = SocialStyle {
            title: "A".repeat(400),
            subtitle: String::new(),
            ..SocialStyle::default()
        };

        for style in [SocialStyle::default(), long] {
            let image = render_social(&style, &fonts).unwrap();
            assert_eq!(image.dimensions(), (OG_WIDTH, OG_HEIGHT));
        }
    }

    #[test]
    fn test_render_draws_rule_in_accent() {
        let fonts = FontBook::empty();
        let style = SocialStyle::default();
        let image = render_social(&style, &fonts).unwrap();

        // Bitmap fallback: title 72px -> scale 9 (63px tall), subtitle 48px -> scale 6 (42px).
        let rule_y = 210 + 63 + 30 + 42 + 40;
        assert_eq!(image.get_pixel(600, rule_y).0, [0x00, 0xff, 0x88, 0xff]);
        assert_eq!(image.get_pixel(299, rule_y).0, [0, 0, 0, 0xff]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_render_subtitle_in_accent() {
        let fonts = FontBook::empty();
        let image = render_social(&SocialStyle::default(), &fonts).unwrap();

        let band = |rows: std::ops::Range<u32>| {
            rows.flat_map(|y| (0..OG_WIDTH).map(move |x| (x, y)))
                .map(|(x, y)| image.get_pixel(x, y).0)
                .collect::<Vec<_>>()
        };
        let white = [0xff, 0xff, 0xff, 0xff];
        let accent = [0x00, 0xff, 0x88, 0xff];

        let title = band(210..210 + 63);
        assert!(title.contains(&white));
        assert!(!title.contains(&accent));

        let subtitle = band(303..303 + 42);
        assert!(subtitle.contains(&accent));
        assert!(!subtitle.contains(&white));
    }

    #[test]
    fn test_generate_writes_jpeg() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("og-image.jpg");
        let fonts = FontBook::empty();

        let result = generate_social_preview(&dest, &SocialStyle::default(), &fonts).unwrap();
        assert_eq!(result, Generated::Created);

        let bytes = fs::read(&dest).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (OG_WIDTH, OG_HEIGHT));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("og-image.png");
        let fonts = FontBook::empty();

        generate_social_preview(&dest, &SocialStyle::default(), &fonts).unwrap();
        let before = fs::read(&dest).unwrap();

        let other = SocialStyle {
            title: "Someone Else".to_string(),
            ..SocialStyle::default()
        };
        let result = generate_social_preview(&dest, &other, &fonts).unwrap();

        assert_eq!(result, Generated::AlreadyExists);
        assert_eq!(fs::read(&dest).unwrap(), before);
    }
}
