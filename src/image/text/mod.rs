//! Text measurement and drawing.
//!
//! Font selection is an ordered fallback, tried once per text run:
//!
//! 1. a scalable system font, shaped and rendered through usvg/resvg
//! 2. the built-in 5x7 bitmap glyph set ([`bitmap`])
//!
//! The first step fails with [`FontUnavailable`] when no usable face is
//! installed (or the face has no glyphs for the text); that error never
//! leaves this module.

mod bitmap;
mod fonts;
mod outline;

pub use fonts::FontBook;

use super::canvas::Canvas;
use super::color::Rgb;
use crate::debug;

/// No scalable font could render the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FontUnavailable;

/// A measured text run, ready to be drawn.
pub struct TextRun {
    glyphs: Glyphs,
    width: u32,
    height: u32,
}

enum Glyphs {
    Outline(outline::OutlineText),
    Bitmap(bitmap::BitmapText),
}

impl TextRun {
    /// Shape `text` at `size` pixels in `color`.
    pub fn new(fonts: &FontBook, text: &str, size: f32, color: Rgb) -> Self {
        let size = size.max(1.0);

        let outline = fonts
            .family()
            .and_then(|family| outline::OutlineText::shape(fonts, family, text, size, color));

        match outline {
            Ok(run) => {
                let (width, height) = run.size();
                Self {
                    glyphs: Glyphs::Outline(run),
                    width,
                    height,
                }
            }
            Err(FontUnavailable) => {
                debug!("fonts"; "no scalable font for {:?}, using bitmap glyphs", text);
                let run = bitmap::BitmapText::new(text, size, color);
                let (width, height) = run.size();
                Self {
                    glyphs: Glyphs::Bitmap(run),
                    width,
                    height,
                }
            }
        }
    }

    /// Width of the text's bounding box in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the text's bounding box in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the run fell back to the built-in glyphs.
    #[cfg(test)]
    pub fn is_bitmap(&self) -> bool {
        matches!(self.glyphs, Glyphs::Bitmap(_))
    }

    /// Draw with the bounding box's top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) {
        match &self.glyphs {
            Glyphs::Outline(run) => run.draw(canvas, x, y),
            Glyphs::Bitmap(run) => run.draw(canvas, x, y),
        }
    }
}
