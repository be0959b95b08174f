//! Scalable text through usvg.
//!
//! The run is expressed as a one-element SVG document so usvg does the
//! shaping and outlining; the resulting tree is measured once and rendered
//! with a translation at draw time.

use quick_xml::escape::escape;
use resvg::tiny_skia::Transform;
use usvg::{Rect, Tree};

use super::{FontBook, FontUnavailable};
use crate::debug;
use crate::image::canvas::Canvas;
use crate::image::color::Rgb;

pub(super) struct OutlineText {
    tree: Tree,
    bounds: Rect,
}

impl OutlineText {
    pub(super) fn shape(
        fonts: &FontBook,
        family: &str,
        text: &str,
        size: f32,
        color: Rgb,
    ) -> Result<Self, FontUnavailable> {
        let markup = text_markup(family, text, size, color);
        let tree = Tree::from_str(&markup, &fonts.usvg_options()).map_err(|err| {
            debug!("fonts"; "failed to shape {:?}: {}", text, err);
            FontUnavailable
        })?;

        // usvg drops text it cannot resolve a face for.
        if !tree.root().has_children() {
            return Err(FontUnavailable);
        }

        let bounds = tree.root().abs_bounding_box();
        Ok(Self { tree, bounds })
    }

    /// Bounding box size, rounded up to whole pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn size(&self) -> (u32, u32) {
        (
            self.bounds.width().ceil().max(0.0) as u32,
            self.bounds.height().ceil().max(0.0) as u32,
        )
    }

    #[allow(clippy::cast_precision_loss)]
    pub(super) fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) {
        let transform =
            Transform::from_translate(x as f32 - self.bounds.x(), y as f32 - self.bounds.y());
        resvg::render(&self.tree, transform, &mut canvas.pixmap_mut().as_mut());
    }
}

/// SVG document holding a single text element with its baseline at y = 0.
fn text_markup(family: &str, text: &str, size: f32, color: Rgb) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1">"#,
            r#"<text x="0" y="0" xml:space="preserve" font-family="{family}" "#,
            r#"font-size="{size}" fill="{color}">{text}</text></svg>"#
        ),
        family = escape(family),
        size = size,
        color = color,
        text = escape(text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_markup_escapes_content() {
        let markup = text_markup("Arial", "Tom & \"Jerry\" <3", 48.0, Rgb::ACCENT);
        assert!(markup.contains("Tom &amp; &quot;Jerry&quot; &lt;3"));
        assert!(markup.contains(r##"fill="#00ff88""##));
        assert!(markup.contains(r#"font-size="48""#));
    }

    #[test]
    fn test_text_markup_parses() {
        let markup = text_markup("Arial", "OP", 16.0, Rgb::WHITE);
        assert!(Tree::from_str(&markup, &usvg::Options::default()).is_ok());
    }

    #[test]
    fn test_shape_without_fonts_is_unavailable() {
        let fonts = FontBook::empty();
        let result = OutlineText::shape(&fonts, "Arial", "OP", 16.0, Rgb::WHITE);
        assert!(matches!(result, Err(FontUnavailable)));
    }
}
