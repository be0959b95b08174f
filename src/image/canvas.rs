//! In-memory drawing surface.
//!
//! A [`Canvas`] lives for exactly one job: allocate, fill, draw, convert to
//! an [`RgbaImage`] for encoding, drop.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::color::Rgb;

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    ///
    /// Returns `None` for a zero-sized canvas.
    pub fn new(width: u32, height: u32, background: Rgb) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(background.to_skia());
        Some(Self { pixmap })
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Fill an axis-aligned rectangle, snapped to whole pixels.
    ///
    /// The rect is clipped to the canvas first; a rect entirely outside
    /// paints nothing.
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let left = x.round().max(0.0);
        let top = y.round().max(0.0);
        let right = (x + width).round().min(self.pixmap.width() as f32);
        let bottom = (y + height).round().min(self.pixmap.height() as f32);
        if right <= left || bottom <= top {
            return;
        }

        let Some(rect) = Rect::from_ltrb(left, top, right, bottom) else {
            return;
        };
        let paint = solid_paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Stroke a straight line with butt caps.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.0, from.1);
        builder.line_to(to.0, to.1);
        let Some(path) = builder.finish() else {
            return;
        };

        let paint = solid_paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    pub fn into_image(self) -> RgbaImage {
        pixmap_to_rgba(&self.pixmap)
    }
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    // Hard edges keep the flat background exact around shapes.
    paint.anti_alias = false;
    paint
}

/// Convert a premultiplied pixmap into a straight-alpha RGBA image.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}
