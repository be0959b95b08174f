//! Built-in 5x7 glyph set.
//!
//! Last resort when no scalable font is installed. Covers A-Z, 0-9 and
//! common punctuation; lowercase letters use the uppercase shapes and
//! anything else is drawn as a hollow box.

use crate::image::canvas::Canvas;
use crate::image::color::Rgb;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, in glyph cells.
const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Nominal font size of one unscaled glyph cell (7 rows + 1 row of leading).
const CELL_SIZE: f32 = 8.0;

/// One row per byte, bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const MISSING: Glyph = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

#[rustfmt::skip]
fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '\'' => [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '/' => [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => MISSING,
    }
}

pub(super) struct BitmapText {
    glyphs: Vec<Glyph>,
    scale: u32,
    color: Rgb,
}

impl BitmapText {
    pub(super) fn new(text: &str, size: f32, color: Rgb) -> Self {
        Self {
            glyphs: text.chars().map(glyph).collect(),
            scale: scale_for(size),
            color,
        }
    }

    /// Size of the glyph cells, without trailing spacing.
    pub(super) fn size(&self) -> (u32, u32) {
        if self.glyphs.is_empty() {
            return (0, 0);
        }
        let columns = self.glyphs.len() as u32 * ADVANCE - 1;
        (columns * self.scale, GLYPH_HEIGHT * self.scale)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub(super) fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) {
        let scale = self.scale as i32;
        let cell = self.scale as f32;

        for (index, rows) in self.glyphs.iter().enumerate() {
            let origin_x = x + index as i32 * ADVANCE as i32 * scale;
            for (row, bits) in rows.iter().enumerate() {
                for column in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                        continue;
                    }
                    let px = origin_x + column as i32 * scale;
                    let py = y + row as i32 * scale;
                    canvas.fill_rect(px as f32, py as f32, cell, cell, self.color);
                }
            }
        }
    }
}

/// Integer magnification for a requested font size in pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_for(size: f32) -> u32 {
    ((size / CELL_SIZE).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for() {
        assert_eq!(scale_for(1.0), 1);
        assert_eq!(scale_for(8.0), 1);
        assert_eq!(scale_for(16.0), 2);
        assert_eq!(scale_for(48.0), 6);
        assert_eq!(scale_for(72.0), 9);
    }

    #[test]
    fn test_size() {
        assert_eq!(BitmapText::new("", 8.0, Rgb::WHITE).size(), (0, 0));
        assert_eq!(BitmapText::new("A", 8.0, Rgb::WHITE).size(), (5, 7));
        assert_eq!(BitmapText::new("OP", 8.0, Rgb::WHITE).size(), (11, 7));
        assert_eq!(BitmapText::new("OP", 96.0, Rgb::WHITE).size(), (132, 84));
    }

    #[test]
    fn test_lowercase_uses_uppercase_shapes() {
        assert_eq!(glyph('o'), glyph('O'));
        assert_eq!(glyph('~'), MISSING);
    }

    #[test]
    fn test_draw_pixels_match_glyph() {
        let text = BitmapText::new("L", 8.0, Rgb::WHITE);
        let mut canvas = Canvas::new(5, 7, Rgb::BLACK).unwrap();
        text.draw(&mut canvas, 0, 0);
        let image = canvas.into_image();

        for y in 0..7 {
            assert_eq!(image.get_pixel(0, y).0[0], 0xff, "left stem row {y}");
        }
        for x in 1..5 {
            assert_eq!(image.get_pixel(x, 6).0[0], 0xff, "foot column {x}");
            assert_eq!(image.get_pixel(x, 0).0[0], 0x00, "empty column {x}");
        }
    }
}
