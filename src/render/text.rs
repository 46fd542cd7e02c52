//! Fixed 5x7 uppercase bitmap lettering

use crate::render::canvas::Blend;
use crate::render::palette::Paint;
use crate::render::shapes::fill_rect;
use image::ImageBuffer;

/// Glyph cell width in font units
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph cell height in font units
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance between glyph origins in font units
pub const GLYPH_ADVANCE: i32 = 6;

// Rows top to bottom, most significant of the low five bits is the leftmost column
const UPPERCASE: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Bitmap rows for a character, or `None` for anything without a glyph
///
/// Lowercase letters share the uppercase shapes.
pub fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let upper = ch.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    UPPERCASE.get(usize::from(upper as u8 - b'A'))
}

/// Draw `text` with its top-left corner at `origin`
///
/// Each lit font unit becomes a `scale` x `scale` block; characters without a
/// glyph still advance the pen.
pub fn draw_text<P: Blend>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    origin: (i32, i32),
    text: &str,
    scale: i32,
    paint: Paint,
) {
    let scale = scale.max(1);
    let mut pen_x = origin.0;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in (0..GLYPH_HEIGHT).zip(rows) {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let x = pen_x + col * scale;
                    let y = origin.1 + row * scale;
                    fill_rect(canvas, [x, y, x + scale - 1, y + scale - 1], paint);
                }
            }
        }
        pen_x += GLYPH_ADVANCE * scale;
    }
}
