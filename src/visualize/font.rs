extern crate image as image_rs;

use image_rs::{RgbImage, Rgb};
use super::put_pixel_clipped;

pub const GLYPH_WIDTH: isize = 3;
pub const GLYPH_HEIGHT: isize = 5;
const GLYPH_SPACING: isize = 1;

// 3x5 bitmaps, one row per entry, most significant of the three bits is the left column
fn glyph(c: char) -> Option<[u8; 5]> {
    match c {
        '0' => Some([0b111, 0b101, 0b101, 0b101, 0b111]),
        '1' => Some([0b010, 0b110, 0b010, 0b010, 0b111]),
        '2' => Some([0b111, 0b001, 0b111, 0b100, 0b111]),
        '3' => Some([0b111, 0b001, 0b111, 0b001, 0b111]),
        '4' => Some([0b101, 0b101, 0b111, 0b001, 0b001]),
        '5' => Some([0b111, 0b100, 0b111, 0b001, 0b111]),
        '6' => Some([0b111, 0b100, 0b111, 0b101, 0b111]),
        '7' => Some([0b111, 0b001, 0b010, 0b010, 0b010]),
        '8' => Some([0b111, 0b101, 0b111, 0b101, 0b111]),
        '9' => Some([0b111, 0b101, 0b111, 0b001, 0b111]),
        '.' => Some([0b000, 0b000, 0b000, 0b000, 0b010]),
        '-' => Some([0b000, 0b000, 0b111, 0b000, 0b000]),
        _ => None
    }
}

/// Draws text with its bottom-left corner at (x, baseline). Unknown characters advance without drawing.
/// Returns the x coordinate after the last glyph.
pub fn draw_text(image: &mut RgbImage, text: &str, x: isize, baseline: isize, color: Rgb<u8>) -> isize {
    let top = baseline - GLYPH_HEIGHT + 1;
    let mut cursor = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (dy, row) in rows.iter().enumerate() {
                for dx in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - dx)) != 0 {
                        put_pixel_clipped(image, cursor + dx, top + dy as isize, color);
                    }
                }
            }
        }
        cursor += GLYPH_WIDTH + GLYPH_SPACING;
    }
    cursor
}
