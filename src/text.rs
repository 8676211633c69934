//! Bitmap HUD Text
//!
//! Procedural text rendering using a 5x7 bitmap font drawn with filled
//! rectangles. Glyph coverage is what the HUD needs: digits, the letters of
//! the score prefix and the game-over fallback, and space. Unknown
//! characters render as blanks.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

// 5 pixel columns plus 1 column of spacing per character.
const CHAR_ADVANCE: u32 = 6;

/// Pixel width of `text` at the given scale, for right-aligned layout.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * CHAR_ADVANCE * scale
}

/// Renders `text` with its top-left corner at (x, y).
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * (CHAR_ADVANCE * scale) as i32;
        let pattern = glyph(c);

        for (row, bits) in pattern.iter().enumerate() {
            for col in 0..5 {
                if bits & (0b10000 >> col) != 0 {
                    let rect = Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    );
                    canvas.fill_rect(rect).map_err(|e| e.to_string())?;
                }
            }
        }
    }

    Ok(())
}

// 5x7 patterns, one u8 per row, low 5 bits used.
fn glyph(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => &[0, 0, 0, 0, 0, 0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_text_and_factor() {
        assert_eq!(text_width("HI 0", 1), 4 * 6);
        assert_eq!(text_width("HI 0", 2), 4 * 6 * 2);
        assert_eq!(text_width("", 3), 0);
    }

    #[test]
    fn hud_characters_have_glyphs() {
        for c in "HI 0123456789GAMEOVR".chars() {
            if c == ' ' {
                continue;
            }
            assert_ne!(glyph(c), &[0u8; 7], "missing glyph for {:?}", c);
        }
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(glyph('?'), &[0u8; 7]);
        assert_eq!(glyph(' '), &[0u8; 7]);
    }
}
