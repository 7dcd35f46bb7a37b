use crate::font::glyph::{FONT_5X7, GLYPH_ADVANCE, Glyph, GlyphTable};
use crate::foundation::core::Color;
use crate::surface::buffer::PixelBuffer;

/// Lays out single-line text from a [`GlyphTable`] into a [`PixelBuffer`].
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer<'t> {
    table: &'t GlyphTable,
}

impl Default for TextRenderer<'static> {
    fn default() -> Self {
        Self::new(&FONT_5X7)
    }
}

impl<'t> TextRenderer<'t> {
    pub fn new(table: &'t GlyphTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t GlyphTable {
        self.table
    }

    /// Draw `text` left to right with its first glyph's top-left corner at `(x, y)`.
    ///
    /// Every character advances the pen by [`GLYPH_ADVANCE`] pixels whatever its shape, and
    /// characters without a glyph advance without drawing. Pixels that fall outside the buffer
    /// are clipped.
    pub fn draw_text(&self, buf: &mut PixelBuffer<'_>, x: i32, y: i32, text: &str, color: Color) {
        if buf.is_empty() {
            return;
        }
        let right_edge = i32::try_from(buf.width()).unwrap_or(i32::MAX);

        let mut pen_x = x;
        for ch in text.chars() {
            // Glyphs only ever move right from here on.
            if pen_x >= right_edge {
                break;
            }
            draw_glyph(buf, pen_x, y, self.table.lookup_char(ch), color);
            pen_x = pen_x.saturating_add(GLYPH_ADVANCE);
        }
    }
}

/// Pixel width of `text` as laid out by [`TextRenderer::draw_text`], spacing column included.
pub fn text_width(text: &str) -> i64 {
    text.chars().count() as i64 * i64::from(GLYPH_ADVANCE)
}

/// Draw one glyph at `(x, y)`, clipping against the buffer.
pub fn draw_glyph(buf: &mut PixelBuffer<'_>, x: i32, y: i32, glyph: Glyph, color: Color) {
    for (col, row) in glyph.lit_pixels() {
        // col < 5 and row < 7, so the casts are lossless.
        buf.put_pixel(
            x.saturating_add(col as i32),
            y.saturating_add(row as i32),
            color,
        );
    }
}

/// Draw `text` with the built-in font.
pub fn draw_text(buf: &mut PixelBuffer<'_>, x: i32, y: i32, text: &str, color: Color) {
    TextRenderer::default().draw_text(buf, x, y, text, color);
}

#[cfg(test)]
#[path = "../../tests/unit/font/text.rs"]
mod tests;
