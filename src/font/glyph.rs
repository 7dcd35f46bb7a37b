//! Fixed 5x7 monochrome font.
//!
//! Each glyph is five column masks. Bit `i` of a column is the pixel on row `i`, counting from
//! the top, so only the low seven bits are ever used.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal pen advance per character: the glyph plus one spacing column.
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH as i32 + 1;

/// Number of character codes the table covers (`0..128`).
pub const TABLE_LEN: usize = 128;

/// One 5x7 bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    columns: [u8; GLYPH_WIDTH],
}

impl Glyph {
    /// The all-clear glyph used for every undefined code.
    pub const BLANK: Self = Self {
        columns: [0; GLYPH_WIDTH],
    };

    /// Build a glyph from column masks. Bits above row 6 are dropped.
    pub const fn from_columns(columns: [u8; GLYPH_WIDTH]) -> Self {
        let mut masked = [0u8; GLYPH_WIDTH];
        let mut i = 0;
        while i < GLYPH_WIDTH {
            masked[i] = columns[i] & 0x7F;
            i += 1;
        }
        Self { columns: masked }
    }

    pub const fn columns(&self) -> [u8; GLYPH_WIDTH] {
        self.columns
    }

    /// Whether the pixel at `(col, row)` is lit. Out-of-range positions are unlit.
    pub fn is_lit(&self, col: usize, row: usize) -> bool {
        col < GLYPH_WIDTH && row < GLYPH_HEIGHT && self.columns[col] & (1 << row) != 0
    }

    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|&c| c == 0)
    }

    /// Lit pixels as `(col, row)` pairs, column-major.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().enumerate().flat_map(|(col, &mask)| {
            (0..GLYPH_HEIGHT)
                .filter(move |&row| mask & (1 << row) != 0)
                .map(move |row| (col, row))
        })
    }
}

/// Immutable mapping from character code to [`Glyph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: [Glyph; TABLE_LEN],
}

impl GlyphTable {
    /// Build a table from `(code, columns)` entries. Codes outside `0..128` are ignored.
    pub const fn from_entries(entries: &[(u8, [u8; GLYPH_WIDTH])]) -> Self {
        let mut glyphs = [Glyph::BLANK; TABLE_LEN];
        let mut i = 0;
        while i < entries.len() {
            let (code, columns) = entries[i];
            if (code as usize) < TABLE_LEN {
                glyphs[code as usize] = Glyph::from_columns(columns);
            }
            i += 1;
        }
        Self { glyphs }
    }

    /// Glyph for `code`. Anything without a defined glyph, including codes >= 128, is blank.
    pub fn lookup(&self, code: u32) -> Glyph {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.glyphs.get(idx))
            .copied()
            .unwrap_or(Glyph::BLANK)
    }

    pub fn lookup_char(&self, ch: char) -> Glyph {
        self.lookup(u32::from(ch))
    }

    /// Whether `code` maps to a glyph with at least one lit pixel.
    pub fn is_defined(&self, code: u32) -> bool {
        !self.lookup(code).is_blank()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        FONT_5X7.clone()
    }
}

/// Glyph for `code` in the built-in font.
pub fn lookup(code: u32) -> Glyph {
    FONT_5X7.lookup(code)
}

/// Built-in font: classic 5x7 shapes for printable ASCII (`0x20..=0x7E`).
pub static FONT_5X7: GlyphTable = GlyphTable::from_entries(&[
    (b' ', [0x00, 0x00, 0x00, 0x00, 0x00]),
    (b'!', [0x00, 0x00, 0x5F, 0x00, 0x00]),
    (b'"', [0x00, 0x07, 0x00, 0x07, 0x00]),
    (b'#', [0x14, 0x7F, 0x14, 0x7F, 0x14]),
    (b'$', [0x24, 0x2A, 0x7F, 0x2A, 0x12]),
    (b'%', [0x23, 0x13, 0x08, 0x64, 0x62]),
    (b'&', [0x36, 0x49, 0x55, 0x22, 0x50]),
    (b'\'', [0x00, 0x05, 0x03, 0x00, 0x00]),
    (b'(', [0x00, 0x1C, 0x22, 0x41, 0x00]),
    (b')', [0x00, 0x41, 0x22, 0x1C, 0x00]),
    (b'*', [0x14, 0x08, 0x3E, 0x08, 0x14]),
    (b'+', [0x08, 0x08, 0x3E, 0x08, 0x08]),
    (b',', [0x00, 0x50, 0x30, 0x00, 0x00]),
    (b'-', [0x08, 0x08, 0x08, 0x08, 0x08]),
    (b'.', [0x00, 0x60, 0x60, 0x00, 0x00]),
    (b'/', [0x20, 0x10, 0x08, 0x04, 0x02]),
    (b'0', [0x3E, 0x51, 0x49, 0x45, 0x3E]),
    (b'1', [0x00, 0x42, 0x7F, 0x40, 0x00]),
    (b'2', [0x42, 0x61, 0x51, 0x49, 0x46]),
    (b'3', [0x21, 0x41, 0x45, 0x4B, 0x31]),
    (b'4', [0x18, 0x14, 0x12, 0x7F, 0x10]),
    (b'5', [0x27, 0x45, 0x45, 0x45, 0x39]),
    (b'6', [0x3C, 0x4A, 0x49, 0x49, 0x30]),
    (b'7', [0x01, 0x71, 0x09, 0x05, 0x03]),
    (b'8', [0x36, 0x49, 0x49, 0x49, 0x36]),
    (b'9', [0x06, 0x49, 0x49, 0x29, 0x1E]),
    (b':', [0x00, 0x36, 0x36, 0x00, 0x00]),
    (b';', [0x00, 0x56, 0x36, 0x00, 0x00]),
    (b'<', [0x08, 0x14, 0x22, 0x41, 0x00]),
    (b'=', [0x14, 0x14, 0x14, 0x14, 0x14]),
    (b'>', [0x00, 0x41, 0x22, 0x14, 0x08]),
    (b'?', [0x02, 0x01, 0x51, 0x09, 0x06]),
    (b'@', [0x32, 0x49, 0x79, 0x41, 0x3E]),
    (b'A', [0x7E, 0x11, 0x11, 0x11, 0x7E]),
    (b'B', [0x7F, 0x49, 0x49, 0x49, 0x36]),
    (b'C', [0x3E, 0x41, 0x41, 0x41, 0x22]),
    (b'D', [0x7F, 0x41, 0x41, 0x22, 0x1C]),
    (b'E', [0x7F, 0x49, 0x49, 0x49, 0x41]),
    (b'F', [0x7F, 0x09, 0x09, 0x09, 0x01]),
    (b'G', [0x3E, 0x41, 0x49, 0x49, 0x7A]),
    (b'H', [0x7F, 0x08, 0x08, 0x08, 0x7F]),
    (b'I', [0x00, 0x41, 0x7F, 0x41, 0x00]),
    (b'J', [0x20, 0x40, 0x41, 0x3F, 0x01]),
    (b'K', [0x7F, 0x08, 0x14, 0x22, 0x41]),
    (b'L', [0x7F, 0x40, 0x40, 0x40, 0x40]),
    (b'M', [0x7F, 0x02, 0x0C, 0x02, 0x7F]),
    (b'N', [0x7F, 0x04, 0x08, 0x10, 0x7F]),
    (b'O', [0x3E, 0x41, 0x41, 0x41, 0x3E]),
    (b'P', [0x7F, 0x09, 0x09, 0x09, 0x06]),
    (b'Q', [0x3E, 0x41, 0x51, 0x21, 0x5E]),
    (b'R', [0x7F, 0x09, 0x19, 0x29, 0x46]),
    (b'S', [0x46, 0x49, 0x49, 0x49, 0x31]),
    (b'T', [0x01, 0x01, 0x7F, 0x01, 0x01]),
    (b'U', [0x3F, 0x40, 0x40, 0x40, 0x3F]),
    (b'V', [0x1F, 0x20, 0x40, 0x20, 0x1F]),
    (b'W', [0x3F, 0x40, 0x38, 0x40, 0x3F]),
    (b'X', [0x63, 0x14, 0x08, 0x14, 0x63]),
    (b'Y', [0x07, 0x08, 0x70, 0x08, 0x07]),
    (b'Z', [0x61, 0x51, 0x49, 0x45, 0x43]),
    (b'[', [0x00, 0x7F, 0x41, 0x41, 0x00]),
    (b'\\', [0x02, 0x04, 0x08, 0x10, 0x20]),
    (b']', [0x00, 0x41, 0x41, 0x7F, 0x00]),
    (b'^', [0x04, 0x02, 0x01, 0x02, 0x04]),
    (b'_', [0x40, 0x40, 0x40, 0x40, 0x40]),
    (b'`', [0x00, 0x01, 0x02, 0x04, 0x00]),
    (b'a', [0x20, 0x54, 0x54, 0x54, 0x78]),
    (b'b', [0x7F, 0x48, 0x44, 0x44, 0x38]),
    (b'c', [0x38, 0x44, 0x44, 0x44, 0x20]),
    (b'd', [0x38, 0x44, 0x44, 0x48, 0x7F]),
    (b'e', [0x38, 0x54, 0x54, 0x54, 0x18]),
    (b'f', [0x08, 0x7E, 0x09, 0x01, 0x02]),
    (b'g', [0x0C, 0x52, 0x52, 0x52, 0x3E]),
    (b'h', [0x7F, 0x08, 0x04, 0x04, 0x78]),
    (b'i', [0x00, 0x44, 0x7D, 0x40, 0x00]),
    (b'j', [0x20, 0x40, 0x44, 0x3D, 0x00]),
    (b'k', [0x7F, 0x10, 0x28, 0x44, 0x00]),
    (b'l', [0x00, 0x41, 0x7F, 0x40, 0x00]),
    (b'm', [0x7C, 0x04, 0x18, 0x04, 0x78]),
    (b'n', [0x7C, 0x08, 0x04, 0x04, 0x78]),
    (b'o', [0x38, 0x44, 0x44, 0x44, 0x38]),
    (b'p', [0x7C, 0x14, 0x14, 0x14, 0x08]),
    (b'q', [0x08, 0x14, 0x14, 0x18, 0x7C]),
    (b'r', [0x7C, 0x08, 0x04, 0x04, 0x08]),
    (b's', [0x48, 0x54, 0x54, 0x54, 0x20]),
    (b't', [0x04, 0x3F, 0x44, 0x40, 0x20]),
    (b'u', [0x3C, 0x40, 0x40, 0x20, 0x7C]),
    (b'v', [0x1C, 0x20, 0x40, 0x20, 0x1C]),
    (b'w', [0x3C, 0x40, 0x30, 0x40, 0x3C]),
    (b'x', [0x44, 0x28, 0x10, 0x28, 0x44]),
    (b'y', [0x0C, 0x50, 0x50, 0x50, 0x3C]),
    (b'z', [0x44, 0x64, 0x54, 0x4C, 0x44]),
    (b'{', [0x00, 0x08, 0x36, 0x41, 0x00]),
    (b'|', [0x00, 0x00, 0x7F, 0x00, 0x00]),
    (b'}', [0x00, 0x41, 0x36, 0x08, 0x00]),
    (b'~', [0x08, 0x04, 0x08, 0x10, 0x08]),
]);

#[cfg(test)]
#[path = "../../tests/unit/font/glyph.rs"]
mod tests;
