use super::*;

const BG: u32 = 0;
const PAD: u32 = 0xDEAD_BEEF;

fn lit_cells(cells: &[u32], width: usize, height: usize, stride: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if cells[y * stride + x] != BG {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn hi_at_origin_stays_inside_its_two_cells() {
    let (w, h) = (32usize, 12usize);
    let mut cells = vec![BG; w * h];
    let mut buf = PixelBuffer::packed(&mut cells, w as u32, h as u32).unwrap();
    draw_text(&mut buf, 0, 0, "Hi", Color::WHITE);

    let lit = lit_cells(&cells, w, h, w);
    assert!(!lit.is_empty());
    for (x, y) in lit {
        assert!(x < 5 || (6..11).contains(&x), "column {x} lit");
        assert!(y < 7, "row {y} lit");
    }
}

#[test]
fn advance_is_six_pixels_regardless_of_glyph() {
    let (w, h) = (64usize, 8usize);
    let mut cells = vec![BG; w * h];
    let mut buf = PixelBuffer::packed(&mut cells, w as u32, h as u32).unwrap();
    // 'l' is narrow and the space is empty; the 'H' after them must still land at 2 * 6.
    draw_text(&mut buf, 0, 0, "l H", Color::WHITE);

    let h_glyph = lookup_glyph('H');
    for (col, row) in h_glyph.lit_pixels() {
        assert_eq!(cells[row * w + 12 + col], Color::WHITE.0);
    }
    assert_eq!(text_width("l H"), 18);
    assert_eq!(text_width(""), 0);
}

fn lookup_glyph(ch: char) -> Glyph {
    crate::font::glyph::lookup(u32::from(ch))
}

#[test]
fn empty_text_is_a_noop() {
    let mut cells = vec![BG; 16];
    let mut buf = PixelBuffer::packed(&mut cells, 4, 4).unwrap();
    draw_text(&mut buf, 0, 0, "", Color::WHITE);
    assert!(cells.iter().all(|&c| c == BG));
}

#[test]
fn glyphs_are_clipped_at_every_edge() {
    let (w, h, stride) = (10usize, 5usize, 12usize);
    let mut cells = vec![PAD; h * stride];
    let mut buf = PixelBuffer::new(&mut cells, w as u32, h as u32, stride as u32).unwrap();
    buf.fill(Color(BG));
    for (x, y) in [(-3, -3), (7, 2), (-100, 0), (0, 4), (i32::MAX - 1, 0), (i32::MIN, i32::MIN)] {
        draw_text(&mut buf, x, y, "HHHH", Color::WHITE);
    }
    for row in 0..h {
        assert_eq!(&cells[row * stride + w..(row + 1) * stride], &[PAD, PAD]);
    }
    assert!(lit_cells(&cells, w, h, stride).iter().all(|&(x, y)| x < w && y < h));
}

#[test]
fn undefined_characters_render_blank_but_advance() {
    let (w, h) = (24usize, 8usize);
    let mut cells = vec![BG; w * h];
    let mut buf = PixelBuffer::packed(&mut cells, w as u32, h as u32).unwrap();
    draw_text(&mut buf, 0, 0, "\u{1}é!", Color::WHITE);

    let lit = lit_cells(&cells, w, h, w);
    assert!(!lit.is_empty());
    assert!(lit.iter().all(|&(x, _)| (12..17).contains(&x)));
}

#[test]
fn renderer_uses_its_own_table() {
    let table = GlyphTable::from_entries(&[(b'#', [0x01, 0, 0, 0, 0])]);
    let mut cells = vec![BG; 8 * 8];
    let mut buf = PixelBuffer::packed(&mut cells, 8, 8).unwrap();
    TextRenderer::new(&table).draw_text(&mut buf, 1, 1, "#A", Color(5));
    let lit = lit_cells(&cells, 8, 8, 8);
    assert_eq!(lit, vec![(1, 1)]);
}
