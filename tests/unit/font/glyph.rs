use super::*;

#[test]
fn every_printable_ascii_except_space_is_defined() {
    for code in 0x21u32..=0x7E {
        assert!(FONT_5X7.is_defined(code), "code {code:#04x} has no glyph");
    }
    assert!(lookup(u32::from(b' ')).is_blank());
}

#[test]
fn control_codes_and_out_of_range_codes_are_blank() {
    for code in (0u32..0x20).chain([0x7F, 0x80, 0xFF, 0x1F600, u32::MAX]) {
        assert_eq!(lookup(code), Glyph::BLANK, "code {code:#x}");
    }
    assert_eq!(FONT_5X7.lookup_char('é'), Glyph::BLANK);
}

#[test]
fn column_masks_fit_in_seven_bits() {
    for code in 0..TABLE_LEN as u32 {
        for col in lookup(code).columns() {
            assert!(col < 0x80);
        }
    }
    assert_eq!(Glyph::from_columns([0xFF; 5]).columns(), [0x7F; 5]);
}

#[test]
fn bit_zero_is_the_top_row() {
    // '!' is a single column with rows 0..=4 and 6 lit.
    let bang = lookup(u32::from(b'!'));
    let lit: Vec<_> = bang.lit_pixels().collect();
    assert_eq!(lit, vec![(2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 6)]);
    assert!(bang.is_lit(2, 0));
    assert!(!bang.is_lit(2, 5));
    assert!(!bang.is_lit(5, 0));
    assert!(!bang.is_lit(2, 7));
}

#[test]
fn custom_tables_ignore_codes_past_the_end() {
    let table = GlyphTable::from_entries(&[(b'x', [1, 0, 0, 0, 0]), (200, [0x7F; 5])]);
    assert!(table.is_defined(u32::from(b'x')));
    assert!(!table.is_defined(200));
    assert!(!table.is_defined(u32::from(b'y')));
    assert_eq!(GlyphTable::default(), FONT_5X7);
}

#[test]
fn lowercase_bowls_sit_on_the_baseline_row() {
    for ch in ['a', 'b', 'c', 'd', 'e', 'o'] {
        let lowest = FONT_5X7
            .lookup_char(ch)
            .lit_pixels()
            .filter(|&(col, _)| col == 1)
            .map(|(_, row)| row)
            .max();
        assert_eq!(lowest, Some(6), "{ch}");
    }
    assert_eq!(lookup(u32::from(b'd')).columns(), [0x38, 0x44, 0x44, 0x48, 0x7F]);
}
