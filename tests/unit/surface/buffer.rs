use super::*;

const PAD: u32 = 0xDEAD_BEEF;

#[test]
fn rejects_stride_below_width_and_short_slices() {
    let mut cells = vec![0u32; 64];
    assert!(PixelBuffer::new(&mut cells, 8, 4, 7).is_err());
    assert!(PixelBuffer::new(&mut cells, 8, 9, 8).is_err());
    assert!(PixelBuffer::new(&mut cells, 8, 8, 8).is_ok());
}

#[test]
fn last_row_may_omit_trailing_padding() {
    // 2 rows of stride 6, but the final row only needs its 4 visible cells.
    let mut cells = vec![0u32; 10];
    let mut buf = PixelBuffer::new(&mut cells, 4, 2, 6).unwrap();
    buf.put_pixel(3, 1, Color::WHITE);
    assert_eq!(buf.pixel(3, 1), Some(Color::WHITE));
    assert_eq!(cells[9], Color::WHITE.0);
}

#[test]
fn put_pixel_uses_stride_addressing() {
    let mut cells = vec![0u32; 3 * 5];
    let mut buf = PixelBuffer::new(&mut cells, 4, 3, 5).unwrap();
    buf.put_pixel(2, 1, Color(7));
    assert_eq!(cells[5 + 2], 7);
    assert_eq!(cells[4 + 2], 0);
}

#[test]
fn out_of_bounds_writes_are_skipped() {
    let mut cells = vec![PAD; 3 * 5];
    let mut buf = PixelBuffer::new(&mut cells, 4, 3, 5).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX), (i32::MAX, 1)] {
        buf.put_pixel(x, y, Color::WHITE);
        assert_eq!(buf.pixel(x, y), None);
    }
    assert!(cells.iter().all(|&c| c == PAD));
}

#[test]
fn fill_leaves_padding_untouched() {
    let mut cells = vec![PAD; 3 * 6];
    let mut buf = PixelBuffer::new(&mut cells, 4, 3, 6).unwrap();
    buf.fill(Color::BLACK);
    assert!(buf.rows().flatten().all(|&c| c == Color::BLACK.0));
    for row in 0..3 {
        assert_eq!(&cells[row * 6 + 4..row * 6 + 6], &[PAD, PAD]);
    }
}

#[test]
fn zero_area_buffers_are_inert() {
    let mut cells: Vec<u32> = Vec::new();
    let mut buf = PixelBuffer::new(&mut cells, 0, 5, 4).unwrap();
    assert!(buf.is_empty());
    buf.fill(Color::WHITE);
    buf.put_pixel(0, 0, Color::WHITE);
    assert_eq!(buf.rows().count(), 0);
    assert!(buf.to_rgba8().is_empty());
}

#[test]
fn rgba8_export_skips_padding() {
    let mut cells = vec![PAD; 2 * 3];
    let mut buf = PixelBuffer::new(&mut cells, 2, 2, 3).unwrap();
    buf.fill(Color::from_rgba(1, 2, 3, 4));
    let bytes = buf.to_rgba8();
    assert_eq!(bytes.len(), 2 * 2 * 4);
    assert!(bytes.chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
}
