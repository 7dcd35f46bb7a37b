//! Filled rotated rectangles.
//!
//! The local sample grid is every integer point `(x, y)` with `|x| <= width / 2` and
//! `|y| <= height / 2` (integer division), so a rectangle covers `2 * (width / 2) + 1` by
//! `2 * (height / 2) + 1` samples.
//!
//! Two ways to put that grid on screen:
//!
//! - [`Sampling::Forward`] rotates each local sample and truncates it onto the pixel grid. Along
//!   rotated edges two samples can truncate to the same pixel and leave a neighbouring pixel
//!   unwritten, so small gaps show up at most non-axis-aligned angles.
//! - [`Sampling::Inverse`] walks the destination bounding box, rotates each pixel back into local
//!   space and rounds it to the nearest sample. The fill is gap-free, and identical to
//!   `Forward` at `angle = 0`.

use crate::foundation::core::{Affine, Color, Point};
use crate::surface::buffer::PixelBuffer;

/// How the local sample grid is mapped onto destination pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Scatter local samples into the buffer (may leave edge gaps when rotated).
    #[default]
    Forward,
    /// Gather destination pixels from local space (gap-free).
    Inverse,
}

/// One filled rectangle: center, full extents, rotation in radians and fill.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectSpec {
    pub cx: i32,
    pub cy: i32,
    pub width: i32,
    pub height: i32,
    pub angle: f64,
    pub color: Color,
    #[serde(default)]
    pub sampling: Sampling,
}

impl RectSpec {
    /// Half-extents of the local sample grid.
    pub fn half_extents(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    pub fn draw(&self, buf: &mut PixelBuffer<'_>) {
        let Self {
            cx,
            cy,
            width,
            height,
            angle,
            color,
            sampling,
        } = *self;
        match sampling {
            Sampling::Forward => draw_rotated_rect(buf, cx, cy, width, height, angle, color),
            Sampling::Inverse => {
                draw_rotated_rect_inverse(buf, cx, cy, width, height, angle, color);
            }
        }
    }
}

/// Fill a rectangle centered on `(cx, cy)` and rotated by `angle` radians, by forward mapping.
///
/// Each local sample `(x, y)` lands on `(trunc(x cos - y sin) + cx, trunc(x sin + y cos) + cy)`.
/// Truncation is toward zero and happens before the center offset is added.
pub fn draw_rotated_rect(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    width: i32,
    height: i32,
    angle: f64,
    color: Color,
) {
    if buf.is_empty() || !angle.is_finite() {
        return;
    }
    let (hw, hh) = (width / 2, height / 2);
    if hw < 0 || hh < 0 {
        return;
    }

    // Rotation keeps distances and truncation only pulls toward the center, so samples farther
    // out than this can never land inside the buffer.
    let reach = reach_from(buf, cx, cy);
    let (hw, hh) = (hw.min(reach), hh.min(reach));

    let rot = Affine::rotate(angle);
    for y in -hh..=hh {
        for x in -hw..=hw {
            let p = rot * Point::new(f64::from(x), f64::from(y));
            buf.put_pixel(
                (p.x as i32).saturating_add(cx),
                (p.y as i32).saturating_add(cy),
                color,
            );
        }
    }
}

/// Fill the same sample grid as [`draw_rotated_rect`], by inverse mapping.
///
/// Destination pixel `(px, py)` is lit when `(px - cx, py - cy)` rotated by `-angle` rounds to a
/// sample inside the grid.
pub fn draw_rotated_rect_inverse(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    width: i32,
    height: i32,
    angle: f64,
    color: Color,
) {
    if buf.is_empty() || !angle.is_finite() {
        return;
    }
    let (hw, hh) = (width / 2, height / 2);
    if hw < 0 || hh < 0 {
        return;
    }

    let fwd = Affine::rotate(angle);
    let inv = Affine::rotate(-angle);

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for (x, y) in [(-hw, -hh), (hw, -hh), (-hw, hh), (hw, hh)] {
        let p = fwd * Point::new(f64::from(x), f64::from(y));
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let max_px = i64::from(buf.width()) - 1;
    let max_py = i64::from(buf.height()) - 1;
    let clamp = |v: f64, center: i32, hi: i64| -> i64 {
        (v as i64).saturating_add(i64::from(center)).clamp(0, hi)
    };
    let x0 = clamp(min_x.floor() - 1.0, cx, max_px);
    let x1 = clamp(max_x.ceil() + 1.0, cx, max_px);
    let y0 = clamp(min_y.floor() - 1.0, cy, max_py);
    let y1 = clamp(max_y.ceil() + 1.0, cy, max_py);

    let (hw, hh) = (f64::from(hw), f64::from(hh));
    for py in y0..=y1 {
        for px in x0..=x1 {
            let local = inv * Point::new((px - i64::from(cx)) as f64, (py - i64::from(cy)) as f64);
            if local.x.round().abs() <= hw && local.y.round().abs() <= hh {
                // px and py were clamped into the buffer, so they fit in i32.
                buf.put_pixel(px as i32, py as i32, color);
            }
        }
    }
}

/// Upper bound on the local distance a sample can have and still land in `buf`.
fn reach_from(buf: &PixelBuffer<'_>, cx: i32, cy: i32) -> i32 {
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let far_x = cx.abs().max((i64::from(buf.width()) - cx).abs());
    let far_y = cy.abs().max((i64::from(buf.height()) - cy).abs());
    let reach = (far_x as f64).hypot(far_y as f64).ceil() + 2.0;
    if reach >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        reach as i32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/rotated_rect.rs"]
mod tests;
