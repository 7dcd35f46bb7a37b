//! Stride-aware view over externally owned 32-bit pixel memory.

use crate::foundation::core::Color;
use crate::foundation::error::{RasterError, RasterResult};

/// A borrowed pixel grid with `width x height` visible cells and `stride` cells per row.
///
/// Cell `(x, y)` lives at `y * stride + x`. The `stride - width` padding cells at the end of
/// each row belong to the owner of the memory and are never written by any drawing routine.
///
/// The view borrows its backing slice, so it cannot outlive the frame it was lent for.
pub struct PixelBuffer<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `pixels` as a `width x height` grid with `stride` cells per row.
    ///
    /// Fails when `stride < width` or when `pixels` is too short to address the last visible
    /// cell (`stride * (height - 1) + width`).
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32, stride: u32) -> RasterResult<Self> {
        if stride < width {
            return Err(RasterError::validation(format!(
                "stride {stride} must be >= width {width}"
            )));
        }
        let required = required_len(width, height, stride);
        if pixels.len() < required {
            return Err(RasterError::validation(format!(
                "pixel slice holds {} cells, {width}x{height} with stride {stride} needs {required}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// Wrap a tightly packed buffer (`stride == width`).
    pub fn packed(pixels: &'a mut [u32], width: u32, height: u32) -> RasterResult<Self> {
        Self::new(pixels, width, height, width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// True when there is no visible cell to draw into.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize)
    }

    /// Write one pixel. Coordinates outside `[0, width) x [0, height)` are skipped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.0;
        }
    }

    /// Read one visible pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| Color(self.pixels[idx]))
    }

    /// Fill every visible cell with `color`, row by row. Padding is left alone.
    pub fn fill(&mut self, color: Color) {
        let width = self.width as usize;
        let stride = self.stride as usize;
        if width == 0 {
            return;
        }
        for row in 0..self.height as usize {
            let start = row * stride;
            self.pixels[start..start + width].fill(color.0);
        }
    }

    /// Iterate the visible part of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        let width = self.width as usize;
        let stride = self.stride as usize;
        let height = if self.is_empty() { 0 } else { self.height as usize };
        (0..height).map(move |row| {
            let start = row * stride;
            &self.pixels[start..start + width]
        })
    }

    /// Copy the visible region out as tightly packed RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        rgba8_from_cells(self.pixels, self.width, self.height, self.stride)
    }
}

/// Visible `width x height` cells of a strided slice as tightly packed RGBA8 bytes.
pub(crate) fn rgba8_from_cells(cells: &[u32], width: u32, height: u32, stride: u32) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let (width, stride) = (width as usize, stride as usize);
    let mut out = Vec::with_capacity(width * height as usize * 4);
    for row in 0..height as usize {
        let start = row * stride;
        for &px in &cells[start..start + width] {
            out.extend_from_slice(&Color(px).to_rgba());
        }
    }
    out
}

/// Cells a backing slice must hold for the given geometry.
pub fn required_len(width: u32, height: u32, stride: u32) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    (height as usize - 1) * stride as usize + width as usize
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
