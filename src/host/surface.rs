use crate::foundation::core::Color;
use crate::foundation::error::{RasterError, RasterResult};
use crate::host::lifecycle::LifecycleHandler;
use crate::surface::buffer::{PixelBuffer, rgba8_from_cells, required_len};
use crate::surface::frame::FrameRGBA;

/// A presentable pixel target that lends out one buffer per frame.
pub trait Surface {
    /// Borrow the drawable buffer for one frame, or `None` when there is nothing to draw into.
    fn lock(&mut self) -> RasterResult<Option<PixelBuffer<'_>>>;

    /// Publish the contents written since the last `lock`.
    fn present(&mut self) -> RasterResult<()>;

    /// Copy of the most recently presented visible region, when the surface can provide one.
    fn snapshot(&self) -> Option<FrameRGBA> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Geometry {
    width: u32,
    height: u32,
    stride: u32,
}

/// Headless surface backed by a `Vec<u32>`.
///
/// Rows carry `stride_padding` extra cells past the visible width, so drawing code always runs
/// against a real stride. Padding cells keep the initial fill for the lifetime of an attachment.
#[derive(Clone, Debug)]
pub struct OffscreenSurface {
    pixels: Vec<u32>,
    geometry: Option<Geometry>,
    stride_padding: u32,
    initial_fill: Color,
    presented: u64,
}

impl OffscreenSurface {
    pub fn new(stride_padding: u32) -> Self {
        Self {
            pixels: Vec::new(),
            geometry: None,
            stride_padding,
            initial_fill: Color::TRANSPARENT,
            presented: 0,
        }
    }

    /// Value written to every cell, padding included, on each attach.
    pub fn with_initial_fill(mut self, fill: Color) -> Self {
        self.initial_fill = fill;
        self
    }

    /// Allocate `stride * height` cells for a `width x height` drawable.
    pub fn attach(&mut self, width: u32, height: u32, stride: u32) -> RasterResult<()> {
        if stride < width {
            return Err(RasterError::surface(format!(
                "stride {stride} must be >= width {width}"
            )));
        }
        let cells = (stride as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| RasterError::surface(format!("{stride}x{height} surface is too large")))?;
        self.pixels.clear();
        self.pixels.resize(cells, self.initial_fill.0);
        self.geometry = Some(Geometry {
            width,
            height,
            stride,
        });
        Ok(())
    }

    pub fn detach(&mut self) {
        self.geometry = None;
        self.pixels = Vec::new();
    }

    pub fn is_attached(&self) -> bool {
        self.geometry.is_some()
    }

    /// `(width, height, stride)` while attached.
    pub fn geometry(&self) -> Option<(u32, u32, u32)> {
        self.geometry.map(|g| (g.width, g.height, g.stride))
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// The cells past the visible width of every row, top to bottom.
    pub fn padding_cells(&self) -> Vec<u32> {
        let Some(g) = self.geometry else {
            return Vec::new();
        };
        let (width, stride) = (g.width as usize, g.stride as usize);
        self.pixels
            .chunks(stride.max(1))
            .take(g.height as usize)
            .flat_map(|row| row.get(width..).unwrap_or(&[]).iter().copied())
            .collect()
    }
}

impl Default for OffscreenSurface {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Surface for OffscreenSurface {
    fn lock(&mut self) -> RasterResult<Option<PixelBuffer<'_>>> {
        let Some(g) = self.geometry else {
            return Ok(None);
        };
        if g.width == 0 || g.height == 0 {
            return Ok(None);
        }
        let len = required_len(g.width, g.height, g.stride);
        PixelBuffer::new(&mut self.pixels[..len], g.width, g.height, g.stride).map(Some)
    }

    fn present(&mut self) -> RasterResult<()> {
        if self.geometry.is_none() {
            return Err(RasterError::surface("present called with no window attached"));
        }
        self.presented += 1;
        Ok(())
    }

    fn snapshot(&self) -> Option<FrameRGBA> {
        let g = self.geometry?;
        if g.width == 0 || g.height == 0 {
            return None;
        }
        Some(FrameRGBA {
            width: g.width,
            height: g.height,
            data: rgba8_from_cells(&self.pixels, g.width, g.height, g.stride),
        })
    }
}

impl LifecycleHandler for OffscreenSurface {
    fn window_created(&mut self, width: u32, height: u32) {
        let stride = width.saturating_add(self.stride_padding);
        tracing::info!(width, height, stride, "window created");
        if let Err(e) = self.attach(width, height, stride) {
            tracing::warn!(error = %e, "failed to attach surface");
        }
    }

    fn window_destroyed(&mut self) {
        tracing::info!("window destroyed");
        self.detach();
    }

    fn focus_gained(&mut self) {
        tracing::info!("focus gained");
    }

    fn focus_lost(&mut self) {
        tracing::info!("focus lost");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/surface.rs"]
mod tests;
