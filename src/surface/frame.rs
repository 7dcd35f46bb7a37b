use crate::surface::buffer::PixelBuffer;

/// A presented frame copied out as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major. Stride padding is not included.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn from_buffer(buf: &PixelBuffer<'_>) -> Self {
        Self {
            width: buf.width(),
            height: buf.height(),
            data: buf.to_rgba8(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(off..off + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
