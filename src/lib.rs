//! softraster draws an animated test pattern into caller-owned 32-bit pixel memory.
//!
//! Each frame clears the visible region, draws a filled rectangle rotated about the buffer
//! center, and writes a centered line of 5x7 bitmap text. Everything is integer pixel writes
//! into a stride-aware [`PixelBuffer`]; nothing here allocates per pixel or talks to a GPU.
//!
//! - Wrap the memory lent by your window system in a [`PixelBuffer`]
//! - Call [`FrameCompositor::render_frame`] once per frame, threading [`AnimationState`]
//! - Or drive the headless [`host`] loop and collect frames with a [`FrameSink`]
#![forbid(unsafe_code)]

mod font;
mod foundation;
mod frame;
mod shape;
mod surface;

/// Frame sinks.
pub mod encode;
/// Headless host layer.
pub mod host;

pub use crate::foundation::core::{Affine, Color, Fps, FrameIndex, Point};
pub use crate::foundation::error::{RasterError, RasterResult};

pub use crate::font::glyph::{
    FONT_5X7, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, GlyphTable, lookup,
};
pub use crate::font::text::{TextRenderer, draw_glyph, draw_text, text_width};
pub use crate::frame::animation::{AnimationState, DEFAULT_ANGLE_STEP};
pub use crate::frame::compositor::{FrameCompositor, FrameStage, render_frame};
pub use crate::frame::config::{
    DEFAULT_EXTENT_DIVISOR, DEFAULT_MESSAGE, DEFAULT_TEXT_TOP, FrameConfig,
};
pub use crate::shape::rotated_rect::{
    RectSpec, Sampling, draw_rotated_rect, draw_rotated_rect_inverse,
};
pub use crate::surface::buffer::{PixelBuffer, required_len};
pub use crate::surface::frame::FrameRGBA;

pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, NullSink, SinkConfig};
pub use crate::host::lifecycle::{EventSource, LifecycleEvent, LifecycleHandler, ScriptedEvents};
pub use crate::host::runner::{RunOpts, RunStats, run};
pub use crate::host::surface::{OffscreenSurface, Surface};
