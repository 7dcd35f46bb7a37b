use crate::font::text::{TextRenderer, text_width};
use crate::frame::animation::AnimationState;
use crate::frame::config::FrameConfig;
use crate::foundation::error::RasterResult;
use crate::shape::rotated_rect::RectSpec;
use crate::surface::buffer::PixelBuffer;

/// Points inside [`FrameCompositor::render_frame_observed`] where the buffer is handed to the
/// observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameStage {
    /// Background written, nothing else.
    Cleared,
    /// Rotated rectangle drawn.
    ShapeDrawn,
    /// Text drawn; the frame is complete.
    TextDrawn,
}

/// Composes one frame: background, rotating rectangle, centered message.
///
/// Holds only immutable configuration. The animation angle lives in [`AnimationState`], which
/// the caller passes in and gets back advanced by one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameCompositor {
    config: FrameConfig,
}

impl FrameCompositor {
    pub fn new(config: FrameConfig) -> RasterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Rectangle for a `width x height` buffer: centered, with half-extents
    /// `(width / extent_divisor, height / extent_divisor)`.
    pub fn rect_for(&self, width: u32, height: u32, angle: f64) -> RectSpec {
        let to_i32 = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let divisor = self.config.extent_divisor.max(1);
        let half_w = to_i32(width / divisor);
        let half_h = to_i32(height / divisor);
        RectSpec {
            cx: to_i32(width / 2),
            cy: to_i32(height / 2),
            width: half_w.saturating_mul(2),
            height: half_h.saturating_mul(2),
            angle,
            color: self.config.shape_color,
            sampling: self.config.sampling,
        }
    }

    /// Top-left corner of the message: horizontally centered, `text_top` rows down.
    pub fn text_origin(&self, width: u32) -> (i32, i32) {
        let x = (i64::from(width) - text_width(&self.config.message)) / 2;
        let x = i32::try_from(x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)))
            .unwrap_or_default();
        (x, self.config.text_top)
    }

    /// Render one frame into `buf` and return the state for the next frame.
    ///
    /// Steps, in order: clear the visible region, draw the rectangle at `state.angle`, advance
    /// the angle, draw the message. A zero-area buffer draws nothing but still advances.
    #[tracing::instrument(
        level = "trace",
        skip(self, buf),
        fields(width = buf.width(), height = buf.height(), stride = buf.stride())
    )]
    pub fn render_frame(&self, buf: &mut PixelBuffer<'_>, state: AnimationState) -> AnimationState {
        self.render_frame_observed(buf, state, |_, _| {})
    }

    /// [`Self::render_frame`], handing the buffer to `observe` after each [`FrameStage`].
    pub fn render_frame_observed(
        &self,
        buf: &mut PixelBuffer<'_>,
        state: AnimationState,
        mut observe: impl FnMut(FrameStage, &PixelBuffer<'_>),
    ) -> AnimationState {
        buf.fill(self.config.background);
        observe(FrameStage::Cleared, buf);

        self.rect_for(buf.width(), buf.height(), state.angle).draw(buf);
        observe(FrameStage::ShapeDrawn, buf);

        let next = state.advance(self.config.angle_step);

        let (x, y) = self.text_origin(buf.width());
        TextRenderer::default().draw_text(buf, x, y, &self.config.message, self.config.text_color);
        observe(FrameStage::TextDrawn, buf);

        next
    }
}

/// Render one frame with [`FrameConfig::default`].
pub fn render_frame(buf: &mut PixelBuffer<'_>, state: AnimationState) -> AnimationState {
    FrameCompositor::default().render_frame(buf, state)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/compositor.rs"]
mod tests;
