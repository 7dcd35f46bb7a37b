use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Color;
use crate::foundation::error::{RasterError, RasterResult};
use crate::frame::animation::DEFAULT_ANGLE_STEP;
use crate::shape::rotated_rect::Sampling;

/// Message drawn when none is configured.
pub const DEFAULT_MESSAGE: &str = "Hello, World!";
/// Distance in pixels from the top edge to the text baseline row 0.
pub const DEFAULT_TEXT_TOP: i32 = 20;
/// Rectangle half-extents are the buffer dimensions divided by this.
pub const DEFAULT_EXTENT_DIVISOR: u32 = 4;

/// Everything a [`crate::FrameCompositor`] needs besides the buffer and animation state.
///
/// Loaded from JSON; every field is optional and unknown fields are rejected:
///
/// ```json
/// { "background": "#101820", "shape_color": [255, 200, 0], "message": "Hi", "angle_step": 0.05 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Clear color for the visible region.
    pub background: Color,
    /// Fill of the rotating rectangle.
    pub shape_color: Color,
    /// Color of the message text.
    pub text_color: Color,
    /// Single line of ASCII text, centered horizontally.
    pub message: String,
    /// Radians added to the angle after the shape is drawn.
    pub angle_step: f64,
    /// Top row of the text.
    pub text_top: i32,
    /// Divisor applied to width/height to get the rectangle half-extents.
    pub extent_divisor: u32,
    /// Rectangle rasterization strategy.
    pub sampling: Sampling,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            shape_color: Color::WHITE,
            text_color: Color::WHITE,
            message: DEFAULT_MESSAGE.to_owned(),
            angle_step: DEFAULT_ANGLE_STEP,
            text_top: DEFAULT_TEXT_TOP,
            extent_divisor: DEFAULT_EXTENT_DIVISOR,
            sampling: Sampling::Forward,
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> RasterResult<()> {
        if !self.angle_step.is_finite() {
            return Err(RasterError::validation("angle_step must be finite"));
        }
        if self.extent_divisor == 0 {
            return Err(RasterError::validation("extent_divisor must be > 0"));
        }
        if let Some(ch) = self.message.chars().find(|c| !c.is_ascii()) {
            return Err(RasterError::validation(format!(
                "message must be ASCII, found {ch:?}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> RasterResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| RasterError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> RasterResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read frame config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/config.rs"]
mod tests;
