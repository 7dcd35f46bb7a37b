/// Per-frame rotation increment in radians.
pub const DEFAULT_ANGLE_STEP: f64 = 0.02;

/// Animation state threaded from one frame to the next by the caller.
///
/// The angle is never wrapped; only its sine and cosine are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// Current rotation in radians.
    pub angle: f64,
    /// Frames composited so far.
    pub frame: u64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle(angle: f64) -> Self {
        Self { angle, frame: 0 }
    }

    /// State after one more frame.
    #[must_use]
    pub fn advance(self, step: f64) -> Self {
        Self {
            angle: self.angle + step,
            frame: self.frame.saturating_add(1),
        }
    }

    /// State after `frames` more frames, accumulated one step at a time.
    #[must_use]
    pub fn advance_by(self, step: f64, frames: u64) -> Self {
        (0..frames).fold(self, |s, _| s.advance(step))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/animation.rs"]
mod tests;
