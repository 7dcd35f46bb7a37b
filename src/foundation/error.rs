/// Convenience result type used across softraster.
pub type RasterResult<T> = Result<T, RasterError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Drawing itself never fails: out-of-range writes are clipped and unknown characters render
/// blank. Errors only surface when a buffer view is built, a surface is driven, or configuration
/// and frames cross an IO boundary.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// Buffer geometry or configuration that violates a precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures reported by a surface collaborator (lock, present, attach).
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors while encoding frames to an image format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RasterError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`RasterError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RasterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
