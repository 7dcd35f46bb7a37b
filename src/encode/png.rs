use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RasterError, RasterResult};
use crate::surface::frame::FrameRGBA;

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> RasterResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frame` as an RGBA8 PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> RasterResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(RasterError::encode(format!(
            "cannot write empty {}x{} frame to '{}'",
            frame.width,
            frame.height,
            path.display()
        )));
    }
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RasterError::encode(format!("write png '{}': {e}", path.display())))
}

/// Writes each pushed frame to `<dir>/<prefix>_<index>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            written: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> RasterResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output directory '{}'", self.dir.display()))?;
        tracing::info!(
            dir = %self.dir.display(),
            width = cfg.width,
            height = cfg.height,
            "writing png sequence"
        );
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> RasterResult<()> {
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> RasterResult<()> {
        tracing::info!(frames = self.written.len(), "png sequence complete");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
