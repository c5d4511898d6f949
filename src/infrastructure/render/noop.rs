//! No-op renderer adapter
//!
//! Used when output is disabled.

use async_trait::async_trait;

use crate::application::ports::{RenderError, WhisperRenderer};
use crate::domain::alert::Alert;
use crate::domain::whisper::WhisperEvent;

/// Renderer that discards everything
pub struct NoOpRenderer;

impl NoOpRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhisperRenderer for NoOpRenderer {
    async fn render(&self, _event: &WhisperEvent) -> Result<(), RenderError> {
        Ok(())
    }

    async fn render_alert(&self, _alert: Option<&Alert>) -> Result<(), RenderError> {
        Ok(())
    }
}
