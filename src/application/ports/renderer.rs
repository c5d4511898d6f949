//! Renderer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::Alert;
use crate::domain::whisper::WhisperEvent;

/// Rendering errors
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(String),

    #[error("Failed to serialize event: {0}")]
    Serialize(String),
}

/// Port for presenting whispers and alerts
#[async_trait]
pub trait WhisperRenderer: Send + Sync {
    /// Present a lifecycle event of the live whisper.
    ///
    /// # Arguments
    /// * `event` - The event emitted by the whisper controller
    async fn render(&self, event: &WhisperEvent) -> Result<(), RenderError>;

    /// Present the current alert, or clear it when `None`.
    async fn render_alert(&self, alert: Option<&Alert>) -> Result<(), RenderError>;
}

/// Blanket implementation for boxed renderer types
#[async_trait]
impl WhisperRenderer for Box<dyn WhisperRenderer> {
    async fn render(&self, event: &WhisperEvent) -> Result<(), RenderError> {
        self.as_ref().render(event).await
    }

    async fn render_alert(&self, alert: Option<&Alert>) -> Result<(), RenderError> {
        self.as_ref().render_alert(alert).await
    }
}
