//! Host coordinator
//!
//! Owns the single whisper slot and the alert subsystem. It decides when a
//! whisper is shown, replaced or cleared, forwards controller events to the
//! renderer and clears its slot once the controller reports removal.

use thiserror::Error;
use tracing::debug;

use crate::domain::alert::{Alert, AlertResponse};
use crate::domain::whisper::{WhisperCategory, WhisperDraft, WhisperEvent, WhisperId};

use super::controller::{ControllerError, WhisperHandle};
use super::ports::{RenderError, WhisperRenderer};

/// Errors from the host coordinator
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Whisper controller unavailable: {0}")]
    Controller(#[from] ControllerError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Screen-level owner of at most one whisper and at most one alert
pub struct HostCoordinator<R>
where
    R: WhisperRenderer,
{
    whisper: WhisperHandle,
    renderer: R,
    slot: Option<WhisperId>,
    alert: Option<Alert>,
}

impl<R> HostCoordinator<R>
where
    R: WhisperRenderer,
{
    /// Create a host driving the given controller
    pub fn new(whisper: WhisperHandle, renderer: R) -> Self {
        Self {
            whisper,
            renderer,
            slot: None,
            alert: None,
        }
    }

    /// Id of the whisper currently occupying the slot
    pub fn slot(&self) -> Option<WhisperId> {
        self.slot
    }

    /// The alert currently shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn whisper(&self) -> &WhisperHandle {
        &self.whisper
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Show a whisper, replacing whatever occupies the slot
    pub fn show(&mut self, draft: WhisperDraft) -> Result<WhisperId, HostError> {
        let id = self.whisper.show(draft.into_whisper())?;
        if let Some(previous) = self.slot.replace(id) {
            debug!(%previous, %id, "whisper superseded");
        }
        Ok(id)
    }

    /// Revise the visible whisper. Ignored by the controller unless visible.
    pub fn request_whisper_update(
        &self,
        message: impl Into<String>,
        category: WhisperCategory,
    ) -> Result<(), HostError> {
        self.whisper.update(message, category)?;
        Ok(())
    }

    pub fn tap_whisper(&self) -> Result<(), HostError> {
        self.whisper.tap()?;
        Ok(())
    }

    pub fn close_whisper(&self) -> Result<(), HostError> {
        self.whisper.request_dismiss()?;
        Ok(())
    }

    /// Close the alert and start dismissing the live whisper
    pub async fn clear_all(&mut self) -> Result<(), HostError> {
        if self.alert.take().is_some() {
            self.renderer.render_alert(None).await?;
        }
        if self.slot.is_some() {
            self.whisper.request_dismiss()?;
        }
        Ok(())
    }

    /// Present an alert, replacing any shown one
    pub async fn present_alert(&mut self, alert: Alert) -> Result<(), HostError> {
        self.renderer.render_alert(Some(&alert)).await?;
        self.alert = Some(alert);
        Ok(())
    }

    /// Answer the shown alert.
    ///
    /// Returns the id of the follow-up whisper when one was shown.
    pub async fn respond_to_alert(
        &mut self,
        response: AlertResponse,
    ) -> Result<Option<WhisperId>, HostError> {
        let Some(alert) = self.alert.take() else {
            return Ok(None);
        };
        self.renderer.render_alert(None).await?;

        match alert.follow_up_for(response).cloned() {
            Some(draft) => self.show(draft).map(Some),
            None => Ok(None),
        }
    }

    pub async fn confirm_alert(&mut self) -> Result<Option<WhisperId>, HostError> {
        self.respond_to_alert(AlertResponse::Confirm).await
    }

    pub async fn cancel_alert(&mut self) -> Result<(), HostError> {
        self.respond_to_alert(AlertResponse::Cancel).await.map(|_| ())
    }

    /// Consume one controller event
    pub async fn handle_event(&mut self, event: WhisperEvent) -> Result<(), HostError> {
        if let WhisperEvent::Removed { id } = event {
            if self.slot == Some(id) {
                self.slot = None;
                debug!(%id, "whisper slot cleared");
            }
        }
        self.renderer.render(&event).await?;
        Ok(())
    }
}
