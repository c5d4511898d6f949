//! Alert value object
//!
//! Alerts are untimed: they stay until confirmed or cancelled. Confirming may
//! carry a follow-up whisper, the only link between the two subsystems.

use serde::Serialize;

use crate::domain::whisper::WhisperDraft;

/// How the user answered an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertResponse {
    Confirm,
    Cancel,
}

/// A modal confirmation popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Whisper to show once the alert is confirmed
    pub follow_up: Option<WhisperDraft>,
}

impl Alert {
    /// Create an alert with default button labels
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            follow_up: None,
        }
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn with_follow_up(mut self, draft: WhisperDraft) -> Self {
        self.follow_up = Some(draft);
        self
    }

    /// The follow-up whisper to show for a response, if any
    pub fn follow_up_for(&self, response: AlertResponse) -> Option<&WhisperDraft> {
        match response {
            AlertResponse::Confirm => self.follow_up.as_ref(),
            AlertResponse::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_has_default_labels() {
        let alert = Alert::new("Delete", "Delete this draft?");
        assert_eq!(alert.confirm_label, "OK");
        assert_eq!(alert.cancel_label, "Cancel");
        assert!(alert.follow_up.is_none());
    }

    #[test]
    fn follow_up_only_on_confirm() {
        let alert = Alert::new("Delete", "Delete this draft?")
            .with_labels("Delete", "Keep")
            .with_follow_up(WhisperDraft::success("Draft deleted"));

        assert_eq!(
            alert.follow_up_for(AlertResponse::Confirm),
            Some(&WhisperDraft::success("Draft deleted"))
        );
        assert!(alert.follow_up_for(AlertResponse::Cancel).is_none());
        assert_eq!(alert.confirm_label, "Delete");
    }
}
