//! Whisper entity

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{DurationPolicy, WhisperCategory};
use super::offset::Offset;

/// Unique identifier of a whisper instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhisperId(Uuid);

impl WhisperId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WhisperId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for WhisperId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for WhisperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request for a whisper that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhisperDraft {
    pub message: String,
    pub category: WhisperCategory,
}

impl WhisperDraft {
    pub fn new(message: impl Into<String>, category: WhisperCategory) -> Self {
        Self {
            message: message.into(),
            category,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, WhisperCategory::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, WhisperCategory::Error)
    }

    /// Assign a fresh id, producing a whisper ready to show
    pub fn into_whisper(self) -> Whisper {
        Whisper::new(WhisperId::new(), self.message, self.category)
    }
}

/// A single transient notification.
///
/// `offset` belongs to the renderer; only the lifecycle writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Whisper {
    id: WhisperId,
    message: String,
    category: WhisperCategory,
    offset: Offset,
}

impl Whisper {
    /// Create a whisper parked at the hidden offset
    pub fn new(id: WhisperId, message: impl Into<String>, category: WhisperCategory) -> Self {
        Self {
            id,
            message: message.into(),
            category,
            offset: Offset::HIDDEN,
        }
    }

    pub fn id(&self) -> WhisperId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> WhisperCategory {
        self.category
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Derived from the category, never stored
    pub fn duration_policy(&self) -> DurationPolicy {
        self.category.duration_policy()
    }

    pub(crate) fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Replace message and category in place, keeping the id
    pub(crate) fn revise(&mut self, message: String, category: WhisperCategory) {
        self.message = message;
        self.category = category;
    }
}
