//! Domain layer - Core business logic
//!
//! Contains value objects, entities, the whisper lifecycle state machine
//! and domain errors. This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod error;
pub mod timing;
pub mod whisper;

// Re-export common types
pub use alert::{Alert, AlertResponse};
pub use config::{AppConfig, OutputFormat};
pub use error::*;
pub use timing::Duration;
pub use whisper::{
    Phase, Whisper, WhisperCategory, WhisperDraft, WhisperEvent, WhisperId, WhisperLifecycle,
};
