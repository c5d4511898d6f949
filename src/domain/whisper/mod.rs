//! Whisper notifications: entity, categories and lifecycle

mod category;
mod entity;
mod lifecycle;
mod offset;

pub use category::{DurationPolicy, WhisperCategory, ALL_CATEGORIES};
pub use entity::{Whisper, WhisperDraft, WhisperId};
pub use lifecycle::{
    Action, CountdownToken, Effect, LifecycleSnapshot, Phase, WhisperEvent, WhisperLifecycle,
};
pub use offset::Offset;
