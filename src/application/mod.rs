//! Application layer - Use cases and port interfaces
//!
//! Contains the whisper controller runtime, the host coordinator and
//! trait definitions for external system interactions.

pub mod controller;
pub mod host;
pub mod ports;

// Re-export use cases
pub use controller::{
    ControllerConfig, ControllerError, WhisperController, WhisperEvents, WhisperHandle,
};
pub use host::{HostCoordinator, HostError};
