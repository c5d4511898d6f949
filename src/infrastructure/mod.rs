//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the XDG config
//! file and the renderers that present whispers.

pub mod config;
pub mod render;

// Re-export adapters
pub use config::XdgConfigStore;
pub use render::{create_renderer, JsonLinesRenderer, NoOpRenderer, TerminalRenderer};
