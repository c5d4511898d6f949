//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the show, demo and interactive runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod demo_app;
pub mod input;
pub mod interactive_app;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod signals;

// Re-export commonly used types
pub use app::{run_show, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, SessionOptions};
pub use demo_app::run_demo;
pub use interactive_app::run_interactive;
pub use presenter::Presenter;
