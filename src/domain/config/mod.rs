//! Configuration value objects

mod app_config;
mod output;

pub use app_config::{AppConfig, TerminalConfig};
pub use output::OutputFormat;
