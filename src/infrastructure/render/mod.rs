//! Renderer adapters
//!
//! Present whisper events on the terminal, as JSON lines, or not at all.

mod json_lines;
mod noop;
mod terminal;

pub use json_lines::JsonLinesRenderer;
pub use noop::NoOpRenderer;
pub use terminal::TerminalRenderer;

use crate::application::ports::WhisperRenderer;
use crate::domain::config::OutputFormat;

/// Create a renderer for the configured output format
pub fn create_renderer(format: OutputFormat) -> Box<dyn WhisperRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalRenderer::new()),
        OutputFormat::Json => Box::new(JsonLinesRenderer::stdout()),
        OutputFormat::None => Box::new(NoOpRenderer::new()),
    }
}
