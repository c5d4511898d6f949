//! JSON lines renderer adapter
//!
//! One JSON object per event, for scripts reading stdout.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{RenderError, WhisperRenderer};
use crate::domain::alert::Alert;
use crate::domain::whisper::WhisperEvent;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum AlertLine<'a> {
    AlertShown { alert: &'a Alert },
    AlertClosed,
}

/// Renderer writing newline-delimited JSON
pub struct JsonLinesRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl JsonLinesRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line<T: Serialize>(&self, value: &T) -> Result<(), RenderError> {
        let line =
            serde_json::to_string(value).map_err(|e| RenderError::Serialize(e.to_string()))?;
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", line).map_err(|e| RenderError::Io(e.to_string()))?;
        out.flush().map_err(|e| RenderError::Io(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send> WhisperRenderer for JsonLinesRenderer<W> {
    async fn render(&self, event: &WhisperEvent) -> Result<(), RenderError> {
        self.write_line(event)
    }

    async fn render_alert(&self, alert: Option<&Alert>) -> Result<(), RenderError> {
        match alert {
            Some(alert) => self.write_line(&AlertLine::AlertShown { alert }),
            None => self.write_line(&AlertLine::AlertClosed),
        }
    }
}
