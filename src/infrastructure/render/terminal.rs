//! Terminal renderer adapter
//!
//! Draws the banner as an indicatif line on stderr. A whisper is mounted with
//! a hidden draw target and moved onto the terminal once it slides in. Sliding
//! out dims the line; the bar is only finished and cleared on removal.

use std::sync::Mutex;

use async_trait::async_trait;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::application::ports::{RenderError, WhisperRenderer};
use crate::domain::alert::Alert;
use crate::domain::whisper::{Offset, WhisperCategory, WhisperEvent, WhisperId};

/// Width of the countdown bar in cells
const COUNTDOWN_WIDTH: usize = 12;

type TargetFactory = Box<dyn Fn() -> ProgressDrawTarget + Send + Sync>;

struct Banner {
    id: WhisperId,
    bar: ProgressBar,
    message: String,
    on_screen: bool,
}

/// Renderer that draws whispers and alerts on the terminal
pub struct TerminalRenderer {
    banner: Mutex<Option<Banner>>,
    visible_target: TargetFactory,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr)
    }

    /// Draw visible banners to the targets built by `visible_target`
    pub fn with_target<F>(visible_target: F) -> Self
    where
        F: Fn() -> ProgressDrawTarget + Send + Sync + 'static,
    {
        Self {
            banner: Mutex::new(None),
            visible_target: Box::new(visible_target),
        }
    }

    fn with_banner<F>(&self, id: WhisperId, f: F)
    where
        F: FnOnce(&mut Banner),
    {
        let mut guard = self.banner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(banner) = guard.as_mut().filter(|b| b.id == id) {
            f(banner);
        }
    }

    fn mount(&self, id: WhisperId, message: &str, category: WhisperCategory) {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        bar.set_style(
            ProgressStyle::with_template("{prefix} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(category_badge(category));
        bar.set_message(message.to_string());

        let banner = Banner {
            id,
            bar,
            message: message.to_string(),
            on_screen: false,
        };
        let mut guard = self.banner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = guard.replace(banner) {
            previous.bar.finish_and_clear();
        }
    }

    fn move_to(&self, id: WhisperId, offset: Offset) {
        self.with_banner(id, |banner| {
            if offset.is_visible() {
                if !banner.on_screen {
                    banner.bar.set_draw_target((self.visible_target)());
                    banner.on_screen = true;
                }
                banner.bar.set_message(banner.message.clone());
            } else if banner.on_screen {
                // Stays drawn, dimmed, until removal clears it
                banner
                    .bar
                    .set_message(format!("{}", banner.message.as_str().dimmed()));
            } else {
                banner.bar.set_draw_target(ProgressDrawTarget::hidden());
            }
        });
    }

    fn unmount(&self, id: WhisperId) {
        let mut guard = self.banner.lock().unwrap_or_else(|e| e.into_inner());
        if guard.as_ref().is_some_and(|b| b.id == id) {
            if let Some(banner) = guard.take() {
                banner.bar.finish_and_clear();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhisperRenderer for TerminalRenderer {
    async fn render(&self, event: &WhisperEvent) -> Result<(), RenderError> {
        match event {
            WhisperEvent::Shown {
                id,
                message,
                category,
            } => self.mount(*id, message, *category),
            WhisperEvent::OffsetChanged { id, offset } => self.move_to(*id, *offset),
            WhisperEvent::Countdown { id, elapsed, total } => {
                let countdown = format_countdown(*elapsed, *total);
                self.with_banner(*id, |banner| {
                    banner
                        .bar
                        .set_message(format!("{}  {}", banner.message, countdown));
                });
            }
            WhisperEvent::Updated {
                id,
                message,
                category,
            } => self.with_banner(*id, |banner| {
                banner.message = message.clone();
                banner.bar.set_prefix(category_badge(*category));
                banner.bar.set_message(message.clone());
            }),
            WhisperEvent::Removed { id } => self.unmount(*id),
        }
        Ok(())
    }

    async fn render_alert(&self, alert: Option<&Alert>) -> Result<(), RenderError> {
        if let Some(alert) = alert {
            eprintln!("{}", format_alert(alert));
        }
        Ok(())
    }
}

/// Colored badge shown before the message
fn category_badge(category: WhisperCategory) -> String {
    match category {
        WhisperCategory::Success => format!("{}", "✓".green().bold()),
        WhisperCategory::Error => format!("{}", "✗".red().bold()),
    }
}

/// Countdown bar, e.g. `[████░░░░] 2/6`
pub(crate) fn format_countdown(elapsed: u32, total: u32) -> String {
    let filled = if total > 0 {
        (elapsed.min(total) as usize * COUNTDOWN_WIDTH) / total as usize
    } else {
        0
    };
    let empty = COUNTDOWN_WIDTH - filled;

    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled).cyan(),
        "░".repeat(empty).dimmed(),
        elapsed,
        total
    )
}

/// Boxed alert with its two choices
pub(crate) fn format_alert(alert: &Alert) -> String {
    format!(
        "{} {}\n  {}\n  [{}] {}   [{}] {}",
        "?".yellow().bold(),
        alert.title.bold(),
        alert.message,
        "y".cyan(),
        alert.confirm_label,
        "n".cyan(),
        alert.cancel_label
    )
}
