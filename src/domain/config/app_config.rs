//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::timing::{Duration, DEFAULT_DISMISSAL_TICKS};
use crate::domain::whisper::WhisperCategory;

use super::output::OutputFormat;

/// Terminal presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    pub output: Option<String>,
    pub color: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub dismissal_ticks: Option<u32>,
    pub tick: Option<String>,
    pub grace: Option<String>,
    pub category: Option<String>,
    pub terminal: Option<TerminalConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            dismissal_ticks: Some(DEFAULT_DISMISSAL_TICKS),
            tick: Some(Duration::default_tick().to_string()),
            grace: Some(Duration::default_grace().to_string()),
            category: Some(WhisperCategory::default().to_string()),
            terminal: Some(TerminalConfig {
                output: Some(OutputFormat::default().to_string()),
                color: Some(true),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            dismissal_ticks: other.dismissal_ticks.or(self.dismissal_ticks),
            tick: other.tick.or(self.tick),
            grace: other.grace.or(self.grace),
            category: other.category.or(self.category),
            terminal: Self::merge_terminal_config(self.terminal, other.terminal),
        }
    }

    fn merge_terminal_config(
        base: Option<TerminalConfig>,
        other: Option<TerminalConfig>,
    ) -> Option<TerminalConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(TerminalConfig {
                output: o.output.or(b.output),
                color: o.color.or(b.color),
            }),
        }
    }

    /// Get dismissal ticks, or the default if not set. Never below 1.
    pub fn dismissal_ticks_or_default(&self) -> u32 {
        self.dismissal_ticks
            .map(|ticks| ticks.max(1))
            .unwrap_or(DEFAULT_DISMISSAL_TICKS)
    }

    /// Get tick length as parsed Duration, or default if not set/invalid
    pub fn tick_or_default(&self) -> Duration {
        self.tick
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_tick)
    }

    /// Get grace interval as parsed Duration, or default if not set/invalid
    pub fn grace_or_default(&self) -> Duration {
        self.grace
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_grace)
    }

    /// Get default category, or success if not set/invalid
    pub fn category_or_default(&self) -> WhisperCategory {
        self.category
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get output format, or terminal if not set/invalid
    pub fn output_or_default(&self) -> OutputFormat {
        self.terminal
            .as_ref()
            .and_then(|t| t.output.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get color setting, or true if not set
    pub fn color_or_default(&self) -> bool {
        self.terminal
            .as_ref()
            .and_then(|t| t.color)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.dismissal_ticks, Some(6));
        assert_eq!(config.tick, Some("1s".to_string()));
        assert_eq!(config.grace, Some("333ms".to_string()));
        assert_eq!(config.category, Some("success".to_string()));
        let terminal = config.terminal.as_ref().unwrap();
        assert_eq!(terminal.output, Some("terminal".to_string()));
        assert_eq!(terminal.color, Some(true));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.dismissal_ticks.is_none());
        assert!(config.tick.is_none());
        assert!(config.grace.is_none());
        assert!(config.category.is_none());
        assert!(config.terminal.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            dismissal_ticks: Some(6),
            tick: Some("1s".to_string()),
            category: Some("success".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            dismissal_ticks: Some(2),
            tick: None, // Should not override
            category: Some("error".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.dismissal_ticks, Some(2));
        assert_eq!(merged.tick, Some("1s".to_string())); // Kept from base
        assert_eq!(merged.category, Some("error".to_string()));
    }

    #[test]
    fn merge_terminal_config_fields() {
        let base = AppConfig {
            terminal: Some(TerminalConfig {
                output: Some("terminal".to_string()),
                color: Some(true),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            terminal: Some(TerminalConfig {
                output: Some("json".to_string()),
                color: None,
            }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.output_or_default(), OutputFormat::Json);
        assert!(merged.color_or_default());
    }

    #[test]
    fn accessors_fall_back_on_invalid() {
        let config = AppConfig {
            dismissal_ticks: Some(0),
            tick: Some("invalid".to_string()),
            grace: Some("soon".to_string()),
            category: Some("warning".to_string()),
            terminal: Some(TerminalConfig {
                output: Some("yaml".to_string()),
                color: None,
            }),
        };
        assert_eq!(config.dismissal_ticks_or_default(), 1);
        assert_eq!(config.tick_or_default(), Duration::default_tick());
        assert_eq!(config.grace_or_default(), Duration::default_grace());
        assert_eq!(config.category_or_default(), WhisperCategory::Success);
        assert_eq!(config.output_or_default(), OutputFormat::Terminal);
    }

    #[test]
    fn unset_ticks_use_default() {
        assert_eq!(AppConfig::empty().dismissal_ticks_or_default(), 6);
    }

    #[test]
    fn accessors_parse_values() {
        let config = AppConfig {
            dismissal_ticks: Some(3),
            tick: Some("500ms".to_string()),
            grace: Some("100ms".to_string()),
            category: Some("error".to_string()),
            terminal: Some(TerminalConfig {
                output: Some("json".to_string()),
                color: Some(false),
            }),
        };
        assert_eq!(config.dismissal_ticks_or_default(), 3);
        assert_eq!(config.tick_or_default().as_millis(), 500);
        assert_eq!(config.grace_or_default().as_millis(), 100);
        assert_eq!(config.category_or_default(), WhisperCategory::Error);
        assert_eq!(config.output_or_default(), OutputFormat::Json);
        assert!(!config.color_or_default());
    }
}
