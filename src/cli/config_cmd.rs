//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, OutputFormat, TerminalConfig};
use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;
use crate::domain::whisper::WhisperCategory;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            config_value(&config, key).as_deref().unwrap_or(NOT_SET),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Current value of a key, rendered as text
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    let terminal = config.terminal.as_ref();
    match key {
        "dismissal_ticks" => config.dismissal_ticks.map(|t| t.to_string()),
        "tick" => config.tick.clone(),
        "grace" => config.grace.clone(),
        "category" => config.category.clone(),
        "terminal.output" => terminal.and_then(|t| t.output.clone()),
        "terminal.color" => terminal.and_then(|t| t.color).map(|b| b.to_string()),
        _ => None,
    }
}

/// Validate a value and store it under its key
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "dismissal_ticks" => {
            let ticks = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|t| *t >= 1)
                .ok_or_else(|| invalid("Value must be a whole number of at least 1".to_string()))?;
            config.dismissal_ticks = Some(ticks);
        }
        "tick" | "grace" => {
            let duration = value
                .parse::<Duration>()
                .map_err(|e| invalid(e.to_string()))?;
            if key == "tick" {
                config.tick = Some(duration.to_string());
            } else {
                config.grace = Some(duration.to_string());
            }
        }
        "category" => {
            let category = value
                .parse::<WhisperCategory>()
                .map_err(|e| invalid(e.to_string()))?;
            config.category = Some(category.to_string());
        }
        "terminal.output" => {
            let output = value
                .parse::<OutputFormat>()
                .map_err(|e| invalid(e.to_string()))?;
            config
                .terminal
                .get_or_insert_with(TerminalConfig::default)
                .output = Some(output.to_string());
        }
        "terminal.color" => {
            let color = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config
                .terminal
                .get_or_insert_with(TerminalConfig::default)
                .color = Some(color);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn ticks_must_be_positive() {
        let mut config = AppConfig::empty();
        assert!(apply_config_value(&mut config, "dismissal_ticks", "0").is_err());
        assert!(apply_config_value(&mut config, "dismissal_ticks", "-2").is_err());
        apply_config_value(&mut config, "dismissal_ticks", "3").unwrap();
        assert_eq!(config.dismissal_ticks, Some(3));
    }

    #[test]
    fn durations_are_normalised() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "tick", "1s500ms").unwrap();
        apply_config_value(&mut config, "grace", "250ms").unwrap();
        assert_eq!(config.tick.as_deref(), Some("1s500ms"));
        assert_eq!(config.grace.as_deref(), Some("250ms"));
        assert!(apply_config_value(&mut config, "tick", "soon").is_err());
        assert!(apply_config_value(&mut config, "grace", "0s").is_err());
    }

    #[test]
    fn category_and_output_validated() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "category", "Error").unwrap();
        assert_eq!(config.category.as_deref(), Some("error"));
        assert!(apply_config_value(&mut config, "category", "info").is_err());

        apply_config_value(&mut config, "terminal.output", "json").unwrap();
        assert_eq!(config_value(&config, "terminal.output").as_deref(), Some("json"));
        assert!(apply_config_value(&mut config, "terminal.output", "yaml").is_err());
    }

    #[test]
    fn color_keeps_output() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "terminal.output", "none").unwrap();
        apply_config_value(&mut config, "terminal.color", "no").unwrap();
        assert_eq!(config_value(&config, "terminal.output").as_deref(), Some("none"));
        assert_eq!(config_value(&config, "terminal.color").as_deref(), Some("false"));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(check_key("api_key").is_err());
        assert!(check_key("grace").is_ok());
    }

    #[test]
    fn unset_values_are_none() {
        let config = AppConfig::empty();
        for key in VALID_CONFIG_KEYS {
            assert!(config_value(&config, key).is_none());
        }
    }
}
