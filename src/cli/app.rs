//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::ConfigStore;
use crate::application::{ControllerConfig, HostError};
use crate::domain::config::{AppConfig, OutputFormat, TerminalConfig};
use crate::domain::timing::Duration;
use crate::domain::whisper::{WhisperCategory, WhisperDraft, WhisperEvent, WhisperId};
use crate::infrastructure::XdgConfigStore;

use super::args::SessionOptions;
use super::presenter::Presenter;
use super::session::Session;
use super::signals::{InputHandler, InputSignal};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides
pub const TICKS_ENV: &str = "WHISPER_BANNER_TICKS";
pub const OUTPUT_ENV: &str = "WHISPER_BANNER_OUTPUT";

/// Show one whisper and wait until it has been removed
pub async fn run_show(message: String, options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();

    let mut input = match InputHandler::new() {
        Ok(input) => input,
        Err(e) => {
            presenter.error(&format!("Failed to setup input handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut session = Session::start(&options);
    let code = match session
        .host()
        .show(WhisperDraft::new(message, options.category))
    {
        Ok(id) => match show_loop(&mut session, &mut input, id).await {
            Ok(true) => EXIT_SUCCESS,
            Ok(false) => {
                presenter.warn("Interrupted");
                EXIT_ERROR
            }
            Err(e) => {
                presenter.error(&e.to_string());
                EXIT_ERROR
            }
        },
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    };

    session.finish().await;
    ExitCode::from(code)
}

/// Returns `false` when a second interrupt cut the wait short
async fn show_loop(
    session: &mut Session,
    input: &mut InputHandler,
    id: WhisperId,
) -> Result<bool, HostError> {
    let mut dismiss_requested = false;
    let mut input_open = true;

    loop {
        tokio::select! {
            event = session.recv_event() => {
                let event = event?;
                session.deliver(&event).await?;
                if event == (WhisperEvent::Removed { id }) {
                    return Ok(true);
                }
            }
            signal = input.recv(), if input_open => match signal {
                Some(InputSignal::Line(_) | InputSignal::Interrupt | InputSignal::Terminate)
                    if !dismiss_requested =>
                {
                    debug!(%id, "dismissal requested");
                    session.host().close_whisper()?;
                    dismiss_requested = true;
                }
                Some(InputSignal::Interrupt | InputSignal::Terminate) => return Ok(false),
                Some(InputSignal::Line(_)) => {}
                Some(InputSignal::Eof) | None => input_open = false,
            },
        }
    }
}

/// Config taken from the environment
pub fn env_config() -> AppConfig {
    let dismissal_ticks = env::var(TICKS_ENV).ok().and_then(|s| {
        let ticks = s.trim().parse::<u32>().ok();
        if ticks.is_none() {
            warn!(value = %s, "ignoring invalid {}", TICKS_ENV);
        }
        ticks
    });
    let output = env::var(OUTPUT_ENV).ok().filter(|s| !s.is_empty());

    AppConfig {
        dismissal_ticks,
        terminal: output.map(|output| TerminalConfig {
            output: Some(output),
            color: None,
        }),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Validate the merged config into runner options
pub fn resolve_session_options(config: &AppConfig) -> Result<SessionOptions, String> {
    if config.dismissal_ticks == Some(0) {
        return Err("Invalid ticks: must be at least 1".to_string());
    }
    let dismissal_ticks = config.dismissal_ticks_or_default();

    let tick = parse_setting::<Duration>("tick", config.tick.as_deref())?
        .unwrap_or_else(Duration::default_tick);
    let grace = parse_setting::<Duration>("grace", config.grace.as_deref())?
        .unwrap_or_else(Duration::default_grace);
    let category = parse_setting::<WhisperCategory>("category", config.category.as_deref())?
        .unwrap_or_default();
    let output = parse_setting::<OutputFormat>(
        "output",
        config.terminal.as_ref().and_then(|t| t.output.as_deref()),
    )?
    .unwrap_or_default();

    Ok(SessionOptions {
        controller: ControllerConfig {
            dismissal_ticks,
            tick: tick.as_std(),
            grace: grace.as_std(),
        },
        output,
        category,
    })
}

fn parse_setting<T>(name: &str, value: Option<&str>) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|s| s.parse::<T>())
        .transpose()
        .map_err(|e| format!("Invalid {}: {}", name, e))
}
