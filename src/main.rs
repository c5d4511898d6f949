//! whisper-banner CLI entry point

use std::process::ExitCode;

use clap::Parser;

use whisper_banner::cli::{
    app::{load_merged_config, resolve_session_options, run_show, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    run_demo, run_interactive, SessionOptions,
};
use whisper_banner::domain::config::AppConfig;
use whisper_banner::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();
    let cli_config = cli.to_config();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Demo) => match session_options(cli_config, &presenter).await {
            Ok(options) => run_demo(options).await,
            Err(code) => code,
        },
        Some(Commands::Interactive) => match session_options(cli_config, &presenter).await {
            Ok(options) => run_interactive(options).await,
            Err(code) => code,
        },
        None => {
            let Some(message) = cli.message else {
                presenter.error("Missing --message. Run with --help for usage.");
                return ExitCode::from(EXIT_USAGE_ERROR);
            };
            match session_options(cli_config, &presenter).await {
                Ok(options) => run_show(message, options).await,
                Err(code) => code,
            }
        }
    }
}

/// Merge config sources and validate them for a runner
async fn session_options(
    cli_config: AppConfig,
    presenter: &Presenter,
) -> Result<SessionOptions, ExitCode> {
    let config = load_merged_config(cli_config).await;

    if !config.color_or_default() {
        colored::control::set_override(false);
    }

    resolve_session_options(&config).map_err(|e| {
        presenter.error(&e);
        ExitCode::from(EXIT_USAGE_ERROR)
    })
}
