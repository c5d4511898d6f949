//! Interactive runner driven by stdin line commands

use std::process::ExitCode;

use tracing::debug;

use crate::application::HostError;
use crate::domain::alert::Alert;
use crate::domain::whisper::WhisperDraft;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::SessionOptions;
use super::input::{InputCommand, InputError, INPUT_HELP};
use super::presenter::Presenter;
use super::session::{CliHost, Session};
use super::signals::{InputHandler, InputSignal};

/// Run interactive mode until `quit`, EOF or a signal
pub async fn run_interactive(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();

    let mut input = match InputHandler::new() {
        Ok(input) => input,
        Err(e) => {
            presenter.error(&format!("Failed to setup input handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!("Commands: {}", INPUT_HELP));

    let mut session = Session::start(&options);
    let result = interactive_loop(&mut session, &mut input, &presenter).await;
    let result = match result {
        Ok(()) => drain(&mut session).await,
        Err(e) => Err(e),
    };
    session.finish().await;

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn interactive_loop(
    session: &mut Session,
    input: &mut InputHandler,
    presenter: &Presenter,
) -> Result<(), HostError> {
    loop {
        tokio::select! {
            event = session.recv_event() => {
                let event = event?;
                session.deliver(&event).await?;
            }
            signal = input.recv() => match signal {
                Some(InputSignal::Line(line)) => match line.parse::<InputCommand>() {
                    Ok(InputCommand::Quit) => return Ok(()),
                    Ok(command) => execute(session, command, presenter).await?,
                    Err(InputError::Empty) => {}
                    Err(e) => presenter.warn(&e.to_string()),
                },
                Some(InputSignal::Eof | InputSignal::Interrupt | InputSignal::Terminate)
                | None => return Ok(()),
            },
        }
    }
}

/// Close everything and let the live whisper finish its exit
async fn drain(session: &mut Session) -> Result<(), HostError> {
    let host = session.host();
    host.clear_all().await?;
    match host.slot() {
        Some(id) => session.run_until_removed(id).await,
        None => Ok(()),
    }
}

/// Apply one command to the host
pub async fn execute(
    session: &mut Session,
    command: InputCommand,
    presenter: &Presenter,
) -> Result<(), HostError> {
    debug!(?command, "interactive command");
    let host = session.host();

    match command {
        InputCommand::Show { category, message } => {
            host.show(WhisperDraft::new(message, category))?;
        }
        InputCommand::Update { category, message } => {
            host.request_whisper_update(message, category)?;
        }
        InputCommand::Tap => host.tap_whisper()?,
        InputCommand::Close => host.close_whisper()?,
        InputCommand::Alert { message } => {
            let follow_up = WhisperDraft::success(format!("Confirmed: {}", message));
            host.present_alert(Alert::new("Confirm", message).with_follow_up(follow_up))
                .await?;
        }
        InputCommand::Confirm | InputCommand::Cancel if host.alert().is_none() => {
            presenter.warn("No alert shown");
        }
        InputCommand::Confirm => {
            host.confirm_alert().await?;
        }
        InputCommand::Cancel => host.cancel_alert().await?,
        InputCommand::Clear => host.clear_all().await?,
        InputCommand::Status => print_status(host, presenter),
        InputCommand::Quit => {}
    }
    Ok(())
}

fn print_status(host: &CliHost, presenter: &Presenter) {
    let snapshot = host.whisper().snapshot();

    presenter.key_value("phase", snapshot.phase.as_str());
    match snapshot.whisper.as_ref() {
        Some(whisper) => presenter.key_value(
            "whisper",
            &format!("[{}] {}", whisper.category(), whisper.message()),
        ),
        None => presenter.key_value("whisper", "(none)"),
    }
    if let Some(elapsed) = snapshot.elapsed_ticks {
        presenter.key_value("countdown", &format!("{} ticks elapsed", elapsed));
    }
    presenter.key_value(
        "alert",
        host.alert().map(|a| a.message.as_str()).unwrap_or("(none)"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    use crate::application::ControllerConfig;
    use crate::domain::config::OutputFormat;
    use crate::domain::whisper::WhisperCategory;

    fn session() -> Session {
        Session::start(&SessionOptions {
            controller: ControllerConfig {
                dismissal_ticks: 2,
                tick: StdDuration::from_secs(1),
                grace: StdDuration::from_millis(300),
            },
            output: OutputFormat::None,
            category: WhisperCategory::Success,
        })
    }

    async fn run(session: &mut Session, line: &str) {
        let command = line.parse().unwrap();
        execute(session, command, &Presenter::new()).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn alert_confirm_shows_follow_up() {
        let mut session = session();
        run(&mut session, "alert Delete draft?").await;
        assert!(session.host().alert().is_some());

        run(&mut session, "confirm").await;
        assert!(session.host().alert().is_none());
        let id = session.host().slot().expect("follow-up shown");

        session.run_until_removed(id).await.unwrap();
        session.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn close_removes_error_whisper() {
        let mut session = session();
        run(&mut session, "show error Upload failed").await;
        let id = session.host().slot().unwrap();

        session.run_for(StdDuration::from_secs(5)).await.unwrap();
        assert_eq!(session.host().slot(), Some(id));

        run(&mut session, "close").await;
        session.run_until_removed(id).await.unwrap();
        assert!(session.host().slot().is_none());
        session.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn drain_clears_everything() {
        let mut session = session();
        run(&mut session, "show error Upload failed").await;
        run(&mut session, "alert Retry?").await;

        drain(&mut session).await.unwrap();

        assert!(session.host().slot().is_none());
        assert!(session.host().alert().is_none());
        session.finish().await;
    }

    #[tokio::test]
    async fn confirm_without_alert_is_harmless() {
        let mut session = session();
        run(&mut session, "confirm").await;
        run(&mut session, "cancel").await;
        assert!(session.host().slot().is_none());
        session.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn update_goes_straight_to_the_controller() {
        let mut session = session();
        run(&mut session, "update success Nothing here").await;
        session.run_for(StdDuration::from_millis(100)).await.unwrap();
        assert!(session.host().slot().is_none());

        // Issued before the host has seen the whisper appear
        run(&mut session, "show error Upload failed").await;
        run(&mut session, "update success Upload retried").await;
        session.run_for(StdDuration::from_millis(100)).await.unwrap();

        let snapshot = session.host().whisper().snapshot();
        assert!(snapshot.phase.is_visible());
        let whisper = snapshot.whisper.expect("whisper still shown");
        assert_eq!(whisper.message(), "Upload retried");
        assert_eq!(whisper.category(), WhisperCategory::Success);
        session.finish().await;
    }
}
