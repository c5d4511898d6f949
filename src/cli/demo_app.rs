//! Scripted demo runner

use std::process::ExitCode;

use crate::application::HostError;
use crate::domain::alert::Alert;
use crate::domain::whisper::{WhisperCategory, WhisperDraft};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::SessionOptions;
use super::presenter::Presenter;
use super::session::Session;

/// Run the scripted tour of whispers and alerts
pub async fn run_demo(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();
    let mut session = Session::start(&options);

    let result = demo_script(&mut session, &options, &presenter).await;
    session.finish().await;

    match result {
        Ok(()) => {
            presenter.success("Demo finished");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn demo_script(
    session: &mut Session,
    options: &SessionOptions,
    presenter: &Presenter,
) -> Result<(), HostError> {
    let tick = options.controller.tick;

    presenter.step("Alert confirmed into a whisper");
    let alert = Alert::new("Delete draft", "Delete this draft?")
        .with_labels("Delete", "Keep")
        .with_follow_up(WhisperDraft::success("Draft deleted"));
    session.host().present_alert(alert).await?;
    session.run_for(tick).await?;
    if let Some(id) = session.host().confirm_alert().await? {
        session.run_until_removed(id).await?;
    }

    presenter.step("Error whisper revised in place");
    let id = session.host().show(WhisperDraft::error("Upload failed"))?;
    session.run_for(tick * 2).await?;
    session
        .host()
        .request_whisper_update("Upload retried", WhisperCategory::Success)?;
    session.run_until_removed(id).await?;

    presenter.step("Whisper superseded by a newer one");
    session.host().show(WhisperDraft::success("Saving..."))?;
    session.run_for(tick).await?;
    let id = session.host().show(WhisperDraft::success("Saved"))?;
    session.run_until_removed(id).await?;

    Ok(())
}
