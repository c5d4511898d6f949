//! A running controller plus host, shared by the CLI runners

use std::time::Duration as StdDuration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::application::ports::WhisperRenderer;
use crate::application::{
    ControllerError, HostCoordinator, HostError, WhisperController, WhisperEvents,
};
use crate::domain::whisper::{WhisperEvent, WhisperId};
use crate::infrastructure::create_renderer;

use super::args::SessionOptions;

/// Host type used by the CLI
pub type CliHost = HostCoordinator<Box<dyn WhisperRenderer>>;

pub struct Session {
    host: CliHost,
    events: WhisperEvents,
    task: JoinHandle<()>,
}

impl Session {
    /// Spawn a controller and attach a host rendering in the chosen format
    pub fn start(options: &SessionOptions) -> Self {
        Self::with_renderer(options, create_renderer(options.output))
    }

    pub fn with_renderer(options: &SessionOptions, renderer: Box<dyn WhisperRenderer>) -> Self {
        let (handle, events, task) = WhisperController::spawn(options.controller);
        Self {
            host: HostCoordinator::new(handle, renderer),
            events,
            task,
        }
    }

    pub fn host(&mut self) -> &mut CliHost {
        &mut self.host
    }

    /// Wait for the next controller event.
    ///
    /// Cancel safe, so it may be raced in `select!`. Pass the event to
    /// [`Session::deliver`] outside the race.
    pub async fn recv_event(&mut self) -> Result<WhisperEvent, HostError> {
        Ok(self.events.recv().await.ok_or(ControllerError::Stopped)?)
    }

    /// Hand an event to the host
    pub async fn deliver(&mut self, event: &WhisperEvent) -> Result<(), HostError> {
        self.host.handle_event(event.clone()).await
    }

    /// Wait for the next controller event and hand it to the host
    pub async fn next_event(&mut self) -> Result<WhisperEvent, HostError> {
        let event = self.recv_event().await?;
        self.deliver(&event).await?;
        Ok(event)
    }

    /// Process events until the given whisper has been removed
    pub async fn run_until_removed(&mut self, id: WhisperId) -> Result<(), HostError> {
        loop {
            if self.next_event().await? == (WhisperEvent::Removed { id }) {
                return Ok(());
            }
        }
    }

    /// Process events for a fixed amount of time
    pub async fn run_for(&mut self, duration: StdDuration) -> Result<(), HostError> {
        let deadline = Instant::now() + duration;
        loop {
            tokio::select! {
                biased;
                event = self.recv_event() => {
                    let event = event?;
                    self.deliver(&event).await?;
                }
                _ = time::sleep_until(deadline) => return Ok(()),
            }
        }
    }

    /// Drop the host and wait for the controller to stop
    pub async fn finish(self) {
        let Self { host, events, task } = self;
        drop(host);
        drop(events);
        let _ = task.await;
    }
}
