//! Whisper controller
//!
//! Runs a [`WhisperLifecycle`] on its own tokio task. Commands arrive through
//! [`WhisperHandle`]s, timer tasks post ticks and grace expiries back on an
//! internal channel, and every emitted [`WhisperEvent`] is forwarded to the
//! [`WhisperEvents`] receiver held by the host.
//!
//! Countdown and grace waits are guarded by cancellation tokens that are
//! children of the controller's shutdown token. A tick that was already in
//! flight when its countdown was cancelled is discarded by the lifecycle's
//! token check.

use std::time::Duration as StdDuration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::domain::config::AppConfig;
use crate::domain::timing::{Duration, DEFAULT_DISMISSAL_TICKS};
use crate::domain::whisper::{
    Action, CountdownToken, Effect, LifecycleSnapshot, Whisper, WhisperCategory, WhisperEvent,
    WhisperId, WhisperLifecycle,
};

/// Errors from talking to the controller
#[derive(Debug, Clone, Error)]
pub enum ControllerError {
    #[error("Whisper controller has stopped")]
    Stopped,
}

/// Timing configuration of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Ticks before a finite whisper dismisses itself
    pub dismissal_ticks: u32,
    /// Length of one countdown tick
    pub tick: StdDuration,
    /// Wait between hiding a whisper and removing it
    pub grace: StdDuration,
}

impl ControllerConfig {
    /// Single-tick countdown for tests
    pub fn for_tests() -> Self {
        Self {
            dismissal_ticks: 1,
            ..Self::default()
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dismissal_ticks: DEFAULT_DISMISSAL_TICKS,
            tick: Duration::default_tick().as_std(),
            grace: Duration::default_grace().as_std(),
        }
    }
}

impl From<&AppConfig> for ControllerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            dismissal_ticks: config.dismissal_ticks_or_default(),
            tick: config.tick_or_default().as_std(),
            grace: config.grace_or_default().as_std(),
        }
    }
}

/// Cloneable command side of a running controller
#[derive(Debug, Clone)]
pub struct WhisperHandle {
    commands: mpsc::UnboundedSender<Action>,
    snapshot: watch::Receiver<LifecycleSnapshot>,
}

impl WhisperHandle {
    /// Show a whisper, superseding the live one
    pub fn show(&self, whisper: Whisper) -> Result<WhisperId, ControllerError> {
        let id = whisper.id();
        self.send(Action::Show(whisper))?;
        Ok(id)
    }

    /// The user tapped the banner
    pub fn tap(&self) -> Result<(), ControllerError> {
        self.send(Action::UserDidTap)
    }

    /// The user pressed close, or the host asked for dismissal
    pub fn request_dismiss(&self) -> Result<(), ControllerError> {
        self.send(Action::UserDidClose)
    }

    /// Revise the visible whisper in place
    pub fn update(
        &self,
        message: impl Into<String>,
        category: WhisperCategory,
    ) -> Result<(), ControllerError> {
        self.send(Action::Update {
            message: message.into(),
            category,
        })
    }

    /// Latest published lifecycle state
    pub fn snapshot(&self) -> LifecycleSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Wait until the controller publishes a new snapshot
    pub async fn changed(&mut self) -> Result<LifecycleSnapshot, ControllerError> {
        self.snapshot
            .changed()
            .await
            .map_err(|_| ControllerError::Stopped)?;
        Ok(self.snapshot.borrow_and_update().clone())
    }

    fn send(&self, action: Action) -> Result<(), ControllerError> {
        self.commands
            .send(action)
            .map_err(|_| ControllerError::Stopped)
    }
}

/// Receiving side of the controller's event stream
#[derive(Debug)]
pub struct WhisperEvents {
    receiver: mpsc::UnboundedReceiver<WhisperEvent>,
}

impl WhisperEvents {
    /// Wait for the next event. `None` once the controller has stopped.
    pub async fn recv(&mut self) -> Option<WhisperEvent> {
        self.receiver.recv().await
    }

    /// Take an already queued event without waiting
    pub fn try_recv(&mut self) -> Option<WhisperEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Task owning the lifecycle and its timers
pub struct WhisperController {
    lifecycle: WhisperLifecycle,
    config: ControllerConfig,
    commands: mpsc::UnboundedReceiver<Action>,
    internal_tx: mpsc::UnboundedSender<Action>,
    internal_rx: mpsc::UnboundedReceiver<Action>,
    events: mpsc::UnboundedSender<WhisperEvent>,
    snapshot: watch::Sender<LifecycleSnapshot>,
    countdown: Option<CancellationToken>,
    shutdown: CancellationToken,
}

impl WhisperController {
    /// Create a controller without starting it
    pub fn new(config: ControllerConfig) -> (Self, WhisperHandle, WhisperEvents) {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let lifecycle = WhisperLifecycle::new(config.dismissal_ticks);
        let (snapshot_tx, snapshot_rx) = watch::channel(lifecycle.snapshot());

        let controller = Self {
            lifecycle,
            config,
            commands: commands_rx,
            internal_tx,
            internal_rx,
            events: events_tx,
            snapshot: snapshot_tx,
            countdown: None,
            shutdown: CancellationToken::new(),
        };
        let handle = WhisperHandle {
            commands: commands_tx,
            snapshot: snapshot_rx,
        };
        let events = WhisperEvents {
            receiver: events_rx,
        };

        (controller, handle, events)
    }

    /// Create a controller and run it on a new task
    pub fn spawn(config: ControllerConfig) -> (WhisperHandle, WhisperEvents, JoinHandle<()>) {
        let (controller, handle, events) = Self::new(config);
        let task = tokio::spawn(controller.run());
        (handle, events, task)
    }

    /// Process actions until every handle has been dropped
    pub async fn run(mut self) {
        debug!(
            dismissal_ticks = self.config.dismissal_ticks,
            tick_ms = self.config.tick.as_millis() as u64,
            grace_ms = self.config.grace.as_millis() as u64,
            "whisper controller started"
        );

        loop {
            let action = tokio::select! {
                biased;
                Some(action) = self.internal_rx.recv() => action,
                command = self.commands.recv() => match command {
                    Some(action) => action,
                    None => break,
                },
            };
            self.dispatch(action);
        }

        self.shutdown.cancel();
        debug!("whisper controller stopped");
    }

    fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let before = self.lifecycle.phase();
        let effects = self.lifecycle.reduce(action);

        if effects.is_empty() {
            trace!(action = name, phase = %before, "action ignored");
            return;
        }

        let after = self.lifecycle.phase();
        if before != after {
            debug!(action = name, from = %before, to = %after, "whisper transition");
        }

        for effect in effects {
            self.perform(effect);
        }
        self.snapshot.send_replace(self.lifecycle.snapshot());
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Emit(event) => {
                if self.events.send(event).is_err() {
                    trace!("event receiver dropped");
                }
            }
            Effect::Appear(id) => {
                let _ = self.internal_tx.send(Action::DidAppear(id));
            }
            Effect::StartCountdown(token) => self.start_countdown(token),
            Effect::CancelCountdown => self.cancel_countdown(),
            Effect::ScheduleRemoval(id) => self.schedule_removal(id),
        }
    }

    fn start_countdown(&mut self, token: CountdownToken) {
        self.cancel_countdown();

        let cancel = self.shutdown.child_token();
        let guard = cancel.clone();
        let tx = self.internal_tx.clone();
        let ticks = self.lifecycle.dismissal_ticks();
        let period = self.config.tick.max(StdDuration::from_millis(1));
        // Anchored at start so ticks never drift
        let mut interval = time::interval_at(Instant::now() + period, period);

        trace!(%token, ticks, "countdown started");
        tokio::spawn(async move {
            for _ in 0..ticks {
                tokio::select! {
                    biased;
                    _ = guard.cancelled() => return,
                    _ = interval.tick() => {}
                }
                if tx.send(Action::Tick(token)).is_err() {
                    return;
                }
            }
        });

        self.countdown = Some(cancel);
    }

    fn cancel_countdown(&mut self) {
        if let Some(cancel) = self.countdown.take() {
            cancel.cancel();
            trace!("countdown cancelled");
        }
    }

    fn schedule_removal(&self, id: WhisperId) {
        let cancel = self.shutdown.child_token();
        let tx = self.internal_tx.clone();
        let grace = self.config.grace;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = time::sleep(grace) => {}
            }
            let _ = tx.send(Action::GraceElapsed(id));
        });
    }
}
