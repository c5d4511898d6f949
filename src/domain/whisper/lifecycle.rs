//! Whisper lifecycle state machine
//!
//! A pure reducer: every [`Action`] is folded into the current state and
//! yields the list of [`Effect`]s the runtime has to carry out, in order.
//! Nothing here sleeps or spawns; timers are only *requested*.
//!
//! ```text
//!   Hidden -> Appearing (show)
//!   Appearing -> Visible(policy) (did appear)
//!   Appearing | Visible -> Dismissing (tap, close, countdown reached)
//!   Dismissing -> Hidden (grace elapsed)
//!   any -> Appearing (show supersedes)
//! ```

use std::fmt;

use serde::Serialize;

use super::category::{DurationPolicy, WhisperCategory};
use super::entity::{Whisper, WhisperId};
use super::offset::Offset;

/// Lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Appearing,
    Visible(DurationPolicy),
    Dismissing,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Appearing => "appearing",
            Self::Visible(DurationPolicy::Finite) => "visible(finite)",
            Self::Visible(DurationPolicy::Infinite) => "visible(infinite)",
            Self::Dismissing => "dismissing",
        }
    }

    pub fn is_hidden(&self) -> bool {
        *self == Self::Hidden
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    pub fn is_dismissing(&self) -> bool {
        *self == Self::Dismissing
    }

    /// Whether a user dismissal would start the exit sequence
    pub fn accepts_dismissal(&self) -> bool {
        matches!(self, Self::Appearing | Self::Visible(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one countdown run. Ticks carrying any other token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountdownToken(u64);

impl fmt::Display for CountdownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inputs to the lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Present a whisper, superseding any live one
    Show(Whisper),
    /// The whisper has been mounted and may slide in
    DidAppear(WhisperId),
    /// One countdown period elapsed
    Tick(CountdownToken),
    UserDidTap,
    UserDidClose,
    /// Revise the visible whisper in place
    Update {
        message: String,
        category: WhisperCategory,
    },
    /// The exit animation has had time to finish
    GraceElapsed(WhisperId),
}

impl Action {
    /// Short name for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Show(_) => "show",
            Self::DidAppear(_) => "did_appear",
            Self::Tick(_) => "tick",
            Self::UserDidTap => "user_did_tap",
            Self::UserDidClose => "user_did_close",
            Self::Update { .. } => "update",
            Self::GraceElapsed(_) => "grace_elapsed",
        }
    }
}

/// Events observable by the host and renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WhisperEvent {
    Shown {
        id: WhisperId,
        message: String,
        category: WhisperCategory,
    },
    OffsetChanged {
        id: WhisperId,
        offset: Offset,
    },
    Countdown {
        id: WhisperId,
        elapsed: u32,
        total: u32,
    },
    Updated {
        id: WhisperId,
        message: String,
        category: WhisperCategory,
    },
    Removed {
        id: WhisperId,
    },
}

impl WhisperEvent {
    pub fn id(&self) -> WhisperId {
        match self {
            Self::Shown { id, .. }
            | Self::OffsetChanged { id, .. }
            | Self::Countdown { id, .. }
            | Self::Updated { id, .. }
            | Self::Removed { id } => *id,
        }
    }
}

/// Work the runtime performs on behalf of the lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Emit(WhisperEvent),
    /// Feed `DidAppear(id)` back in once the whisper is mounted
    Appear(WhisperId),
    /// Cancel any running countdown and start ticking for `token`
    StartCountdown(CountdownToken),
    CancelCountdown,
    /// Feed `GraceElapsed(id)` back in after the grace interval
    ScheduleRemoval(WhisperId),
}

#[derive(Debug, Clone, Copy)]
struct Countdown {
    token: CountdownToken,
    elapsed: u32,
}

/// Point-in-time view of the lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifecycleSnapshot {
    pub phase: Phase,
    pub whisper: Option<Whisper>,
    /// Ticks counted so far, `None` when no countdown is running
    pub elapsed_ticks: Option<u32>,
}

/// Owner of the single live whisper.
#[derive(Debug)]
pub struct WhisperLifecycle {
    whisper: Option<Whisper>,
    phase: Phase,
    countdown: Option<Countdown>,
    next_token: u64,
    dismissal_ticks: u32,
}

impl WhisperLifecycle {
    /// Create an empty lifecycle. A zero tick count is raised to one.
    pub fn new(dismissal_ticks: u32) -> Self {
        Self {
            whisper: None,
            phase: Phase::Hidden,
            countdown: None,
            next_token: 0,
            dismissal_ticks: dismissal_ticks.max(1),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn whisper(&self) -> Option<&Whisper> {
        self.whisper.as_ref()
    }

    pub fn dismissal_ticks(&self) -> u32 {
        self.dismissal_ticks
    }

    pub fn elapsed_ticks(&self) -> Option<u32> {
        self.countdown.map(|c| c.elapsed)
    }

    /// Token of the running countdown, if any
    pub fn countdown_token(&self) -> Option<CountdownToken> {
        self.countdown.map(|c| c.token)
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        LifecycleSnapshot {
            phase: self.phase,
            whisper: self.whisper.clone(),
            elapsed_ticks: self.elapsed_ticks(),
        }
    }

    /// Fold an action into the state. Actions that do not apply to the
    /// current phase yield no effects.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Show(whisper) => self.show(whisper),
            Action::DidAppear(id) => self.did_appear(id),
            Action::Tick(token) => self.tick(token),
            Action::UserDidTap | Action::UserDidClose => {
                if self.phase.accepts_dismissal() {
                    self.begin_dismissal()
                } else {
                    Vec::new()
                }
            }
            Action::Update { message, category } => self.update(message, category),
            Action::GraceElapsed(id) => self.grace_elapsed(id),
        }
    }

    fn show(&mut self, mut whisper: Whisper) -> Vec<Effect> {
        let mut effects = self.cancel_countdown();

        let id = whisper.id();
        whisper.set_offset(Offset::HIDDEN);
        effects.push(Effect::Emit(WhisperEvent::Shown {
            id,
            message: whisper.message().to_string(),
            category: whisper.category(),
        }));
        effects.push(Effect::Emit(WhisperEvent::OffsetChanged {
            id,
            offset: Offset::HIDDEN,
        }));
        effects.push(Effect::Appear(id));

        self.whisper = Some(whisper);
        self.phase = Phase::Appearing;
        effects
    }

    fn did_appear(&mut self, id: WhisperId) -> Vec<Effect> {
        if self.phase != Phase::Appearing {
            return Vec::new();
        }
        let Some(whisper) = self.whisper.as_mut().filter(|w| w.id() == id) else {
            return Vec::new();
        };

        whisper.set_offset(Offset::VISIBLE);
        let policy = whisper.duration_policy();
        self.phase = Phase::Visible(policy);

        let mut effects = vec![Effect::Emit(WhisperEvent::OffsetChanged {
            id,
            offset: Offset::VISIBLE,
        })];
        if policy == DurationPolicy::Finite {
            effects.extend(self.start_countdown());
        }
        effects
    }

    fn tick(&mut self, token: CountdownToken) -> Vec<Effect> {
        let Some(countdown) = self.countdown.as_mut().filter(|c| c.token == token) else {
            return Vec::new();
        };
        let Some(id) = self.whisper.as_ref().map(Whisper::id) else {
            return Vec::new();
        };

        countdown.elapsed += 1;
        let elapsed = countdown.elapsed;

        let mut effects = vec![Effect::Emit(WhisperEvent::Countdown {
            id,
            elapsed,
            total: self.dismissal_ticks,
        })];
        if elapsed >= self.dismissal_ticks {
            effects.extend(self.begin_dismissal());
        }
        effects
    }

    fn update(&mut self, message: String, category: WhisperCategory) -> Vec<Effect> {
        let Phase::Visible(old_policy) = self.phase else {
            return Vec::new();
        };
        let Some(whisper) = self.whisper.as_mut() else {
            return Vec::new();
        };

        whisper.revise(message, category);
        let id = whisper.id();
        let new_policy = whisper.duration_policy();
        self.phase = Phase::Visible(new_policy);

        let mut effects = vec![Effect::Emit(WhisperEvent::Updated {
            id,
            message: whisper.message().to_string(),
            category,
        })];
        match (old_policy, new_policy) {
            (DurationPolicy::Infinite, DurationPolicy::Finite) => {
                effects.extend(self.start_countdown())
            }
            (DurationPolicy::Finite, DurationPolicy::Infinite) => {
                effects.extend(self.cancel_countdown())
            }
            _ => {}
        }
        effects
    }

    fn begin_dismissal(&mut self) -> Vec<Effect> {
        let mut effects = self.cancel_countdown();
        let Some(whisper) = self.whisper.as_mut() else {
            return effects;
        };

        whisper.set_offset(Offset::HIDDEN);
        let id = whisper.id();
        self.phase = Phase::Dismissing;

        effects.push(Effect::Emit(WhisperEvent::OffsetChanged {
            id,
            offset: Offset::HIDDEN,
        }));
        effects.push(Effect::ScheduleRemoval(id));
        effects
    }

    fn grace_elapsed(&mut self, id: WhisperId) -> Vec<Effect> {
        if self.phase != Phase::Dismissing || self.whisper.as_ref().map(Whisper::id) != Some(id) {
            return Vec::new();
        }

        self.whisper = None;
        self.phase = Phase::Hidden;
        vec![Effect::Emit(WhisperEvent::Removed { id })]
    }

    fn start_countdown(&mut self) -> Vec<Effect> {
        let mut effects = self.cancel_countdown();
        self.next_token += 1;
        let token = CountdownToken(self.next_token);
        self.countdown = Some(Countdown { token, elapsed: 0 });
        effects.push(Effect::StartCountdown(token));
        effects
    }

    fn cancel_countdown(&mut self) -> Vec<Effect> {
        match self.countdown.take() {
            Some(_) => vec![Effect::CancelCountdown],
            None => Vec::new(),
        }
    }
}

impl Default for WhisperLifecycle {
    fn default() -> Self {
        Self::new(crate::domain::timing::DEFAULT_DISMISSAL_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::whisper::WhisperDraft;

    fn shown(lifecycle: &mut WhisperLifecycle, draft: WhisperDraft) -> WhisperId {
        let whisper = draft.into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));
        lifecycle.reduce(Action::DidAppear(id));
        id
    }

    fn token_of(effects: &[Effect]) -> CountdownToken {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::StartCountdown(token) => Some(*token),
                _ => None,
            })
            .expect("countdown started")
    }

    fn offsets(effects: &[Effect]) -> Vec<Offset> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Emit(WhisperEvent::OffsetChanged { offset, .. }) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn new_lifecycle_is_hidden() {
        let lifecycle = WhisperLifecycle::new(6);
        assert!(lifecycle.phase().is_hidden());
        assert!(lifecycle.whisper().is_none());
        assert!(lifecycle.elapsed_ticks().is_none());
    }

    #[test]
    fn zero_ticks_is_raised_to_one() {
        assert_eq!(WhisperLifecycle::new(0).dismissal_ticks(), 1);
    }

    #[test]
    fn show_enters_appearing_hidden() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let whisper = WhisperDraft::success("ok").into_whisper();
        let id = whisper.id();

        let effects = lifecycle.reduce(Action::Show(whisper));

        assert_eq!(lifecycle.phase(), Phase::Appearing);
        assert!(lifecycle.whisper().unwrap().offset().is_hidden());
        assert_eq!(offsets(&effects), vec![Offset::HIDDEN]);
        assert_eq!(effects.last(), Some(&Effect::Appear(id)));
        assert!(matches!(effects[0], Effect::Emit(WhisperEvent::Shown { .. })));
    }

    #[test]
    fn appear_finite_emits_offset_before_countdown() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let whisper = WhisperDraft::success("ok").into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));

        let effects = lifecycle.reduce(Action::DidAppear(id));

        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Finite));
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::Emit(WhisperEvent::OffsetChanged { id, offset: Offset::VISIBLE })
        );
        assert!(matches!(effects[1], Effect::StartCountdown(_)));
        assert_eq!(lifecycle.elapsed_ticks(), Some(0));
    }

    #[test]
    fn appear_infinite_schedules_nothing() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let whisper = WhisperDraft::error("Oops").into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));

        let effects = lifecycle.reduce(Action::DidAppear(id));

        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Infinite));
        assert!(lifecycle.whisper().unwrap().offset().is_visible());
        assert_eq!(offsets(&effects), vec![Offset::VISIBLE]);
        assert!(!effects.iter().any(|e| matches!(e, Effect::StartCountdown(_))));
        assert!(lifecycle.countdown_token().is_none());
    }

    #[test]
    fn countdown_boundary() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let whisper = WhisperDraft::success("ok").into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));
        let token = token_of(&lifecycle.reduce(Action::DidAppear(id)));

        for _ in 0..5 {
            lifecycle.reduce(Action::Tick(token));
        }
        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Finite));
        assert_eq!(lifecycle.elapsed_ticks(), Some(5));

        let effects = lifecycle.reduce(Action::Tick(token));
        assert_eq!(lifecycle.phase(), Phase::Dismissing);
        assert!(effects.contains(&Effect::CancelCountdown));
        assert_eq!(offsets(&effects), vec![Offset::HIDDEN]);
        assert_eq!(effects.last(), Some(&Effect::ScheduleRemoval(id)));
    }

    #[test]
    fn ticks_after_dismissal_are_ignored() {
        let mut lifecycle = WhisperLifecycle::new(1);
        let whisper = WhisperDraft::success("ok").into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));
        let token = token_of(&lifecycle.reduce(Action::DidAppear(id)));

        lifecycle.reduce(Action::Tick(token));
        assert!(lifecycle.reduce(Action::Tick(token)).is_empty());
        assert_eq!(lifecycle.phase(), Phase::Dismissing);
    }

    #[test]
    fn infinite_ignores_ticks() {
        let mut lifecycle = WhisperLifecycle::new(1);
        let whisper = WhisperDraft::error("Oops").into_whisper();
        let id = whisper.id();
        lifecycle.reduce(Action::Show(whisper));
        lifecycle.reduce(Action::DidAppear(id));

        for value in 0..20 {
            assert!(lifecycle.reduce(Action::Tick(CountdownToken(value))).is_empty());
        }
        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Infinite));
    }

    #[test]
    fn user_dismissal_from_visible_and_appearing() {
        let mut lifecycle = WhisperLifecycle::new(6);
        shown(&mut lifecycle, WhisperDraft::success("ok"));
        let effects = lifecycle.reduce(Action::UserDidTap);
        assert_eq!(lifecycle.phase(), Phase::Dismissing);
        assert_eq!(effects[0], Effect::CancelCountdown);

        let mut lifecycle = WhisperLifecycle::new(6);
        lifecycle.reduce(Action::Show(WhisperDraft::success("ok").into_whisper()));
        let effects = lifecycle.reduce(Action::UserDidClose);
        assert_eq!(lifecycle.phase(), Phase::Dismissing);
        assert!(!effects.contains(&Effect::CancelCountdown));
    }

    #[test]
    fn dismissal_is_idempotent() {
        let mut lifecycle = WhisperLifecycle::new(6);
        shown(&mut lifecycle, WhisperDraft::error("Oops"));
        lifecycle.reduce(Action::UserDidClose);

        assert!(lifecycle.reduce(Action::UserDidClose).is_empty());
        assert!(lifecycle.reduce(Action::UserDidTap).is_empty());
        assert_eq!(lifecycle.phase(), Phase::Dismissing);
    }

    #[test]
    fn dismissal_while_hidden_is_noop() {
        let mut lifecycle = WhisperLifecycle::new(6);
        assert!(lifecycle.reduce(Action::UserDidTap).is_empty());
        assert!(lifecycle.phase().is_hidden());
    }

    #[test]
    fn grace_elapsed_removes() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let id = shown(&mut lifecycle, WhisperDraft::error("Oops"));
        lifecycle.reduce(Action::UserDidClose);

        let effects = lifecycle.reduce(Action::GraceElapsed(id));

        assert_eq!(effects, vec![Effect::Emit(WhisperEvent::Removed { id })]);
        assert!(lifecycle.phase().is_hidden());
        assert!(lifecycle.whisper().is_none());
    }

    #[test]
    fn grace_elapsed_before_dismissal_is_ignored() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let id = shown(&mut lifecycle, WhisperDraft::error("Oops"));
        assert!(lifecycle.reduce(Action::GraceElapsed(id)).is_empty());
        assert!(lifecycle.phase().is_visible());
    }

    #[test]
    fn show_supersedes_running_countdown() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let first = WhisperDraft::success("A").into_whisper();
        let first_id = first.id();
        lifecycle.reduce(Action::Show(first));
        let first_token = token_of(&lifecycle.reduce(Action::DidAppear(first_id)));
        lifecycle.reduce(Action::Tick(first_token));

        let second = WhisperDraft::success("B").into_whisper();
        let second_id = second.id();
        let effects = lifecycle.reduce(Action::Show(second));
        assert_eq!(effects[0], Effect::CancelCountdown);

        let second_token = token_of(&lifecycle.reduce(Action::DidAppear(second_id)));
        assert_ne!(first_token, second_token);

        // Stale ticks from the first countdown never count
        for _ in 0..10 {
            assert!(lifecycle.reduce(Action::Tick(first_token)).is_empty());
        }
        assert_eq!(lifecycle.elapsed_ticks(), Some(0));
        assert_eq!(lifecycle.whisper().unwrap().id(), second_id);
    }

    #[test]
    fn superseded_whisper_never_removed() {
        let mut lifecycle = WhisperLifecycle::new(6);
        let first = shown(&mut lifecycle, WhisperDraft::error("A"));
        lifecycle.reduce(Action::UserDidClose);

        let second = shown(&mut lifecycle, WhisperDraft::error("B"));

        assert!(lifecycle.reduce(Action::GraceElapsed(first)).is_empty());
        assert!(lifecycle.reduce(Action::DidAppear(first)).is_empty());
        assert_eq!(lifecycle.whisper().unwrap().id(), second);
        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Infinite));
    }

    #[test]
    fn update_infinite_to_finite_starts_fresh_countdown() {
        let mut lifecycle = WhisperLifecycle::new(3);
        let id = shown(&mut lifecycle, WhisperDraft::error("Oops"));

        let effects = lifecycle.reduce(Action::Update {
            message: "Retried".to_string(),
            category: WhisperCategory::Success,
        });

        assert_eq!(
            effects[0],
            Effect::Emit(WhisperEvent::Updated {
                id,
                message: "Retried".to_string(),
                category: WhisperCategory::Success,
            })
        );
        let token = token_of(&effects);
        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Finite));
        assert_eq!(lifecycle.whisper().unwrap().id(), id);
        assert!(offsets(&effects).is_empty());

        lifecycle.reduce(Action::Tick(token));
        lifecycle.reduce(Action::Tick(token));
        assert!(lifecycle.phase().is_visible());
        lifecycle.reduce(Action::Tick(token));
        assert!(lifecycle.phase().is_dismissing());
    }

    #[test]
    fn update_finite_to_infinite_cancels_countdown() {
        let mut lifecycle = WhisperLifecycle::new(3);
        shown(&mut lifecycle, WhisperDraft::success("ok"));
        let token = lifecycle.countdown_token().unwrap();

        let effects = lifecycle.reduce(Action::Update {
            message: "broken".to_string(),
            category: WhisperCategory::Error,
        });

        assert!(effects.contains(&Effect::CancelCountdown));
        assert_eq!(lifecycle.phase(), Phase::Visible(DurationPolicy::Infinite));
        assert!(lifecycle.reduce(Action::Tick(token)).is_empty());
    }

    #[test]
    fn update_same_policy_keeps_countdown() {
        let mut lifecycle = WhisperLifecycle::new(3);
        shown(&mut lifecycle, WhisperDraft::success("ok"));
        let token = lifecycle.countdown_token().unwrap();
        lifecycle.reduce(Action::Tick(token));

        let effects = lifecycle.reduce(Action::Update {
            message: "still ok".to_string(),
            category: WhisperCategory::Success,
        });

        assert_eq!(effects.len(), 1);
        assert_eq!(lifecycle.countdown_token(), Some(token));
        assert_eq!(lifecycle.elapsed_ticks(), Some(1));
    }

    #[test]
    fn update_outside_visible_is_noop() {
        let update = || Action::Update {
            message: "x".to_string(),
            category: WhisperCategory::Success,
        };

        let mut lifecycle = WhisperLifecycle::new(3);
        assert!(lifecycle.reduce(update()).is_empty());

        lifecycle.reduce(Action::Show(WhisperDraft::error("a").into_whisper()));
        assert!(lifecycle.reduce(update()).is_empty());
        assert_eq!(lifecycle.whisper().unwrap().message(), "a");

        lifecycle.reduce(Action::UserDidClose);
        assert!(lifecycle.reduce(update()).is_empty());
    }

    #[test]
    fn offset_sequence_over_full_lifecycle() {
        let mut lifecycle = WhisperLifecycle::new(2);
        let whisper = WhisperDraft::success("ok").into_whisper();
        let id = whisper.id();

        let mut all = lifecycle.reduce(Action::Show(whisper));
        let appear = lifecycle.reduce(Action::DidAppear(id));
        let token = token_of(&appear);
        all.extend(appear);
        all.extend(lifecycle.reduce(Action::Tick(token)));
        all.extend(lifecycle.reduce(Action::Tick(token)));
        all.extend(lifecycle.reduce(Action::GraceElapsed(id)));

        assert_eq!(offsets(&all), vec![Offset::HIDDEN, Offset::VISIBLE, Offset::HIDDEN]);
        let removed = all
            .iter()
            .filter(|e| matches!(e, Effect::Emit(WhisperEvent::Removed { .. })))
            .count();
        assert_eq!(removed, 1);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Hidden.to_string(), "hidden");
        assert_eq!(Phase::Visible(DurationPolicy::Infinite).to_string(), "visible(infinite)");
        assert_eq!(Phase::Dismissing.to_string(), "dismissing");
    }

    #[test]
    fn event_serializes_with_tag() {
        let id = WhisperId::new();
        let json = serde_json::to_value(WhisperEvent::Removed { id }).unwrap();
        assert_eq!(json["event"], "removed");
        assert_eq!(json["id"], id.to_string());
    }
}
