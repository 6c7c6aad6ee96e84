//! The conductor owns playback state and wires the tick into the trigger.
//!
//! State lives in a single owned record so the tick handler mutates nothing
//! global; the application holds one [`Conductor`] per clock instance and
//! mirrors [`PlaybackState`] onto the audio player and the banner widget.

use crate::clock::WallClockSample;
use crate::trigger::{ChimeAction, HalfHourTrigger, MANUAL_NOTIFY_DELAY};
use tracing::debug;

/// The flags the display and the tone player consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// True while the ambient pad should be audible.
    pub playing: bool,
    /// True while the transient "jazz time" banner should be shown.
    pub notification: bool,
}

/// Root coordinator: applies trigger actions and the manual toggle to the
/// owned [`PlaybackState`].
#[derive(Debug, Default)]
pub struct Conductor {
    state: PlaybackState,
    trigger: HalfHourTrigger,
}

impl Conductor {
    /// Create a conductor in the stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one second's worth of state transitions.
    pub fn tick(&mut self, sample: &WallClockSample, now: f64) {
        for action in self.trigger.update(sample, now) {
            self.apply(action);
        }
    }

    /// User-initiated play/pause.
    ///
    /// Turning playback on also shows the banner for a few seconds. The
    /// toggle does not record a slot and does not cancel pending auto
    /// effects, so an auto chime at the next mark still fires.
    pub fn toggle_playback(&mut self, now: f64) {
        self.state.playing = !self.state.playing;
        debug!(playing = self.state.playing, "manual toggle");
        if self.state.playing {
            self.state.notification = true;
            self.trigger
                .defer(now + MANUAL_NOTIFY_DELAY, ChimeAction::HideNotification);
        }
    }

    /// Current flags.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Access to the trigger, mainly for inspection in tests.
    pub fn trigger(&self) -> &HalfHourTrigger {
        &self.trigger
    }

    /// Cancel pending one-shots and drop back to the stopped state.
    pub fn shutdown(&mut self) {
        self.trigger.clear_deferred();
        self.state = PlaybackState::default();
    }

    fn apply(&mut self, action: ChimeAction) {
        match action {
            ChimeAction::StartPlayback => self.state.playing = true,
            ChimeAction::StopPlayback => self.state.playing = false,
            ChimeAction::ShowNotification => self.state.notification = true,
            ChimeAction::HideNotification => self.state.notification = false,
        }
    }
}
