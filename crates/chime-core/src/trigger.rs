//! Half-hour chime detection and deferred playback effects.
//!
//! The trigger is fed one [`WallClockSample`] per second together with the
//! elapsed-seconds clock `now`. Firing on a :00/:30 mark is deduplicated per
//! minute slot; the follow-up effects (auto-stop, notification hide) are
//! queued as deferred actions and drained by due time on later ticks.
//!
//! Deferred actions are deliberately never cancelled against each other:
//! a manual stop can be overridden by an auto-stop still in flight from an
//! earlier chime, and vice versa. That matches the observed behavior of the
//! timers this models.

use crate::clock::WallClockSample;
use tracing::{debug, info};

/// Seconds an auto-started chime plays before it is stopped.
pub const AUTO_STOP_DELAY: f64 = 30.0;
/// Seconds the notification banner stays up after an auto chime.
pub const AUTO_NOTIFY_DELAY: f64 = 5.0;
/// Seconds the notification banner stays up after a manual start.
pub const MANUAL_NOTIFY_DELAY: f64 = 3.0;

/// A state change requested by the trigger, applied by the conductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChimeAction {
    /// Begin audible playback.
    StartPlayback,
    /// End audible playback, regardless of how it was started.
    StopPlayback,
    /// Show the transient "jazz time" banner.
    ShowNotification,
    /// Hide the banner, regardless of which path showed it.
    HideNotification,
}

#[derive(Debug, Clone, Copy)]
struct Deferred {
    due: f64,
    action: ChimeAction,
}

/// Detects :00/:30 transitions and tracks pending one-shot effects.
#[derive(Debug, Default)]
pub struct HalfHourTrigger {
    /// Most recent slot that has already fired, if any.
    last_fired: Option<u32>,
    /// Pending one-shots, in scheduling order.
    deferred: Vec<Deferred>,
}

impl HalfHourTrigger {
    /// Create an idle trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one second's sample.
    ///
    /// Returns the actions that became effective this tick: deferred actions
    /// whose due time has passed (in scheduling order), followed by the
    /// chime start effects if this sample lands on a fresh half-hour slot.
    pub fn update(&mut self, sample: &WallClockSample, now: f64) -> Vec<ChimeAction> {
        let mut actions = self.drain_due(now);

        if sample.is_half_hour() && self.last_fired != Some(sample.slot()) {
            self.last_fired = Some(sample.slot());
            info!(slot = sample.slot(), "half-hour mark, starting chime");

            actions.push(ChimeAction::StartPlayback);
            actions.push(ChimeAction::ShowNotification);
            // Not cancelled by any later interaction.
            self.defer(now + AUTO_STOP_DELAY, ChimeAction::StopPlayback);
            self.defer(now + AUTO_NOTIFY_DELAY, ChimeAction::HideNotification);
        }

        actions
    }

    /// Queue a one-shot action at an absolute elapsed time.
    ///
    /// The manual-toggle path uses this for its own notification hide.
    pub fn defer(&mut self, due: f64, action: ChimeAction) {
        debug!(?action, due, "deferring action");
        self.deferred.push(Deferred { due, action });
    }

    /// The slot that fired most recently, if any.
    pub fn last_fired(&self) -> Option<u32> {
        self.last_fired
    }

    /// Number of one-shots still pending.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Drop all pending one-shots. Teardown only; nothing fires after this.
    pub fn clear_deferred(&mut self) {
        self.deferred.clear();
    }

    fn drain_due(&mut self, now: f64) -> Vec<ChimeAction> {
        let mut due = Vec::new();
        self.deferred.retain(|d| {
            if d.due <= now {
                due.push(d.action);
                false
            } else {
                true
            }
        });
        due
    }
}
