//! Chime Core - Domain Model for the Jazz Clock
//!
//! This crate contains the behavioral core of Chime, free of any I/O:
//! - Wall-clock sampling and hand-angle math for the analog face
//! - Half-hour chime detection with deferred playback effects
//! - The conductor owning playback/notification state
//!
//! The application crate drives `Conductor::tick` once per second and maps
//! the resulting state onto the audio player and the display widgets.

#![warn(missing_docs)]

pub mod clock;
pub mod conductor;
pub mod trigger;

pub use clock::{tick_marks, TickMark, WallClockSample};
pub use conductor::{Conductor, PlaybackState};
pub use trigger::{
    ChimeAction, HalfHourTrigger, AUTO_NOTIFY_DELAY, AUTO_STOP_DELAY, MANUAL_NOTIFY_DELAY,
};
