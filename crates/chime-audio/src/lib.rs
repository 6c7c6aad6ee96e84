//! Chime Audio - Ambient Pad Synthesis and Playback
//!
//! Translates the clock's boolean playing flag into an audible layered pad:
//! - [`voicing`] describes the pad declaratively (partials, filter, tremolo)
//! - [`synth`] renders it block by block, with swell and release envelopes
//! - [`player`] runs one tone session at a time against the audio device
//! - [`render`] writes an offline WAV preview of the same pad
//!
//! The device side is feature-gated: `audio` (default) pulls in cpal, while
//! tests and headless builds drive the synth through a mock sink.

#![warn(missing_docs)]

pub mod filter;
#[cfg(any(test, feature = "mock-audio"))]
pub mod mock;
#[cfg(feature = "audio")]
pub mod output;
pub mod player;
pub mod render;
pub mod synth;
pub mod voicing;

pub use player::{PadSink, SinkFactory, TonePlayer};
pub use synth::PadSynth;
pub use voicing::{Partial, Voicing};

use thiserror::Error;

/// Audio-side error types.
///
/// A missing or misbehaving output device is degraded-mode, not fatal: the
/// player logs it and runs silent.
#[derive(Error, Debug)]
pub enum AudioError {
    /// No output device is available on this host.
    #[error("no audio output device available")]
    NoDevice,

    /// The device rejected the stream configuration.
    #[error("audio stream setup failed: {0}")]
    StreamSetup(String),

    /// Offline WAV rendering failed.
    #[error("wav write failed: {0}")]
    Wav(#[from] hound::Error),
}
