//! Declarative description of the ambient pad.
//!
//! The voicing says *what* the pad is - partials, detune, filter, tremolo,
//! swell times - and [`crate::synth::PadSynth`] turns it into samples. The
//! split keeps the musical material apart from the signal plumbing.

use rand::RngExt;

/// Target gain each partial swells to.
pub const PAD_LEVEL: f32 = 0.03;
/// Low-pass cutoff shared by all partials.
pub const FILTER_CUTOFF_HZ: f32 = 800.0;
/// Low-pass resonance.
pub const FILTER_Q: f32 = 1.0;
/// Tremolo rate shared by all partials.
pub const TREMOLO_RATE_HZ: f32 = 0.3;
/// Tremolo excursion, added to each partial's gain.
pub const TREMOLO_DEPTH: f32 = 0.005;
/// Swell time of the first partial.
pub const SWELL_BASE_SECS: f32 = 2.0;
/// Each later partial completes its swell this much later.
pub const SWELL_STAGGER_SECS: f32 = 0.5;
/// Fade-out time on release.
pub const RELEASE_SECS: f32 = 1.0;
/// Margin after the fade before the output resource is closed.
pub const RELEASE_GRACE_SECS: f32 = 0.2;
/// Maximum random detune per partial, in cents either way.
pub const DETUNE_SPREAD_CENTS: f32 = 5.0;

/// One sine partial of the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Nominal frequency before detune.
    pub freq_hz: f32,
    /// Random per-session detune, in cents.
    pub detune_cents: f32,
    /// Gain the swell ramps up to.
    pub level: f32,
    /// Seconds from session start until the swell completes.
    pub swell_secs: f32,
}

impl Partial {
    /// Frequency with the detune applied.
    pub fn detuned_hz(&self) -> f32 {
        self.freq_hz * 2f32.powf(self.detune_cents / 1200.0)
    }
}

/// The full pad description consumed by the synth.
#[derive(Debug, Clone, PartialEq)]
pub struct Voicing {
    /// Pad partials, swelling in listed order.
    pub partials: Vec<Partial>,
    /// Shared low-pass cutoff.
    pub filter_cutoff_hz: f32,
    /// Shared low-pass Q.
    pub filter_q: f32,
    /// Shared tremolo rate.
    pub tremolo_rate_hz: f32,
    /// Shared tremolo depth.
    pub tremolo_depth: f32,
}

impl Voicing {
    /// The jazz clock's pad: G3, B3, D4, F#4 - a Gmaj7 voicing - each
    /// partial nudged by a small random detune for richness, swelling in a
    /// staggered order.
    pub fn jazz_pad() -> Self {
        let mut rng = rand::rng();
        Self::jazz_pad_with(|_| rng.random_range(-DETUNE_SPREAD_CENTS..=DETUNE_SPREAD_CENTS))
    }

    /// Like [`Voicing::jazz_pad`] with caller-chosen detunes. Tests use this
    /// to stay deterministic.
    pub fn jazz_pad_with(mut detune_cents: impl FnMut(usize) -> f32) -> Self {
        let partials = [196.00, 246.94, 293.66, 369.99]
            .iter()
            .enumerate()
            .map(|(i, &freq_hz)| Partial {
                freq_hz,
                detune_cents: detune_cents(i),
                level: PAD_LEVEL,
                swell_secs: SWELL_BASE_SECS + i as f32 * SWELL_STAGGER_SECS,
            })
            .collect();
        Self {
            partials,
            filter_cutoff_hz: FILTER_CUTOFF_HZ,
            filter_q: FILTER_Q,
            tremolo_rate_hz: TREMOLO_RATE_HZ,
            tremolo_depth: TREMOLO_DEPTH,
        }
    }
}
