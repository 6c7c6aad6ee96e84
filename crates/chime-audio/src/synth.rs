//! Block renderer for the ambient pad.
//!
//! One [`PadSynth`] is one tone session: it swells in when created, holds
//! with a slow tremolo, and fades out once [`PadSynth::begin_release`] is
//! called. Per sample, each partial runs sine -> low-pass -> gain, the
//! shared tremolo is added to every gain, and the sum is scaled by the
//! master volume into a mono stream.

use crate::filter::LowPass;
use crate::voicing::{Voicing, RELEASE_SECS};
use std::f32::consts::TAU;

struct Voice {
    phase: f32,
    phase_inc: f32,
    filter: LowPass,
    gain: f32,
    level: f32,
    swell_per_sample: f32,
    release_per_sample: f32,
}

/// Renders one session of the pad described by a [`Voicing`].
pub struct PadSynth {
    voices: Vec<Voice>,
    sample_rate: f32,
    tremolo_phase: f32,
    tremolo_inc: f32,
    tremolo_depth: f32,
    master: f32,
    releasing: bool,
}

impl PadSynth {
    /// Build a session renderer at the given device rate.
    pub fn new(voicing: &Voicing, sample_rate: u32, master: f32) -> Self {
        let fs = sample_rate as f32;
        let voices = voicing
            .partials
            .iter()
            .map(|partial| Voice {
                phase: 0.0,
                phase_inc: TAU * partial.detuned_hz() / fs,
                filter: LowPass::new(fs, voicing.filter_cutoff_hz, voicing.filter_q),
                gain: 0.0,
                level: partial.level,
                swell_per_sample: partial.level / (partial.swell_secs * fs),
                release_per_sample: 0.0,
            })
            .collect();
        Self {
            voices,
            sample_rate: fs,
            tremolo_phase: 0.0,
            tremolo_inc: TAU * voicing.tremolo_rate_hz / fs,
            tremolo_depth: voicing.tremolo_depth,
            master,
            releasing: false,
        }
    }

    /// Change the master volume mid-session.
    pub fn set_master(&mut self, master: f32) {
        self.master = master;
    }

    /// Start the fade-out: each gain ramps linearly from wherever its swell
    /// got to down to zero over [`RELEASE_SECS`].
    pub fn begin_release(&mut self) {
        if self.releasing {
            return;
        }
        self.releasing = true;
        for voice in &mut self.voices {
            voice.release_per_sample = voice.gain.max(0.0) / (RELEASE_SECS * self.sample_rate);
        }
    }

    /// True once the fade has brought every gain to zero.
    pub fn finished(&self) -> bool {
        self.releasing && self.voices.iter().all(|v| v.gain <= 0.0)
    }

    /// Render the next `out.len()` mono samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            let tremolo = self.tremolo_phase.sin() * self.tremolo_depth;
            self.tremolo_phase += self.tremolo_inc;
            if self.tremolo_phase >= TAU {
                self.tremolo_phase -= TAU;
            }

            let mut acc = 0.0;
            for voice in &mut self.voices {
                if self.releasing {
                    voice.gain = (voice.gain - voice.release_per_sample).max(0.0);
                } else if voice.gain < voice.level {
                    voice.gain = (voice.gain + voice.swell_per_sample).min(voice.level);
                }

                let x = voice.phase.sin();
                voice.phase += voice.phase_inc;
                if voice.phase >= TAU {
                    voice.phase -= TAU;
                }

                let gain = (voice.gain + tremolo).max(0.0);
                acc += voice.filter.process(x) * gain;
            }
            *sample = acc * self.master;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voicing::{PAD_LEVEL, TREMOLO_DEPTH};

    const RATE: u32 = 48_000;

    fn fixed_pad() -> Voicing {
        // Zero detune keeps the tests deterministic.
        Voicing::jazz_pad_with(|_| 0.0)
    }

    fn render_secs(synth: &mut PadSynth, secs: f32) -> Vec<f32> {
        let mut out = vec![0.0f32; (secs * RATE as f32) as usize];
        for chunk in out.chunks_mut(512) {
            synth.render(chunk);
        }
        out
    }

    #[test]
    fn swell_is_staggered_and_linear() {
        let mut synth = PadSynth::new(&fixed_pad(), RATE, 1.0);
        render_secs(&mut synth, 1.0);

        // After 1s the first partial (2s swell) is at half level, the last
        // (3.5s swell) at 2/7 of it.
        assert!((synth.voices[0].gain - PAD_LEVEL * 0.5).abs() < 1e-4);
        assert!((synth.voices[3].gain - PAD_LEVEL * (1.0 / 3.5)).abs() < 1e-4);

        render_secs(&mut synth, 3.0);
        for voice in &synth.voices {
            assert_eq!(voice.gain, PAD_LEVEL);
        }
    }

    #[test]
    fn release_fades_to_silence_within_a_second() {
        let mut synth = PadSynth::new(&fixed_pad(), RATE, 1.0);
        render_secs(&mut synth, 4.0);

        synth.begin_release();
        let tail = render_secs(&mut synth, 1.2);
        assert!(synth.finished());

        // The last stretch carries at most the tremolo residual.
        let last = &tail[tail.len() - (RATE as usize / 10)..];
        let peak = last.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak < 6.0 * TREMOLO_DEPTH, "tail peak {peak}");
    }

    #[test]
    fn release_before_swell_completes_is_harmless() {
        let mut synth = PadSynth::new(&fixed_pad(), RATE, 1.0);
        render_secs(&mut synth, 0.1);
        synth.begin_release();
        render_secs(&mut synth, 1.1);
        assert!(synth.finished());
    }

    #[test]
    fn tremolo_breathes_after_the_swell() {
        let mut synth = PadSynth::new(&fixed_pad(), RATE, 1.0);
        render_secs(&mut synth, 4.0);

        // One full tremolo period is ~3.33s; compare block peaks across it.
        let out = render_secs(&mut synth, 3.4);
        let peaks: Vec<f32> = out
            .chunks(RATE as usize / 4)
            .map(|c| c.iter().fold(0.0f32, |m, s| m.max(s.abs())))
            .collect();
        let hi = peaks.iter().fold(0.0f32, |m, &p| m.max(p));
        let lo = peaks.iter().fold(f32::MAX, |m, &p| m.min(p));
        assert!(hi > lo * 1.1, "no modulation: hi {hi}, lo {lo}");
    }

    #[test]
    fn output_stays_within_pad_headroom() {
        let mut synth = PadSynth::new(&Voicing::jazz_pad(), RATE, 1.0);
        let out = render_secs(&mut synth, 5.0);
        let bound = 4.0 * (PAD_LEVEL + TREMOLO_DEPTH) * 1.5;
        for &s in &out {
            assert!(s.abs() < bound, "sample {s} out of headroom");
        }
    }

    #[test]
    fn master_volume_scales_output() {
        let mut loud = PadSynth::new(&fixed_pad(), RATE, 1.0);
        let mut quiet = PadSynth::new(&fixed_pad(), RATE, 0.25);
        let a = render_secs(&mut loud, 4.0);
        let b = render_secs(&mut quiet, 4.0);
        let peak = |v: &[f32]| v.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        let (pa, pb) = (peak(&a), peak(&b));
        assert!((pb - pa * 0.25).abs() < pa * 0.05, "pa {pa}, pb {pb}");
    }
}
