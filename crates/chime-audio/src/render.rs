//! Offline rendering of the pad to a WAV file.
//!
//! Lets you audition the chime without a clock or an output device:
//! `chime --render preview.wav`.

use crate::synth::PadSynth;
use crate::voicing::{Voicing, RELEASE_SECS};
use crate::AudioError;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use tracing::info;

/// Render rate for offline previews.
const RENDER_RATE: u32 = 48_000;
/// Frames per rendered block.
const BLOCK_FRAMES: usize = 512;

/// Render `seconds` of the pad (fade-out included) to a 16-bit mono WAV.
pub fn render_preview(path: &Path, seconds: f32, volume: f32) -> Result<(), AudioError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: RENDER_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    let total = (seconds.max(RELEASE_SECS) * RENDER_RATE as f32) as usize;
    let release_at = total.saturating_sub((RELEASE_SECS * RENDER_RATE as f32) as usize);

    let mut synth = PadSynth::new(&Voicing::jazz_pad(), RENDER_RATE, volume);
    let mut block = [0.0f32; BLOCK_FRAMES];
    let mut written = 0;
    while written < total {
        if written >= release_at {
            synth.begin_release();
        }
        let n = BLOCK_FRAMES.min(total - written);
        synth.render(&mut block[..n]);
        for &s in &block[..n] {
            writer.write_sample((s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
        }
        written += n;
    }

    writer.finalize()?;
    info!(?path, seconds, "rendered pad preview");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_has_expected_length_and_fades() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preview.wav");

        render_preview(&path, 5.0, 1.0).expect("render");

        let mut reader = hound::WavReader::open(&path).expect("open wav");
        assert_eq!(reader.spec().sample_rate, RENDER_RATE);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 5 * RENDER_RATE);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        // The last 50ms sit inside the fade tail.
        let tail = &samples[samples.len() - (RENDER_RATE as usize / 20)..];
        let peak = tail.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak < (0.05 * i16::MAX as f32) as u16, "tail peak {peak}");
    }

    #[test]
    fn very_short_preview_still_fades_cleanly() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("short.wav");
        render_preview(&path, 0.2, 1.0).expect("render");

        let reader = hound::WavReader::open(&path).expect("open wav");
        // Clamped up to one full release worth of samples.
        assert_eq!(reader.len(), RENDER_RATE);
    }
}
