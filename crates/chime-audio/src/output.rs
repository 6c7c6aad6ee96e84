//! The audio output resource: a cpal stream fed from a ring buffer.
//!
//! The session worker pushes mono blocks into the producer half; the device
//! callback drains the consumer half and duplicates each frame across the
//! device's channels. Dropping [`AudioOutput`] (or calling
//! [`AudioOutput::stop`]) releases the stream.

use crate::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::traits::*;
use ringbuf::{HeapProd, HeapRb};
use tracing::{debug, warn};

/// Ring-buffer headroom relative to the requested latency. Kept small so a
/// fade-out reaches the device promptly instead of queueing behind
/// pre-rendered audio.
const BUFFER_SLACK: usize = 2;

/// An open output stream on the default device.
pub struct AudioOutput {
    stream: Option<cpal::Stream>,
    sample_rate: u32,
}

impl AudioOutput {
    /// Open the default output device and start the stream. Returns the
    /// producer half the session worker writes mono samples into.
    pub fn open(latency_ms: f32) -> Result<(Self, HeapProd<f32>), AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::StreamSetup(e.to_string()))?;
        let sample_rate = supported.sample_rate();
        let channels = supported.channels();

        let config = cpal::StreamConfig {
            channels,
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let capacity = (sample_rate as f32 * latency_ms / 1000.0) as usize;
        let rb = HeapRb::<f32>::new(capacity.max(256) * BUFFER_SLACK);
        let (prod, mut cons) = rb.split();

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let n_frames = data.len() / channels as usize;
                    for frame in 0..n_frames {
                        // Mono source: replicate across all channels. An
                        // underrun plays silence rather than stalling.
                        let s = cons.try_pop().unwrap_or(0.0);
                        for ch in 0..channels as usize {
                            data[frame * channels as usize + ch] = s;
                        }
                    }
                },
                |err| warn!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| AudioError::StreamSetup(e.to_string()))?;
        stream
            .play()
            .map_err(|e| AudioError::StreamSetup(e.to_string()))?;

        debug!(sample_rate, channels, "audio output opened");
        Ok((
            Self {
                stream: Some(stream),
                sample_rate,
            },
            prod,
        ))
    }

    /// Device sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Release the stream early.
    pub fn stop(&mut self) {
        self.stream.take();
    }

    /// Push mono samples, waiting for the callback to drain when full.
    pub fn push_samples(prod: &mut HeapProd<f32>, samples: &[f32]) {
        let mut offset = 0;
        while offset < samples.len() {
            let written = prod.push_slice(&samples[offset..]);
            offset += written;
            if offset < samples.len() {
                std::thread::sleep(std::time::Duration::from_micros(200));
            }
        }
    }
}

impl Drop for AudioOutput {
    fn drop(&mut self) {
        if self.stream.take().is_some() {
            debug!("audio output released");
        }
    }
}
