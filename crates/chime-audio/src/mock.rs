//! In-memory sink for tests and headless runs.

use crate::player::{PadSink, SinkFactory};
use crate::AudioError;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Collects rendered samples instead of playing them.
pub struct MockSink {
    samples: Arc<Mutex<Vec<f32>>>,
}

impl PadSink for MockSink {
    fn sample_rate(&self) -> u32 {
        48_000
    }

    fn push(&mut self, block: &[f32]) {
        self.samples.lock().extend_from_slice(block);
        // Pace the worker the way a real device would, just faster.
        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Factory producing [`MockSink`]s. Counts how many sessions were opened
/// and shares the recorded samples with the caller.
pub fn mock_factory(sessions: Arc<AtomicUsize>, samples: Arc<Mutex<Vec<f32>>>) -> SinkFactory {
    Arc::new(move || {
        sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSink {
            samples: samples.clone(),
        }) as Box<dyn PadSink>)
    })
}

/// Factory that behaves like a machine with no sound hardware.
pub fn unavailable_factory() -> SinkFactory {
    Arc::new(|| Err(AudioError::NoDevice))
}
