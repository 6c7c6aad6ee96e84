//! One tone session at a time, driven by the clock's playing flag.
//!
//! [`TonePlayer::sync`] edge-detects the flag. A rising edge spawns a
//! session worker which opens the output, renders the pad, and polls a
//! command channel; a falling edge asks the worker to fade out, after which
//! the worker waits a short grace period, drops the output, and exits. A
//! rising edge while a session is still alive - including mid-fade - is a
//! no-op, so at most one set of synthesis state ever exists.

use crate::synth::PadSynth;
use crate::voicing::{Voicing, RELEASE_GRACE_SECS};
use crate::AudioError;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Frames rendered per worker iteration.
const BLOCK_FRAMES: usize = 512;

/// Requested device latency.
#[cfg(feature = "audio")]
const DEFAULT_LATENCY_MS: f32 = 50.0;

/// Where a session's samples go: the cpal output in production, an
/// in-memory sink in tests and headless builds.
pub trait PadSink {
    /// Rate the synth should render at.
    fn sample_rate(&self) -> u32;
    /// Consume one mono block, pacing the caller as needed.
    fn push(&mut self, block: &[f32]);
}

/// Builds a sink inside the session worker thread, so non-Send resources
/// (the cpal stream) never cross threads.
pub type SinkFactory = Arc<dyn Fn() -> Result<Box<dyn PadSink>, AudioError> + Send + Sync>;

enum Command {
    Release,
    SetVolume(f32),
    Shutdown,
}

/// Owns the playing-flag edge detection and the single session worker.
pub struct TonePlayer {
    factory: SinkFactory,
    worker: Option<JoinHandle<()>>,
    commands: Option<Sender<Command>>,
    playing: bool,
    volume: f32,
}

impl TonePlayer {
    /// A player targeting the default output device.
    #[cfg(feature = "audio")]
    pub fn new() -> Self {
        Self::with_sink_factory(Arc::new(|| {
            let (output, prod) = crate::output::AudioOutput::open(DEFAULT_LATENCY_MS)?;
            Ok(Box::new(CpalSink { output, prod }) as Box<dyn PadSink>)
        }))
    }

    /// A player built without device support; every session is silent.
    #[cfg(not(feature = "audio"))]
    pub fn new() -> Self {
        Self::with_sink_factory(Arc::new(|| Err(AudioError::NoDevice)))
    }

    /// A player with a caller-provided sink, used by tests.
    pub fn with_sink_factory(factory: SinkFactory) -> Self {
        Self {
            factory,
            worker: None,
            commands: None,
            playing: false,
            volume: 1.0,
        }
    }

    /// Mirror the playing flag onto the session lifecycle.
    pub fn sync(&mut self, playing: bool) {
        if playing == self.playing {
            return;
        }
        self.playing = playing;
        if playing {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Master volume for the current and future sessions.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(commands) = &self.commands {
            let _ = commands.send(Command::SetVolume(volume));
        }
    }

    /// True while a session worker is alive (fading counts as alive).
    pub fn is_active(&mut self) -> bool {
        self.reap();
        self.worker.is_some()
    }

    /// Tear the session down immediately: no fade, worker joined, output
    /// released before this returns.
    pub fn shutdown(&mut self) {
        if let Some(commands) = self.commands.take() {
            let _ = commands.send(Command::Shutdown);
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.playing = false;
    }

    fn start(&mut self) {
        self.reap();
        if self.worker.is_some() {
            // Idempotent start: an alive session (even one mid-fade) wins.
            debug!("tone session already active");
            return;
        }
        let (tx, rx) = unbounded();
        let factory = Arc::clone(&self.factory);
        let volume = self.volume;
        let worker = std::thread::Builder::new()
            .name("tone-session".into())
            .spawn(move || session_worker(factory, rx, volume))
            .expect("spawn tone session");
        self.commands = Some(tx);
        self.worker = Some(worker);
    }

    fn stop(&mut self) {
        // Tolerated on an already-dead session: the send just fails.
        if let Some(commands) = &self.commands {
            let _ = commands.send(Command::Release);
        }
    }

    fn reap(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.is_finished()) {
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
            self.commands = None;
        }
    }
}

impl Default for TonePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TonePlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(feature = "audio")]
struct CpalSink {
    output: crate::output::AudioOutput,
    prod: ringbuf::HeapProd<f32>,
}

#[cfg(feature = "audio")]
impl PadSink for CpalSink {
    fn sample_rate(&self) -> u32 {
        self.output.sample_rate()
    }

    fn push(&mut self, block: &[f32]) {
        crate::output::AudioOutput::push_samples(&mut self.prod, block);
    }
}

fn session_worker(factory: SinkFactory, commands: Receiver<Command>, volume: f32) {
    let mut sink = match factory() {
        Ok(sink) => sink,
        Err(e) => {
            // Best effort: no device means a silent chime, not a failure.
            warn!("audio unavailable, chime is silent: {e}");
            return;
        }
    };

    let mut synth = PadSynth::new(&Voicing::jazz_pad(), sink.sample_rate(), volume);
    info!("tone session started");

    let mut block = vec![0.0f32; BLOCK_FRAMES];
    loop {
        match commands.try_recv() {
            Ok(Command::Release) => synth.begin_release(),
            Ok(Command::SetVolume(volume)) => synth.set_master(volume),
            Ok(Command::Shutdown) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => {}
        }

        synth.render(&mut block);
        sink.push(&block);

        if synth.finished() {
            // The fade has landed; give the device a moment to drain it.
            std::thread::sleep(Duration::from_secs_f32(RELEASE_GRACE_SECS));
            break;
        }
    }
    info!("tone session closed");
}
