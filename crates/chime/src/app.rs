//! The application shell: owns the conductor, the tone player and the
//! widgets, and drives the 1 Hz tick.

use crate::config::UserConfig;
use crate::ui::{self, notification_banner, ClockFace, PlayButton, TimeDisplay};
use chime_audio::TonePlayer;
use chime_core::{Conductor, WallClockSample};
use std::time::{Duration, Instant};
use tracing::error;

/// The running clock.
pub struct ChimeApp {
    conductor: Conductor,
    player: TonePlayer,
    sample: WallClockSample,
    config: UserConfig,
    started: Instant,
}

impl ChimeApp {
    /// Build the app inside the eframe creation context.
    pub fn new(cc: &eframe::CreationContext<'_>, config: UserConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut player = TonePlayer::new();
        player.set_volume(config.master_volume);

        Self {
            conductor: Conductor::new(),
            player,
            sample: WallClockSample::now(),
            config,
            started: Instant::now(),
        }
    }

    /// Seconds since the app started; the time base for deferred actions.
    fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl eframe::App for ChimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The sole periodic driver: resample the wall clock and run the
        // conductor whenever the second changes.
        let sample = WallClockSample::now();
        if sample != self.sample {
            self.sample = sample;
            self.conductor.tick(&sample, self.now());
        }
        self.player.sync(self.conductor.state().playing);

        // Remember the window size for the next run.
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        let state = self.conductor.state();

        egui::TopBottomPanel::bottom("settings")
            .frame(egui::Frame::NONE.fill(ui::BACKGROUND).inner_margin(8))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let volume = egui::Slider::new(&mut self.config.master_volume, 0.0..=1.0)
                        .show_value(false)
                        .text("volume");
                    if ui.add(volume).changed() {
                        self.player.set_volume(self.config.master_volume);
                    }
                    ui.separator();
                    ui.checkbox(&mut self.config.twenty_four_hour, "24-hour");
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ui::BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    notification_banner(ui, state.notification);
                    ui.add_space(6.0);

                    ui.label(
                        egui::RichText::new("C H I M E")
                            .size(30.0)
                            .color(ui::BRASS),
                    );
                    ui.label(
                        egui::RichText::new("JAZZ CLOCK")
                            .size(10.0)
                            .color(ui::MUTED),
                    );
                    ui.add_space(14.0);

                    let face = (ui.available_width() - 40.0).clamp(220.0, 420.0);
                    ui.add(ClockFace::new(&self.sample).size(face));
                    ui.add_space(14.0);

                    ui.add(TimeDisplay::new(&self.sample, self.config.twenty_four_hour));
                    ui.add_space(16.0);

                    if ui.add(PlayButton::new(state.playing)).clicked() {
                        self.conductor.toggle_playback(self.now());
                        self.player.sync(self.conductor.state().playing);
                    }
                    ui.add_space(6.0);
                    let caption = if state.playing {
                        "NOW PLAYING"
                    } else {
                        "TAP TO PLAY"
                    };
                    ui.label(egui::RichText::new(caption).size(10.0).color(ui::MUTED));
                });
            });

        // Coarse repaint cadence; the tick gate above decides what changes.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl Drop for ChimeApp {
    fn drop(&mut self) {
        // Teardown: cancel pending one-shots, release the audio resource,
        // persist preferences.
        self.conductor.shutdown();
        self.player.shutdown();
        if let Err(e) = self.config.save() {
            error!("failed to save config: {e}");
        }
    }
}
