//! Chime - a jazz clock.
//!
//! An analog/digital clock that plays a short ambient pad at every half-hour
//! mark, with a manual play/pause control. `--render` writes a WAV preview
//! of the pad instead of opening the window.

#![warn(missing_docs)]

mod app;
mod config;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Render a pad preview to a WAV file instead of opening the clock
    #[arg(long, value_name = "PATH")]
    render: Option<PathBuf>,

    /// Length of the rendered preview in seconds, fade-out included
    #[arg(long, default_value_t = 20.0)]
    duration: f32,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let config = config::UserConfig::load();

    if let Some(path) = args.render {
        chime_audio::render::render_preview(&path, args.duration, config.master_volume)
            .with_context(|| format!("failed to render preview to {}", path.display()))?;
        return Ok(());
    }

    let size = [
        config.window_width.unwrap_or(460.0),
        config.window_height.unwrap_or(780.0),
    ];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chime")
            .with_inner_size(size)
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chime",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ChimeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the clock window: {e}"))
}
