//! The digital time readout under the face.

use super::{BRASS, DIM, MUTED, SILVER};
use chime_core::WallClockSample;
use egui::text::{LayoutJob, TextFormat};
use egui::{FontId, Widget};

/// Large HH:MM readout with an AM/PM tag in 12-hour mode.
pub struct TimeDisplay {
    sample: WallClockSample,
    twenty_four_hour: bool,
}

impl TimeDisplay {
    /// Readout for the given sample.
    pub fn new(sample: &WallClockSample, twenty_four_hour: bool) -> Self {
        Self {
            sample: *sample,
            twenty_four_hour,
        }
    }
}

impl Widget for TimeDisplay {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let digits = FontId::proportional(52.0);
        let hour = if self.twenty_four_hour {
            self.sample.hour
        } else {
            self.sample.display_hour()
        };

        let mut job = LayoutJob::default();
        job.append(
            &format!("{hour:02}"),
            0.0,
            TextFormat {
                font_id: digits.clone(),
                color: SILVER,
                ..Default::default()
            },
        );
        job.append(
            ":",
            2.0,
            TextFormat {
                font_id: digits.clone(),
                color: BRASS,
                ..Default::default()
            },
        );
        job.append(
            &format!("{:02}", self.sample.minute),
            2.0,
            TextFormat {
                font_id: digits,
                color: SILVER,
                ..Default::default()
            },
        );
        if !self.twenty_four_hour {
            job.append(
                self.sample.meridiem(),
                10.0,
                TextFormat {
                    font_id: FontId::proportional(16.0),
                    color: MUTED,
                    ..Default::default()
                },
            );
        }

        ui.vertical_centered(|ui| {
            ui.label(job);
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("JAZZ PLAYS AT :00 & :30")
                    .size(10.0)
                    .color(DIM),
            );
        })
        .response
    }
}
