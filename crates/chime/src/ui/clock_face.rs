//! The analog clock face.

use super::{BRASS, DIM, FACE, SILVER};
use chime_core::WallClockSample;
use egui::{Align2, FontId, Pos2, Sense, Stroke, Vec2, Widget};

/// Widget drawing the face, marks, numerals and hands.
///
/// Geometry comes from `chime_core` in 100x100 face coordinates and is
/// scaled into the allocated rect here.
pub struct ClockFace {
    hour_angle: f32,
    minute_angle: f32,
    size: f32,
}

impl ClockFace {
    /// Face for the given sample.
    pub fn new(sample: &WallClockSample) -> Self {
        Self {
            hour_angle: sample.hour_angle(),
            minute_angle: sample.minute_angle(),
            size: 320.0,
        }
    }

    /// Set the face diameter in points.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for ClockFace {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let scale = rect.width() / 100.0;
            let at = |x: f32, y: f32| rect.min + Vec2::new(x, y) * scale;

            // Frame rings and face.
            painter.circle_stroke(center, 49.0 * scale, Stroke::new(0.8 * scale, BRASS));
            painter.circle_filled(center, 46.0 * scale, FACE);
            painter.circle_stroke(
                center,
                44.0 * scale,
                Stroke::new(0.5, BRASS.gamma_multiply(0.3)),
            );

            // Hour marks.
            for mark in chime_core::tick_marks() {
                let (width, color) = if mark.major {
                    (1.5 * scale, BRASS)
                } else {
                    (0.5 * scale, DIM)
                };
                painter.line_segment(
                    [at(mark.x1, mark.y1), at(mark.x2, mark.y2)],
                    Stroke::new(width, color),
                );
            }

            // Numerals at the quarters.
            for (label, x, y) in [
                ("XII", 50.0, 14.0),
                ("III", 87.0, 50.0),
                ("VI", 50.0, 87.0),
                ("IX", 13.0, 50.0),
            ] {
                painter.text(
                    at(x, y),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(5.5 * scale),
                    BRASS,
                );
            }

            // Hands: the minute hand is long and light, the hour hand short
            // and brass, both drifting continuously.
            painter.line_segment(
                [center, hand_tip(center, self.minute_angle, 36.0 * scale)],
                Stroke::new(1.2 * scale, SILVER),
            );
            painter.line_segment(
                [center, hand_tip(center, self.hour_angle, 22.0 * scale)],
                Stroke::new(2.0 * scale, BRASS),
            );

            // Center cap.
            painter.circle_filled(center, 3.0 * scale, FACE);
            painter.circle_stroke(center, 3.0 * scale, Stroke::new(1.0 * scale, BRASS));
            painter.circle_filled(center, 1.5 * scale, BRASS);
        }

        response
    }
}

/// Endpoint of a hand: `angle_deg` is clockwise from 12 o'clock.
fn hand_tip(center: Pos2, angle_deg: f32, radius: f32) -> Pos2 {
    let rad = (angle_deg - 90.0).to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}
