//! Play/pause control and the transient "jazz time" banner.

use super::{BRASS, FACE};
use egui::{Rect, Sense, Shape, Stroke, Vec2, Widget};

/// Height reserved for the banner so the layout does not jump when it hides.
const BANNER_HEIGHT: f32 = 36.0;

/// Circular play/pause button.
pub struct PlayButton {
    playing: bool,
}

impl PlayButton {
    /// Button reflecting the current playing state.
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }
}

impl Widget for PlayButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let diameter = 64.0;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = diameter / 2.0;

            let ring = if response.hovered() {
                BRASS
            } else {
                BRASS.gamma_multiply(0.4)
            };
            painter.circle_filled(center, radius, FACE);
            painter.circle_stroke(center, radius, Stroke::new(1.5, ring));

            if self.playing {
                // Pause: two bars.
                for dx in [-6.0, 6.0] {
                    let bar = Rect::from_center_size(
                        center + Vec2::new(dx, 0.0),
                        Vec2::new(5.0, 22.0),
                    );
                    painter.rect_filled(bar, 2.0, BRASS);
                }
            } else {
                // Play: a triangle, nudged right to sit optically centered.
                let points = vec![
                    center + Vec2::new(-7.0, -11.0),
                    center + Vec2::new(12.0, 0.0),
                    center + Vec2::new(-7.0, 11.0),
                ];
                painter.add(Shape::convex_polygon(points, BRASS, Stroke::NONE));
            }
        }

        response
    }
}

/// The transient "jazz time" pill shown while a chime announces itself.
///
/// Always consumes the same vertical space; the pill itself only draws while
/// `visible` is set.
pub fn notification_banner(ui: &mut egui::Ui, visible: bool) {
    let width = 180.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, BANNER_HEIGHT), Sense::hover());

    if visible && ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let pill = Rect::from_center_size(rect.center(), Vec2::new(width, 28.0));
        painter.rect_filled(pill, 14.0, BRASS.gamma_multiply(0.18));
        painter.rect_stroke(
            pill,
            14.0,
            Stroke::new(1.0, BRASS.gamma_multiply(0.5)),
            egui::StrokeKind::Outside,
        );
        painter.text(
            pill.center(),
            egui::Align2::CENTER_CENTER,
            "\u{266a}  JAZZ TIME",
            egui::FontId::proportional(13.0),
            BRASS,
        );
    }
}
