//! Hand-angle and face-geometry tests.

use chime_core::{tick_marks, WallClockSample};
use proptest::prelude::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn hour_angle_reference_points() {
    assert_close(WallClockSample::new(3, 0, 0).hour_angle(), 90.0);
    assert_close(WallClockSample::new(0, 30, 0).hour_angle(), 15.0);
    assert_close(WallClockSample::new(12, 0, 0).hour_angle(), 0.0);
    // 6:45 -> halfway between drifting past 202.5
    assert_close(WallClockSample::new(6, 45, 0).hour_angle(), 202.5);
}

#[test]
fn minute_angle_reference_points() {
    assert_close(WallClockSample::new(0, 15, 0).minute_angle(), 90.0);
    assert_close(WallClockSample::new(0, 0, 30).minute_angle(), 3.0);
    assert_close(WallClockSample::new(0, 0, 0).minute_angle(), 0.0);
}

#[test]
fn hour_angle_is_continuous_not_stepped() {
    let on_the_hour = WallClockSample::new(5, 0, 0).hour_angle();
    let half_past = WallClockSample::new(5, 30, 0).hour_angle();
    assert_close(half_past - on_the_hour, 15.0);
}

#[test]
fn twelve_marks_with_majors_at_quarters() {
    let marks = tick_marks();
    assert_eq!(marks.len(), 12);
    for (i, mark) in marks.iter().enumerate() {
        assert_eq!(mark.major, i % 3 == 0, "mark {i}");
    }
}

#[test]
fn first_mark_points_up() {
    let marks = tick_marks();
    // Index 0 is the 12 o'clock mark: vertical, above center, major depth.
    assert_close(marks[0].x1, 50.0);
    assert_close(marks[0].x2, 50.0);
    assert_close(marks[0].y1, 50.0 - 38.0);
    assert_close(marks[0].y2, 50.0 - 45.0);
}

#[test]
fn minor_marks_are_shorter() {
    let marks = tick_marks();
    let len = |m: &chime_core::TickMark| ((m.x2 - m.x1).powi(2) + (m.y2 - m.y1).powi(2)).sqrt();
    assert_close(len(&marks[0]), 7.0);
    assert_close(len(&marks[1]), 4.0);
}

proptest! {
    #[test]
    fn angles_stay_in_range(hour in 0u32..24, minute in 0u32..60, second in 0u32..60) {
        let sample = WallClockSample::new(hour, minute, second);
        prop_assert!((0.0..360.0).contains(&sample.hour_angle()));
        prop_assert!((0.0..360.0).contains(&sample.minute_angle()));
    }
}
