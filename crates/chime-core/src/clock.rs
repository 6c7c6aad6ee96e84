//! Wall-clock sampling and analog face geometry.
//!
//! Everything here is a pure function of a [`WallClockSample`]; the sample is
//! recreated on every tick and never retained. Angles are in degrees,
//! measured clockwise from 12 o'clock, so they can be handed straight to the
//! face widget.

use chrono::Timelike;

/// Radius of the face view box. All tick geometry lives on a 100x100 face
/// centered at (50, 50), matching the widget's normalized coordinates.
const FACE_CENTER: f32 = 50.0;
/// Outer radius of the hour marks.
const MARK_OUTER_RADIUS: f32 = 45.0;
/// Inner radius of the major (12/3/6/9) marks.
const MARK_INNER_MAJOR: f32 = 38.0;
/// Inner radius of the minor marks.
const MARK_INNER_MINOR: f32 = 41.0;

/// An instantaneous reading of the local wall clock.
///
/// Invalid field values (minute > 59 etc.) are a caller contract violation;
/// the math here does not defend against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockSample {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute of hour, 0-59.
    pub minute: u32,
    /// Second of minute, 0-59.
    pub second: u32,
}

impl WallClockSample {
    /// Build a sample from explicit fields.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Read the local wall clock.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    /// Identifies the minute within the day: `hour * 60 + minute`.
    ///
    /// Used to dedup half-hour chimes: slot indices do not repeat within a
    /// day, so "fired this slot already" is a single stored value.
    pub fn slot(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// True exactly on the :00 and :30 marks.
    pub fn is_half_hour(&self) -> bool {
        self.minute == 0 || self.minute == 30
    }

    /// Hour hand rotation in degrees. Drifts through the hour as minutes
    /// advance rather than stepping.
    pub fn hour_angle(&self) -> f32 {
        (self.hour % 12) as f32 * 30.0 + self.minute as f32 * 0.5
    }

    /// Minute hand rotation in degrees. Drifts through the minute as seconds
    /// advance.
    pub fn minute_angle(&self) -> f32 {
        self.minute as f32 * 6.0 + self.second as f32 * 0.1
    }

    /// Hour for a 12-hour display: 0 and 12 both render as 12.
    pub fn display_hour(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// "AM"/"PM" marker for the 12-hour display.
    pub fn meridiem(&self) -> &'static str {
        if self.hour >= 12 {
            "PM"
        } else {
            "AM"
        }
    }
}

/// One hour mark on the analog face, in 100x100 face coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Inner endpoint.
    pub x1: f32,
    /// Inner endpoint.
    pub y1: f32,
    /// Outer endpoint.
    pub x2: f32,
    /// Outer endpoint.
    pub y2: f32,
    /// Major marks sit at the 12/3/6/9 positions and draw heavier.
    pub major: bool,
}

/// The twelve hour marks, 30 degrees apart, index 0 pointing up.
pub fn tick_marks() -> [TickMark; 12] {
    std::array::from_fn(|i| {
        let major = i % 3 == 0;
        let angle = (i as f32 * 30.0 - 90.0).to_radians();
        let inner = if major {
            MARK_INNER_MAJOR
        } else {
            MARK_INNER_MINOR
        };
        TickMark {
            x1: FACE_CENTER + angle.cos() * inner,
            y1: FACE_CENTER + angle.sin() * inner,
            x2: FACE_CENTER + angle.cos() * MARK_OUTER_RADIUS,
            y2: FACE_CENTER + angle.sin() * MARK_OUTER_RADIUS,
            major,
        }
    })
}
