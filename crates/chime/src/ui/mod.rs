//! Display widgets.
//!
//! These are thin rendering surfaces: they consume plain clock data (hand
//! angles, a playing flag, a notification flag) and produce pixels. All of
//! the behavior lives in `chime-core`/`chime-audio`.

pub mod clock_face;
pub mod time_display;
pub mod transport;

pub use clock_face::ClockFace;
pub use time_display::TimeDisplay;
pub use transport::{notification_banner, PlayButton};

use egui::Color32;

/// Window background, near-black midnight blue.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x12);
/// Clock face fill.
pub const FACE: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x2e);
/// Brass accents: frame, major marks, hour hand, banner.
pub const BRASS: Color32 = Color32::from_rgb(0xc9, 0xa2, 0x27);
/// Minute hand and digital digits.
pub const SILVER: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xf0);
/// Minor marks.
pub const DIM: Color32 = Color32::from_rgb(0x6a, 0x6a, 0x7a);
/// Captions and the meridiem tag.
pub const MUTED: Color32 = Color32::from_rgb(0x8b, 0x8b, 0x9a);
