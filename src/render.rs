//! Last-rendered state and redraw decisions.
//!
//! Every widget repaints by erasing its previous content in the background
//! color and painting the new content on top, so the engine has to remember
//! exactly what is on screen. [`Shown`] holds those last-rendered values;
//! the helpers here decide whether a candidate value is different enough to
//! warrant a repaint.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::String;

use crate::config::layout::TILT_CENTER;

/// Change below which a new heading does not trigger a ribbon redraw.
/// Coarse on purpose: compass jitter would otherwise flicker the band.
pub const HEADING_DEADBAND_DEG: i32 = 2;

/// Mounting correction subtracted from the raw compass heading.
pub const HEADING_MOUNT_OFFSET_DEG: i32 = 90;

/// Values currently on screen, one field per widget.
///
/// Invariant: after any render pass these equal the just-painted values.
pub struct Shown {
    /// Temperature tile, tenths of a degree.
    pub temp_tenths: i32,
    /// Humidity tile, tenths of a percent.
    pub humidity_tenths: i32,
    /// G-force tile, tenths of a g (peak-hold).
    pub g_tenths: i32,
    /// Heading the ribbon was last laid out for.
    pub heading_deg: i32,
    /// Center of the last-drawn tilt ball.
    pub ball: Point,
}

impl Shown {
    pub const fn new() -> Self {
        Self {
            temp_tenths: 0,
            humidity_tenths: 0,
            g_tenths: 1,
            heading_deg: 0,
            ball: TILT_CENTER,
        }
    }
}

impl Default for Shown {
    fn default() -> Self { Self::new() }
}

/// Whether `candidate` differs from the rendered heading by more than the
/// deadband.
pub fn heading_dirty(
    shown_deg: i32,
    candidate_deg: i32,
) -> bool {
    (candidate_deg - shown_deg).abs() > HEADING_DEADBAND_DEG
}

/// Format a tenths-scaled integer as a decimal string ("213" -> "21.3").
pub fn fmt_tenths(tenths: i32) -> String<12> {
    let mut s = String::new();
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    let _ = write!(s, "{sign}{}.{}", magnitude / 10, magnitude % 10);
    s
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_shown_state() {
        let shown = Shown::new();
        assert_eq!(shown.temp_tenths, 0);
        assert_eq!(shown.humidity_tenths, 0);
        assert_eq!(shown.g_tenths, 1);
        assert_eq!(shown.heading_deg, 0);
        assert_eq!(shown.ball, TILT_CENTER);
    }

    #[test]
    fn test_heading_within_deadband_is_clean() {
        assert!(!heading_dirty(100, 100));
        assert!(!heading_dirty(100, 102));
        assert!(!heading_dirty(100, 98));
    }

    #[test]
    fn test_heading_beyond_deadband_is_dirty() {
        assert!(heading_dirty(100, 103));
        assert!(heading_dirty(100, 97));
        assert!(heading_dirty(0, -90));
    }

    #[test]
    fn test_fmt_tenths() {
        assert_eq!(fmt_tenths(213).as_str(), "21.3");
        assert_eq!(fmt_tenths(450).as_str(), "45.0");
        assert_eq!(fmt_tenths(0).as_str(), "0.0");
        assert_eq!(fmt_tenths(7).as_str(), "0.7");
        assert_eq!(fmt_tenths(-5).as_str(), "-0.5");
        assert_eq!(fmt_tenths(-213).as_str(), "-21.3");
    }
}
