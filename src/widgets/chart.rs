//! Acceleration strip chart.
//!
//! Three traces share one scrolling chart. Each plot tick does a single
//! erase-then-redraw pass per trace: the existing segments are drawn over in
//! the background color, the history shifts, and the segments are drawn
//! again in the trace color. Erasing segment-by-segment instead of clearing
//! the chart region is what keeps the traces flicker-free.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::colors::{BLACK, GREEN, ORANGE, WHITE};
use crate::config::layout::{
    CHART_GAIN_PX_PER_G,
    CHART_PITCH_PX,
    CHART_X,
    LATERAL_BASELINE_Y,
    LONGITUDINAL_BASELINE_Y,
    VERTICAL_BASELINE_Y,
};
use crate::history::HistoryBuffer;

/// One trace's fixed screen placement and color.
pub struct Trace {
    pub baseline_y: i32,
    pub color: Rgb565,
}

/// Lateral (x-axis) trace.
pub const LATERAL: Trace = Trace {
    baseline_y: LATERAL_BASELINE_Y,
    color: WHITE,
};

/// Longitudinal (y-axis) trace.
pub const LONGITUDINAL: Trace = Trace {
    baseline_y: LONGITUDINAL_BASELINE_Y,
    color: GREEN,
};

/// Vertical (z-axis) trace.
pub const VERTICAL: Trace = Trace {
    baseline_y: VERTICAL_BASELINE_Y,
    color: ORANGE,
};

/// Draw the trace's current segments in the background color.
///
/// Call before pushing the new sample so the about-to-shift segments are
/// removed from the panel.
pub fn erase<D>(
    display: &mut D,
    trace: &Trace,
    hist: &HistoryBuffer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    paint(display, trace, hist, BLACK);
}

/// Draw the trace's current segments in the trace color.
pub fn draw<D>(
    display: &mut D,
    trace: &Trace,
    hist: &HistoryBuffer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    paint(display, trace, hist, trace.color);
}

fn paint<D>(
    display: &mut D,
    trace: &Trace,
    hist: &HistoryBuffer,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    for (i, (older, newer)) in hist.pairs().enumerate() {
        let x0 = CHART_X + i as i32 * CHART_PITCH_PX;
        let x1 = x0 + CHART_PITCH_PX;
        Line::new(
            Point::new(x0, sample_y(trace, older)),
            Point::new(x1, sample_y(trace, newer)),
        )
        .into_styled(style)
        .draw(display)
        .ok();
    }
}

fn sample_y(
    trace: &Trace,
    sample: f32,
) -> i32 {
    trace.baseline_y - (sample * CHART_GAIN_PX_PER_G) as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_y_scales_from_baseline() {
        assert_eq!(sample_y(&LATERAL, 0.0), LATERAL_BASELINE_Y);
        assert_eq!(sample_y(&LATERAL, 1.0), LATERAL_BASELINE_Y - 20);
        assert_eq!(sample_y(&LATERAL, -0.5), LATERAL_BASELINE_Y + 10);
    }

    #[test]
    fn test_traces_do_not_overlap() {
        // A full-scale +/-1 g excursion stays within each trace's band
        let gain = CHART_GAIN_PX_PER_G as i32;
        assert!(LATERAL_BASELINE_Y + gain < LONGITUDINAL_BASELINE_Y - gain);
        assert!(LONGITUDINAL_BASELINE_Y + gain < VERTICAL_BASELINE_Y - gain);
    }
}
