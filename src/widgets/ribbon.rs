//! Scrolling compass ribbon.
//!
//! The heading is quantized onto an 8-point rose rendered as a horizontal
//! band. The 8 labels are laid out three times, one revolution apart, so a
//! heading change slides labels in from either edge and the band appears to
//! scroll continuously with wraparound. A redraw repaints the whole band:
//! it only happens when the heading moves past the deadband, so the cheap
//! full-band repaint never flickers in steady state.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::Text;

use crate::colors::{BLACK, ORANGE, RED};
use crate::config::layout::{
    LUBBER_MARK,
    RIBBON_ANCHOR_X,
    RIBBON_BAND,
    RIBBON_LABEL_PITCH_PX,
    RIBBON_SPAN_PX,
    RIBBON_TEXT_Y,
};
use crate::styles::{LEFT_ALIGNED, RIBBON_FONT};

/// The 8-point rose, in ribbon order.
pub const ROSE: [&str; 8] = ["N", "NW", "W", "SW", "S", "SE", "E", "NE"];

/// Number of times the rose is replicated across the band.
const REPLICAS: i32 = 3;

/// Screen x positions for every label at the given heading.
///
/// Yields `ROSE.len() * 3` entries; off-screen labels are clipped by the
/// display.
pub fn label_columns(heading_deg: i32) -> impl Iterator<Item = (&'static str, i32)> {
    let scroll = RIBBON_SPAN_PX * heading_deg / 360;
    (0..REPLICAS).flat_map(move |replica| {
        ROSE.iter().enumerate().map(move |(slot, label)| {
            (
                *label,
                RIBBON_ANCHOR_X + scroll - replica * RIBBON_SPAN_PX + slot as i32 * RIBBON_LABEL_PITCH_PX,
            )
        })
    })
}

/// Repaint the full band for a new heading.
pub fn redraw<D>(
    display: &mut D,
    heading_deg: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RIBBON_BAND
        .into_styled(PrimitiveStyle::with_fill(ORANGE))
        .draw(display)
        .ok();

    let style = MonoTextStyle::new(RIBBON_FONT, BLACK);
    for (label, x) in label_columns(heading_deg) {
        Text::with_text_style(label, Point::new(x, RIBBON_TEXT_Y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    LUBBER_MARK
        .into_styled(PrimitiveStyle::with_fill(RED))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_labels_in_all_replicas_are_laid_out() {
        let columns: Vec<(&str, i32)> = label_columns(0).collect();
        assert_eq!(columns.len(), 24);
    }

    #[test]
    fn test_heading_zero_anchors_north() {
        let columns: Vec<(&str, i32)> = label_columns(0).collect();
        assert!(columns.contains(&("N", RIBBON_ANCHOR_X)));
    }

    #[test]
    fn test_heading_scrolls_labels_right() {
        // 36 degrees is a tenth of a revolution: 80 px
        let columns: Vec<(&str, i32)> = label_columns(36).collect();
        assert!(columns.contains(&("N", RIBBON_ANCHOR_X + 80)));
    }

    #[test]
    fn test_replicas_are_one_revolution_apart() {
        let columns: Vec<(&str, i32)> = label_columns(0).collect();
        let norths: Vec<i32> = columns.iter().filter(|(l, _)| *l == "N").map(|&(_, x)| x).collect();
        assert_eq!(norths, [
            RIBBON_ANCHOR_X,
            RIBBON_ANCHOR_X - RIBBON_SPAN_PX,
            RIBBON_ANCHOR_X - 2 * RIBBON_SPAN_PX,
        ]);
    }

    #[test]
    fn test_negative_heading_scrolls_left() {
        let columns: Vec<(&str, i32)> = label_columns(-90).collect();
        assert!(columns.contains(&("N", RIBBON_ANCHOR_X - 200)));
    }
}
