//! Tilt-ball gauge.
//!
//! Concentric reference rings with a ball displaced by the offset-corrected
//! lateral and longitudinal acceleration. The rings are static: a ball move
//! erases the old ball as a background-colored disc and paints the new one.
//! Only a bias change from the auto-center filter repaints the chrome, which
//! also repairs any ring pixels the ball has clipped.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::autocenter::AutoCenter;
use crate::colors::{BLACK, GRAY, WHITE};
use crate::config::layout::{
    BALL_DIAMETER,
    TILT_CENTER,
    TILT_LIMIT_PX,
    TILT_PX_PER_G,
    TILT_REGION,
    TILT_RING_DIAMETERS,
};

/// Clear the gauge region and draw the reference rings and crosshair.
pub fn draw_gauge_chrome<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    TILT_REGION
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let ring_style = PrimitiveStyle::with_stroke(GRAY, 1);
    for diameter in TILT_RING_DIAMETERS {
        Circle::with_center(TILT_CENTER, diameter)
            .into_styled(ring_style)
            .draw(display)
            .ok();
    }

    let reach = TILT_RING_DIAMETERS[TILT_RING_DIAMETERS.len() - 1] as i32 / 2;
    Line::new(
        Point::new(TILT_CENTER.x - reach, TILT_CENTER.y),
        Point::new(TILT_CENTER.x + reach, TILT_CENTER.y),
    )
    .into_styled(ring_style)
    .draw(display)
    .ok();
    Line::new(
        Point::new(TILT_CENTER.x, TILT_CENTER.y - reach),
        Point::new(TILT_CENTER.x, TILT_CENTER.y + reach),
    )
    .into_styled(ring_style)
    .draw(display)
    .ok();
}

/// Ball center for an offset-corrected acceleration reading.
///
/// Displacement is clamped per axis so the ball never leaves the rings.
pub fn ball_position(
    lateral_g: f32,
    longitudinal_g: f32,
    offset: &AutoCenter,
) -> Point {
    let dx = ((lateral_g - offset.lateral) * TILT_PX_PER_G) as i32;
    let dy = ((longitudinal_g - offset.longitudinal) * TILT_PX_PER_G) as i32;
    Point::new(
        TILT_CENTER.x + dx.clamp(-TILT_LIMIT_PX, TILT_LIMIT_PX),
        TILT_CENTER.y - dy.clamp(-TILT_LIMIT_PX, TILT_LIMIT_PX),
    )
}

/// Paint the ball at `at`.
pub fn draw_ball<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(at, BALL_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

/// Erase the ball at `from`, then paint it at `to`.
pub fn move_ball<D>(
    display: &mut D,
    from: Point,
    to: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(from, BALL_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();
    draw_ball(display, to);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_reading_centers_the_ball() {
        let offset = AutoCenter::new();
        assert_eq!(ball_position(0.0, 0.0, &offset), TILT_CENTER);
    }

    #[test]
    fn test_bias_recenters_a_tilted_reading() {
        let mut offset = AutoCenter::new();
        offset.lateral = 0.5;
        offset.longitudinal = -0.25;
        assert_eq!(ball_position(0.5, -0.25, &offset), TILT_CENTER);
    }

    #[test]
    fn test_displacement_scales_with_acceleration() {
        let offset = AutoCenter::new();
        let at = ball_position(0.5, 0.0, &offset);
        assert_eq!(at, Point::new(TILT_CENTER.x + 16, TILT_CENTER.y));
    }

    #[test]
    fn test_positive_longitudinal_moves_ball_up() {
        let offset = AutoCenter::new();
        let at = ball_position(0.0, 0.5, &offset);
        assert!(at.y < TILT_CENTER.y);
    }

    #[test]
    fn test_displacement_is_clamped_to_the_rings() {
        let offset = AutoCenter::new();
        let at = ball_position(10.0, -10.0, &offset);
        assert_eq!(at.x, TILT_CENTER.x + TILT_LIMIT_PX);
        assert_eq!(at.y, TILT_CENTER.y + TILT_LIMIT_PX);
    }

    #[test]
    fn test_ball_stays_inside_the_gauge_region() {
        let offset = AutoCenter::new();
        let at = ball_position(10.0, 10.0, &offset);
        let half_ball = BALL_DIAMETER as i32 / 2;
        let left = TILT_REGION.top_left.x;
        let right = TILT_REGION.top_left.x + TILT_REGION.size.width as i32;
        assert!(at.x - half_ball >= left);
        assert!(at.x + half_ball < right);
    }
}
