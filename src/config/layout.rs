//! Display and layout configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Widget rectangles and anchor points are `const`, avoiding per-frame
//! arithmetic. The whole screen is laid out once: three numeric tiles along
//! the top, the heading ribbon below them, then the acceleration strip chart
//! on the left and the tilt gauge on the right.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Numeric Tiles (temperature, humidity, G-force)
// =============================================================================

/// Corner radius for the tile backgrounds.
pub const TILE_CORNER_RADIUS: u32 = 4;

/// Temperature tile background (red).
pub const TEMP_TILE: Rectangle = Rectangle::new(Point::new(5, 5), Size::new(100, 50));

/// Baseline anchor for the temperature value text.
pub const TEMP_VALUE_POS: Point = Point::new(15, 45);

/// Baseline anchor for the "C" unit label.
pub const TEMP_UNIT_POS: Point = Point::new(90, 26);

/// Center of the degree dot next to the "C" label.
pub const TEMP_DEGREE_DOT: Point = Point::new(85, 8);

/// Diameter of the degree dot.
pub const TEMP_DEGREE_DOT_DIAMETER: u32 = 5;

/// Humidity tile background (blue).
pub const HUMIDITY_TILE: Rectangle = Rectangle::new(Point::new(110, 5), Size::new(115, 50));

/// Baseline anchor for the humidity value text.
pub const HUMIDITY_VALUE_POS: Point = Point::new(135, 45);

/// Baseline anchor for the "%" unit label.
pub const HUMIDITY_UNIT_POS: Point = Point::new(210, 26);

/// G-force tile background (green).
pub const G_TILE: Rectangle = Rectangle::new(Point::new(230, 5), Size::new(85, 50));

/// Baseline anchor for the G-force value text.
pub const G_VALUE_POS: Point = Point::new(245, 45);

/// Baseline anchor for the "G" unit label.
pub const G_UNIT_POS: Point = Point::new(300, 26);

// =============================================================================
// Heading Ribbon
// =============================================================================

/// The scrolling compass band across the full screen width.
pub const RIBBON_BAND: Rectangle = Rectangle::new(Point::new(0, 60), Size::new(320, 30));

/// Baseline for the compass point labels inside the band.
pub const RIBBON_TEXT_Y: i32 = 82;

/// Screen x of the 0-degree label when the heading is 0.
pub const RIBBON_ANCHOR_X: i32 = 150;

/// Pixel width of one full 360-degree revolution of the ribbon.
pub const RIBBON_SPAN_PX: i32 = 800;

/// Horizontal distance between adjacent compass point labels.
pub const RIBBON_LABEL_PITCH_PX: i32 = 100;

/// Fixed red lubber mark under the band center.
pub const LUBBER_MARK: Rectangle = Rectangle::new(Point::new(158, 85), Size::new(4, 20));

// =============================================================================
// Acceleration Strip Chart
// =============================================================================

/// Number of samples retained per acceleration axis.
pub const HISTORY_LEN: usize = 80;

/// Left edge of the strip chart.
pub const CHART_X: i32 = 10;

/// Horizontal pixels per sample.
pub const CHART_PITCH_PX: i32 = 3;

/// Vertical pixels per g of acceleration.
pub const CHART_GAIN_PX_PER_G: f32 = 20.0;

/// Baseline y for the lateral (x-axis) trace.
pub const LATERAL_BASELINE_Y: i32 = 120;

/// Baseline y for the longitudinal (y-axis) trace.
pub const LONGITUDINAL_BASELINE_Y: i32 = 170;

/// Baseline y for the vertical (z-axis) trace.
pub const VERTICAL_BASELINE_Y: i32 = 220;

// =============================================================================
// Tilt Gauge
// =============================================================================

/// Region reserved for the tilt gauge, right of the strip chart.
pub const TILT_REGION: Rectangle = Rectangle::new(Point::new(250, 95), Size::new(70, 145));

/// Center of the tilt gauge reference rings.
pub const TILT_CENTER: Point = Point::new(285, 167);

/// Diameters of the concentric reference rings.
pub const TILT_RING_DIAMETERS: [u32; 3] = [24, 48, 68];

/// Ball displacement per g of offset-corrected acceleration.
pub const TILT_PX_PER_G: f32 = 32.0;

/// Maximum ball displacement from center, per axis.
pub const TILT_LIMIT_PX: i32 = 30;

/// Diameter of the tilt ball.
pub const BALL_DIAMETER: u32 = 9;
