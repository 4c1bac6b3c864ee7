//! Color constants for the instrument cluster.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7789 panel and requires no conversion when
//! writing to the display. Standard colors come from the `RgbColor` trait;
//! the rest are application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Screen background and the erase color for
/// differential redraws.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Tile values, lateral trace, tilt ball.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Temperature tile, lubber mark, failed probe status.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). G-force tile, longitudinal trace, probe OK status.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Humidity tile.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Orange heading band and vertical trace.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for the tilt gauge reference rings and crosshair.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
