//! Widget drawing for the instrument cluster.
//!
//! Every widget follows the same differential policy: paint the previous
//! content in its own background color (the erase), then paint the new
//! content in the foreground color. No widget clears a region it can erase
//! piecewise, so the panel never sees a full-screen repaint after boot.
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` so the same
//! code runs against the ST7789 panel and against a recording target in
//! host tests.

pub mod chart;
pub mod ribbon;
pub mod tiles;
pub mod tilt;
