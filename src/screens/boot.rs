//! Splash and peripheral probe screen.
//!
//! The boot sequence draws a title, then one row per peripheral as it is
//! probed. Each row gets a green "OK" or red "BAD" status; a failed probe
//! is reported here and nowhere else - the cluster still transitions to
//! the running screen with that channel serving defaults.

use cardash_pico2::colors::{BLACK, GREEN, RED, WHITE};
use cardash_pico2::sensors::PeripheralHealth;
use cardash_pico2::styles::{CENTERED, CONSOLE_FONT, LEFT_ALIGNED, TITLE_FONT};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

const TITLE_POS: Point = Point::new(160, 70);
const SUBTITLE_POS: Point = Point::new(40, 130);
const ROW_NAME_X: i32 = 20;
const ROW_STATUS_X: i32 = 200;
const ROW_START_Y: i32 = 160;
const ROW_PITCH_Y: i32 = 20;

/// Clear the screen and draw the splash title.
pub fn draw_splash<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    Text::with_text_style("CarDash", TITLE_POS, MonoTextStyle::new(TITLE_FONT, WHITE), CENTERED)
        .draw(display)
        .ok();
}

/// Announce the probe phase under the splash title.
pub fn draw_probe_title<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        "Checking peripherals",
        SUBTITLE_POS,
        MonoTextStyle::new(CONSOLE_FONT, WHITE),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}

/// Draw the name of the peripheral being probed.
pub fn draw_probe_row<D>(
    display: &mut D,
    row: i32,
    name: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        name,
        Point::new(ROW_NAME_X, ROW_START_Y + row * ROW_PITCH_Y),
        MonoTextStyle::new(CONSOLE_FONT, WHITE),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}

/// Complete a probe row with its outcome.
pub fn draw_probe_status<D>(
    display: &mut D,
    row: i32,
    health: PeripheralHealth,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let color = if health.is_ok() { GREEN } else { RED };
    Text::with_text_style(
        health.label(),
        Point::new(ROW_STATUS_X, ROW_START_Y + row * ROW_PITCH_Y),
        MonoTextStyle::new(CONSOLE_FONT, color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}
