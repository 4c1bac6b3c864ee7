//! Numeric tiles along the top of the screen.
//!
//! Three rounded tiles: temperature on red, humidity on blue, G-force on
//! green. The tile chrome (backgrounds and unit labels) is painted once at
//! startup; value updates erase the old text by repainting it in the tile
//! background color, then draw the new text - no clear-rect pass.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, BLUE, GREEN, RED, WHITE};
use crate::config::layout::{
    G_TILE,
    G_UNIT_POS,
    G_VALUE_POS,
    HUMIDITY_TILE,
    HUMIDITY_UNIT_POS,
    HUMIDITY_VALUE_POS,
    TEMP_DEGREE_DOT,
    TEMP_DEGREE_DOT_DIAMETER,
    TEMP_TILE,
    TEMP_UNIT_POS,
    TEMP_VALUE_POS,
    TILE_CORNER_RADIUS,
};
use crate::render::fmt_tenths;
use crate::styles::{LEFT_ALIGNED, UNIT_FONT, VALUE_FONT};

/// Paint the static tile backgrounds and unit labels.
pub fn draw_chrome<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let corner = Size::new(TILE_CORNER_RADIUS, TILE_CORNER_RADIUS);

    RoundedRectangle::with_equal_corners(TEMP_TILE, corner)
        .into_styled(PrimitiveStyle::with_fill(RED))
        .draw(display)
        .ok();
    Text::with_text_style("C", TEMP_UNIT_POS, MonoTextStyle::new(UNIT_FONT, WHITE), LEFT_ALIGNED)
        .draw(display)
        .ok();
    Circle::with_center(TEMP_DEGREE_DOT, TEMP_DEGREE_DOT_DIAMETER)
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();

    RoundedRectangle::with_equal_corners(HUMIDITY_TILE, corner)
        .into_styled(PrimitiveStyle::with_fill(BLUE))
        .draw(display)
        .ok();
    Text::with_text_style("%", HUMIDITY_UNIT_POS, MonoTextStyle::new(UNIT_FONT, WHITE), LEFT_ALIGNED)
        .draw(display)
        .ok();

    RoundedRectangle::with_equal_corners(G_TILE, corner)
        .into_styled(PrimitiveStyle::with_fill(GREEN))
        .draw(display)
        .ok();
    Text::with_text_style("G", G_UNIT_POS, MonoTextStyle::new(UNIT_FONT, BLACK), LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Replace the temperature value (tenths of a degree).
pub fn update_temp<D>(
    display: &mut D,
    prev_tenths: i32,
    next_tenths: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    repaint_value(display, TEMP_VALUE_POS, RED, WHITE, prev_tenths, next_tenths);
}

/// Replace the humidity value (tenths of a percent).
pub fn update_humidity<D>(
    display: &mut D,
    prev_tenths: i32,
    next_tenths: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    repaint_value(display, HUMIDITY_VALUE_POS, BLUE, WHITE, prev_tenths, next_tenths);
}

/// Replace the G-force value (tenths of a g).
pub fn update_g<D>(
    display: &mut D,
    prev_tenths: i32,
    next_tenths: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    repaint_value(display, G_VALUE_POS, GREEN, BLACK, prev_tenths, next_tenths);
}

/// Erase the old value by drawing it in the tile background color, then
/// paint the new value on top.
fn repaint_value<D>(
    display: &mut D,
    position: Point,
    tile_bg: Rgb565,
    value_color: Rgb565,
    prev_tenths: i32,
    next_tenths: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let old = fmt_tenths(prev_tenths);
    Text::with_text_style(&old, position, MonoTextStyle::new(VALUE_FONT, tile_bg), LEFT_ALIGNED)
        .draw(display)
        .ok();

    let new = fmt_tenths(next_tenths);
    Text::with_text_style(&new, position, MonoTextStyle::new(VALUE_FONT, value_color), LEFT_ALIGNED)
        .draw(display)
        .ok();
}
