//! Direct-mode ST7789 display driver for embassy-rp.
//!
//! The cluster repaints incrementally - every widget erases and redraws its
//! own delta - so there is no framebuffer. Each primitive writes its pixels
//! straight to the panel over blocking SPI through a drawing window. This
//! costs per-pixel window setup for arbitrary shapes, but rectangle fills
//! stream in bulk and the incremental renderer keeps the total pixel volume
//! per tick small.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Timer;
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Display dimensions (landscape mode after 90° rotation).
pub const WIDTH: u16 = 320;
pub const HEIGHT: u16 = 240;

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// Pixels streamed per SPI write during a solid fill.
const FILL_CHUNK_PIXELS: usize = 32;

/// ST7789 panel as a `DrawTarget` - owns the SPI bus and control pins.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display hardware.
    pub async fn init(&mut self) {
        // Software reset
        self.write_command(SWRESET);
        Timer::after_millis(150).await;

        // Exit sleep mode
        self.write_command(SLPOUT);
        Timer::after_millis(10).await;

        // Set pixel format to RGB565 (16-bit)
        self.write_command(COLMOD);
        self.write_data(&[0x55]);

        // Set memory access control for 90° rotation (landscape)
        // MV=1 (row/col exchange), MX=1 (mirror X) = 0x60
        self.write_command(MADCTL);
        self.write_data(&[MADCTL_MV | MADCTL_MX]);

        // Inversion on (required for PIM715)
        self.write_command(INVON);
        Timer::after_millis(10).await;

        // Normal display mode
        self.write_command(NORON);
        Timer::after_millis(10).await;

        // Display on
        self.write_command(DISPON);
        Timer::after_millis(10).await;
    }

    /// Send a command byte (DC low, CS low during transfer).
    fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.blocking_write(&[cmd]).ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.blocking_write(data).ok();
        self.cs.set_high();
    }

    /// Set the drawing window (inclusive corners).
    fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) {
        self.write_command(CASET);
        self.write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8]);

        self.write_command(RASET);
        self.write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8]);
    }

    /// Write one pixel at an already-validated coordinate.
    fn write_pixel(
        &mut self,
        x: u16,
        y: u16,
        color: Rgb565,
    ) {
        self.set_window(x, y, x, y);
        let raw: RawU16 = color.into();
        self.write_command(RAMWR);
        self.write_data(&raw.into_inner().to_be_bytes());
    }
}

impl OriginDimensions for St7789<'_> {
    fn size(&self) -> Size { Size::new(u32::from(WIDTH), u32::from(HEIGHT)) }
}

impl DrawTarget for St7789<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= i32::from(WIDTH) || point.y >= i32::from(HEIGHT) {
                continue;
            }
            self.write_pixel(point.x as u16, point.y as u16, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = x0 + area.size.width as u16 - 1;
        let y1 = y0 + area.size.height as u16 - 1;
        self.set_window(x0, y0, x1, y1);

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&bytes);
        }

        self.write_command(RAMWR);
        self.cs.set_low();
        self.dc.set_high();
        let mut remaining = area.size.width as usize * area.size.height as usize;
        while remaining > 0 {
            let burst = remaining.min(FILL_CHUNK_PIXELS);
            self.spi.blocking_write(&chunk[..burst * 2]).ok();
            remaining -= burst;
        }
        self.cs.set_high();

        Ok(())
    }
}
