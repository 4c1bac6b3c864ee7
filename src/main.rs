//! Motion instrument cluster firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Samples an MPU-6050 accelerometer, an LSM303 compass, and an AHT10
//! temperature/humidity sensor, and renders them on the Pimoroni PIM715
//! Display Pack 2.8" as numeric tiles, a scrolling strip chart, a compass
//! ribbon, and a tilt-ball gauge.
//!
//! The core update engine lives in the library crate and is tested on the
//! host; this binary adds the display driver, the I2C sensor wrappers, and
//! the boot sequence.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(target_arch = "arm")]
mod app;
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod drivers;
#[cfg(target_arch = "arm")]
mod screens;
#[cfg(target_arch = "arm")]
mod st7789;

/// Host stub so the full package compiles off-target (e.g. under
/// `cargo test`); the firmware itself only runs on the RP2350.
#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("cardash-pico2 targets the RP2350; build with --target thumbv8m.main-none-eabihf");
}
