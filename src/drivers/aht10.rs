//! AHT10 temperature/humidity sensor wrapper.
//!
//! The sensor needs an explicit trigger per measurement and takes ~75 ms to
//! convert. To keep the control loop from stalling on a busy-wait, each
//! read returns the data from the previous trigger and immediately starts
//! the next conversion - at the environment cadence the conversion is long
//! done by the time it is collected.

use embedded_hal::i2c::I2c;

/// I2C address with the address pin low.
const ADDR: u8 = 0x38;

const CMD_CALIBRATE: [u8; 3] = [0xE1, 0x08, 0x00];
const CMD_TRIGGER: [u8; 3] = [0xAC, 0x33, 0x00];

/// Status bit: conversion in progress.
const STATUS_BUSY: u8 = 0x80;

/// Status bit: calibration coefficients loaded.
const STATUS_CALIBRATED: u8 = 0x08;

/// One converted measurement.
#[derive(Clone, Copy, Debug)]
pub struct EnvReading {
    /// Temperature in tenths of a degree Celsius.
    pub temperature_tenths: i32,
    /// Relative humidity in tenths of a percent.
    pub humidity_tenths: i32,
}

/// Errors from the AHT10 wrapper.
#[derive(Debug)]
pub enum Error<E> {
    Bus(E),
    /// The sensor failed to load its calibration coefficients.
    NotCalibrated,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self { Self::Bus(err) }
}

pub struct Aht10;

impl Aht10 {
    pub const fn new() -> Self { Self }

    /// Load calibration and start the first conversion.
    pub fn init<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<(), Error<B::Error>> {
        bus.write(ADDR, &CMD_CALIBRATE)?;

        let mut status = [0u8; 1];
        bus.read(ADDR, &mut status)?;
        if status[0] & STATUS_CALIBRATED == 0 {
            return Err(Error::NotCalibrated);
        }

        bus.write(ADDR, &CMD_TRIGGER)?;
        Ok(())
    }

    /// Collect the previous conversion and trigger the next one.
    ///
    /// Returns `Ok(None)` when the sensor is still converting.
    pub fn measure<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<Option<EnvReading>, Error<B::Error>> {
        let mut raw = [0u8; 6];
        bus.read(ADDR, &mut raw)?;
        if raw[0] & STATUS_BUSY != 0 {
            return Ok(None);
        }

        let humidity20 = (u32::from(raw[1]) << 12) | (u32::from(raw[2]) << 4) | (u32::from(raw[3]) >> 4);
        let temperature20 = ((u32::from(raw[3]) & 0x0F) << 16) | (u32::from(raw[4]) << 8) | u32::from(raw[5]);

        // humidity% = raw / 2^20 * 100, temperature C = raw / 2^20 * 200 - 50
        let humidity_tenths = (u64::from(humidity20) * 1000 >> 20) as i32;
        let temperature_tenths = (u64::from(temperature20) * 2000 >> 20) as i32 - 500;

        bus.write(ADDR, &CMD_TRIGGER)?;
        Ok(Some(EnvReading {
            temperature_tenths,
            humidity_tenths,
        }))
    }
}
