//! MPU-6050 accelerometer wrapper (I2C, ±2 g range).

use cardash_pico2::sensors::AccelSample;
use embedded_hal::i2c::I2c;

/// I2C address with AD0 low.
const ADDR: u8 = 0x68;

/// WHO_AM_I response for the MPU-6050.
const CHIP_ID: u8 = 0x68;

/// Accelerometer LSB per g at the default ±2 g range.
const LSB_PER_G: f32 = 16384.0;

#[allow(dead_code)]
mod reg {
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

/// Errors from the MPU-6050 wrapper.
#[derive(Debug)]
pub enum Error<E> {
    Bus(E),
    /// WHO_AM_I did not answer with the MPU-6050 id.
    BadChipId(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self { Self::Bus(err) }
}

pub struct Mpu6050;

impl Mpu6050 {
    pub const fn new() -> Self { Self }

    /// Verify the chip id and take the device out of sleep.
    pub fn init<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<(), Error<B::Error>> {
        let mut id = [0u8; 1];
        bus.write_read(ADDR, &[reg::WHO_AM_I], &mut id)?;
        if id[0] != CHIP_ID {
            return Err(Error::BadChipId(id[0]));
        }

        // Clear the sleep bit, internal oscillator clock source
        bus.write(ADDR, &[reg::PWR_MGMT_1, 0x00])?;
        Ok(())
    }

    /// Read the three acceleration axes, in g.
    pub fn read_accel<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<AccelSample, Error<B::Error>> {
        let mut raw = [0u8; 6];
        bus.write_read(ADDR, &[reg::ACCEL_XOUT_H], &mut raw)?;
        Ok(AccelSample {
            x: f32::from(i16::from_be_bytes([raw[0], raw[1]])) / LSB_PER_G,
            y: f32::from(i16::from_be_bytes([raw[2], raw[3]])) / LSB_PER_G,
            z: f32::from(i16::from_be_bytes([raw[4], raw[5]])) / LSB_PER_G,
        })
    }
}
