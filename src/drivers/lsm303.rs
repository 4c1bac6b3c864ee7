//! LSM303DLHC magnetometer wrapper - flat compass heading.
//!
//! Hard-iron calibration bounds were measured once for this mounting and
//! are baked in; the wrapper normalizes each axis against them before
//! computing the heading.

use embedded_hal::i2c::I2c;
use micromath::F32;

/// Magnetometer I2C address.
const MAG_ADDR: u8 = 0x1E;

/// IRA_REG_M identification byte ('H').
const MAG_ID: u8 = 0x48;

/// Hard-iron calibration: per-axis minimum field readings.
const MAG_MIN: [i16; 3] = [-506, -545, -21];

/// Hard-iron calibration: per-axis maximum field readings.
const MAG_MAX: [i16; 3] = [408, 383, 16];

#[allow(dead_code)]
mod reg {
    pub const CRA_REG_M: u8 = 0x00;
    pub const CRB_REG_M: u8 = 0x01;
    pub const MR_REG_M: u8 = 0x02;
    pub const OUT_X_H_M: u8 = 0x03;
    pub const IRA_REG_M: u8 = 0x0A;
}

/// Errors from the LSM303 wrapper.
#[derive(Debug)]
pub enum Error<E> {
    Bus(E),
    /// IRA_REG_M did not answer with the LSM303 id.
    BadChipId(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self { Self::Bus(err) }
}

pub struct Lsm303;

impl Lsm303 {
    pub const fn new() -> Self { Self }

    /// Verify the chip id and start continuous magnetometer conversion.
    pub fn init<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<(), Error<B::Error>> {
        let mut id = [0u8; 1];
        bus.write_read(MAG_ADDR, &[reg::IRA_REG_M], &mut id)?;
        if id[0] != MAG_ID {
            return Err(Error::BadChipId(id[0]));
        }

        bus.write(MAG_ADDR, &[reg::CRA_REG_M, 0x14])?; // 30 Hz output rate
        bus.write(MAG_ADDR, &[reg::CRB_REG_M, 0x20])?; // ±1.3 gauss gain
        bus.write(MAG_ADDR, &[reg::MR_REG_M, 0x00])?; // continuous conversion
        Ok(())
    }

    /// Read the field and compute a flat heading in degrees, `[0, 360)`.
    pub fn heading_deg<B: I2c>(
        &mut self,
        bus: &mut B,
    ) -> Result<i32, Error<B::Error>> {
        let mut raw = [0u8; 6];
        bus.write_read(MAG_ADDR, &[reg::OUT_X_H_M], &mut raw)?;

        // Register order is X, Z, Y, high byte first
        let x = i16::from_be_bytes([raw[0], raw[1]]);
        let y = i16::from_be_bytes([raw[4], raw[5]]);

        let nx = normalize(x, MAG_MIN[0], MAG_MAX[0]);
        let ny = normalize(y, MAG_MIN[1], MAG_MAX[1]);

        let mut degrees = F32(ny).atan2(F32(nx)).0.to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        Ok(degrees as i32)
    }
}

/// Map a raw axis reading onto [-1, 1] using the hard-iron bounds.
fn normalize(
    raw: i16,
    min: i16,
    max: i16,
) -> f32 {
    let mid = f32::from(min) + (f32::from(max) - f32::from(min)) / 2.0;
    let half_range = (f32::from(max) - f32::from(min)) / 2.0;
    (f32::from(raw) - mid) / half_range
}
