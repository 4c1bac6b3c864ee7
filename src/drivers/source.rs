//! Hardware-backed sample source.
//!
//! Bundles the three sensor wrappers and their boot health into one
//! `SampleSource` for the engine. Degraded peripherals keep serving their
//! last good (or default) reading - read failures during normal operation
//! never surface past this boundary.

use cardash_pico2::sensors::{AccelSample, PeripheralHealth, SampleSource};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};

use crate::drivers::{Aht10, Lsm303, Mpu6050};

/// All cluster sensors behind the engine's sample source boundary.
pub struct ClusterSource<'d> {
    motion_bus: I2c<'d, I2C0, Blocking>,
    env_bus: I2c<'d, I2C1, Blocking>,
    imu: Mpu6050,
    imu_health: PeripheralHealth,
    compass: Lsm303,
    compass_health: PeripheralHealth,
    env: Aht10,
    env_health: PeripheralHealth,
    accel: AccelSample,
    heading: i32,
    temp_tenths: i32,
    humidity_tenths: i32,
}

impl<'d> ClusterSource<'d> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        motion_bus: I2c<'d, I2C0, Blocking>,
        env_bus: I2c<'d, I2C1, Blocking>,
        imu: Mpu6050,
        imu_health: PeripheralHealth,
        compass: Lsm303,
        compass_health: PeripheralHealth,
        env: Aht10,
        env_health: PeripheralHealth,
    ) -> Self {
        Self {
            motion_bus,
            env_bus,
            imu,
            imu_health,
            compass,
            compass_health,
            env,
            env_health,
            accel: AccelSample::level(),
            heading: 0,
            temp_tenths: 0,
            humidity_tenths: 0,
        }
    }
}

impl SampleSource for ClusterSource<'_> {
    fn refresh(&mut self) {
        if self.imu_health.is_ok()
            && let Ok(sample) = self.imu.read_accel(&mut self.motion_bus)
        {
            self.accel = sample;
        }
    }

    fn acceleration(&self) -> AccelSample { self.accel }

    fn heading_deg(&mut self) -> i32 {
        if self.compass_health.is_ok()
            && let Ok(heading) = self.compass.heading_deg(&mut self.motion_bus)
        {
            self.heading = heading;
        }
        self.heading
    }

    /// One AHT10 measurement serves both environment channels; the
    /// humidity getter returns the value cached here.
    fn temperature_tenths(&mut self) -> i32 {
        if self.env_health.is_ok()
            && let Ok(Some(reading)) = self.env.measure(&mut self.env_bus)
        {
            self.temp_tenths = reading.temperature_tenths;
            self.humidity_tenths = reading.humidity_tenths;
        }
        self.temp_tenths
    }

    fn humidity_tenths(&mut self) -> i32 { self.humidity_tenths }
}
