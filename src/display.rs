//! Bus configuration for the PIM715 display and the sensor I2C buses.
//!
//! Pin mapping for PIM715:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)
//!
//! Sensors: MPU-6050 and LSM303 share I2C0 (SDA GPIO4, SCL GPIO5), the
//! AHT10 sits alone on I2C1 (SDA GPIO6, SCL GPIO7).

use embassy_rp::i2c::Config as I2cConfig;
use embassy_rp::spi::Config as SpiConfig;

/// SPI configuration for the ST7789 display.
/// The ST7789 supports up to 62.5MHz SPI clock.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}

/// I2C configuration for the sensor buses (fast mode).
pub fn sensor_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = 400_000;
    config
}
