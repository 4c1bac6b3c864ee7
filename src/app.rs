//! Embassy application: bring-up, boot probing, and the control loop.
//!
//! Startup is linear: display init, splash, one bounded probe per
//! peripheral (failures flagged on screen, never fatal), then the static
//! chrome and the infinite single-task control loop. The loop has no
//! shutdown path; "waiting" is a cadence simply not being due yet.

use cardash_pico2::colors::BLACK;
use cardash_pico2::config::timing::{PROBE_ATTEMPTS, PROBE_RETRY_DELAY_MS};
use cardash_pico2::engine::Engine;
use cardash_pico2::sensors::PeripheralHealth;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, sensor_i2c_config};
use crate::drivers::{Aht10, ClusterSource, Lsm303, Mpu6050};
use crate::screens::boot;
use crate::st7789::St7789;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"cardash-pico2"),
    embassy_rp::binary_info::rp_program_description!(c"Motion instrument cluster on PIM715 display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Probe a peripheral with a bounded retry budget.
///
/// Failure after the budget is a degraded flag, not an error: the channel
/// runs on defaults and the cluster starts anyway.
async fn probe(
    name: &str,
    mut attempt: impl FnMut() -> bool,
) -> PeripheralHealth {
    for n in 1..=PROBE_ATTEMPTS {
        if attempt() {
            info!("{} ready (attempt {})", name, n);
            return PeripheralHealth::Ok;
        }
        warn!("{} probe attempt {}/{} failed", name, n, PROBE_ATTEMPTS);
        Timer::after_millis(PROBE_RETRY_DELAY_MS).await;
    }
    warn!("{} degraded, continuing without it", name);
    PeripheralHealth::Degraded
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("instrument cluster starting");
    let p = embassy_rp::init(Default::default());

    // Display pins (PIM715): CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut _backlight = Output::new(p.PIN_20, Level::High);
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let mut display = St7789::new(spi, dc, cs);
    display.init().await;
    info!("display initialized");

    boot::draw_splash(&mut display);
    Timer::after_millis(100).await;
    boot::draw_probe_title(&mut display);

    // MPU-6050 and LSM303 share I2C0; the AHT10 has I2C1 to itself
    let mut motion_bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, sensor_i2c_config());
    let mut env_bus = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, sensor_i2c_config());

    let mut env = Aht10::new();
    boot::draw_probe_row(&mut display, 0, "AHT10...");
    let env_health = probe("AHT10", || env.init(&mut env_bus).is_ok()).await;
    boot::draw_probe_status(&mut display, 0, env_health);

    let mut compass = Lsm303::new();
    boot::draw_probe_row(&mut display, 1, "Compass...");
    let compass_health = probe("LSM303", || compass.init(&mut motion_bus).is_ok()).await;
    boot::draw_probe_status(&mut display, 1, compass_health);

    let mut imu = Mpu6050::new();
    boot::draw_probe_row(&mut display, 2, "MPU6050...");
    let imu_health = probe("MPU6050", || imu.init(&mut motion_bus).is_ok()).await;
    boot::draw_probe_status(&mut display, 2, imu_health);

    Timer::after_secs(1).await;
    display.clear(BLACK).ok();

    let mut source = ClusterSource::new(
        motion_bus,
        env_bus,
        imu,
        imu_health,
        compass,
        compass_health,
        env,
        env_health,
    );
    let mut engine = Engine::new();
    engine.paint_chrome(&mut display);

    info!("entering control loop");
    let epoch = Instant::now();
    loop {
        let now_ms = epoch.elapsed().as_millis();
        if let Some(heading) = engine.service(now_ms, &mut display, &mut source) {
            info!("heading: {}", heading);
        }

        // Cooperative pacing; far finer than the fastest cadence
        Timer::after_millis(1).await;
    }
}
