//! Multi-rate cooperative update engine.
//!
//! One owned context ties the whole cluster together: the per-axis history
//! windows, the auto-center filter, the last-rendered state, and the three
//! cadences. Each iteration of the control loop calls [`Engine::service`]
//! with the loop clock; the engine refreshes the instantaneous sample,
//! checks the cadences in fixed order, and emits only the draw calls needed
//! to move the screen from the previous state to the new one.
//!
//! Task order within an iteration is fixed: plot, then gauge, then
//! environment. Nothing preempts anything - a slow sensor read simply
//! delays the later checks in the same iteration.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

use crate::autocenter::AutoCenter;
use crate::config::timing::{
    ENV_INITIAL_MARK_MS,
    ENV_PERIOD_MS,
    ENV_REARM_MARGIN_MS,
    GAUGE_INITIAL_MARK_MS,
    GAUGE_PERIOD_MS,
    GAUGE_REARM_MARGIN_MS,
    PLOT_PERIOD_MS,
};
use crate::history::HistoryBuffer;
use crate::ratchet;
use crate::render::{self, Shown};
use crate::scheduler::Cadence;
use crate::sensors::{AccelSample, SampleSource};
use crate::widgets::{chart, ribbon, tiles, tilt};

/// The cluster's owned state: telemetry, calibration, rendered values, and
/// the cadence clock marks. Lives for the whole process; nothing here is
/// ever torn down.
pub struct Engine {
    lateral: HistoryBuffer,
    longitudinal: HistoryBuffer,
    vertical: HistoryBuffer,
    pub autocenter: AutoCenter,
    pub shown: Shown,
    plot: Cadence,
    gauge: Cadence,
    env: Cadence,
}

impl Engine {
    pub const fn new() -> Self {
        Self {
            lateral: HistoryBuffer::new(),
            longitudinal: HistoryBuffer::new(),
            vertical: HistoryBuffer::new(),
            autocenter: AutoCenter::new(),
            shown: Shown::new(),
            plot: Cadence::new(PLOT_PERIOD_MS, 0, 0),
            gauge: Cadence::new(GAUGE_PERIOD_MS, GAUGE_REARM_MARGIN_MS, GAUGE_INITIAL_MARK_MS),
            env: Cadence::new(ENV_PERIOD_MS, ENV_REARM_MARGIN_MS, ENV_INITIAL_MARK_MS),
        }
    }

    /// Paint everything that is static after boot: tile chrome, the ribbon
    /// at the current heading, and the tilt gauge.
    pub fn paint_chrome<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        tiles::draw_chrome(display);
        ribbon::redraw(display, self.shown.heading_deg);
        tilt::draw_gauge_chrome(display);
        tilt::draw_ball(display, self.shown.ball);
    }

    /// Run one iteration of the control loop.
    ///
    /// Returns the on-screen heading when the gauge cadence fired, for the
    /// diagnostic log.
    pub fn service<D, S>(
        &mut self,
        now_ms: u64,
        display: &mut D,
        source: &mut S,
    ) -> Option<i32>
    where
        D: DrawTarget<Color = Rgb565>,
        S: SampleSource,
    {
        source.refresh();

        if self.plot.due(now_ms) {
            let accel = source.acceleration();
            self.plot_traces(display, accel);

            let ball = tilt::ball_position(accel.x, accel.y, &self.autocenter);
            if ball != self.shown.ball {
                tilt::move_ball(display, self.shown.ball, ball);
                self.shown.ball = ball;
            }
        }

        let mut heading_report = None;
        if self.gauge.due(now_ms) {
            let accel = source.acceleration();
            let instantaneous = gforce_tenths(accel, &self.autocenter);
            let next = ratchet::settle(self.shown.g_tenths, instantaneous);
            if next != self.shown.g_tenths {
                tiles::update_g(display, self.shown.g_tenths, next);
                self.shown.g_tenths = next;
            }

            let corrected = source.heading_deg() - render::HEADING_MOUNT_OFFSET_DEG;
            if render::heading_dirty(self.shown.heading_deg, corrected) {
                ribbon::redraw(display, corrected);
                self.shown.heading_deg = corrected;
            }
            heading_report = Some(self.shown.heading_deg);
        }

        if self.env.due(now_ms) {
            let temp = source.temperature_tenths();
            if temp != self.shown.temp_tenths {
                tiles::update_temp(display, self.shown.temp_tenths, temp);
                self.shown.temp_tenths = temp;
            }

            let humidity = source.humidity_tenths();
            if humidity != self.shown.humidity_tenths {
                tiles::update_humidity(display, self.shown.humidity_tenths, humidity);
                self.shown.humidity_tenths = humidity;
            }

            if self.autocenter.retune(&self.lateral, &self.longitudinal) {
                // New center: rebuild the chrome and restore the ball
                tilt::draw_gauge_chrome(display);
                tilt::draw_ball(display, self.shown.ball);
            }
        }

        heading_report
    }

    /// Erase-shift-redraw each trace for one new sample per axis.
    fn plot_traces<D>(
        &mut self,
        display: &mut D,
        accel: AccelSample,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        chart::erase(display, &chart::LATERAL, &self.lateral);
        self.lateral.push(accel.x);
        chart::draw(display, &chart::LATERAL, &self.lateral);

        chart::erase(display, &chart::LONGITUDINAL, &self.longitudinal);
        self.longitudinal.push(accel.y);
        chart::draw(display, &chart::LONGITUDINAL, &self.longitudinal);

        chart::erase(display, &chart::VERTICAL, &self.vertical);
        self.vertical.push(accel.z);
        chart::draw(display, &chart::VERTICAL, &self.vertical);
    }
}

impl Default for Engine {
    fn default() -> Self { Self::new() }
}

/// Offset-corrected G magnitude in display tenths, gravity removed.
fn gforce_tenths(
    accel: AccelSample,
    offset: &AutoCenter,
) -> i32 {
    let lat = accel.x - offset.lateral;
    let lon = accel.y - offset.longitudinal;
    let magnitude = micromath::F32(lat * lat + lon * lon + accel.z * accel.z).sqrt().0;
    ((magnitude - 1.0).abs() * 10.0) as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::Pixel;
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::config::layout::{RIBBON_BAND, TILT_CENTER};

    /// DrawTarget that counts painted pixels instead of storing them.
    struct Recorder {
        pixels: usize,
        ribbon_pixels: usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                pixels: 0,
                ribbon_pixels: 0,
            }
        }
    }

    impl OriginDimensions for Recorder {
        fn size(&self) -> Size { Size::new(320, 240) }
    }

    impl DrawTarget for Recorder {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            let band_top = RIBBON_BAND.top_left.y;
            let band_bottom = band_top + RIBBON_BAND.size.height as i32;
            for Pixel(point, _) in pixels {
                self.pixels += 1;
                if point.y >= band_top && point.y < band_bottom {
                    self.ribbon_pixels += 1;
                }
            }
            Ok(())
        }
    }

    /// Scripted sample source.
    struct FakeSource {
        accel: AccelSample,
        heading: i32,
        temp_tenths: i32,
        humidity_tenths: i32,
    }

    impl FakeSource {
        fn still() -> Self {
            Self {
                accel: AccelSample::level(),
                heading: 0,
                temp_tenths: 0,
                humidity_tenths: 0,
            }
        }
    }

    impl SampleSource for FakeSource {
        fn refresh(&mut self) {}

        fn acceleration(&self) -> AccelSample { self.accel }

        fn heading_deg(&mut self) -> i32 { self.heading }

        fn temperature_tenths(&mut self) -> i32 { self.temp_tenths }

        fn humidity_tenths(&mut self) -> i32 { self.humidity_tenths }
    }

    #[test]
    fn test_nothing_fires_at_time_zero() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();

        let report = engine.service(0, &mut display, &mut source);
        assert!(report.is_none());
        assert_eq!(display.pixels, 0);
    }

    #[test]
    fn test_plot_fires_once_per_window() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.accel = AccelSample { x: 1.0, y: 0.0, z: 0.0 };

        engine.service(11, &mut display, &mut source);
        assert_eq!(engine.lateral.latest(), 1.0);

        // One millisecond later the plot window has not elapsed again
        source.accel = AccelSample { x: 2.0, y: 0.0, z: 0.0 };
        engine.service(12, &mut display, &mut source);
        assert_eq!(engine.lateral.latest(), 1.0);

        engine.service(22, &mut display, &mut source);
        assert_eq!(engine.lateral.latest(), 2.0);
    }

    #[test]
    fn test_gauge_reports_heading_only_when_due() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();

        assert!(engine.service(300, &mut display, &mut source).is_none());
        assert_eq!(engine.service(351, &mut display, &mut source), Some(-90));
    }

    #[test]
    fn test_mount_correction_is_applied_to_heading() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.heading = 135;

        engine.service(351, &mut display, &mut source);
        assert_eq!(engine.shown.heading_deg, 45);
    }

    #[test]
    fn test_heading_within_deadband_leaves_ribbon_untouched() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.heading = 92;

        engine.service(351, &mut display, &mut source);
        assert_eq!(engine.shown.heading_deg, 2);

        // 2 degrees away from the rendered value: no ribbon repaint
        source.heading = 94;
        let band_before = display.ribbon_pixels;
        engine.service(452, &mut display, &mut source);
        assert_eq!(engine.shown.heading_deg, 2);
        assert_eq!(display.ribbon_pixels, band_before);
    }

    #[test]
    fn test_heading_jump_repaints_the_ribbon_exactly_once() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.heading = 92;
        engine.service(351, &mut display, &mut source);

        // 3 degrees away: one full band repaint
        source.heading = 95;
        let band_before = display.ribbon_pixels;
        engine.service(452, &mut display, &mut source);
        assert_eq!(engine.shown.heading_deg, 5);

        let mut reference = Recorder::new();
        ribbon::redraw(&mut reference, 5);
        assert_eq!(display.ribbon_pixels - band_before, reference.ribbon_pixels);
    }

    #[test]
    fn test_g_ratchet_decays_through_the_gauge_ticks() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();

        // 2 g vertical: |2 - 1| * 10 = 10 tenths
        source.accel = AccelSample { x: 0.0, y: 0.0, z: 2.0 };
        engine.service(351, &mut display, &mut source);
        assert_eq!(engine.shown.g_tenths, 10);

        // Reading collapses to rest; display decays one step per tick
        source.accel = AccelSample::level();
        for (tick, expected) in [(452, 9), (553, 8), (654, 7)] {
            engine.service(tick, &mut display, &mut source);
            assert_eq!(engine.shown.g_tenths, expected);
        }
    }

    #[test]
    fn test_slow_tick_updates_environment_tiles() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.temp_tenths = 213;
        source.humidity_tenths = 450;

        engine.service(1700, &mut display, &mut source);
        assert_eq!(engine.shown.temp_tenths, 213);
        assert_eq!(engine.shown.humidity_tenths, 450);
        assert!(display.pixels > 0);
    }

    #[test]
    fn test_unchanged_environment_draws_nothing_on_next_slow_tick() {
        let mut engine = Engine::new();
        let mut source = FakeSource::still();
        // Free fall keeps every axis history flat at zero so the chart
        // pixel volume is identical across axes and ticks
        source.accel = AccelSample { x: 0.0, y: 0.0, z: 0.0 };
        source.temp_tenths = 213;
        source.humidity_tenths = 450;

        let mut display = Recorder::new();
        engine.service(1700, &mut display, &mut source);

        // Second slow tick with identical readings: tiles stay untouched.
        // Compare against a tick where only plot work happens.
        let mut quiet = Recorder::new();
        engine.service(2761, &mut quiet, &mut source);
        let mut plot_only = Recorder::new();
        chart::erase(&mut plot_only, &chart::LATERAL, &engine.lateral);
        chart::draw(&mut plot_only, &chart::LATERAL, &engine.lateral);
        // The quiet tick painted chart work for three axes and nothing else
        assert_eq!(quiet.pixels, 3 * plot_only.pixels);
    }

    #[test]
    fn test_bias_change_rebuilds_tilt_chrome() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();

        // Park a sustained lateral signal in the window
        for _ in 0..crate::config::HISTORY_LEN {
            engine.lateral.push(0.6);
        }

        engine.service(1700, &mut display, &mut source);
        assert!((engine.autocenter.lateral - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_ball_moves_with_lateral_acceleration() {
        let mut engine = Engine::new();
        let mut display = Recorder::new();
        let mut source = FakeSource::still();
        source.accel = AccelSample { x: 0.5, y: 0.0, z: 1.0 };

        engine.service(11, &mut display, &mut source);
        assert_eq!(engine.shown.ball, Point::new(TILT_CENTER.x + 16, TILT_CENTER.y));
    }

    #[test]
    fn test_gforce_is_offset_corrected() {
        let mut offset = AutoCenter::new();
        offset.lateral = 0.3;
        let accel = AccelSample { x: 0.3, y: 0.0, z: 1.0 };
        // With the standing bias removed the cluster is at rest
        assert_eq!(gforce_tenths(accel, &offset), 0);
    }

    #[test]
    fn test_gforce_magnitude_at_rest_is_zero() {
        assert_eq!(gforce_tenths(AccelSample::level(), &AutoCenter::new()), 0);
    }
}
