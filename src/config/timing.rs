//! Cadence periods and boot probe budget.
//!
//! The control loop partitions its work into three cadences with distinct
//! target periods. On firing, each cadence rearms to "now minus a small
//! margin" rather than to an absolute schedule, so drift self-corrects
//! without accumulating across iterations. The initial marks are staggered
//! so the three cadences do not all fire on the same early iteration.

/// Strip chart and tilt ball update period.
pub const PLOT_PERIOD_MS: u64 = 10;

/// G-force tile and heading ribbon update period.
pub const GAUGE_PERIOD_MS: u64 = 100;

/// Temperature/humidity tiles and offset filter period.
pub const ENV_PERIOD_MS: u64 = 1050;

/// Rearm margin for the gauge cadence.
pub const GAUGE_REARM_MARGIN_MS: u64 = 50;

/// Rearm margin for the environment cadence.
pub const ENV_REARM_MARGIN_MS: u64 = 90;

/// Initial clock mark for the gauge cadence.
pub const GAUGE_INITIAL_MARK_MS: u64 = 250;

/// Initial clock mark for the environment cadence.
pub const ENV_INITIAL_MARK_MS: u64 = 600;

// =============================================================================
// Boot Probe Budget
// =============================================================================

/// How many times a peripheral is probed before it is flagged degraded.
pub const PROBE_ATTEMPTS: u32 = 4;

/// Delay between probe attempts.
pub const PROBE_RETRY_DELAY_MS: u64 = 1000;
