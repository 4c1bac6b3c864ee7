//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed widget geometry
//! - `timing`: Cadence periods, rearm margins, and the boot probe budget

pub mod layout;
pub mod timing;

// Re-export layout constants at config level for convenience
pub use layout::{
    CHART_GAIN_PX_PER_G,
    CHART_PITCH_PX,
    CHART_X,
    HISTORY_LEN,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TILT_CENTER,
    TILT_LIMIT_PX,
    TILT_PX_PER_G,
};
// Re-export timing constants at config level for convenience
pub use timing::{
    ENV_INITIAL_MARK_MS,
    ENV_PERIOD_MS,
    ENV_REARM_MARGIN_MS,
    GAUGE_INITIAL_MARK_MS,
    GAUGE_PERIOD_MS,
    GAUGE_REARM_MARGIN_MS,
    PLOT_PERIOD_MS,
    PROBE_ATTEMPTS,
    PROBE_RETRY_DELAY_MS,
};
