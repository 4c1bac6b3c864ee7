//! Auto-centering offset filter for the tilt gauge.
//!
//! A standing mounting tilt or sensor bias would park the tilt ball off
//! center forever. Instead of an external calibration step, a slow drift
//! corrector probes four fixed positions spread across each axis history
//! window once per environment tick. The bias only moves when all four
//! probes sit on the same side of it, so single-sample noise cannot perturb
//! the filter, while a sustained tilt walks the bias over in 0.1 g steps
//! until the ball re-centers.
//!
//! The bias is intentionally unclamped.

use crate::history::HistoryBuffer;

/// Window positions probed on each retune.
const PROBE_TAPS: [usize; 4] = [1, 20, 40, 60];

/// Bias adjustment per retune when the probes agree.
const BIAS_STEP: f32 = 0.1;

/// Slow-moving per-axis bias, subtracted from the raw acceleration before
/// the tilt ball and G magnitude are computed.
pub struct AutoCenter {
    /// Standing bias on the lateral (x) axis, in g.
    pub lateral: f32,
    /// Standing bias on the longitudinal (y) axis, in g.
    pub longitudinal: f32,
}

impl AutoCenter {
    /// Start with no correction.
    pub const fn new() -> Self {
        Self {
            lateral: 0.0,
            longitudinal: 0.0,
        }
    }

    /// Step each axis bias toward its history window if the probes agree.
    ///
    /// Returns `true` when either bias moved, signalling that the tilt
    /// gauge chrome must be redrawn around the new center.
    pub fn retune(
        &mut self,
        lateral_hist: &HistoryBuffer,
        longitudinal_hist: &HistoryBuffer,
    ) -> bool {
        let lateral_moved = retune_axis(&mut self.lateral, lateral_hist);
        let longitudinal_moved = retune_axis(&mut self.longitudinal, longitudinal_hist);
        lateral_moved || longitudinal_moved
    }
}

impl Default for AutoCenter {
    fn default() -> Self { Self::new() }
}

fn retune_axis(
    bias: &mut f32,
    hist: &HistoryBuffer,
) -> bool {
    let mut below = 0;
    let mut above = 0;
    for &tap in &PROBE_TAPS {
        let sample = hist.get(tap);
        if sample < *bias {
            below += 1;
        } else if sample > *bias {
            above += 1;
        }
    }

    if below == PROBE_TAPS.len() {
        *bias -= BIAS_STEP;
        true
    } else if above == PROBE_TAPS.len() {
        *bias += BIAS_STEP;
        true
    } else {
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: f32) -> HistoryBuffer {
        let mut hist = HistoryBuffer::new();
        for _ in 0..crate::config::HISTORY_LEN {
            hist.push(value);
        }
        hist
    }

    #[test]
    fn test_new_filter_is_centered() {
        let filter = AutoCenter::new();
        assert_eq!(filter.lateral, 0.0);
        assert_eq!(filter.longitudinal, 0.0);
    }

    #[test]
    fn test_all_probes_above_steps_up_one_step() {
        let mut filter = AutoCenter::new();
        let hist = filled(0.5);
        let moved = filter.retune(&hist, &HistoryBuffer::new());
        assert!(moved);
        assert!((filter.lateral - BIAS_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_all_probes_below_steps_down_one_step() {
        let mut filter = AutoCenter::new();
        let hist = filled(-0.5);
        let moved = filter.retune(&hist, &HistoryBuffer::new());
        assert!(moved);
        assert!((filter.lateral + BIAS_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_probes_leave_bias_unchanged() {
        let mut filter = AutoCenter::new();
        let mut hist = HistoryBuffer::new();
        for i in 0..crate::config::HISTORY_LEN {
            // Alternate sides of zero so the probes disagree
            hist.push(if i % 2 == 0 { 0.3 } else { -0.3 });
        }
        let moved = filter.retune(&hist, &HistoryBuffer::new());
        assert!(!moved);
        assert_eq!(filter.lateral, 0.0);
    }

    #[test]
    fn test_probes_equal_to_bias_count_as_neither_side() {
        let mut filter = AutoCenter::new();
        let hist = filled(0.0);
        assert!(!filter.retune(&hist, &HistoryBuffer::new()));
        assert_eq!(filter.lateral, 0.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut filter = AutoCenter::new();
        let lat = filled(0.4);
        let lon = filled(-0.4);
        assert!(filter.retune(&lat, &lon));
        assert!(filter.lateral > 0.0);
        assert!(filter.longitudinal < 0.0);
    }

    #[test]
    fn test_converges_to_signal_mean_within_one_step() {
        let mut filter = AutoCenter::new();
        let hist = filled(0.55);
        for _ in 0..20 {
            filter.retune(&hist, &HistoryBuffer::new());
        }
        // The bias ends up oscillating within one step of the mean
        assert!((filter.lateral - 0.55).abs() <= BIAS_STEP);
    }

    #[test]
    fn test_bias_is_unclamped() {
        // A large sustained signal walks the bias far past the 1 g range
        let mut filter = AutoCenter::new();
        let hist = filled(5.0);
        for _ in 0..60 {
            filter.retune(&hist, &HistoryBuffer::new());
        }
        assert!(filter.lateral > 4.0);
    }
}
