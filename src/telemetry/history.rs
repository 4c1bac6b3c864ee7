//! Sliding-window history for one acceleration axis.
//!
//! The window is a fixed array that shifts on push: every element moves one
//! slot toward index 0 and the new sample lands at the end. Length is always
//! exactly [`HISTORY_LEN`]; index 0 is the oldest sample. The strip chart
//! consumes the window as adjacent pairs and never holds an iterator across
//! a push, so the shifting representation keeps indexing trivial.

use crate::config::HISTORY_LEN;

/// Fixed-length, time-ordered sample window for a single scalar channel.
pub struct HistoryBuffer {
    samples: [f32; HISTORY_LEN],
}

impl HistoryBuffer {
    /// Create a window of zeros.
    pub const fn new() -> Self {
        Self {
            samples: [0.0; HISTORY_LEN],
        }
    }

    /// Append a sample, evicting the oldest.
    pub fn push(
        &mut self,
        sample: f32,
    ) {
        self.samples.copy_within(1.., 0);
        self.samples[HISTORY_LEN - 1] = sample;
    }

    /// Sample at `index` (0 = oldest, `HISTORY_LEN - 1` = newest).
    pub fn get(
        &self,
        index: usize,
    ) -> f32 {
        self.samples[index]
    }

    /// The most recent sample.
    pub fn latest(&self) -> f32 { self.samples[HISTORY_LEN - 1] }

    /// Adjacent `(older, newer)` pairs, oldest-first.
    ///
    /// Yields `HISTORY_LEN - 1` pairs reflecting the current window; pairs
    /// from before a push are stale and must not be reused.
    pub fn pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples.windows(2).map(|w| (w[0], w[1]))
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_zeroed() {
        let hist = HistoryBuffer::new();
        assert_eq!(hist.get(0), 0.0);
        assert_eq!(hist.latest(), 0.0);
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut hist = HistoryBuffer::new();
        hist.push(1.5);
        assert_eq!(hist.latest(), 1.5);
        assert_eq!(hist.get(HISTORY_LEN - 2), 0.0);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut hist = HistoryBuffer::new();
        for i in 0..HISTORY_LEN + 5 {
            hist.push(i as f32);
        }
        // First five samples fell out of the window
        assert_eq!(hist.get(0), 5.0);
        assert_eq!(hist.latest(), (HISTORY_LEN + 4) as f32);
    }

    #[test]
    fn test_window_stays_time_ordered() {
        let mut hist = HistoryBuffer::new();
        for i in 0..HISTORY_LEN {
            hist.push(i as f32);
        }
        for i in 0..HISTORY_LEN - 1 {
            assert!(hist.get(i) < hist.get(i + 1));
        }
    }

    #[test]
    fn test_pairs_length_and_order() {
        let mut hist = HistoryBuffer::new();
        for i in 0..HISTORY_LEN {
            hist.push(i as f32);
        }
        let pairs: Vec<(f32, f32)> = hist.pairs().collect();
        assert_eq!(pairs.len(), HISTORY_LEN - 1);
        assert_eq!(pairs[0], (0.0, 1.0));
        assert_eq!(pairs[HISTORY_LEN - 2], ((HISTORY_LEN - 2) as f32, (HISTORY_LEN - 1) as f32));
        for (older, newer) in pairs {
            assert_eq!(older + 1.0, newer);
        }
    }

    #[test]
    fn test_pairs_reflect_current_window() {
        let mut hist = HistoryBuffer::new();
        hist.push(7.0);
        let last_before: (f32, f32) = hist.pairs().last().unwrap();
        assert_eq!(last_before, (0.0, 7.0));

        hist.push(9.0);
        let last_after: (f32, f32) = hist.pairs().last().unwrap();
        assert_eq!(last_after, (7.0, 9.0));
    }
}
