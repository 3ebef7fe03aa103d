//! Streaming zero-crossing detection.
//!
//! A [`ZeroCrossingTracker`] is an edge-triggered two-state machine: the
//! only thing it remembers is whether the last non-zero value it saw was
//! positive. That gives O(1) memory and O(1) work per sample, so a tracker
//! can sit on a live sensor feed indefinitely.
//!
//! State transitions for `observe(v)`:
//!
//! | was_positive | v > 0     | v < 0      | v == 0 |
//! |--------------|-----------|------------|--------|
//! | true         | -         | cross, →false | -   |
//! | false        | cross, →true | -       | -      |
//!
//! Exact zero never toggles state, so a signal dwelling at zero does not
//! produce spurious crossings.

use log::trace;

use crate::types::Axis;

/// Sign tracker for one scalar signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroCrossingTracker {
    was_positive: bool,
    initial_was_positive: bool,
    count: u64,
}

impl ZeroCrossingTracker {
    /// Creates a tracker with an explicit initial sign state.
    ///
    /// With `initial_was_positive = true` the first sample only counts as a
    /// crossing when it is negative.
    pub fn new(initial_was_positive: bool) -> Self {
        Self {
            was_positive: initial_was_positive,
            initial_was_positive,
            count: 0,
        }
    }

    /// Feeds one value. Returns true if a crossing was recorded.
    pub fn observe(&mut self, value: f64) -> bool {
        let crossed = if value > 0.0 && !self.was_positive {
            self.was_positive = true;
            true
        } else if value < 0.0 && self.was_positive {
            self.was_positive = false;
            true
        } else {
            false
        };

        if crossed {
            self.count += 1;
        }
        crossed
    }

    /// Returns the tracker to its freshly constructed state.
    pub fn reset(&mut self) {
        self.was_positive = self.initial_was_positive;
        self.count = 0;
    }

    /// Crossings recorded since construction or the last reset.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the last non-zero value observed was positive.
    pub fn was_positive(&self) -> bool {
        self.was_positive
    }

    pub fn initial_was_positive(&self) -> bool {
        self.initial_was_positive
    }
}

impl Default for ZeroCrossingTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

/// One tracker per acceleration axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AxisCrossings {
    trackers: [ZeroCrossingTracker; 3],
}

impl AxisCrossings {
    pub fn new(initial_was_positive: bool) -> Self {
        Self {
            trackers: [
                ZeroCrossingTracker::new(initial_was_positive),
                ZeroCrossingTracker::new(initial_was_positive),
                ZeroCrossingTracker::new(initial_was_positive),
            ],
        }
    }

    /// Feeds one [x, y, z] reading. Returns which axes crossed.
    pub fn observe(&mut self, accel: [f64; 3]) -> [bool; 3] {
        let mut crossed = [false; 3];
        for axis in Axis::ALL {
            let i = axis.index();
            crossed[i] = self.trackers[i].observe(accel[i]);
            if crossed[i] {
                trace!("zero crossing on {} axis ({:.4})", axis.as_str(), accel[i]);
            }
        }
        crossed
    }

    /// Per-axis crossing counts in [x, y, z] order.
    pub fn counts(&self) -> [u64; 3] {
        [
            self.trackers[0].count(),
            self.trackers[1].count(),
            self.trackers[2].count(),
        ]
    }

    pub fn tracker(&self, axis: Axis) -> &ZeroCrossingTracker {
        &self.trackers[axis.index()]
    }

    pub fn reset(&mut self) {
        for tracker in &mut self.trackers {
            tracker.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        let mut tracker = ZeroCrossingTracker::new(true);
        let results: Vec<bool> = [1.0, -1.0, 1.0, 0.0, -1.0]
            .iter()
            .map(|&v| tracker.observe(v))
            .collect();

        assert_eq!(results, vec![false, true, true, false, true]);
        assert_eq!(tracker.count(), 3);
    }

    #[test]
    fn test_zero_never_toggles_state() {
        let mut tracker = ZeroCrossingTracker::new(false);
        assert!(!tracker.observe(0.0));
        assert!(!tracker.was_positive());
        assert!(tracker.observe(0.5));
        for _ in 0..10 {
            assert!(!tracker.observe(0.0));
        }
        assert!(tracker.was_positive());
        assert!(!tracker.observe(0.1));
        assert_eq!(tracker.count(), 1);
    }

    #[test]
    fn test_initial_state_controls_first_sample() {
        let mut starts_positive = ZeroCrossingTracker::new(true);
        let mut starts_negative = ZeroCrossingTracker::new(false);

        assert!(!starts_positive.observe(0.3));
        assert!(starts_negative.observe(0.3));
        assert!(ZeroCrossingTracker::default().initial_was_positive());
    }

    #[test]
    fn test_count_is_monotonic() {
        let mut tracker = ZeroCrossingTracker::default();
        let mut last = 0;
        for i in 0..200 {
            let v = ((i as f64) * 0.37).sin();
            tracker.observe(v);
            assert!(tracker.count() >= last);
            last = tracker.count();
        }
        assert!(last > 0);
    }

    #[test]
    fn test_reset_matches_fresh_tracker() {
        let input = [0.2, -0.4, -0.1, 0.0, 0.9, -0.3];

        let mut used = ZeroCrossingTracker::new(true);
        for v in [-1.0, 2.0, -3.0] {
            used.observe(v);
        }
        used.reset();
        assert_eq!(used, ZeroCrossingTracker::new(true));

        let mut fresh = ZeroCrossingTracker::new(true);
        for v in input {
            assert_eq!(used.observe(v), fresh.observe(v));
        }
        assert_eq!(used.count(), fresh.count());
    }

    #[test]
    fn test_axis_crossings_are_independent() {
        let mut crossings = AxisCrossings::new(true);

        assert_eq!(crossings.observe([-0.5, 0.5, 0.0]), [true, false, false]);
        assert_eq!(crossings.observe([-0.5, -0.5, -0.5]), [false, true, true]);
        assert_eq!(crossings.observe([0.5, 0.0, -0.5]), [true, false, false]);
        assert_eq!(crossings.counts(), [2, 1, 1]);
        assert!(!crossings.tracker(Axis::Y).was_positive());

        crossings.reset();
        assert_eq!(crossings.counts(), [0, 0, 0]);
        assert_eq!(crossings, AxisCrossings::new(true));
    }
}
