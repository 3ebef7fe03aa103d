//! Per-axis sample windows.
//!
//! An [`AxisWindow`] accumulates x, y and z series over one reporting
//! interval. The owner decides when to clear it; the statistics engine only
//! ever borrows the series.

use std::collections::VecDeque;

use crate::error::StatsError;
use crate::statistics;
use crate::types::{Axis, StatResult};

/// Ordered, append-only x/y/z series.
///
/// With a `max_len`, the oldest reading is evicted once the window is full.
#[derive(Debug, Clone, Default)]
pub struct AxisWindow {
    series: [VecDeque<f64>; 3],
    max_len: Option<usize>,
}

impl AxisWindow {
    /// Creates an unbounded window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unbounded window with room reserved for `capacity` readings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            series: [
                VecDeque::with_capacity(capacity),
                VecDeque::with_capacity(capacity),
                VecDeque::with_capacity(capacity),
            ],
            max_len: None,
        }
    }

    /// Creates a window holding at most the last `max_len` readings.
    pub fn bounded(max_len: usize) -> Self {
        let max_len = max_len.max(1);
        Self {
            series: [
                VecDeque::with_capacity(max_len),
                VecDeque::with_capacity(max_len),
                VecDeque::with_capacity(max_len),
            ],
            max_len: Some(max_len),
        }
    }

    /// Appends one [x, y, z] reading.
    pub fn push(&mut self, accel: [f64; 3]) {
        for (series, value) in self.series.iter_mut().zip(accel) {
            if let Some(max_len) = self.max_len {
                if series.len() >= max_len {
                    series.pop_front();
                }
            }
            series.push_back(value);
        }
    }

    /// Contiguous view of one axis series, oldest first.
    pub fn series(&mut self, axis: Axis) -> &[f64] {
        self.series[axis.index()].make_contiguous()
    }

    /// Number of readings held. All three series have the same length.
    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Drops every reading.
    pub fn clear(&mut self) {
        for series in &mut self.series {
            series.clear();
        }
    }

    /// Summary of one axis series.
    pub fn summary(&mut self, axis: Axis) -> Result<StatResult, StatsError> {
        statistics::summarize(self.series(axis))
    }

    /// Summaries of all three axes in [x, y, z] order.
    pub fn summaries(&mut self) -> Result<[StatResult; 3], StatsError> {
        Ok([
            self.summary(Axis::X)?,
            self.summary(Axis::Y)?,
            self.summary(Axis::Z)?,
        ])
    }
}
