//! Sampling-loop driver combining every stage of the engine.
//!
//! The host owns the sensor timer and pushes each [`Sample`] into a
//! [`MotionSession`]. For every sample the session:
//!
//! 1. **Reports** if the sample's timestamp has reached the end of the
//!    current reporting interval (statistics over the window so far).
//! 2. **Buffers** the acceleration into the per-axis window.
//! 3. **Tracks** zero crossings on each axis.
//! 4. **Classifies** the gesture.
//! 5. **Records** the values a persistence collaborator would store.
//!
//! Intervals are measured on sample timestamps, not wall-clock time, so a
//! recorded stream replays to the same reports. An interval that received no
//! samples produces no report.

use log::{info, trace, warn};

use crate::classifier::MotionClassifier;
use crate::config::{SessionConfig, WindowPolicy};
use crate::record::SampleRecord;
use crate::types::{Axis, Classification, MotionLabel, Sample, StatResult};
use crate::window::AxisWindow;
use crate::zero_crossing::AxisCrossings;

/// Gesture tallies over an interval or a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureCounts {
    pub thrust: u64,
    pub parry: u64,
    pub slash: u64,
    /// Samples flagged as lifted off the table.
    pub lifted: u64,
}

impl GestureCounts {
    fn add(&mut self, classification: &Classification) {
        match classification.label {
            MotionLabel::Thrust => self.thrust += 1,
            MotionLabel::Parry => self.parry += 1,
            MotionLabel::Slash => self.slash += 1,
            MotionLabel::None => {}
        }
        if classification.lifted {
            self.lifted += 1;
        }
    }

    /// Count for one label. `MotionLabel::None` is not tallied and returns 0.
    pub fn get(&self, label: MotionLabel) -> u64 {
        match label {
            MotionLabel::Thrust => self.thrust,
            MotionLabel::Parry => self.parry,
            MotionLabel::Slash => self.slash,
            MotionLabel::None => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.thrust + self.parry + self.slash
    }
}

/// Statistics emitted at the end of a reporting interval.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalReport {
    /// Start of the interval (ms).
    pub start_ms: u64,
    /// End of the interval (ms). For a flushed partial interval, the last
    /// sample's timestamp.
    pub end_ms: u64,
    /// Samples received during this interval.
    pub sample_count: usize,
    /// Per-axis window summaries. The window may span more than this
    /// interval under the cumulative and sliding policies.
    pub x: StatResult,
    pub y: StatResult,
    pub z: StatResult,
    /// Zero-crossing counts [x, y, z] at report time.
    pub crossings: [u64; 3],
    /// Gestures recognized during this interval.
    pub gestures: GestureCounts,
}

impl IntervalReport {
    pub fn axis(&self, axis: Axis) -> &StatResult {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Everything produced for one incoming sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome {
    pub classification: Classification,
    /// Axes [x, y, z] on which this sample recorded a zero crossing.
    pub crossed: [bool; 3],
    pub record: SampleRecord,
    /// Report for the interval this sample closed, if any.
    pub report: Option<IntervalReport>,
}

/// Upper bound on the window capacity reserved up front.
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// Host-driven motion session.
pub struct MotionSession {
    config: SessionConfig,
    report_interval_ms: u64,

    classifier: MotionClassifier,
    crossings: AxisCrossings,
    window: AxisWindow,

    // Interval tracking
    interval_start_ms: Option<u64>,
    interval_samples: usize,
    interval_gestures: GestureCounts,
    last_timestamp_ms: u64,

    // Session totals
    total_samples: usize,
    total_gestures: GestureCounts,
    reports_emitted: usize,
}

impl MotionSession {
    /// Creates a session.
    ///
    /// Out-of-range values are clamped rather than rejected: a zero report
    /// interval behaves as 1ms and a zero sliding window holds one reading.
    /// Use [`SessionConfig::validate`] to reject them up front.
    pub fn new(config: SessionConfig) -> Self {
        let window = match config.window_policy {
            WindowPolicy::Sliding { max_samples } => AxisWindow::bounded(max_samples),
            WindowPolicy::ResetEachInterval | WindowPolicy::Cumulative => {
                AxisWindow::with_capacity(config.samples_per_report().min(MAX_PREALLOCATED_SAMPLES))
            }
        };

        Self {
            report_interval_ms: config.report_interval_ms.max(1),
            classifier: MotionClassifier::new(config.classifier.clone()),
            crossings: AxisCrossings::new(config.initial_was_positive),
            window,
            interval_start_ms: None,
            interval_samples: 0,
            interval_gestures: GestureCounts::default(),
            last_timestamp_ms: 0,
            total_samples: 0,
            total_gestures: GestureCounts::default(),
            reports_emitted: 0,
            config,
        }
    }

    /// Processes one sample through every stage.
    pub fn process_sample(&mut self, sample: &Sample) -> SampleOutcome {
        let report = self.close_interval_if_due(sample.timestamp_ms);

        if self.interval_start_ms.is_none() {
            self.interval_start_ms = Some(sample.timestamp_ms);
        }

        self.window.push(sample.accel);
        let crossed = self.crossings.observe(sample.accel);

        let classification = self.classifier.classify(sample);
        if classification.label.is_gesture() {
            info!("{} at t={}ms", classification.label.as_str(), sample.timestamp_ms);
        }
        if classification.lifted {
            info!("device lifted off the table at t={}ms", sample.timestamp_ms);
        }
        self.interval_gestures.add(&classification);
        self.total_gestures.add(&classification);

        let record = SampleRecord::new(sample, self.crossings.counts());
        trace!(
            "sample t={}ms accel={:?} crossings={:?}",
            sample.timestamp_ms,
            sample.accel,
            record.zero_crossings
        );

        self.interval_samples += 1;
        self.total_samples += 1;
        self.last_timestamp_ms = sample.timestamp_ms;

        SampleOutcome {
            classification,
            crossed,
            record,
            report,
        }
    }

    /// Processes a batch of samples and returns every report produced.
    pub fn process_batch(&mut self, samples: &[Sample]) -> Vec<IntervalReport> {
        samples
            .iter()
            .filter_map(|s| self.process_sample(s).report)
            .collect()
    }

    /// Emits a report for the current partial interval.
    ///
    /// Call this when input ends. Returns None if the interval is empty.
    pub fn flush(&mut self) -> Option<IntervalReport> {
        let start_ms = self.interval_start_ms?;
        let report = self.emit_report(start_ms, self.last_timestamp_ms);
        self.interval_start_ms = None;
        report
    }

    fn close_interval_if_due(&mut self, timestamp_ms: u64) -> Option<IntervalReport> {
        let start_ms = self.interval_start_ms?;
        let interval = self.report_interval_ms;
        let end_ms = start_ms.saturating_add(interval);
        if timestamp_ms < end_ms {
            return None;
        }

        let report = self.emit_report(start_ms, end_ms);

        // Skip whole intervals that received nothing; they produce no report.
        let elapsed = timestamp_ms - start_ms;
        self.interval_start_ms = Some(start_ms + (elapsed / interval) * interval);
        report
    }

    fn emit_report(&mut self, start_ms: u64, end_ms: u64) -> Option<IntervalReport> {
        let report = if self.interval_samples == 0 {
            None
        } else {
            // The window always holds at least this interval's latest sample.
            match self.window.summaries() {
                Ok([x, y, z]) => Some(IntervalReport {
                    start_ms,
                    end_ms,
                    sample_count: self.interval_samples,
                    x,
                    y,
                    z,
                    crossings: self.crossings.counts(),
                    gestures: self.interval_gestures,
                }),
                Err(e) => {
                    warn!("dropping report {}..{}ms: {}", start_ms, end_ms, e);
                    None
                }
            }
        };

        if let Some(report) = &report {
            self.reports_emitted += 1;
            info!(
                "report {}..{}ms: count={} mean=({:.2}, {:.2}, {:.2}) crossings={:?} gestures={}",
                report.start_ms,
                report.end_ms,
                report.sample_count,
                report.x.mean,
                report.y.mean,
                report.z.mean,
                report.crossings,
                report.gestures.total()
            );
        }

        self.interval_samples = 0;
        self.interval_gestures = GestureCounts::default();
        if self.config.window_policy == WindowPolicy::ResetEachInterval {
            self.window.clear();
        }
        if self.config.reset_crossings_each_interval {
            self.crossings.reset();
        }

        report
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Samples processed since the session started.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Readings currently held in the window.
    pub fn window_samples(&self) -> usize {
        self.window.len()
    }

    /// Gestures recognized since the session started.
    pub fn gesture_counts(&self) -> GestureCounts {
        self.total_gestures
    }

    /// Current per-axis crossing counts [x, y, z].
    pub fn crossing_counts(&self) -> [u64; 3] {
        self.crossings.counts()
    }

    pub fn reports_emitted(&self) -> usize {
        self.reports_emitted
    }
}
