//! Core data types for the motion statistics engine.
//!
//! This module defines the values that flow between the sensor source,
//! the statistics engine, the crossing trackers and the gesture classifier.
//! Every value here is immutable once produced and owned by its caller.
//!
//! Design principle: if a concept exists, it gets a type. Axes are named,
//! labels are enums, and summaries are structs rather than loose tuples.

use serde::{Deserialize, Serialize};

// ============================================================================
// SENSOR INPUT TYPES
// ============================================================================

/// Device attitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    /// Rotation around the x axis.
    pub pitch: f64,
    /// Rotation around the y axis.
    pub roll: f64,
    /// Rotation around the z axis.
    pub yaw: f64,
}

impl Attitude {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }
}

/// Gyroscope rotation rate in rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationRate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationRate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single timestamped motion reading.
///
/// Acceleration is user acceleration in g with gravity already removed by
/// the sensor framework. Attitude and rotation rate are optional: a device
/// without a gyroscope produces samples with `rotation_rate: None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Timestamp in milliseconds. Expected to be non-decreasing within a stream.
    pub timestamp_ms: u64,

    /// Acceleration reading [x, y, z] in g.
    pub accel: [f64; 3],

    /// Optional device attitude.
    pub attitude: Option<Attitude>,

    /// Optional gyroscope rotation rate.
    pub rotation_rate: Option<RotationRate>,
}

impl Sample {
    /// Creates an acceleration-only sample.
    pub fn new(timestamp_ms: u64, accel: [f64; 3]) -> Self {
        Self {
            timestamp_ms,
            accel,
            attitude: None,
            rotation_rate: None,
        }
    }

    /// Attaches an attitude reading.
    pub fn with_attitude(mut self, attitude: Attitude) -> Self {
        self.attitude = Some(attitude);
        self
    }

    /// Attaches a rotation rate reading.
    pub fn with_rotation_rate(mut self, rotation_rate: RotationRate) -> Self {
        self.rotation_rate = Some(rotation_rate);
        self
    }

    /// Acceleration along one axis.
    pub fn axis(&self, axis: Axis) -> f64 {
        self.accel[axis.index()]
    }

    /// Magnitude of the acceleration vector in g.
    pub fn accel_magnitude(&self) -> f64 {
        let [x, y, z] = self.accel;
        (x * x + y * y + z * z).sqrt()
    }
}

/// One of the three device axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis in `[x, y, z]` arrays.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

// ============================================================================
// STATISTICS OUTPUT TYPES
// ============================================================================

/// Descriptive summary of one window of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatResult {
    /// Number of values summarized. Always at least 1.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub stdev: f64,
}

impl StatResult {
    /// Difference between the largest and smallest value.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

// ============================================================================
// GESTURE TYPES
// ============================================================================

/// Gesture recognized from a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionLabel {
    /// No gesture.
    #[default]
    None,
    /// Forward push along the y axis without a fast wrist rotation.
    Thrust,
    /// Sideways block along the parry axis.
    Parry,
    /// Forward push combined with a fast rotation.
    Slash,
}

impl MotionLabel {
    /// Returns true for any recognized gesture.
    pub fn is_gesture(&self) -> bool {
        !matches!(self, MotionLabel::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionLabel::None => "none",
            MotionLabel::Thrust => "thrust",
            MotionLabel::Parry => "parry",
            MotionLabel::Slash => "slash",
        }
    }
}

/// Classifier output for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Classification {
    pub label: MotionLabel,
    /// Device pitch indicates it was lifted off a flat surface.
    /// Independent of `label`.
    pub lifted: bool,
}
