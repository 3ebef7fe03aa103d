//! Gesture classification from a single motion sample.
//!
//! A stateless decision table over hand-tuned axis thresholds:
//!
//! 1. The parry axis is `accel.z` when the device is rolled past
//!    `roll_switch_threshold`, otherwise `accel.x`. A reading at or beyond
//!    `±parry_threshold` on that axis is a Parry.
//! 2. Otherwise a forward push (`accel.y >= thrust_threshold`) is a Slash
//!    when the slash axis rotation rate (`rotation_rate.x` when rolled,
//!    `rotation_rate.z` when not) exceeds `±slash_rotation_threshold`,
//!    and a Thrust when it does not.
//! 3. Anything else is no gesture.
//!
//! Independently of the label, a pitch inside `lift_pitch_range` reports
//! the device as lifted off the table.

use log::debug;
use serde::Deserialize;

use crate::types::{Classification, MotionLabel, Sample};

/// Thresholds for gesture classification.
///
/// Defaults are tuned for user acceleration in g and rotation rate in rad/s
/// from a handheld phone held flat.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Absolute roll (rad) above which the parry and slash axes switch.
    /// Typical: 0.79 (about 45°).
    pub roll_switch_threshold: f64,

    /// Parry axis acceleration (g) at or beyond which a Parry is reported.
    pub parry_threshold: f64,

    /// Forward (y) acceleration (g) at or above which a Thrust or Slash is considered.
    pub thrust_threshold: f64,

    /// Slash axis rotation rate (rad/s) beyond which a push becomes a Slash.
    pub slash_rotation_threshold: f64,

    /// Open pitch interval (rad) in which the device counts as lifted.
    /// Upper bound sits just below π/2.
    pub lift_pitch_range: (f64, f64),
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            roll_switch_threshold: 0.79,
            parry_threshold: 1.0,
            thrust_threshold: 1.0,
            slash_rotation_threshold: 4.0,
            lift_pitch_range: (1.4, 1.57),
        }
    }
}

/// Stateless gesture classifier.
#[derive(Debug, Clone, Default)]
pub struct MotionClassifier {
    config: ClassifierConfig,
}

impl MotionClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one sample.
    ///
    /// Missing attitude is treated as level (roll and pitch 0.0). Missing
    /// rotation rate gives a slash axis of 0.0, which resolves to Thrust.
    pub fn classify(&self, sample: &Sample) -> Classification {
        Classification {
            label: self.label(sample),
            lifted: self.is_lifted(sample),
        }
    }

    /// Gesture label for one sample.
    pub fn label(&self, sample: &Sample) -> MotionLabel {
        let cfg = &self.config;
        let [ax, ay, az] = sample.accel;
        let rolled = self.is_rolled(sample);

        let parry_axis = if rolled { az } else { ax };
        if parry_axis <= -cfg.parry_threshold || parry_axis >= cfg.parry_threshold {
            return MotionLabel::Parry;
        }

        if ay < cfg.thrust_threshold {
            return MotionLabel::None;
        }

        let slash_axis = match sample.rotation_rate {
            Some(rate) if rolled => rate.x,
            Some(rate) => rate.z,
            None => {
                debug!("no rotation rate at t={}ms, treating push as thrust", sample.timestamp_ms);
                0.0
            }
        };

        if slash_axis < -cfg.slash_rotation_threshold || slash_axis > cfg.slash_rotation_threshold {
            MotionLabel::Slash
        } else {
            MotionLabel::Thrust
        }
    }

    /// Whether the sample's pitch lies inside the lift window.
    pub fn is_lifted(&self, sample: &Sample) -> bool {
        let (lo, hi) = self.config.lift_pitch_range;
        sample
            .attitude
            .map(|a| a.pitch > lo && a.pitch < hi)
            .unwrap_or(false)
    }

    fn is_rolled(&self, sample: &Sample) -> bool {
        sample
            .attitude
            .map(|a| a.roll.abs() > self.config.roll_switch_threshold)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attitude, RotationRate};

    fn level(accel: [f64; 3]) -> Sample {
        Sample::new(0, accel).with_attitude(Attitude::new(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_parry_on_x_when_level() {
        let classifier = MotionClassifier::default();
        assert_eq!(classifier.label(&level([1.2, 0.0, 0.0])), MotionLabel::Parry);
        assert_eq!(classifier.label(&level([-1.0, 0.0, 0.0])), MotionLabel::Parry);
        assert_eq!(classifier.label(&level([0.99, 0.0, 5.0])), MotionLabel::None);
    }

    #[test]
    fn test_rolled_switches_to_z_and_rotation_x() {
        let classifier = MotionClassifier::default();
        let sample = Sample::new(0, [0.0, 1.2, 0.3])
            .with_attitude(Attitude::new(0.0, 0.9, 0.0))
            .with_rotation_rate(RotationRate::new(5.0, 0.0, 0.0));

        assert_eq!(classifier.label(&sample), MotionLabel::Slash);
    }

    #[test]
    fn test_rolled_ignores_x_for_parry() {
        let classifier = MotionClassifier::default();
        let sample = Sample::new(0, [2.0, 0.0, 0.1]).with_attitude(Attitude::new(0.0, -0.8, 0.0));
        assert_eq!(classifier.label(&sample), MotionLabel::None);

        let sample = Sample::new(0, [0.0, 0.0, -1.5]).with_attitude(Attitude::new(0.0, -0.8, 0.0));
        assert_eq!(classifier.label(&sample), MotionLabel::Parry);
    }

    #[test]
    fn test_parry_takes_precedence_over_push() {
        let classifier = MotionClassifier::default();
        let sample = level([1.5, 2.0, 0.0]).with_rotation_rate(RotationRate::new(0.0, 0.0, 9.0));
        assert_eq!(classifier.label(&sample), MotionLabel::Parry);
    }

    #[test]
    fn test_thrust_versus_slash_on_z_rotation() {
        let classifier = MotionClassifier::default();
        let push = level([0.0, 1.0, 0.0]);

        let slow = push.with_rotation_rate(RotationRate::new(9.0, 0.0, 4.0));
        assert_eq!(classifier.label(&slow), MotionLabel::Thrust);

        let fast = push.with_rotation_rate(RotationRate::new(0.0, 0.0, -4.1));
        assert_eq!(classifier.label(&fast), MotionLabel::Slash);
    }

    #[test]
    fn test_missing_gyro_resolves_to_thrust() {
        let classifier = MotionClassifier::default();
        assert_eq!(classifier.label(&level([0.0, 1.3, 0.0])), MotionLabel::Thrust);
    }

    #[test]
    fn test_missing_attitude_is_level() {
        let classifier = MotionClassifier::default();
        let sample = Sample::new(0, [1.1, 0.0, 0.0]);
        let result = classifier.classify(&sample);
        assert_eq!(result.label, MotionLabel::Parry);
        assert!(!result.lifted);
    }

    #[test]
    fn test_lifted_flag_is_independent() {
        let classifier = MotionClassifier::default();
        let lifted = Sample::new(0, [0.0, 0.0, 0.0]).with_attitude(Attitude::new(1.5, 0.0, 0.0));
        let result = classifier.classify(&lifted);
        assert!(result.lifted);
        assert_eq!(result.label, MotionLabel::None);

        let edge = Sample::new(0, [0.0, 0.0, 0.0]).with_attitude(Attitude::new(1.57, 0.0, 0.0));
        assert!(!classifier.is_lifted(&edge));
        let edge = Sample::new(0, [0.0, 0.0, 0.0]).with_attitude(Attitude::new(1.4, 0.0, 0.0));
        assert!(!classifier.is_lifted(&edge));
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = MotionClassifier::new(ClassifierConfig {
            parry_threshold: 2.0,
            ..ClassifierConfig::default()
        });
        assert_eq!(classifier.label(&level([1.5, 0.0, 0.0])), MotionLabel::None);
        assert_eq!(classifier.config().parry_threshold, 2.0);
    }
}
