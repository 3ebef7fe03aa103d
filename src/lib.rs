//! Motion Statistics Engine Library
//!
//! Turns a stream of accelerometer/gyroscope samples into rolling summary
//! statistics, per-axis zero-crossing counts and gesture labels
//! (thrust, parry, slash).
//!
//! # Components
//!
//! - [`statistics`]: pure min/max/mean/median/standard deviation over a window.
//! - [`zero_crossing`]: O(1) streaming sign-change tracking, one tracker per axis.
//! - [`classifier`]: stateless threshold table mapping one sample to a gesture.
//! - [`session`]: host-driven sampling loop that buffers windows and emits
//!   interval reports.
//!
//! Nothing here owns a timer, a thread or a sensor. The host pushes samples
//! in and consumes reports and records out.
//!
//! # Example
//!
//! ```
//! use motion_stats::{MotionSession, Sample, SessionConfig};
//!
//! let mut session = MotionSession::new(SessionConfig::default());
//! for i in 0..120u64 {
//!     let x = if i % 2 == 0 { 0.2 } else { -0.2 };
//!     if let Some(report) = session.process_sample(&Sample::new(i * 50, [x, 0.0, 0.0])).report {
//!         assert_eq!(report.sample_count, 100);
//!     }
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod record;
pub mod replay;
pub mod session;
pub mod statistics;
pub mod types;
pub mod window;
pub mod zero_crossing;


// Re-export commonly used types
pub use classifier::{ClassifierConfig, MotionClassifier};
pub use config::{SessionConfig, WindowPolicy};
pub use error::{ConfigError, Error, Result, StatsError};
pub use record::SampleRecord;
pub use session::{GestureCounts, IntervalReport, MotionSession, SampleOutcome};
pub use types::{Attitude, Axis, Classification, MotionLabel, RotationRate, Sample, StatResult};
pub use window::AxisWindow;
pub use zero_crossing::{AxisCrossings, ZeroCrossingTracker};
