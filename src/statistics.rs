//! Descriptive statistics over windows of sensor values.
//!
//! Every function here is pure: it borrows the caller's slice, never
//! mutates or retains it, and returns the same result for the same input.
//! A zero-length slice is always rejected with [`StatsError::EmptyInput`];
//! callers are expected to skip reporting for empty windows rather than
//! substitute a sentinel.
//!
//! The functions are independent so call sites can fetch only what they
//! display. [`summarize`] bundles all of them for the common case.
//!
//! Complexity: `min`, `max`, `mean` and `stdev` are a single O(n) pass.
//! `median` sorts a private copy, O(n log n).

use crate::error::StatsError;
use crate::types::StatResult;

fn non_empty(values: &[f64]) -> Result<&[f64], StatsError> {
    if values.is_empty() {
        Err(StatsError::EmptyInput)
    } else {
        Ok(values)
    }
}

/// Smallest value in the sequence.
///
/// NaN values are skipped unless every value is NaN, in which case NaN is
/// returned. The result is always an element of the input.
pub fn min(values: &[f64]) -> Result<f64, StatsError> {
    let values = non_empty(values)?;
    Ok(values[1..].iter().copied().fold(values[0], f64::min))
}

/// Largest value in the sequence. NaN handling matches [`min`].
pub fn max(values: &[f64]) -> Result<f64, StatsError> {
    let values = non_empty(values)?;
    Ok(values[1..].iter().copied().fold(values[0], f64::max))
}

/// Arithmetic mean, accumulated in a single pass.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    let values = non_empty(values)?;
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Median of the sequence.
///
/// Sorts a private copy. For an even count the two middle values are averaged.
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    let values = non_empty(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Population standard deviation around a caller-supplied mean.
///
/// `mean` is trusted, not checked: it must equal [`mean`] of the same
/// slice for the result to be meaningful. A mismatched mean yields a
/// well-defined but meaningless number, never an error. Use
/// [`population_stdev`] when the mean is not already at hand.
pub fn stdev(values: &[f64], mean: f64) -> Result<f64, StatsError> {
    let values = non_empty(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum();
    Ok((sum_sq / values.len() as f64).sqrt())
}

/// Population standard deviation, computing the mean internally.
pub fn population_stdev(values: &[f64]) -> Result<f64, StatsError> {
    let m = mean(values)?;
    stdev(values, m)
}

/// Computes the full summary of a window.
pub fn summarize(values: &[f64]) -> Result<StatResult, StatsError> {
    let mean = mean(values)?;
    Ok(StatResult {
        count: values.len(),
        min: min(values)?,
        max: max(values)?,
        mean,
        median: median(values)?,
        stdev: stdev(values, mean)?,
    })
}
