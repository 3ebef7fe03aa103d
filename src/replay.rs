//! Recorded sample logs.
//!
//! One sample per line, fields separated by whitespace or commas:
//!
//! ```text
//! timestamp_ms ax ay az [pitch roll yaw [rx ry rz]]
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::types::{Attitude, RotationRate, Sample};

/// Parses one log line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_sample_line(line_no: usize, line: &str) -> Result<Option<Sample>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    if !matches!(fields.len(), 4 | 7 | 10) {
        return Err(Error::SampleParse {
            line: line_no,
            reason: format!("expected 4, 7 or 10 fields, found {}", fields.len()),
        });
    }

    let timestamp_ms = fields[0].parse::<u64>().map_err(|e| Error::SampleParse {
        line: line_no,
        reason: format!("bad timestamp {:?}: {}", fields[0], e),
    })?;

    let values = fields[1..]
        .iter()
        .map(|f| {
            f.parse::<f64>().map_err(|e| Error::SampleParse {
                line: line_no,
                reason: format!("bad value {:?}: {}", f, e),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let mut sample = Sample::new(timestamp_ms, [values[0], values[1], values[2]]);
    if values.len() >= 6 {
        sample = sample.with_attitude(Attitude::new(values[3], values[4], values[5]));
    }
    if values.len() == 9 {
        sample = sample.with_rotation_rate(RotationRate::new(values[6], values[7], values[8]));
    }
    Ok(Some(sample))
}

/// Reads every sample from a log.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(sample) = parse_sample_line(i + 1, &line?)? {
            samples.push(sample);
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_only_line() {
        let sample = parse_sample_line(1, "100 0.1 -0.2 0.3").unwrap().unwrap();
        assert_eq!(sample.timestamp_ms, 100);
        assert_eq!(sample.accel, [0.1, -0.2, 0.3]);
        assert!(sample.attitude.is_none());
        assert!(sample.rotation_rate.is_none());
    }

    #[test]
    fn test_full_line_with_commas() {
        let sample = parse_sample_line(1, "150, 0.0, 1.2, 0.3, 0.0, 0.9, 0.0, 5.0, 0.0, 0.0")
            .unwrap()
            .unwrap();
        assert_eq!(sample.attitude.map(|a| a.roll), Some(0.9));
        assert_eq!(sample.rotation_rate.map(|r| r.x), Some(5.0));
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        assert!(parse_sample_line(1, "").unwrap().is_none());
        assert!(parse_sample_line(2, "   # header").unwrap().is_none());
    }

    #[test]
    fn test_bad_lines_report_line_number() {
        let err = parse_sample_line(7, "100 0.1 0.2").unwrap_err();
        assert!(matches!(err, Error::SampleParse { line: 7, .. }));

        let err = parse_sample_line(8, "abc 0.1 0.2 0.3").unwrap_err();
        assert!(matches!(err, Error::SampleParse { line: 8, .. }));

        let err = parse_sample_line(9, "1 0.1 x 0.3").unwrap_err();
        assert!(err.to_string().contains("line 9"));
    }

    #[test]
    fn test_read_samples() {
        let log = "# t ax ay az\n0 0.1 0.1 0.1\n\n50 -0.1 0.2 0.0 1.5 0.0 0.0\n";
        let samples = read_samples(log.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].timestamp_ms, 50);
        assert!(samples[1].attitude.is_some());
    }
}
