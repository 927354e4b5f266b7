//! Parser for two-column time-interval logs.
//!
//! Each line is `start,end[,...]` in simulation time units; only the first
//! two columns are used. Parsing stops at the first line without a comma,
//! which tolerates trailing footers written by some simulators.

use super::open_reader;
use crate::utils::error::{InvalidDataError, ParseError};
use log::debug;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure modes of [`SampleSet::parse`]
#[derive(Error, Debug)]
pub enum SampleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Data(#[from] InvalidDataError),
}

/// Options controlling sample-log parsing
///
/// Explicit struct with typed fields rather than per-call flags.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Accept negative computed durations (end before start).
    /// Disabled by default; clock-skewed logs must opt in.
    pub allow_negative: bool,
}

/// One run's collection of (arrival time, duration) pairs
///
/// Immutable after parsing. `times[i]` is the start time of sample `i`
/// and `samples[i]` its duration (`end - start`).
#[derive(Debug, Clone)]
pub struct SampleSet {
    times: Vec<f64>,
    samples: Vec<f64>,
    source: PathBuf,
}

impl SampleSet {
    /// Parse a sample log from a plain or gzip-compressed file
    ///
    /// # Errors
    /// * `SampleError::Parse` - missing/unreadable file or malformed numeric field
    /// * `SampleError::Data` - negative duration while `allow_negative` is off
    pub fn parse(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self, SampleError> {
        let path = path.as_ref();
        debug!("Parsing sample log: {}", path.display());

        let reader = open_reader(path)?;
        let mut times = Vec::new();
        let mut samples = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| ParseError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            // The first comma-less line terminates the data section.
            if !line.contains(',') {
                break;
            }

            let mut cols = line.split(',');
            let start = parse_field(cols.next().unwrap_or(""), path, line_no)?;
            let end = parse_field(cols.next().unwrap_or(""), path, line_no)?;
            let duration = end - start;

            if duration < 0.0 && !options.allow_negative {
                return Err(InvalidDataError::NegativeDuration {
                    path: path.to_path_buf(),
                    line: line_no,
                    value: duration,
                }
                .into());
            }

            times.push(start);
            samples.push(duration);
        }

        debug!("Parsed {} samples from {}", times.len(), path.display());

        Ok(Self {
            times,
            samples,
            source: path.to_path_buf(),
        })
    }

    /// Arrival times, one per sample
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Durations (`end - start`), one per sample
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// File this set was parsed from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Build a set directly from arrays (tests and in-memory callers)
    pub fn from_arrays(times: Vec<f64>, samples: Vec<f64>) -> Self {
        assert_eq!(times.len(), samples.len());
        Self {
            times,
            samples,
            source: PathBuf::new(),
        }
    }
}

fn parse_field(field: &str, path: &Path, line: usize) -> Result<f64, ParseError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::MalformedField {
            path: path.to_path_buf(),
            line,
            field: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_basic() {
        let file = write_log("0,5\n1,7\n3,3\n");
        let set = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap();

        assert_eq!(set.times(), &[0.0, 1.0, 3.0]);
        assert_eq!(set.samples(), &[5.0, 6.0, 0.0]);
    }

    #[test]
    fn test_parse_stops_at_footer() {
        let file = write_log("0,5\n1,7\nend of data\n9,9\n");
        let set = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_extra_columns_ignored() {
        let file = write_log("0,5,99,x\n1,7,42\n");
        let set = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap();

        assert_eq!(set.samples(), &[5.0, 6.0]);
    }

    #[test]
    fn test_parse_empty_file() {
        let file = write_log("");
        let set = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap();

        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_malformed_field() {
        let file = write_log("0,5\nbogus,7\n");
        let err = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("bogus"), "unexpected message: {}", msg);
        assert!(msg.contains(":2:"), "line context missing: {}", msg);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = SampleSet::parse("/nonexistent/samples.csv", &ParseOptions::default());
        assert!(matches!(err, Err(SampleError::Parse(_))));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let file = write_log("5,3\n");
        let err = SampleSet::parse(file.path(), &ParseOptions::default()).unwrap_err();

        assert!(matches!(err, SampleError::Data(_)));
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_negative_duration_allowed() {
        let file = write_log("5,3\n");
        let options = ParseOptions {
            allow_negative: true,
        };
        let set = SampleSet::parse(file.path(), &options).unwrap();

        assert_eq!(set.samples(), &[-2.0]);
    }
}
