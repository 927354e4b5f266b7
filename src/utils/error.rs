//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Every error message names the offending file/value and the violated
//! constraint so batch drivers can report failures without extra context.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an input file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error in {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed numeric field '{field}'")]
    MalformedField {
        path: PathBuf,
        line: usize,
        field: String,
    },

    #[error("{path}:{line}: row has {cells} cells but header declares {columns} columns")]
    RowWiderThanHeader {
        path: PathBuf,
        line: usize,
        cells: usize,
        columns: usize,
    },

    #[error("{path}: grid file has no header row")]
    EmptyGrid { path: PathBuf },
}

/// Semantic violations in otherwise well-formed data
///
/// Fatal to one file's analysis, never to a whole batch.
#[derive(Error, Debug)]
pub enum InvalidDataError {
    #[error("{path}:{line}: negative duration {value} (negative samples are disallowed)")]
    NegativeDuration {
        path: PathBuf,
        line: usize,
        value: f64,
    },

    #[error("{path}: no delivered values remain at load index {index} after filtering zeros")]
    EmptyRateWindow { path: PathBuf, index: usize },
}

/// Out-of-domain parameters, rejected before any I/O
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("percentile {0} is outside [0.0, 1.0]")]
    PercentileOutOfRange(f64),
}

/// Structural mismatches between declared sweep geometry and supplied grids
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("invalid load range: start {start} must be <= stop {stop}")]
    StartAfterStop { start: f64, stop: f64 },

    #[error("invalid load step {step}: step must be > 0")]
    NonPositiveStep { step: f64 },

    #[error("wrong number of grids: expected {expected} (one per load level), got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("inconsistent sweeps: {left} and {right} disagree on {what}")]
    Inconsistent {
        left: String,
        right: String,
        what: String,
    },
}

/// Strict grid lookup failures
///
/// Only raised by `GridTable::get_strict`; the non-strict accessors
/// return `Option` or the infinity sentinel instead.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("row '{row}' col '{col}' doesn't exist in {path}")]
    MissingKey {
        row: String,
        col: String,
        path: PathBuf,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
