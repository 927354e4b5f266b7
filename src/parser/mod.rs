//! Input-file parsers for simulator logs.
//!
//! Two formats come out of a simulator run: raw two-column interval logs
//! (one line per delivered packet) and CSV grid tables of summary
//! statistics. Both may be gzip-compressed, detected by the `.gz` suffix.

pub mod grid;
pub mod sample;

pub use grid::{CellValue, GridTable};
pub use sample::{ParseOptions, SampleSet};

use crate::utils::error::ParseError;
use flate2::bufread::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open a simulator log for line-oriented reading, transparently
/// decompressing `.gz` files
pub(crate) fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}
