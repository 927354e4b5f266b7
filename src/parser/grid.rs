//! Parser for CSV grid tables of summary statistics.
//!
//! Row 0 is the column header; the first field of every subsequent row is
//! the row key. Cells are coerced int -> float -> string, first parse wins,
//! so `"3"` stays an integer, `"3.0"` a float, and `"abc"` a string.

use super::open_reader;
use crate::utils::error::{GridError, ParseError};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// One typed grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl CellValue {
    /// Coerce a raw cell, preferring int, then float, then string
    pub fn coerce(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            CellValue::Int(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            CellValue::Float(f)
        } else {
            CellValue::Str(raw.to_string())
        }
    }

    /// Numeric view of the cell; `None` for strings
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Str(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A two-level (row key, column name) -> value table parsed from a
/// simulator's summary CSV
///
/// Row order from the file is preserved; rate sweeps rely on it to locate
/// the final sentinel "total" row.
#[derive(Debug, Clone)]
pub struct GridTable {
    source: PathBuf,
    columns: Vec<String>,
    row_names: Vec<String>,
    cells: HashMap<String, HashMap<String, CellValue>>,
}

impl GridTable {
    /// Read a grid table from a plain or gzip-compressed CSV file
    ///
    /// # Errors
    /// * `ParseError::FileOpen` / `ParseError::Io` - unreadable file
    /// * `ParseError::EmptyGrid` - no header row
    /// * `ParseError::RowWiderThanHeader` - a data row wider than the header
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("Reading grid table: {}", path.display());

        let reader = open_reader(path)?;
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| ParseError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            lines.push(line);
        }

        let header = lines.first().ok_or_else(|| ParseError::EmptyGrid {
            path: path.to_path_buf(),
        })?;
        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let mut row_names = Vec::new();
        let mut cells: HashMap<String, HashMap<String, CellValue>> = HashMap::new();

        for (idx, line) in lines.iter().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let row: Vec<&str> = line.split(',').map(str::trim).collect();
            if row.len() > columns.len() {
                return Err(ParseError::RowWiderThanHeader {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    cells: row.len(),
                    columns: columns.len(),
                });
            }

            let key = row[0].to_string();
            let entry = cells.entry(key.clone()).or_default();
            for (cidx, cell) in row.iter().enumerate().skip(1) {
                entry.insert(columns[cidx].clone(), CellValue::coerce(cell));
            }
            row_names.push(key);
        }

        debug!(
            "Grid {}: {} rows x {} columns",
            path.display(),
            row_names.len(),
            columns.len().saturating_sub(1)
        );

        Ok(Self {
            source: path.to_path_buf(),
            columns,
            row_names,
            cells,
        })
    }

    /// Look up a cell; `None` if the (row, col) pair is absent
    pub fn get(&self, row: &str, col: &str) -> Option<&CellValue> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Strict lookup, failing loudly on a missing (row, col) pair
    pub fn get_strict(&self, row: &str, col: &str) -> Result<&CellValue, GridError> {
        self.get(row, col).ok_or_else(|| GridError::MissingKey {
            row: row.to_string(),
            col: col.to_string(),
            path: self.source.clone(),
        })
    }

    /// Numeric lookup with the worst-case sentinel: a missing or
    /// non-numeric cell reads as `+inf` so one absent field produces an
    /// off-scale point instead of aborting a batch of renders
    pub fn get_f64_or_inf(&self, row: &str, col: &str) -> f64 {
        self.get(row, col)
            .and_then(CellValue::as_f64)
            .unwrap_or(f64::INFINITY)
    }

    /// Row keys in file order
    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    /// Column names from the header, excluding the row-key column
    pub fn column_names(&self) -> &[String] {
        &self.columns[1..]
    }

    /// One column across all rows, in row order
    pub fn column(&self, col: &str) -> Vec<Option<&CellValue>> {
        self.row_names.iter().map(|r| self.get(r, col)).collect()
    }

    /// Numeric column extraction with the `+inf` convention of
    /// [`GridTable::get_f64_or_inf`]
    pub fn column_f64_or_inf(&self, col: &str) -> Vec<f64> {
        self.row_names
            .iter()
            .map(|r| self.get_f64_or_inf(r, col))
            .collect()
    }

    /// File this table was parsed from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_grid(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const LATENCY_GRID: &str = "\
,Minimum,Mean,Maximum,Tag
Packet,3,4.5,9.0,ok
Message,4,5.25,11,warm
";

    #[test]
    fn test_cell_coercion_order() {
        assert_eq!(CellValue::coerce("3"), CellValue::Int(3));
        assert_eq!(CellValue::coerce("3.0"), CellValue::Float(3.0));
        assert_eq!(CellValue::coerce("abc"), CellValue::Str("abc".to_string()));
    }

    #[test]
    fn test_read_and_lookup() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        assert_eq!(grid.get("Packet", "Minimum"), Some(&CellValue::Int(3)));
        assert_eq!(grid.get("Packet", "Mean"), Some(&CellValue::Float(4.5)));
        assert_eq!(
            grid.get("Packet", "Tag"),
            Some(&CellValue::Str("ok".to_string()))
        );
        assert_eq!(grid.get("Message", "Maximum"), Some(&CellValue::Int(11)));
    }

    #[test]
    fn test_row_and_column_names() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        assert_eq!(grid.row_names(), &["Packet", "Message"]);
        assert_eq!(grid.column_names(), &["Minimum", "Mean", "Maximum", "Tag"]);
    }

    #[test]
    fn test_missing_key_is_none() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        assert!(grid.get("Transaction", "Mean").is_none());
        assert!(grid.get("Packet", "Median").is_none());
    }

    #[test]
    fn test_strict_lookup_error_names_keys() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        let err = grid.get_strict("Transaction", "Mean").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Transaction"));
        assert!(msg.contains("Mean"));
    }

    #[test]
    fn test_infinity_sentinel() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        assert!(grid.get_f64_or_inf("Transaction", "Mean").is_infinite());
        // Non-numeric cells also read as worst-case.
        assert!(grid.get_f64_or_inf("Packet", "Tag").is_infinite());
        assert_eq!(grid.get_f64_or_inf("Packet", "Mean"), 4.5);
    }

    #[test]
    fn test_column_extraction() {
        let file = write_grid(LATENCY_GRID);
        let grid = GridTable::read(file.path()).unwrap();

        assert_eq!(grid.column_f64_or_inf("Mean"), vec![4.5, 5.25]);
    }

    #[test]
    fn test_empty_file_fails() {
        let file = write_grid("");
        let err = GridTable::read(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::EmptyGrid { .. }));
    }

    #[test]
    fn test_row_wider_than_header_fails() {
        let file = write_grid(",a,b\nr0,1,2,3\n");
        let err = GridTable::read(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::RowWiderThanHeader {
                cells: 4,
                columns: 3,
                ..
            }
        ));
        let msg = err.to_string();
        assert!(msg.contains("row has 4 cells"), "message: {}", msg);
    }

    #[test]
    fn test_gzip_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(LATENCY_GRID.as_bytes()).unwrap();
        enc.finish().unwrap();

        let grid = GridTable::read(&path).unwrap();
        assert_eq!(grid.get("Packet", "Minimum"), Some(&CellValue::Int(3)));
    }
}
