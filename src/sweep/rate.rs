//! Delivered-rate load sweeps.
//!
//! Rate grids carry one row per terminal plus a final run-wide "total"
//! row. The sweep scans the terminal rows of each grid, scales the
//! delivered fraction to a percentage, and reduces to min/mean/max.

use super::{LoadAxis, LoadSweepSeries};
use crate::parser::GridTable;
use crate::utils::config::{DELIVERED_COLUMN, RATE_FIELDS, RATE_SCALE};
use crate::utils::error::{InvalidDataError, SweepError};
use log::debug;
use thiserror::Error;

/// Failure modes of [`build_rate_sweep`]
#[derive(Error, Debug)]
pub enum RateError {
    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Data(#[from] InvalidDataError),
}

/// Options controlling rate aggregation
#[derive(Debug, Clone, Default)]
pub struct RateOptions {
    /// Drop terminals that delivered exactly zero. NaN measurements are
    /// kept either way; they are data points, not absent terminals.
    pub ignore_zeros: bool,
}

/// Aggregate delivered rates across one sweep
///
/// All grids must share the structure of the first (same row and column
/// counts); a filtered-out window leaving no terminals is a data error,
/// never a silent NaN.
///
/// # Errors
/// * `SweepError::CountMismatch` - grid count differs from the axis length
/// * `SweepError::Inconsistent` - grids disagree on structure
/// * `InvalidDataError::EmptyRateWindow` - no delivered values survive filtering
pub fn build_rate_sweep(
    axis: LoadAxis,
    grids: &[GridTable],
    options: &RateOptions,
) -> Result<LoadSweepSeries, RateError> {
    axis.check_grid_count(grids.len())?;
    check_structure(grids)?;
    debug!(
        "Rate sweep: {} load levels, ignore_zeros={}",
        axis.len(),
        options.ignore_zeros
    );

    let mut minimum = Vec::with_capacity(axis.len());
    let mut mean = Vec::with_capacity(axis.len());
    let mut maximum = Vec::with_capacity(axis.len());

    for (index, grid) in grids.iter().enumerate() {
        let delivered = delivered_values(grid, options);
        if delivered.is_empty() {
            return Err(InvalidDataError::EmptyRateWindow {
                path: grid.source().to_path_buf(),
                index,
            }
            .into());
        }

        let count = delivered.len() as f64;
        minimum.push(delivered.iter().copied().fold(f64::INFINITY, f64::min));
        mean.push(delivered.iter().sum::<f64>() / count);
        maximum.push(delivered.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    }

    let fields = vec![
        (RATE_FIELDS[0].to_string(), minimum),
        (RATE_FIELDS[1].to_string(), mean),
        (RATE_FIELDS[2].to_string(), maximum),
    ];
    Ok(LoadSweepSeries::new(axis, fields))
}

/// Delivered percentages from all terminal rows (the final "total" row is
/// excluded), filtered per the options
fn delivered_values(grid: &GridTable, options: &RateOptions) -> Vec<f64> {
    let rows = grid.row_names();
    let terminals = rows.len().saturating_sub(1);

    rows[..terminals]
        .iter()
        .map(|row| grid.get_f64_or_inf(row, DELIVERED_COLUMN) * RATE_SCALE)
        .filter(|&value| value > 0.0 || value.is_nan() || !options.ignore_zeros)
        .collect()
}

fn check_structure(grids: &[GridTable]) -> Result<(), SweepError> {
    let Some(first) = grids.first() else {
        return Ok(());
    };
    for grid in &grids[1..] {
        if grid.column_names().len() != first.column_names().len() {
            return Err(SweepError::Inconsistent {
                left: first.source().display().to_string(),
                right: grid.source().display().to_string(),
                what: format!(
                    "column count ({} vs {})",
                    first.column_names().len(),
                    grid.column_names().len()
                ),
            });
        }
        if grid.row_names().len() != first.row_names().len() {
            return Err(SweepError::Inconsistent {
                left: first.source().display().to_string(),
                right: grid.source().display().to_string(),
                what: format!(
                    "row count ({} vs {})",
                    first.row_names().len(),
                    grid.row_names().len()
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rate_grid(delivered: &[f64]) -> (NamedTempFile, GridTable) {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ",injected,delivered").unwrap();
        for (i, d) in delivered.iter().enumerate() {
            writeln!(file, "{},0.9,{}", i, d).unwrap();
        }
        writeln!(file, "total,0.9,0.5").unwrap();
        let grid = GridTable::read(file.path()).unwrap();
        (file, grid)
    }

    #[test]
    fn test_rate_sweep_min_mean_max() {
        let (_f1, g1) = rate_grid(&[0.5, 0.7]);
        let (_f2, g2) = rate_grid(&[0.2, 0.4]);
        let axis = LoadAxis::new(0.0, 1.0, 0.5).unwrap();

        let sweep = build_rate_sweep(axis, &[g1, g2], &RateOptions::default()).unwrap();

        assert_eq!(sweep.field("Minimum").unwrap(), &[50.0, 20.0]);
        assert_eq!(sweep.field("Mean").unwrap(), &[60.0, 30.0]);
        assert_eq!(sweep.field("Maximum").unwrap(), &[70.0, 40.0]);
    }

    #[test]
    fn test_rate_sweep_excludes_total_row() {
        // With one terminal row, the total row's 0.5 must not leak in.
        let (_f1, g1) = rate_grid(&[0.8]);
        let axis = LoadAxis::new(0.0, 0.5, 0.5).unwrap();

        let sweep = build_rate_sweep(axis, &[g1], &RateOptions::default()).unwrap();
        assert_eq!(sweep.field("Mean").unwrap(), &[80.0]);
    }

    #[test]
    fn test_rate_sweep_ignore_zeros() {
        let (_f1, g1) = rate_grid(&[0.0, 0.6]);
        let axis = LoadAxis::new(0.0, 0.5, 0.5).unwrap();

        let options = RateOptions { ignore_zeros: true };
        let sweep = build_rate_sweep(axis, &[g1], &options).unwrap();

        assert_eq!(sweep.field("Minimum").unwrap(), &[60.0]);
        assert_eq!(sweep.field("Mean").unwrap(), &[60.0]);
    }

    #[test]
    fn test_rate_sweep_all_zeros_fails() {
        let (_f1, g1) = rate_grid(&[0.0, 0.0]);
        let axis = LoadAxis::new(0.0, 0.5, 0.5).unwrap();

        let options = RateOptions { ignore_zeros: true };
        let err = build_rate_sweep(axis, &[g1], &options).unwrap_err();

        assert!(matches!(
            err,
            RateError::Data(InvalidDataError::EmptyRateWindow { .. })
        ));
    }

    #[test]
    fn test_rate_sweep_structure_mismatch() {
        let (_f1, g1) = rate_grid(&[0.5, 0.7]);
        let (_f2, g2) = rate_grid(&[0.2]);
        let axis = LoadAxis::new(0.0, 1.0, 0.5).unwrap();

        let err = build_rate_sweep(axis, &[g1, g2], &RateOptions::default()).unwrap_err();
        assert!(matches!(err, RateError::Sweep(SweepError::Inconsistent { .. })));
    }

    #[test]
    fn test_rate_sweep_count_mismatch() {
        let (_f1, g1) = rate_grid(&[0.5]);
        let axis = LoadAxis::new(0.0, 1.0, 0.5).unwrap();

        let err = build_rate_sweep(axis, &[g1], &RateOptions::default()).unwrap_err();
        assert!(matches!(err, RateError::Sweep(SweepError::CountMismatch { .. })));
    }
}
