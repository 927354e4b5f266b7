//! Hop-count load sweeps.
//!
//! Hop grids are time series with a final run-wide summary row. The sweep
//! reads the summary row of each grid: average minimal/total/non-minimal
//! hop counts and the minimal/non-minimal routing percentages.

use super::{LoadAxis, LoadSweepSeries};
use crate::parser::GridTable;
use crate::utils::config::{HOPS_AVERAGE_FIELDS, HOPS_PERCENT_FIELDS};
use crate::utils::error::SweepError;
use log::debug;

/// Aggregate hop-count statistics across one sweep
///
/// A grid without rows, or without a given field, contributes `+inf`
/// for that level (the off-scale convention shared with latency sweeps).
///
/// # Errors
/// * `SweepError::CountMismatch` - grid count differs from the axis length
pub fn build_hops_sweep(axis: LoadAxis, grids: &[GridTable]) -> Result<LoadSweepSeries, SweepError> {
    axis.check_grid_count(grids.len())?;
    debug!("Hops sweep: {} load levels", axis.len());

    let field_names = HOPS_AVERAGE_FIELDS.iter().chain(HOPS_PERCENT_FIELDS);
    let fields = field_names
        .map(|&field| {
            let series: Vec<f64> = grids
                .iter()
                .map(|grid| match grid.row_names().last() {
                    Some(summary_row) => grid.get_f64_or_inf(summary_row, field),
                    None => f64::INFINITY,
                })
                .collect();
            (field.to_string(), series)
        })
        .collect();

    Ok(LoadSweepSeries::new(axis, fields))
}
