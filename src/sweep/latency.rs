//! Latency-field load sweeps.
//!
//! Simulator latency grids carry one row per aggregation level (packet,
//! message, transaction) and one column per statistic. The sweep extracts
//! a chosen row's statistics across all load levels.

use super::{LoadAxis, LoadSweepSeries};
use crate::parser::GridTable;
use crate::utils::config::LATENCY_FIELDS;
use crate::utils::error::SweepError;
use clap::ValueEnum;
use log::debug;

/// Which latency row to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatRow {
    Packet,
    Message,
    Transaction,
}

impl StatRow {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatRow::Packet => "Packet",
            StatRow::Message => "Message",
            StatRow::Transaction => "Transaction",
        }
    }
}

/// Aggregate latency statistics across one sweep
///
/// One grid is required per load level, in load-ascending order; the
/// positional correspondence is the contract, there is no label lookup.
/// A missing field in one grid reads as `+inf` (off-scale point) rather
/// than aborting the whole sweep.
///
/// # Errors
/// * `SweepError::CountMismatch` - grid count differs from the axis length
pub fn build_latency_sweep(
    axis: LoadAxis,
    grids: &[GridTable],
    row: StatRow,
) -> Result<LoadSweepSeries, SweepError> {
    axis.check_grid_count(grids.len())?;
    debug!(
        "Latency sweep: {} load levels, row {}",
        axis.len(),
        row.as_str()
    );

    let fields = LATENCY_FIELDS
        .iter()
        .map(|&field| {
            let series: Vec<f64> = grids
                .iter()
                .map(|grid| grid.get_f64_or_inf(row.as_str(), field))
                .collect();
            (field.to_string(), series)
        })
        .collect();

    Ok(LoadSweepSeries::new(axis, fields))
}
