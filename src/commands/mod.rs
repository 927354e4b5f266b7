//! CLI command implementations.
//!
//! Each subcommand is thin glue: read input files, run the aggregation
//! core, assemble a plot model, write the series document. All statistics
//! live in `stats` and `sweep`; nothing here computes.

mod latency;
mod sweep;
mod timeseries;

pub use latency::{
    execute_latency_cdf, execute_latency_pdf, execute_latency_percentile,
    execute_time_latency_scatter, DistributionArgs,
};
pub use sweep::{
    execute_load_average_hops, execute_load_latency, execute_load_latency_compare,
    execute_load_percent_minimal, execute_load_rate, execute_load_rate_percent, CompareArgs,
    HopsArgs, LatencySweepArgs, RangeArgs, RateArgs, RatePercentArgs,
};
pub use timeseries::{
    execute_time_average_hops, execute_time_latency, execute_time_percent_minimal, TimeSeriesArgs,
};

use crate::output::{write_series, SeriesDocument};
use crate::parser::GridTable;
use crate::plot::{LineStyleKind, SeriesPlotModel};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Styling options shared by every plotting subcommand
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// Line style family
    #[arg(long, value_enum, default_value = "colorful")]
    pub style: LineStyleKind,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,
}

/// Read one grid file per load level, in the order given
pub(crate) fn read_grids(paths: &[PathBuf]) -> Result<Vec<GridTable>> {
    paths
        .iter()
        .map(|path| {
            GridTable::read(path).with_context(|| format!("Failed to read grid {}", path.display()))
        })
        .collect()
}

/// Resolve styles and write the finished model
pub(crate) fn finish(
    mut model: SeriesPlotModel,
    style: &StyleArgs,
    output: &Path,
) -> Result<()> {
    if let Some(title) = &style.title {
        model.title = Some(title.clone());
    }
    model.resolve_styles(style.style);

    let document = SeriesDocument::new(model);
    write_series(&document, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

/// Numeric time axis from grid row keys; falls back to row indices when
/// any key is non-numeric
pub(crate) fn time_axis(grid: &GridTable) -> Vec<f64> {
    let parsed: Option<Vec<f64>> = grid
        .row_names()
        .iter()
        .map(|name| name.parse::<f64>().ok())
        .collect();
    parsed.unwrap_or_else(|| (0..grid.row_names().len()).map(|i| i as f64).collect())
}

/// Axis label helper: `base (units)` when units are given
pub(crate) fn labeled(base: &str, units: Option<&str>) -> String {
    match units {
        Some(u) => format!("{} ({})", base, u),
        None => base.to_string(),
    }
}
