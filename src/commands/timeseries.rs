//! Time-series commands over a single grid file: latency fields or hop
//! columns plotted against the grid's time rows.

use super::{finish, labeled, time_axis, StyleArgs};
use crate::parser::GridTable;
use crate::plot::SeriesPlotModel;
use crate::utils::config::{
    HOPS_AVERAGE_FIELDS, HOPS_AVERAGE_LABELS, HOPS_PERCENT_FIELDS, HOPS_PERCENT_LABELS,
    LATENCY_FIELDS,
};
use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

/// Arguments shared by the grid time-series commands
#[derive(Debug, Args)]
pub struct TimeSeriesArgs {
    /// Input grid file (plain or .gz)
    pub input: PathBuf,

    /// Output series file
    pub output: PathBuf,

    /// Include the minimum-latency line (time-latency only)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub minimum: bool,

    /// Include the non-minimal hops line (time-average-hops only)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub non_minimal: bool,

    /// Latency units for the axis label
    #[arg(long)]
    pub latency_units: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Latency statistics over time from one grid file
pub fn execute_time_latency(args: TimeSeriesArgs) -> Result<()> {
    let grid = GridTable::read(&args.input)
        .with_context(|| format!("Failed to read grid {}", args.input.display()))?;
    info!("Grid {}: {} time rows", args.input.display(), grid.row_names().len());

    // Plot largest percentiles first so the legend matches the stack.
    let mut fields: Vec<&str> = LATENCY_FIELDS.to_vec();
    if !args.minimum {
        fields.retain(|&f| f != "Minimum");
    }
    fields.reverse();

    let mut model = SeriesPlotModel::new(time_axis(&grid));
    for field in fields {
        model.add_series(field, grid.column_f64_or_inf(field));
    }
    model.set_xlabel("Time");
    model.set_ylabel(labeled("Latency", args.latency_units.as_deref()));
    finish(model, &args.style, &args.output)
}

/// Average hop counts over time from one grid file
pub fn execute_time_average_hops(args: TimeSeriesArgs) -> Result<()> {
    let grid = GridTable::read(&args.input)
        .with_context(|| format!("Failed to read grid {}", args.input.display()))?;
    info!("Grid {}: {} time rows", args.input.display(), grid.row_names().len());

    let mut count = HOPS_AVERAGE_FIELDS.len();
    if !args.non_minimal {
        count -= 1;
    }

    let mut model = SeriesPlotModel::new(time_axis(&grid));
    for (field, label) in HOPS_AVERAGE_FIELDS
        .iter()
        .zip(HOPS_AVERAGE_LABELS)
        .take(count)
    {
        model.add_series(*label, grid.column_f64_or_inf(field));
    }
    model.set_xlabel("Time");
    model.set_ylabel("Average Hops");
    finish(model, &args.style, &args.output)
}

/// Minimal/non-minimal routing percentages over time from one grid file
pub fn execute_time_percent_minimal(args: TimeSeriesArgs) -> Result<()> {
    let grid = GridTable::read(&args.input)
        .with_context(|| format!("Failed to read grid {}", args.input.display()))?;
    info!("Grid {}: {} time rows", args.input.display(), grid.row_names().len());

    let mut model = SeriesPlotModel::new(time_axis(&grid));
    for (field, label) in HOPS_PERCENT_FIELDS.iter().zip(HOPS_PERCENT_LABELS) {
        model.add_series(*label, grid.column_f64_or_inf(field));
    }
    model.set_xlabel("Time");
    model.set_ylabel("Packets (%)");
    finish(model, &args.style, &args.output)
}
