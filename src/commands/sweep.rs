//! Load-sweep commands: latency, rate, and hop statistics across an
//! ordered set of per-load grid files.

use super::{finish, labeled, read_grids, StyleArgs};
use crate::plot::SeriesPlotModel;
use crate::sweep::{
    build_hops_sweep, build_latency_sweep, build_rate_sweep, LoadAxis, RateOptions, StatRow,
};
use crate::utils::config::{
    HOPS_AVERAGE_FIELDS, HOPS_AVERAGE_LABELS, HOPS_PERCENT_FIELDS, HOPS_PERCENT_LABELS,
    LATENCY_FIELDS,
};
use anyhow::{bail, Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

/// Load range shared by every sweep command
#[derive(Debug, Clone, Copy, Args)]
pub struct RangeArgs {
    /// Starting load value
    pub start: f64,

    /// Stopping load value (exclusive)
    pub stop: f64,

    /// Load step size
    pub step: f64,
}

impl RangeArgs {
    fn axis(&self) -> Result<LoadAxis> {
        LoadAxis::new(self.start, self.stop, self.step).context("Invalid load range")
    }
}

/// Arguments for `load-latency`
#[derive(Debug, Args)]
pub struct LatencySweepArgs {
    /// Output series file
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Grid files, one per load level in load-ascending order
    #[arg(required = true)]
    pub grids: Vec<PathBuf>,

    /// Latency row to analyze
    #[arg(long, value_enum, default_value = "packet")]
    pub row: StatRow,

    /// Include the minimum-latency line
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub minimum: bool,

    /// Latency units for the axis label
    #[arg(long)]
    pub latency_units: Option<String>,

    /// Load units for the axis label
    #[arg(long, default_value = "%")]
    pub load_units: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Generate a load vs. latency-distribution series
pub fn execute_load_latency(args: LatencySweepArgs) -> Result<()> {
    let axis = args.range.axis()?;
    let grids = read_grids(&args.grids)?;
    let sweep = build_latency_sweep(axis, &grids, args.row)
        .context("Failed to aggregate latency sweep")?;
    info!("Aggregated {} load levels", sweep.axis().len());

    let mut fields: Vec<&str> = LATENCY_FIELDS.to_vec();
    if !args.minimum {
        fields.retain(|&f| f != "Minimum");
    }
    fields.reverse();

    let mut model = SeriesPlotModel::new(sweep.axis().values().to_vec());
    for field in fields {
        let series = sweep.field(field).expect("aggregated field");
        model.add_series(field, series.to_vec());
    }
    model.set_xlabel(format!("Load ({})", args.load_units));
    model.set_ylabel(labeled("Latency", args.latency_units.as_deref()));
    finish(model, &args.style, &args.output)
}

/// Arguments for `load-latency-compare`
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Output series file
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Grid files: N data sets of one-grid-per-load-level each
    #[arg(required = true)]
    pub grids: Vec<PathBuf>,

    /// The latency field to compare
    #[arg(long, default_value = "Mean")]
    pub field: String,

    /// Latency row to analyze
    #[arg(long, value_enum, default_value = "packet")]
    pub row: StatRow,

    /// One label per data set
    #[arg(long)]
    pub data_labels: Vec<String>,

    /// Latency units for the axis label
    #[arg(long)]
    pub latency_units: Option<String>,

    /// Load units for the axis label
    #[arg(long, default_value = "%")]
    pub load_units: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Compare one latency field across several sweeps
pub fn execute_load_latency_compare(args: CompareArgs) -> Result<()> {
    let axis = args.range.axis()?;
    if !LATENCY_FIELDS.contains(&args.field.as_str()) {
        bail!(
            "Unknown latency field '{}' (expected one of {:?})",
            args.field,
            LATENCY_FIELDS
        );
    }

    let per_set = axis.len();
    if per_set == 0 || args.grids.len() % per_set != 0 {
        bail!(
            "Grid count {} is not a multiple of the load-axis length {}",
            args.grids.len(),
            per_set
        );
    }
    let sets = args.grids.len() / per_set;
    if !args.data_labels.is_empty() && args.data_labels.len() != sets {
        bail!(
            "Got {} data labels for {} data sets",
            args.data_labels.len(),
            sets
        );
    }

    let grids = read_grids(&args.grids)?;
    let mut sweeps = Vec::with_capacity(sets);
    for idx in 0..sets {
        let chunk = &grids[idx * per_set..(idx + 1) * per_set];
        let sweep = build_latency_sweep(axis.clone(), chunk, args.row)
            .with_context(|| format!("Failed to aggregate data set {}", idx + 1))?;
        sweeps.push(sweep);
    }

    // All sweeps must share the load axis before they can be overlaid.
    for (idx, sweep) in sweeps.iter().enumerate().skip(1) {
        sweeps[0]
            .axis()
            .ensure_matches(sweep.axis(), "data set 1", &format!("data set {}", idx + 1))?;
    }
    info!("Comparing {} sweeps on field {}", sets, args.field);

    let mut model = SeriesPlotModel::new(axis.values().to_vec());
    for (idx, sweep) in sweeps.iter().enumerate() {
        let label = args
            .data_labels
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("Set {}", idx + 1));
        let series = sweep.field(&args.field).expect("validated field");
        model.add_series(label, series.to_vec());
    }
    model.set_xlabel(format!("Load ({})", args.load_units));
    model.set_ylabel(labeled(
        &format!("{} Latency", args.field),
        args.latency_units.as_deref(),
    ));
    finish(model, &args.style, &args.output)
}

/// Arguments for `load-rate`
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Output series file
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Grid files, one per load level in load-ascending order
    #[arg(required = true)]
    pub grids: Vec<PathBuf>,

    /// Drop terminals that delivered exactly zero
    #[arg(long)]
    pub ignore_zeros: bool,

    /// Load units for the axis label
    #[arg(long, default_value = "%")]
    pub load_units: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Generate an injected vs. delivered rate series
pub fn execute_load_rate(args: RateArgs) -> Result<()> {
    let axis = args.range.axis()?;
    let grids = read_grids(&args.grids)?;
    let options = RateOptions {
        ignore_zeros: args.ignore_zeros,
    };
    let sweep =
        build_rate_sweep(axis, &grids, &options).context("Failed to aggregate rate sweep")?;
    info!("Aggregated {} load levels", sweep.axis().len());

    let mut model = SeriesPlotModel::new(sweep.axis().values().to_vec());
    for field in sweep.field_names().map(str::to_string).collect::<Vec<_>>() {
        let series = sweep.field(&field).expect("aggregated field");
        model.add_series(field, series.to_vec());
    }
    model.set_xlabel(format!("Injected Rate ({})", args.load_units));
    model.set_ylabel(format!("Delivered Rate ({})", args.load_units));
    finish(model, &args.style, &args.output)
}

/// Arguments for `load-rate-percent`
#[derive(Debug, Args)]
pub struct RatePercentArgs {
    /// Output series file
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Rate grid files, one per load level
    #[arg(long, required = true, num_args = 1..)]
    pub rate_stats: Vec<PathBuf>,

    /// Hop-count grid files, one per load level
    #[arg(long, required = true, num_args = 1..)]
    pub hops_stats: Vec<PathBuf>,

    /// Load units for the axis label
    #[arg(long, default_value = "%")]
    pub load_units: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Split the mean delivered rate by minimal/non-minimal routing share
pub fn execute_load_rate_percent(args: RatePercentArgs) -> Result<()> {
    let axis = args.range.axis()?;
    let rate_grids = read_grids(&args.rate_stats)?;
    let hops_grids = read_grids(&args.hops_stats)?;

    let rate_sweep = build_rate_sweep(axis.clone(), &rate_grids, &RateOptions::default())
        .context("Failed to aggregate rate sweep")?;
    let hops_sweep =
        build_hops_sweep(axis.clone(), &hops_grids).context("Failed to aggregate hops sweep")?;
    rate_sweep
        .axis()
        .ensure_matches(hops_sweep.axis(), "rate sweep", "hops sweep")?;

    let mean = rate_sweep.field("Mean").expect("aggregated field");
    let per_min = hops_sweep.field("PerMinimal").expect("aggregated field");
    let per_nonmin = hops_sweep.field("PerNonMinimal").expect("aggregated field");

    let scaled = |per: &[f64]| -> Vec<f64> {
        mean.iter().zip(per).map(|(m, p)| m * p).collect()
    };

    let mut model = SeriesPlotModel::new(axis.values().to_vec());
    model.add_series("Mean", mean.to_vec());
    model.add_series("Minimal", scaled(per_min));
    model.add_series("Non-Minimal", scaled(per_nonmin));
    model.set_xlabel(format!("Injected Rate ({})", args.load_units));
    model.set_ylabel(format!("Delivered Rate ({})", args.load_units));
    finish(model, &args.style, &args.output)
}

/// Arguments for `load-average-hops` and `load-percent-minimal`
#[derive(Debug, Args)]
pub struct HopsArgs {
    /// Output series file
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Grid files, one per load level in load-ascending order
    #[arg(required = true)]
    pub grids: Vec<PathBuf>,

    /// Include the non-minimal hops line
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub non_minimal: bool,

    /// Load units for the axis label
    #[arg(long, default_value = "%")]
    pub load_units: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Generate a load vs. average hops series
pub fn execute_load_average_hops(args: HopsArgs) -> Result<()> {
    let axis = args.range.axis()?;
    let grids = read_grids(&args.grids)?;
    let sweep = build_hops_sweep(axis, &grids).context("Failed to aggregate hops sweep")?;
    info!("Aggregated {} load levels", sweep.axis().len());

    let mut count = HOPS_AVERAGE_FIELDS.len();
    if !args.non_minimal {
        count -= 1;
    }

    let mut model = SeriesPlotModel::new(sweep.axis().values().to_vec());
    for (field, label) in HOPS_AVERAGE_FIELDS
        .iter()
        .zip(HOPS_AVERAGE_LABELS)
        .take(count)
    {
        let series = sweep.field(field).expect("aggregated field");
        model.add_series(*label, series.to_vec());
    }
    model.set_xlabel(format!("Load ({})", args.load_units));
    model.set_ylabel("Average Hops");
    finish(model, &args.style, &args.output)
}

/// Generate a load vs. percent minimal/non-minimal series
pub fn execute_load_percent_minimal(args: HopsArgs) -> Result<()> {
    let axis = args.range.axis()?;
    let grids = read_grids(&args.grids)?;
    let sweep = build_hops_sweep(axis, &grids).context("Failed to aggregate hops sweep")?;
    info!("Aggregated {} load levels", sweep.axis().len());

    let mut model = SeriesPlotModel::new(sweep.axis().values().to_vec());
    for (field, label) in HOPS_PERCENT_FIELDS.iter().zip(HOPS_PERCENT_LABELS) {
        let series = sweep.field(field).expect("aggregated field");
        model.add_series(*label, series.to_vec());
    }
    model.set_xlabel(format!("Load ({})", args.load_units));
    model.set_ylabel("Packets (%)");
    finish(model, &args.style, &args.output)
}
