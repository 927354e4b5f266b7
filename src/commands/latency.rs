//! Single-run latency commands: PDF, CDF, percentile, and scatter plots
//! from one sample log.

use super::{finish, labeled, StyleArgs};
use crate::parser::{ParseOptions, SampleSet};
use crate::plot::{AxisScale, SeriesPlotModel};
use crate::stats::DistributionSummary;
use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};
use std::path::PathBuf;

/// Arguments shared by the single-sample-file commands
#[derive(Debug, Args)]
pub struct DistributionArgs {
    /// Input sample log (plain or .gz)
    pub input: PathBuf,

    /// Output series file
    pub output: PathBuf,

    /// Accept negative durations (clock-skewed logs)
    #[arg(long)]
    pub allow_negative: bool,

    /// Latency units for the axis label
    #[arg(long)]
    pub latency_units: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

impl DistributionArgs {
    fn summarize(&self) -> Result<DistributionSummary> {
        let options = ParseOptions {
            allow_negative: self.allow_negative,
        };
        let set = SampleSet::parse(&self.input, &options)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;
        Ok(DistributionSummary::from_samples(&set))
    }
}

/// Generate a latency PDF series
pub fn execute_latency_pdf(args: DistributionArgs) -> Result<()> {
    let summary = args.summarize()?;
    info!("Summarized {} samples", summary.size());

    let mut model = match summary.stats() {
        Some(stats) => {
            // Left bin edges against per-bin probability mass.
            let edges = stats.pdf_x[..stats.pdf_x.len() - 1].to_vec();
            let mut model = SeriesPlotModel::new(edges);
            model.add_series("PDF", stats.pdf_y.clone());
            model
        }
        None => empty_model(&args),
    };

    model.set_xlabel(labeled("Latency", args.latency_units.as_deref()));
    model.set_ylabel("Probability");
    finish(model, &args.style, &args.output)
}

/// Generate a latency CDF series
pub fn execute_latency_cdf(args: DistributionArgs) -> Result<()> {
    let summary = args.summarize()?;
    info!("Summarized {} samples", summary.size());

    let mut model = match summary.stats() {
        Some(stats) => {
            let mut model = SeriesPlotModel::new(stats.cdf_x.clone());
            model.add_series("CDF", stats.cdf_y.clone());
            model
        }
        None => empty_model(&args),
    };

    model.set_xlabel(labeled("Latency", args.latency_units.as_deref()));
    model.set_ylabel("Cumulative Probability");
    finish(model, &args.style, &args.output)
}

/// Generate a latency-vs-percentile series on a nines axis
///
/// The y-axis is `1 / (1 - p)` on a log scale, sized by the sample
/// count's `nines()`. The final sample (p = 1.0) has no finite position
/// on that axis and is omitted.
pub fn execute_latency_percentile(args: DistributionArgs) -> Result<()> {
    let summary = args.summarize()?;
    info!("Summarized {} samples", summary.size());

    let mut model = match summary.stats() {
        Some(stats) => {
            let n = stats.cdf_x.len();
            let xdata = stats.cdf_x[..n - 1].to_vec();
            let ydata: Vec<f64> = stats.cdf_y[..n - 1]
                .iter()
                .map(|&p| 1.0 / (1.0 - p))
                .collect();
            let mut model = SeriesPlotModel::new(xdata);
            model.add_series("Percentile", ydata);
            model.yaxis.scale = AxisScale::Log;
            model.yaxis.min = Some(1.0);
            model.yaxis.max = Some(10f64.powi(summary.nines() as i32));
            model
        }
        None => empty_model(&args),
    };

    model.set_xlabel(labeled("Latency", args.latency_units.as_deref()));
    model.set_ylabel("Percentile");
    finish(model, &args.style, &args.output)
}

/// Generate a raw time-vs-latency scatter series
pub fn execute_time_latency_scatter(args: DistributionArgs) -> Result<()> {
    let options = ParseOptions {
        allow_negative: args.allow_negative,
    };
    let set = SampleSet::parse(&args.input, &options)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    info!("Parsed {} samples", set.len());

    if set.is_empty() {
        warn!("{}: no samples, writing empty series", args.input.display());
    }

    let mut model = SeriesPlotModel::new(set.times().to_vec());
    model.add_series("Latency", set.samples().to_vec());
    model.set_xlabel("Time");
    model.set_ylabel(labeled("Latency", args.latency_units.as_deref()));
    finish(model, &args.style, &args.output)
}

/// Empty-input placeholder: no series, consumers branch on that
fn empty_model(args: &DistributionArgs) -> SeriesPlotModel {
    warn!("{}: no samples, writing empty series", args.input.display());
    SeriesPlotModel::new(Vec::new())
}
