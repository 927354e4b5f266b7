//! Distribution summary of one run's latency samples.
//!
//! Computes min/max, a histogram-based PDF, an empirical CDF, and
//! nearest-rank percentiles from a [`SampleSet`]. All values are derived
//! once at construction; the summary is immutable afterward.

use crate::parser::SampleSet;
use crate::utils::config::{EMPTY_NINES, FALLBACK_BINS};
use crate::utils::error::RangeError;
use log::debug;

/// Summary statistics for one sample set
///
/// An empty set produces `size == 0` and no statistics; callers must
/// branch on [`DistributionSummary::stats`] before reading them.
#[derive(Debug, Clone)]
pub struct DistributionSummary {
    size: usize,
    stats: Option<DistributionStats>,
}

/// Statistics of a non-empty sample set
#[derive(Debug, Clone)]
pub struct DistributionStats {
    pub time_min: f64,
    pub time_max: f64,
    pub value_min: f64,
    pub value_max: f64,

    /// Histogram bin edges, length `bins + 1`
    pub pdf_x: Vec<f64>,
    /// Per-bin probability mass (not density), sums to 1.0
    pub pdf_y: Vec<f64>,

    /// Samples sorted ascending
    pub cdf_x: Vec<f64>,
    /// Plotting positions `(i + 1) / size`, strictly increasing to 1.0
    pub cdf_y: Vec<f64>,

    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
    pub p999: f64,
    pub p9999: f64,
}

impl DistributionSummary {
    /// Summarize a sample set
    pub fn from_samples(set: &SampleSet) -> Self {
        let size = set.len();
        if size == 0 {
            debug!("Empty sample set from {}", set.source().display());
            return Self { size, stats: None };
        }

        let times = set.times();
        let samples = set.samples();

        let time_min = fold_min(times);
        let time_max = fold_max(times);
        let value_min = fold_min(samples);
        let value_max = fold_max(samples);

        let mut cdf_x = samples.to_vec();
        cdf_x.sort_by(|a, b| a.partial_cmp(b).expect("NaN sample"));
        let cdf_y: Vec<f64> = (0..size).map(|i| (i + 1) as f64 / size as f64).collect();

        let (pdf_x, pdf_y) = histogram(&cdf_x, value_min, value_max);
        debug_assert!((pdf_y.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let mut stats = DistributionStats {
            time_min,
            time_max,
            value_min,
            value_max,
            pdf_x,
            pdf_y,
            cdf_x,
            cdf_y,
            p50: 0.0,
            p90: 0.0,
            p99: 0.0,
            p999: 0.0,
            p9999: 0.0,
        };

        // Precomputed at construction for quick access.
        stats.p50 = stats.percentile(0.50).expect("0.50 in range");
        stats.p90 = stats.percentile(0.90).expect("0.90 in range");
        stats.p99 = stats.percentile(0.99).expect("0.99 in range");
        stats.p999 = stats.percentile(0.999).expect("0.999 in range");
        stats.p9999 = stats.percentile(0.9999).expect("0.9999 in range");

        Self {
            size,
            stats: Some(stats),
        }
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.size
    }

    /// Statistics, present only when `size > 0`
    pub fn stats(&self) -> Option<&DistributionStats> {
        self.stats.as_ref()
    }

    /// Number of nines needed to resolve the percentile distribution on a
    /// log-scale axis: `ceil(log10(size))`, or a fixed fallback when empty
    pub fn nines(&self) -> u32 {
        if self.size > 0 {
            (self.size as f64).log10().ceil() as u32
        } else {
            EMPTY_NINES
        }
    }
}

impl DistributionStats {
    /// Nearest-rank percentile for `percent` in `[0, 1]`
    ///
    /// Index = `round(percent * size)` with ties rounding to even,
    /// clamped to `size - 1`. This is deliberately not an interpolating
    /// estimator; callers replicating these values must use the same
    /// rounding, including the banker's tie-break.
    ///
    /// # Errors
    /// * `RangeError::PercentileOutOfRange` - `percent` outside `[0, 1]`
    pub fn percentile(&self, percent: f64) -> Result<f64, RangeError> {
        if !(0.0..=1.0).contains(&percent) {
            return Err(RangeError::PercentileOutOfRange(percent));
        }
        let size = self.cdf_x.len();
        let index = (percent * size as f64).round_ties_even() as usize;
        Ok(self.cdf_x[index.min(size - 1)])
    }
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Equal-width histogram with an automatic bin-count heuristic
///
/// Bin count is the larger of the Sturges and Freedman-Diaconis estimates
/// over the sample range; degenerate data (zero range or zero IQR) falls
/// back to a fixed count. `pdf_y` holds per-bin counts divided by the
/// total count, so it sums to exactly 1.0.
fn histogram(sorted: &[f64], min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let n = sorted.len();
    let range = max - min;

    let bins = auto_bins(sorted, range).unwrap_or(FALLBACK_BINS);

    // A zero-width range still gets a usable axis.
    let (lo, hi) = if range > 0.0 {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for &v in sorted {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let mass: Vec<f64> = counts.iter().map(|&c| c as f64 / n as f64).collect();
    (edges, mass)
}

/// Automatic bin count: max of Sturges and Freedman-Diaconis
///
/// `None` when the data cannot support either estimate.
fn auto_bins(sorted: &[f64], range: f64) -> Option<usize> {
    let n = sorted.len();
    if range <= 0.0 {
        return None;
    }

    let sturges = (n as f64).log2().ceil() as usize + 1;

    let iqr = quantile(sorted, 0.75) - quantile(sorted, 0.25);
    let fd_width = 2.0 * iqr / (n as f64).cbrt();
    let fd = if fd_width > 0.0 {
        (range / fd_width).ceil() as usize
    } else {
        0
    };

    Some(sturges.max(fd).max(1))
}

/// Linear-interpolation quantile over sorted data (internal, used only
/// for bin-width estimation)
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
