//! Simsweep CLI
//!
//! Derives summary statistics from network-simulator measurement logs
//! and writes them as series documents for an external plotting layer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use simsweep::commands::{
    execute_latency_cdf, execute_latency_pdf, execute_latency_percentile,
    execute_load_average_hops, execute_load_latency, execute_load_latency_compare,
    execute_load_percent_minimal, execute_load_rate, execute_load_rate_percent,
    execute_time_average_hops, execute_time_latency, execute_time_latency_scatter,
    execute_time_percent_minimal, CompareArgs, DistributionArgs, HopsArgs, LatencySweepArgs,
    RateArgs, RatePercentArgs, TimeSeriesArgs,
};

/// Simsweep - statistics extraction for network-simulator runs
#[derive(Parser, Debug)]
#[command(name = "simsweep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a latency PDF series from one sample log
    LatencyPdf(DistributionArgs),

    /// Generate a latency CDF series from one sample log
    LatencyCdf(DistributionArgs),

    /// Generate a latency percentile series on a nines axis
    LatencyPercentile(DistributionArgs),

    /// Generate a raw time vs. latency scatter series
    TimeLatencyScatter(DistributionArgs),

    /// Generate latency statistics over time from one grid file
    TimeLatency(TimeSeriesArgs),

    /// Generate average hop counts over time from one grid file
    TimeAverageHops(TimeSeriesArgs),

    /// Generate minimal/non-minimal routing percentages over time
    TimePercentMinimal(TimeSeriesArgs),

    /// Generate a load vs. latency series from a sweep of grid files
    LoadLatency(LatencySweepArgs),

    /// Compare one latency field across several sweeps
    LoadLatencyCompare(CompareArgs),

    /// Generate an injected vs. delivered rate series
    LoadRate(RateArgs),

    /// Split the delivered rate by minimal/non-minimal routing share
    LoadRatePercent(RatePercentArgs),

    /// Generate a load vs. average hops series
    LoadAverageHops(HopsArgs),

    /// Generate a load vs. percent minimal series
    LoadPercentMinimal(HopsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::LatencyPdf(args) => execute_latency_pdf(args),
        Commands::LatencyCdf(args) => execute_latency_cdf(args),
        Commands::LatencyPercentile(args) => execute_latency_percentile(args),
        Commands::TimeLatencyScatter(args) => execute_time_latency_scatter(args),
        Commands::TimeLatency(args) => execute_time_latency(args),
        Commands::TimeAverageHops(args) => execute_time_average_hops(args),
        Commands::TimePercentMinimal(args) => execute_time_percent_minimal(args),
        Commands::LoadLatency(args) => execute_load_latency(args),
        Commands::LoadLatencyCompare(args) => execute_load_latency_compare(args),
        Commands::LoadRate(args) => execute_load_rate(args),
        Commands::LoadRatePercent(args) => execute_load_rate_percent(args),
        Commands::LoadAverageHops(args) => execute_load_average_hops(args),
        Commands::LoadPercentMinimal(args) => execute_load_percent_minimal(args),
    }
}
