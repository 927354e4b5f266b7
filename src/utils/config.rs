//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Field names in simulator latency grids. Simulators emit one column per
// statistic; sweep aggregation reads them by name.
pub const LATENCY_FIELDS: &[&str] = &[
    "Minimum", "Mean", "Median", "90th%", "99th%", "99.9th%", "99.99th%", "99.999th%", "Maximum",
];

/// Fields computed per load level for rate sweeps
pub const RATE_FIELDS: &[&str] = &["Minimum", "Mean", "Maximum"];

/// Hop-average columns in hop-count grids, with their display labels
pub const HOPS_AVERAGE_FIELDS: &[&str] = &["AveMinHops", "AveHops", "AveNonMinHops"];
pub const HOPS_AVERAGE_LABELS: &[&str] = &["Minimal Hops", "Total Hops", "Non-Minimal Hops"];

/// Minimal/non-minimal percentage columns in hop-count grids
pub const HOPS_PERCENT_FIELDS: &[&str] = &["PerMinimal", "PerNonMinimal"];
pub const HOPS_PERCENT_LABELS: &[&str] = &["Minimal %", "Non-Minimal %"];

/// Column holding the delivered-rate fraction in rate grids
pub const DELIVERED_COLUMN: &str = "delivered";

/// Delivered-rate cells are fractions; sweeps report percentages
pub const RATE_SCALE: f64 = 100.0;

/// Histogram bin count when the automatic bin-width heuristic fails
/// (degenerate all-equal data)
pub const FALLBACK_BINS: usize = 10;

/// nines() result for an empty sample set
pub const EMPTY_NINES: u32 = 5;
