//! Statistical summaries of raw sample sets.

pub mod distribution;

pub use distribution::{DistributionStats, DistributionSummary};
