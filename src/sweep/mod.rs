//! Load-sweep aggregation.
//!
//! A load sweep is a series of simulator runs at increasing offered-load
//! levels. Each run leaves one grid file; aggregation turns an ordered
//! sequence of grids into one array per metric field, indexed like the
//! load axis.

pub mod axis;
pub mod hops;
pub mod latency;
pub mod rate;

pub use axis::LoadAxis;
pub use hops::build_hops_sweep;
pub use latency::{build_latency_sweep, StatRow};
pub use rate::{build_rate_sweep, RateOptions};

/// One sweep's aggregated series: field name -> array indexed by load level
///
/// Field order matches the builder's field table so consumers can rely on
/// a stable legend order. Immutable once built.
#[derive(Debug, Clone)]
pub struct LoadSweepSeries {
    axis: LoadAxis,
    fields: Vec<(String, Vec<f64>)>,
}

impl LoadSweepSeries {
    pub(crate) fn new(axis: LoadAxis, fields: Vec<(String, Vec<f64>)>) -> Self {
        debug_assert!(fields.iter().all(|(_, v)| v.len() == axis.len()));
        Self { axis, fields }
    }

    /// The load axis this sweep was built against
    pub fn axis(&self) -> &LoadAxis {
        &self.axis
    }

    /// One field's array, `None` if the field was not aggregated
    pub fn field(&self, name: &str) -> Option<&[f64]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Aggregated field names, in builder order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}
