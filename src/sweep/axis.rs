//! Load axis for sweep aggregation.
//!
//! A sweep covers a half-open load range `[start, stop)` in `step`
//! increments, one grid file per level, supplied in load-ascending order.

use crate::utils::error::SweepError;

/// The load levels of one sweep
#[derive(Debug, Clone, PartialEq)]
pub struct LoadAxis {
    start: f64,
    stop: f64,
    step: f64,
    values: Vec<f64>,
}

impl LoadAxis {
    /// Build the axis `start, start + step, ... < stop`
    ///
    /// # Errors
    /// * `SweepError::StartAfterStop` - `start > stop`
    /// * `SweepError::NonPositiveStep` - `step <= 0`
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, SweepError> {
        if start > stop {
            return Err(SweepError::StartAfterStop { start, stop });
        }
        if step <= 0.0 {
            return Err(SweepError::NonPositiveStep { step });
        }

        let count = ((stop - start) / step).ceil().max(0.0) as usize;
        let values = (0..count).map(|i| start + step * i as f64).collect();

        Ok(Self {
            start,
            stop,
            step,
            values,
        })
    }

    /// Load levels, ascending
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Enforce the one-grid-per-level contract
    pub fn check_grid_count(&self, grids: usize) -> Result<(), SweepError> {
        if grids != self.len() {
            return Err(SweepError::CountMismatch {
                expected: self.len(),
                actual: grids,
            });
        }
        Ok(())
    }

    /// Require another axis to match exactly (length and values)
    ///
    /// Comparison plots overlay several sweeps on one load axis; a
    /// mismatch would silently misalign points.
    pub fn ensure_matches(&self, other: &LoadAxis, left: &str, right: &str) -> Result<(), SweepError> {
        if self.values != other.values {
            return Err(SweepError::Inconsistent {
                left: left.to_string(),
                right: right.to_string(),
                what: format!(
                    "load axes ({} levels vs {} levels)",
                    self.len(),
                    other.len()
                ),
            });
        }
        Ok(())
    }
}
