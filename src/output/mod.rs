//! Output writers for computed series.

pub mod json;

pub use json::{read_series, write_series, SeriesDocument};
