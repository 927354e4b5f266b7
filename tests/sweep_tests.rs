//! End-to-end checks of grid parsing and load-sweep aggregation.

use pretty_assertions::assert_eq;
use simsweep::parser::{CellValue, GridTable};
use simsweep::sweep::{
    build_latency_sweep, build_rate_sweep, LoadAxis, RateOptions, StatRow,
};
use simsweep::utils::config::LATENCY_FIELDS;
use simsweep::utils::error::SweepError;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_grid(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn latency_grid(base: f64) -> String {
    let mut s = String::from(
        ",Minimum,Mean,Median,90th%,99th%,99.9th%,99.99th%,99.999th%,Maximum\n",
    );
    s.push_str(&format!(
        "Packet,{},{},{},{},{},{},{},{},{}\n",
        base,
        base + 1.0,
        base + 2.0,
        base + 3.0,
        base + 4.0,
        base + 5.0,
        base + 6.0,
        base + 7.0,
        base + 8.0
    ));
    s
}

#[test]
fn test_grid_round_trip_preserves_types() {
    let dir = TempDir::new().unwrap();
    let path = write_grid(
        &dir,
        "mixed.csv",
        ",count,ratio,name\nrow0,3,0.25,alpha\nrow1,-7,3.5,beta\n",
    );
    let grid = GridTable::read(&path).unwrap();

    assert_eq!(grid.get("row0", "count"), Some(&CellValue::Int(3)));
    assert_eq!(grid.get("row0", "ratio"), Some(&CellValue::Float(0.25)));
    assert_eq!(
        grid.get("row0", "name"),
        Some(&CellValue::Str("alpha".to_string()))
    );
    assert_eq!(grid.get("row1", "count"), Some(&CellValue::Int(-7)));
    assert_eq!(grid.get("row1", "ratio"), Some(&CellValue::Float(3.5)));
    assert_eq!(
        grid.get("row1", "name"),
        Some(&CellValue::Str("beta".to_string()))
    );
}

#[test]
fn test_sweep_count_mismatch_always_fails() {
    let dir = TempDir::new().unwrap();
    let axis = LoadAxis::new(0.1, 0.9, 0.2).unwrap(); // 4 levels
    assert_eq!(axis.len(), 4);

    let grids: Vec<GridTable> = (0..3)
        .map(|i| {
            let path = write_grid(&dir, &format!("g{}.csv", i), &latency_grid(i as f64));
            GridTable::read(&path).unwrap()
        })
        .collect();

    let err = build_latency_sweep(axis, &grids, StatRow::Packet).unwrap_err();
    assert!(matches!(
        err,
        SweepError::CountMismatch {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn test_sweep_arrays_match_axis_order() {
    let dir = TempDir::new().unwrap();
    let axis = LoadAxis::new(0.25, 1.0, 0.25).unwrap(); // 0.25, 0.5, 0.75
    let grids: Vec<GridTable> = (0..3)
        .map(|i| {
            let path = write_grid(&dir, &format!("g{}.csv", i), &latency_grid(10.0 * i as f64));
            GridTable::read(&path).unwrap()
        })
        .collect();

    let sweep = build_latency_sweep(axis, &grids, StatRow::Packet).unwrap();

    assert_eq!(sweep.axis().values(), &[0.25, 0.5, 0.75]);
    for field in LATENCY_FIELDS {
        let series = sweep.field(field).unwrap();
        assert_eq!(series.len(), 3);
    }
    // Load-ascending order: grid i contributed to index i.
    assert_eq!(sweep.field("Minimum").unwrap(), &[0.0, 10.0, 20.0]);
    assert_eq!(sweep.field("Maximum").unwrap(), &[8.0, 18.0, 28.0]);
}

#[test]
fn test_rate_sweep_zero_window_is_domain_error() {
    let dir = TempDir::new().unwrap();
    let path = write_grid(
        &dir,
        "rate.csv",
        ",delivered\n0,0.0\n1,0.0\ntotal,0.0\n",
    );
    let grid = GridTable::read(&path).unwrap();
    let axis = LoadAxis::new(0.0, 0.5, 0.5).unwrap();

    let options = RateOptions { ignore_zeros: true };
    let err = build_rate_sweep(axis, &[grid], &options).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("no delivered values"), "message: {}", msg);
    assert!(msg.contains("rate.csv"), "message: {}", msg);
}

#[test]
fn test_rate_sweep_nan_counts_as_data_point() {
    let dir = TempDir::new().unwrap();
    let path = write_grid(
        &dir,
        "rate.csv",
        ",delivered\n0,nan\n1,0.0\ntotal,0.0\n",
    );
    let grid = GridTable::read(&path).unwrap();
    let axis = LoadAxis::new(0.0, 0.5, 0.5).unwrap();

    // NaN survives the zero filter, so the window is not empty.
    let options = RateOptions { ignore_zeros: true };
    let sweep = build_rate_sweep(axis, &[grid], &options).unwrap();
    assert!(sweep.field("Mean").unwrap()[0].is_nan());
}
