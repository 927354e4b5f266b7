//! Simsweep
//!
//! Statistical aggregation of network-simulator latency and throughput
//! logs: percentile distributions, histogram PDFs, empirical CDFs, and
//! multi-file load-sweep aggregation.
//!
//! This crate provides the core implementation for the `simsweep` CLI
//! tool. The computed series are written as JSON documents; rendering is
//! left to an external collaborator.

pub mod commands;
pub mod output;
pub mod parser;
pub mod plot;
pub mod stats;
pub mod sweep;
pub mod utils;
