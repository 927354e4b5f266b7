//! Shared utilities: error taxonomy and configuration constants.

pub mod config;
pub mod error;
