//! Core types for fft-bench.
//!
//! This module contains the record schemas shared by the parsing, storage and
//! reporting layers.

pub mod env;
pub mod schema;

// Re-export key types for convenience
pub use env::EnvironmentInfo;
pub use schema::{BenchLine, BenchRecord, MetricRow};
