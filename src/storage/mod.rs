//! Storage layer for benchmark rows.
//!
//! CSV is the interchange format between the pipeline stages: the parser
//! writes rows here and the aggregator reads them back.

pub mod csv;

// Re-export key types
pub use csv::{CSV_HEADERS, CsvSink, read_metric_rows};
