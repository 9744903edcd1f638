pub mod core;
pub mod parse;
pub mod report;
pub mod storage;

pub mod csv_cmd;
pub mod report_cmd;
pub mod run_cmd;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("no usable rows in {}", .0.display())]
    EmptyInput(PathBuf),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;

pub use crate::core::env::EnvironmentInfo;
pub use crate::core::schema::{BenchLine, BenchRecord, MetricRow};
pub use crate::report::table::ReportTable;
pub use crate::storage::csv::{CSV_HEADERS, CsvSink};
