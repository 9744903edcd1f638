//! Record schemas for benchmark results.

use serde::{Deserialize, Serialize};

/// One benchmark result line, field by field, as captured from the input.
///
/// Every field keeps the exact text matched from the line so that writing the
/// record back out (e.g. as CSV) preserves the values byte for byte.
/// `library` and `size` are empty when the benchmark name does not follow the
/// `BenchmarkFFT/<library>/<size>-<procs>` convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchLine {
    pub name: String,
    pub library: String,
    pub size: String,
    pub iterations: String,
    pub ns_per_op: String,
    pub mb_per_s: String,
    pub bytes_per_op: String,
    pub allocs_per_op: String,
}

impl BenchLine {
    /// Convert to a typed [`BenchRecord`].
    ///
    /// Returns `None` unless the benchmark name carries a known category
    /// (`FFT`, `IFFT`, `FFT32`, `IFFT32`) and every metric field parses as a
    /// number.
    pub fn to_record(&self) -> Option<BenchRecord> {
        let (category, library, size) = crate::parse::categorize(&self.name)?;
        Some(BenchRecord {
            category,
            library,
            size,
            iterations: self.iterations.parse().ok()?,
            ns_per_op: self.ns_per_op.parse().ok()?,
            mb_per_s: self.mb_per_s.parse().ok()?,
            bytes_per_op: self.bytes_per_op.parse().ok()?,
            allocs_per_op: self.allocs_per_op.parse().ok()?,
        })
    }
}

/// Typed benchmark result used by the runner and its JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchRecord {
    /// Benchmark category (`FFT`, `IFFT`, `FFT32`, `IFFT32`)
    pub category: String,

    /// Library under benchmark
    pub library: String,

    /// Transform size
    pub size: u64,

    pub iterations: u64,
    pub ns_per_op: f64,
    pub mb_per_s: f64,
    pub bytes_per_op: u64,
    pub allocs_per_op: u64,
}

/// One row of the aggregator's input CSV.
///
/// Columns are optional; anything missing deserializes to the empty string
/// and is filtered out later where the aggregator requires a value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "type", default)]
    pub bench_type: String,
    #[serde(default)]
    pub library: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub ns_per_op: String,
    #[serde(default)]
    pub mb_per_s: String,
    #[serde(default)]
    pub bytes_per_op: String,
    #[serde(default)]
    pub allocs_per_op: String,
}
