//! Line grammar for Go benchmark output.
//!
//! A result line looks like:
//!
//! ```text
//! BenchmarkFFT/gonum/4096-8   45123   26543 ns/op   2468.21 MB/s   0 B/op   0 allocs/op
//! ```
//!
//! Lines that do not match the grammar are not errors; callers skip them.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::schema::BenchLine;

static BENCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Benchmark\S+)\s+(\d+)\s+([0-9.]+)\s+ns/op\s+([0-9.]+)\s+MB/s\s+(\d+)\s+B/op\s+(\d+)\s+allocs/op",
    )
    .expect("benchmark line regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BenchmarkFFT/([^/]+)/([0-9]+)-\d+$").expect("name regex"));

static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Benchmark(FFT32|IFFT32|FFT|IFFT)/([^/]+)/(\d+)-\d+$").expect("category regex")
});

/// Parse one line of benchmark output.
///
/// Returns `None` for lines that do not start with `Benchmark` or do not
/// match the full metric grammar. Trailing content after `allocs/op` is
/// ignored. `library` and `size` are filled in when the name follows the
/// `BenchmarkFFT/<library>/<size>-<procs>` convention and left empty
/// otherwise.
pub fn parse_line(line: &str) -> Option<BenchLine> {
    let line = line.trim();
    if !line.starts_with("Benchmark") {
        return None;
    }
    let caps = BENCH_RE.captures(line)?;

    let name = caps[1].to_string();
    let (library, size) = split_name(&name).unwrap_or_default();

    Some(BenchLine {
        name,
        library,
        size,
        iterations: caps[2].to_string(),
        ns_per_op: caps[3].to_string(),
        mb_per_s: caps[4].to_string(),
        bytes_per_op: caps[5].to_string(),
        allocs_per_op: caps[6].to_string(),
    })
}

/// Decompose a `BenchmarkFFT/<library>/<size>-<procs>` name into
/// (library, size). Returns `None` for any other shape.
pub fn split_name(name: &str) -> Option<(String, String)> {
    let caps = NAME_RE.captures(name)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Decompose a categorized benchmark name into (category, library, size).
///
/// Recognized categories are `FFT`, `IFFT`, `FFT32` and `IFFT32`.
pub fn categorize(name: &str) -> Option<(String, String, u64)> {
    let caps = CATEGORY_RE.captures(name)?;
    let size = caps[3].parse().ok()?;
    Some((caps[1].to_string(), caps[2].to_string(), size))
}
