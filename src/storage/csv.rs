//! CSV input and output for benchmark rows.

use std::io::Write;
use std::path::Path;

use crate::BenchError;
use crate::core::schema::{BenchLine, MetricRow};

/// CSV column headers in deterministic order.
pub const CSV_HEADERS: &[&str] = &[
    "benchmark",
    "library",
    "size",
    "iterations",
    "ns_per_op",
    "mb_per_s",
    "bytes_per_op",
    "allocs_per_op",
];

/// Streaming CSV writer for parsed benchmark lines.
///
/// Writes the header row on construction and one data row per
/// [`BenchLine`], so rows reach the underlying writer in input order
/// without buffering the whole run.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Create a sink around `writer` and emit the header row.
    ///
    /// # Errors
    /// Returns an error if the header cannot be written.
    pub fn new(writer: W) -> Result<Self, BenchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(CSV_HEADERS)
            .map_err(|e| BenchError::Message(format!("failed to write CSV headers: {e}")))?;
        Ok(CsvSink { writer: csv_writer })
    }

    /// Append one data row.
    ///
    /// # Errors
    /// Returns an error if CSV writing fails.
    pub fn write(&mut self, line: &BenchLine) -> Result<(), BenchError> {
        self.writer
            .write_record([
                line.name.as_str(),
                line.library.as_str(),
                line.size.as_str(),
                line.iterations.as_str(),
                line.ns_per_op.as_str(),
                line.mb_per_s.as_str(),
                line.bytes_per_op.as_str(),
                line.allocs_per_op.as_str(),
            ])
            .map_err(|e| BenchError::Message(format!("failed to write CSV row: {e}")))
    }

    /// Flush buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<(), BenchError> {
        self.writer
            .flush()
            .map_err(|e| BenchError::Message(format!("failed to flush CSV writer: {e}")))
    }
}

/// Read aggregator input rows from a CSV file with a header row.
///
/// Columns beyond the known set are ignored; known columns that are absent
/// deserialize to empty strings. Row-level filtering is left to the caller.
///
/// # Errors
/// Returns an error if the file cannot be opened or a row is not valid CSV.
pub fn read_metric_rows(path: &Path) -> Result<Vec<MetricRow>, BenchError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| BenchError::Message(format!("failed to open {}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: MetricRow = result
            .map_err(|e| BenchError::Message(format!("failed to read CSV row: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_line(name: &str) -> BenchLine {
        BenchLine {
            name: name.to_string(),
            library: "gonum".to_string(),
            size: "4096".to_string(),
            iterations: "1000".to_string(),
            ns_per_op: "123.4".to_string(),
            mb_per_s: "456.7".to_string(),
            bytes_per_op: "128".to_string(),
            allocs_per_op: "2".to_string(),
        }
    }

    #[test]
    fn test_header_row_first() {
        let mut buffer = Vec::new();
        let mut sink = CsvSink::new(&mut buffer).unwrap();
        sink.flush().unwrap();
        drop(sink);

        let csv_str = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv_str.trim_end(),
            "benchmark,library,size,iterations,ns_per_op,mb_per_s,bytes_per_op,allocs_per_op"
        );
    }

    #[test]
    fn test_rows_verbatim() {
        let mut buffer = Vec::new();
        let mut sink = CsvSink::new(&mut buffer).unwrap();
        sink.write(&make_test_line("BenchmarkFFT/gonum/4096-8")).unwrap();
        sink.flush().unwrap();
        drop(sink);

        let csv_str = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "BenchmarkFFT/gonum/4096-8,gonum,4096,1000,123.4,456.7,128,2"
        );
    }

    #[test]
    fn test_read_metric_rows_defaults_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");
        std::fs::write(&path, "type,library,size,ns_per_op\nFFT,gonum,64,123.4\n").unwrap();

        let rows = read_metric_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bench_type, "FFT");
        assert_eq!(rows[0].library, "gonum");
        assert_eq!(rows[0].size, "64");
        assert_eq!(rows[0].ns_per_op, "123.4");
        assert_eq!(rows[0].mb_per_s, "");
        assert_eq!(rows[0].allocs_per_op, "");
    }

    #[test]
    fn test_read_metric_rows_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");
        std::fs::write(
            &path,
            "benchmark,type,library,size,iterations,ns_per_op,mb_per_s,bytes_per_op,allocs_per_op\n\
             BenchmarkFFT/gonum/64-8,FFT,gonum,64,1000,123.4,456.7,0,0\n",
        )
        .unwrap();

        let rows = read_metric_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bench_type, "FFT");
        assert_eq!(rows[0].bytes_per_op, "0");
    }
}
