//! Markdown rendering for aggregated benchmark metrics.

use crate::report::table::ReportTable;

/// Metric cells carried through the aggregator.
///
/// Values stay as the strings read from the CSV; formatting is best-effort
/// and anything non-numeric passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct MetricCell {
    pub ns_per_op: String,
    pub mb_per_s: String,
    pub bytes_per_op: String,
    pub allocs_per_op: String,
}

/// Format an `ns/op` value: one decimal place below 1000, otherwise an
/// integer truncated toward zero.
pub fn format_ns_per_op(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(v) if v < 1000.0 => format!("{v:.1}"),
        Ok(v) => format!("{}", v as i64),
        Err(_) => raw.to_string(),
    }
}

/// Format an `MB/s` value with two decimal places.
pub fn format_mb_per_s(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(v) => format!("{v:.2}"),
        Err(_) => raw.to_string(),
    }
}

/// Render the grouped metrics as the BENCHMARKS.md document.
pub fn render_markdown(table: &ReportTable<MetricCell>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Benchmarks".to_string());
    lines.push(String::new());
    lines.push(
        "Command used: `FFT_BENCH_MAX=32768 GOAMD64=v3 go test -tags=asm -bench . -benchmem ./bench`"
            .to_string(),
    );
    lines.push(String::new());
    lines.push("Notes:".to_string());
    lines.push("- Results are from the latest local run.".to_string());
    lines.push("- `algo-fft` benchmarks include both complex128 and complex64.".to_string());
    lines.push("- `go-fftw` requires FFTW shared libraries.".to_string());
    lines.push("- `go-dsp-fft` allocates on every call (no reusable plan).".to_string());
    lines.push(String::new());

    for category in table.categories() {
        lines.push(format!("## {category} Benchmarks"));
        lines.push(String::new());

        let Some(libraries) = table.libraries(category) else {
            continue;
        };
        for (library, sizes) in libraries {
            lines.push(format!("### {library}"));
            lines.push(String::new());
            lines.push("|  Size |   ns/op |    MB/s |    B/op | allocs/op |".to_string());
            lines.push("| ----- | ------- | ------- | ------- | --------- |".to_string());

            for (size, cell) in sizes {
                let ns_op = format_ns_per_op(&cell.ns_per_op);
                let mb_s = format_mb_per_s(&cell.mb_per_s);
                lines.push(format!(
                    "| {size:>5} | {ns_op:>7} | {mb_s:>7} | {:>7} | {:>9} |",
                    cell.bytes_per_op, cell.allocs_per_op
                ));
            }

            lines.push(String::new());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ns: &str, mb: &str, b: &str, allocs: &str) -> MetricCell {
        MetricCell {
            ns_per_op: ns.to_string(),
            mb_per_s: mb.to_string(),
            bytes_per_op: b.to_string(),
            allocs_per_op: allocs.to_string(),
        }
    }

    #[test]
    fn test_format_ns_per_op_below_thousand() {
        assert_eq!(format_ns_per_op("950.2"), "950.2");
        assert_eq!(format_ns_per_op("0.004552"), "0.0");
    }

    #[test]
    fn test_format_ns_per_op_truncates_above_thousand() {
        assert_eq!(format_ns_per_op("15234.9"), "15234");
        assert_eq!(format_ns_per_op("1000"), "1000");
    }

    #[test]
    fn test_format_ns_per_op_passthrough() {
        assert_eq!(format_ns_per_op("n/a"), "n/a");
        assert_eq!(format_ns_per_op(""), "");
    }

    #[test]
    fn test_format_mb_per_s() {
        assert_eq!(format_mb_per_s("456.7"), "456.70");
        assert_eq!(format_mb_per_s("0.004552"), "0.00");
        assert_eq!(format_mb_per_s("bogus"), "bogus");
    }

    #[test]
    fn test_render_category_order() {
        let mut table = ReportTable::new();
        table.insert("IFFT", "gonum", 64, cell("1.0", "2.0", "0", "0"));
        table.insert("FFT", "gonum", 64, cell("1.0", "2.0", "0", "0"));

        let md = render_markdown(&table);
        let fft = md.find("## FFT Benchmarks").unwrap();
        let ifft = md.find("## IFFT Benchmarks").unwrap();
        assert!(fft < ifft);
    }

    #[test]
    fn test_render_row_widths() {
        let mut table = ReportTable::new();
        table.insert("FFT", "gonum", 4096, cell("123.4", "456.7", "128", "2"));

        let md = render_markdown(&table);
        assert!(md.contains("### gonum"));
        assert!(md.contains("|  4096 |   123.4 |  456.70 |     128 |         2 |"));
    }

    #[test]
    fn test_render_static_notes() {
        let table: ReportTable<MetricCell> = ReportTable::new();
        let md = render_markdown(&table);
        assert!(md.starts_with("# Benchmarks\n"));
        assert!(md.contains("Notes:"));
        assert!(md.contains("- Results are from the latest local run."));
    }
}
