//! Baseline-comparison Markdown rendering for the benchmark runner.

use std::collections::BTreeMap;

use crate::core::schema::BenchRecord;
use crate::report::table::ReportTable;

/// Preferred library display order for comparison sections. Libraries not
/// listed here come afterwards, alphabetically.
const LIBRARY_ORDER: &[&str] = &["algo-fft", "go-dsp-fft", "gonum", "takatoh"];

/// Render the runner's comparison document: per category, a baseline table
/// followed by one comparison table per library with speedups against the
/// baseline.
pub fn render_comparison(table: &ReportTable<BenchRecord>, baseline: &str, command: &str) -> String {
    let mut out = String::new();

    out.push_str("# Benchmarks\n\n");
    out.push_str(&format!("Command used: `{command}`\n\n"));
    out.push_str("Notes:\n\n");
    out.push_str("- Results are from the latest local run.\n");
    out.push_str("- `algo-fft` benchmarks include both complex128 and complex64.\n");
    out.push_str("- `go-fftw` (FFTW3) is used as the **baseline** for comparison.\n");
    out.push_str("- `go-fftw` requires FFTW shared libraries.\n");
    out.push_str("- `go-dsp-fft` allocates on every call (no reusable plan).\n");
    out.push_str(
        "- **Speedup** shows performance relative to go-fftw baseline (higher is better).\n\n",
    );

    for category in table.categories() {
        out.push_str(&format!("## {category} Benchmarks\n\n"));

        let Some(libraries) = table.libraries(category) else {
            continue;
        };
        let Some(baseline_data) = libraries.get(baseline) else {
            out.push_str(&format!(
                "### Error: Baseline library '{baseline}' not found\n\n"
            ));
            continue;
        };

        write_baseline_table(&mut out, baseline, baseline_data);

        for library in ordered_libraries(libraries, baseline) {
            write_comparison_table(
                &mut out,
                category,
                library,
                &libraries[library],
                baseline_data,
            );
        }
    }

    out
}

fn ordered_libraries<'a>(
    libraries: &'a BTreeMap<String, BTreeMap<u64, BenchRecord>>,
    baseline: &str,
) -> Vec<&'a str> {
    let mut libs: Vec<&'a str> = Vec::new();
    for preferred in LIBRARY_ORDER {
        if *preferred != baseline && libraries.contains_key(*preferred) {
            libs.push(*preferred);
        }
    }
    // BTreeMap keys keep the remainder alphabetical
    for name in libraries.keys() {
        if name.as_str() != baseline && !LIBRARY_ORDER.contains(&name.as_str()) {
            libs.push(name.as_str());
        }
    }
    libs
}

fn write_baseline_table(out: &mut String, baseline: &str, data: &BTreeMap<u64, BenchRecord>) {
    let display_name = if baseline == "go-fftw" {
        "go-fftw (FFTW3)"
    } else {
        baseline
    };
    out.push_str(&format!("### Baseline: {display_name}\n\n"));
    out.push_str("| Size  | ns/op  | MB/s     | B/op | allocs/op |\n");
    out.push_str("| ----- | ------ | -------- | ---- | --------- |\n");

    for (size, record) in data {
        out.push_str(&format!(
            "| {:<5} | {:<6} | {:<8} | {:<4} | {:<9} |\n",
            size,
            format_adaptive(record.ns_per_op),
            format_adaptive(record.mb_per_s),
            record.bytes_per_op,
            record.allocs_per_op,
        ));
    }
    out.push('\n');
}

fn write_comparison_table(
    out: &mut String,
    category: &str,
    library: &str,
    data: &BTreeMap<u64, BenchRecord>,
    baseline_data: &BTreeMap<u64, BenchRecord>,
) {
    let section_suffix = if category.starts_with("IFFT") && library != "algo-fft" {
        format!(" ({category})")
    } else {
        String::new()
    };

    out.push_str(&format!("### {library}{section_suffix}\n\n"));
    out.push_str("| Size  | ns/op  | Speedup vs baseline | MB/s     | B/op   | allocs/op |\n");
    out.push_str("| ----- | ------ | ------------------- | -------- | ------ | --------- |\n");

    for (size, record) in data {
        let speedup = match baseline_data.get(size) {
            Some(base) if record.ns_per_op > 0.0 => {
                let ratio = base.ns_per_op / record.ns_per_op;
                if ratio >= 1.0 {
                    format!("**{ratio:.2}x**")
                } else {
                    format!("{ratio:.2}x")
                }
            }
            _ => "N/A".to_string(),
        };

        out.push_str(&format!(
            "| {:<5} | {:<6} | {:<19} | {:<8} | {:<6} | {:<9} |\n",
            size,
            format_adaptive(record.ns_per_op),
            speedup,
            format_adaptive(record.mb_per_s),
            record.bytes_per_op,
            record.allocs_per_op,
        ));
    }
    out.push('\n');
}

/// Adaptive precision: integers from 1000 up, one or two decimals in the
/// middle ranges, up to four trimmed decimals below 1.
fn format_adaptive(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}", value as i64)
    } else if value >= 100.0 {
        if value == value.trunc() {
            format!("{}", value as i64)
        } else {
            format!("{value:.1}")
        }
    } else if value >= 10.0 {
        if value == value.trunc() {
            format!("{}", value as i64)
        } else {
            format!("{value:.2}")
        }
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, library: &str, size: u64, ns: f64) -> BenchRecord {
        BenchRecord {
            category: category.to_string(),
            library: library.to_string(),
            size,
            iterations: 1000,
            ns_per_op: ns,
            mb_per_s: 100.0,
            bytes_per_op: 0,
            allocs_per_op: 0,
        }
    }

    fn insert(table: &mut ReportTable<BenchRecord>, r: BenchRecord) {
        table.insert(r.category.clone(), r.library.clone(), r.size, r);
    }

    #[test]
    fn test_format_adaptive_boundaries() {
        assert_eq!(format_adaptive(15234.9), "15234");
        assert_eq!(format_adaptive(1000.0), "1000");
        assert_eq!(format_adaptive(950.25), "950.2");
        assert_eq!(format_adaptive(100.0), "100");
        assert_eq!(format_adaptive(45.5), "45.50");
        assert_eq!(format_adaptive(10.0), "10");
        assert_eq!(format_adaptive(2.5), "2.50");
        assert_eq!(format_adaptive(0.3125), "0.3125");
        assert_eq!(format_adaptive(0.5), "0.5");
        assert_eq!(format_adaptive(0.0), "0");
    }

    #[test]
    fn test_baseline_table_and_speedup() {
        let mut table = ReportTable::new();
        insert(&mut table, record("FFT", "go-fftw", 64, 100.0));
        insert(&mut table, record("FFT", "gonum", 64, 50.0));
        insert(&mut table, record("FFT", "takatoh", 64, 200.0));

        let md = render_comparison(&table, "go-fftw", "go test -bench .");

        assert!(md.contains("### Baseline: go-fftw (FFTW3)"));
        // gonum is twice as fast as the baseline
        assert!(md.contains("**2.00x**"));
        // takatoh is half as fast; no bold
        assert!(md.contains("| 0.50x"));
        assert!(!md.contains("**0.50x**"));
    }

    #[test]
    fn test_speedup_na_without_baseline_size() {
        let mut table = ReportTable::new();
        insert(&mut table, record("FFT", "go-fftw", 64, 100.0));
        insert(&mut table, record("FFT", "gonum", 128, 50.0));

        let md = render_comparison(&table, "go-fftw", "cmd");
        assert!(md.contains("N/A"));
    }

    #[test]
    fn test_missing_baseline_library() {
        let mut table = ReportTable::new();
        insert(&mut table, record("FFT", "gonum", 64, 50.0));

        let md = render_comparison(&table, "go-fftw", "cmd");
        assert!(md.contains("### Error: Baseline library 'go-fftw' not found"));
        assert!(!md.contains("### gonum"));
    }

    #[test]
    fn test_library_preference_order() {
        let mut table = ReportTable::new();
        insert(&mut table, record("FFT", "go-fftw", 64, 100.0));
        insert(&mut table, record("FFT", "aardvark", 64, 90.0));
        insert(&mut table, record("FFT", "gonum", 64, 80.0));
        insert(&mut table, record("FFT", "algo-fft", 64, 70.0));

        let md = render_comparison(&table, "go-fftw", "cmd");
        let algo = md.find("### algo-fft").unwrap();
        let gonum = md.find("### gonum").unwrap();
        let aardvark = md.find("### aardvark").unwrap();
        assert!(algo < gonum);
        assert!(gonum < aardvark);
    }

    #[test]
    fn test_ifft_heading_suffix() {
        let mut table = ReportTable::new();
        insert(&mut table, record("IFFT", "go-fftw", 64, 100.0));
        insert(&mut table, record("IFFT", "gonum", 64, 80.0));
        insert(&mut table, record("IFFT", "algo-fft", 64, 70.0));

        let md = render_comparison(&table, "go-fftw", "cmd");
        assert!(md.contains("### gonum (IFFT)"));
        assert!(md.contains("### algo-fft\n"));
    }
}
