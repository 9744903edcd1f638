//! Aggregate a benchmark CSV file into a grouped Markdown report.

use std::path::PathBuf;

use tracing::info;

use crate::core::schema::MetricRow;
use crate::report::markdown::{MetricCell, render_markdown};
use crate::report::table::ReportTable;
use crate::storage::csv::read_metric_rows;
use crate::{BenchError, BenchResult};

/// Build the report table from CSV rows.
///
/// Rows with an empty `type`, `library` or `size`, or a `size` that is not
/// an unsigned integer, are dropped. A duplicated (type, library, size)
/// keeps the last row.
pub fn build_table(rows: Vec<MetricRow>) -> ReportTable<MetricCell> {
    let mut table = ReportTable::new();
    for row in rows {
        if row.bench_type.is_empty() || row.library.is_empty() || row.size.is_empty() {
            continue;
        }
        let Ok(size) = row.size.parse::<u64>() else {
            continue;
        };
        let cell = MetricCell {
            ns_per_op: row.ns_per_op,
            mb_per_s: row.mb_per_s,
            bytes_per_op: row.bytes_per_op,
            allocs_per_op: row.allocs_per_op,
        };
        table.insert(row.bench_type, row.library, size, cell);
    }
    table
}

pub fn run(input: PathBuf, output: PathBuf, show: bool) -> BenchResult<()> {
    if !input.exists() {
        return Err(BenchError::MissingInput(input));
    }

    let rows = read_metric_rows(&input)?;
    let table = build_table(rows);
    if table.is_empty() {
        return Err(BenchError::EmptyInput(input));
    }

    let markdown = render_markdown(&table);

    if show {
        println!("{markdown}");
    } else {
        std::fs::write(&output, &markdown).map_err(|e| {
            BenchError::Message(format!("failed to write {}: {e}", output.display()))
        })?;
        info!("wrote {}", output.display());
    }

    Ok(())
}
