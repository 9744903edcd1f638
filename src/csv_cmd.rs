//! Convert raw benchmark output into CSV rows.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::info;

use crate::storage::csv::CsvSink;
use crate::{BenchError, BenchResult};

/// Stream benchmark output from `input` to `output` as CSV.
///
/// Writes the header row first, then one row per line matching the
/// benchmark grammar, in input order. Non-matching lines are skipped.
/// Returns the number of data rows written.
pub fn stream<R: BufRead, W: Write>(input: R, output: W) -> BenchResult<usize> {
    let mut sink = CsvSink::new(output)?;
    let mut rows = 0usize;

    for line_result in input.lines() {
        let line = line_result
            .map_err(|e| BenchError::Message(format!("failed to read input: {e}")))?;
        if let Some(parsed) = crate::parse::parse_line(&line) {
            sink.write(&parsed)?;
            rows += 1;
        }
    }

    sink.flush()?;
    Ok(rows)
}

pub fn run(input: Option<PathBuf>, output: Option<PathBuf>) -> BenchResult<()> {
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| BenchError::Message(format!("failed to open {}: {e}", path.display())))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BenchError::Message(format!("failed to create {}: {e}", path.display()))
            })?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let rows = stream(reader, writer)?;
    info!("wrote {rows} rows");
    Ok(())
}
