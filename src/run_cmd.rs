//! Run the benchmark suite and render a baseline-comparison report.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use shlex::Shlex;
use tracing::{info, warn};

use crate::core::env::EnvironmentInfo;
use crate::core::schema::BenchRecord;
use crate::report::compare::render_comparison;
use crate::report::table::ReportTable;
use crate::{BenchError, BenchResult};

/// Machine-readable summary of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub timestamp: String,
    pub command: String,
    pub max_size: u64,
    pub baseline: String,
    pub goamd64: String,
    pub tags: String,
    pub results_count: usize,
    pub env: EnvironmentInfo,
    pub records: Vec<BenchRecord>,
}

fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".to_string())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> BenchResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| BenchError::Message(e.to_string()))?;
        }
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| BenchError::Message(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| BenchError::Message(e.to_string()))
}

/// Build the benchmark command from a shlex template, or the default
/// `go test` invocation. Returns the command and its display string.
fn build_command(template: Option<&str>, tags: &str) -> BenchResult<(Command, String)> {
    let parts: Vec<String> = match template {
        Some(t) => {
            let parts: Vec<String> = Shlex::new(t).collect();
            if parts.is_empty() {
                return Err(BenchError::Message("empty command template".into()));
            }
            parts
        }
        None => vec![
            "go".to_string(),
            "test".to_string(),
            "-bench".to_string(),
            ".".to_string(),
            "-benchmem".to_string(),
            "-run".to_string(),
            "^$".to_string(),
            format!("-tags={tags}"),
            "./bench".to_string(),
        ],
    };

    let display = parts.join(" ");
    let mut cmd = Command::new(&parts[0]);
    for p in &parts[1..] {
        cmd.arg(p);
    }
    Ok((cmd, display))
}

pub fn run(
    max_size: u64,
    baseline: String,
    goamd64: String,
    tags: String,
    template: Option<String>,
    output: PathBuf,
    show: bool,
    json: Option<PathBuf>,
) -> BenchResult<()> {
    let (mut cmd, display) = build_command(template.as_deref(), &tags)?;
    let command_line = format!("FFT_BENCH_MAX={max_size} GOAMD64={goamd64} {display}");
    info!("running benchmarks (max size: {max_size})");
    info!("command: {command_line}");

    cmd.env("FFT_BENCH_MAX", max_size.to_string())
        .env("GOAMD64", &goamd64)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .map_err(|e| BenchError::Message(format!("failed to start benchmark command: {e}")))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| BenchError::Message("failed to capture benchmark output".into()))?;

    let mut table: ReportTable<BenchRecord> = ReportTable::new();
    let mut records: Vec<BenchRecord> = Vec::new();

    let reader = BufReader::new(stdout);
    for line_result in reader.lines() {
        let line = line_result
            .map_err(|e| BenchError::Message(format!("failed to read benchmark output: {e}")))?;

        if line.starts_with("Benchmark") {
            info!("{line}");
        }

        // Not all lines are benchmark results; ignore the rest
        let Some(parsed) = crate::parse::parse_line(&line) else {
            continue;
        };
        let Some(record) = parsed.to_record() else {
            continue;
        };
        records.push(record.clone());
        table.insert(record.category.clone(), record.library.clone(), record.size, record);
    }

    let status = child
        .wait()
        .map_err(|e| BenchError::Message(format!("failed to wait for benchmark command: {e}")))?;
    if !status.success() {
        return Err(BenchError::Message(format!(
            "benchmark command failed: status={status}"
        )));
    }

    info!("parsed {} results", table.len());
    if table.is_empty() {
        warn!("no benchmark results parsed");
    }

    let markdown = render_comparison(&table, &baseline, &command_line);

    if let Some(path) = &json {
        let report = RunReport {
            timestamp: now_string(),
            command: command_line,
            max_size,
            baseline: baseline.clone(),
            goamd64,
            tags,
            results_count: records.len(),
            env: EnvironmentInfo::detect(),
            records,
        };
        write_json(path, &report)?;
    }

    if show {
        println!("{markdown}");
    } else {
        std::fs::write(&output, &markdown).map_err(|e| {
            BenchError::Message(format!("failed to write {}: {e}", output.display()))
        })?;
        info!("results written to {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_default() {
        let (_, display) = build_command(None, "asm").unwrap();
        assert_eq!(display, "go test -bench . -benchmem -run ^$ -tags=asm ./bench");
    }

    #[test]
    fn test_build_command_template() {
        let (_, display) = build_command(Some("cat fixtures/bench.txt"), "asm").unwrap();
        assert_eq!(display, "cat fixtures/bench.txt");
    }

    #[test]
    fn test_build_command_template_quoting() {
        let (cmd, _) = build_command(Some("sh -c 'echo hi'"), "asm").unwrap();
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-c", "echo hi"]);
    }

    #[test]
    fn test_build_command_empty_template() {
        let result = build_command(Some("   "), "asm");
        assert!(result.is_err());
    }
}
