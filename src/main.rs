#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use fft_bench::{csv_cmd, report_cmd, run_cmd};

#[derive(Parser, Debug)]
#[command(name = "fft-bench")]
#[command(about = "Benchmark report tooling for FFT library comparisons", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set FFT_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert raw benchmark output into CSV rows
    Csv {
        /// Read benchmark output from this file instead of stdin
        #[arg(long)]
        input: Option<std::path::PathBuf>,
        /// Write CSV rows to this file instead of stdout
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Aggregate a benchmark CSV file into a grouped Markdown report
    Report {
        /// Input CSV file
        #[arg(long, default_value = "bench.csv")]
        input: std::path::PathBuf,
        /// Output Markdown file
        #[arg(long, default_value = "BENCHMARKS.md")]
        output: std::path::PathBuf,
        /// Print to stdout instead of writing to file
        #[arg(long)]
        show: bool,
    },

    /// Run the benchmark suite and write a comparison report
    Run {
        /// Maximum FFT size to benchmark
        #[arg(long, default_value_t = 32768)]
        max_size: u64,
        /// Baseline library for comparison
        #[arg(long, default_value = "go-fftw")]
        baseline: String,
        /// GOAMD64 version
        #[arg(long, default_value = "v3")]
        goamd64: String,
        /// Go build tags
        #[arg(long, default_value = "asm")]
        tags: String,
        /// Custom benchmark command (overrides the go test invocation)
        #[arg(long)]
        template: Option<String>,
        /// Output file
        #[arg(long, default_value = "BENCHMARKS.md")]
        output: std::path::PathBuf,
        /// Print to stdout instead of writing to file
        #[arg(long)]
        show: bool,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("FFT_BENCH_LOG").unwrap_or_else(|_| {
        if verbose { "fft_bench=debug".to_string() } else { "fft_bench=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Csv { input, output } => csv_cmd::run(input, output),
        Commands::Report { input, output, show } => report_cmd::run(input, output, show),
        Commands::Run { max_size, baseline, goamd64, tags, template, output, show, json } => {
            run_cmd::run(max_size, baseline, goamd64, tags, template, output, show, json)
        }
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
