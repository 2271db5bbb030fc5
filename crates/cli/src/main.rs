use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{AnalysisError, ErrorKind};
use pipeline::{run_analysis, AnalysisConfig, USAGE};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Ranks movies by total rating within gender or age groups of the MovieLens 1M dataset
#[derive(Parser)]
#[command(name = "analyze-movies")]
#[command(override_usage = "analyze-movies [OPTIONS] (gender|agegroup) (top|bottom) <number>")]
struct Cli {
    /// How to group users: gender or agegroup
    grouping: String,

    /// Which end of the ranking to show: top or bottom
    order: String,

    /// Movies to show per group (1-100)
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Directory holding movies.dat, ratings.dat and users.dat
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("analyze-movies: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => report_error(&err),
    }
}

/// Logs go to stderr so stdout only ever carries the report
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn run(cli: &Cli) -> Result<String, AnalysisError> {
    let config = AnalysisConfig::from_args(&cli.grouping, &cli.order, &cli.number, &cli.data_dir)?;

    let start = Instant::now();
    let report = run_analysis(&config)?;
    tracing::info!("Analysis finished in {:?}", start.elapsed());
    Ok(report)
}

/// Explain a failed run and pick the exit code
fn report_error(err: &AnalysisError) -> ExitCode {
    match err.kind() {
        ErrorKind::Input => {
            eprintln!("{} {}", "Received invalid input:".red().bold(), err);
            eprintln!("{}", USAGE);
            ExitCode::from(2)
        }
        ErrorKind::FileAccess | ErrorKind::FileFormat => {
            eprintln!("{}", "Encountered an error trying to read a data file".red().bold());
            eprintln!(
                "Please ensure data files are in the data directory and are named like movies.dat"
            );
            eprintln!("Error details: {}", err);
            ExitCode::FAILURE
        }
    }
}
