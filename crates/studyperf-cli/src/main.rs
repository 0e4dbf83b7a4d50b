//! studyperf - student performance statistics and regression
//!
//! Usage:
//!   studyperf stats students.csv                      # Per-column summary statistics
//!   studyperf histogram students.csv -f sleep_hours   # Text histogram of one column
//!   studyperf train students.csv                      # Fit the three legacy models
//!   studyperf train students.csv -m h=0,1 --seed 7    # Fit a custom feature subset
//!   studyperf train students.csv --config exp.json    # Load the experiment from JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use studyperf::data::Feature;
use studyperf::stats::DEFAULT_HISTOGRAM_BINS;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod experiment;
mod ingest;
mod output;

use commands::{histogram, stats, train, FilterArgs};
use experiment::ModelConfig;

/// studyperf - Student Performance Analysis Tool
///
/// Summarize study-habit records and fit least-squares models that predict
/// the performance index.
#[derive(Parser)]
#[command(name = "studyperf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary statistics for every continuous column
    Stats {
        /// Path to CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Text histogram of one or every continuous column
    Histogram {
        /// Path to CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Feature name or id (default: every continuous column)
        #[arg(short, long)]
        feature: Option<Feature>,

        /// Number of equal-width bins
        #[arg(short, long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
        bins: usize,

        /// Width of the longest bar in characters
        #[arg(long, default_value_t = 40)]
        width: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Fit and evaluate regression models on a seeded split
    Train {
        /// Path to CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Experiment configuration (JSON)
        #[arg(long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Fraction of records used for training [default: 0.8]
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Shuffle seed [default: 42]
        #[arg(short, long)]
        seed: Option<u64>,

        /// Model variant as NAME=feature,feature,... (repeatable)
        #[arg(short, long = "model", value_name = "NAME=FEATURES")]
        models: Vec<ModelConfig>,

        /// Min-max scale predictors, fitted on the training set
        #[arg(long)]
        normalize: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("studyperf=debug")
    } else if quiet {
        EnvFilter::new("studyperf=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "studyperf=info".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Stats { file, filters } => stats::run(&file, filters, cli.json),

        Commands::Histogram {
            file,
            feature,
            bins,
            width,
            filters,
        } => histogram::run(&file, feature, bins, width, filters, cli.json),

        Commands::Train {
            file,
            config,
            ratio,
            seed,
            models,
            normalize,
            filters,
        } => train::run(
            &file,
            config.as_deref(),
            train::TrainOverrides {
                ratio,
                seed,
                models,
                drop_incomplete: filters.drop_incomplete,
                drop_zero_response: filters.drop_zero_response,
                normalize,
            },
            cli.json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
