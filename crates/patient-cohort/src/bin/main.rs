//! Patient cohort command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use patient_cohort::cli::{age, logging, output, query, stats};
use std::path::PathBuf;

/// Patient cohort tool
#[derive(Parser)]
#[command(name = "cohort")]
#[command(author, version, about = "Patient cohort query and statistics", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort patients
    Query {
        /// Patients file (JSON array)
        #[arg(long)]
        patients: PathBuf,

        /// Search form values (JSON object)
        #[arg(long)]
        filter: Option<PathBuf>,

        /// Search form values (name=value), applied over --filter
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Sort key (e.g. lastName, age, registrationDate)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(short, long, default_value = "asc")]
        direction: String,
    },

    /// Compute dashboard statistics
    Stats {
        /// Patients file (JSON array)
        #[arg(long)]
        patients: PathBuf,

        /// Reference date (default: today)
        #[arg(long)]
        as_of: Option<String>,

        /// Registration period length in days
        #[arg(long)]
        period_days: Option<u32>,

        /// Number of ranked conditions and allergies
        #[arg(long)]
        top: Option<usize>,

        /// Restrict to patients matching these search form values (JSON object)
        #[arg(long)]
        filter: Option<PathBuf>,

        /// Search form values (name=value), applied over --filter
        #[arg(short, long = "param")]
        params: Vec<String>,
    },

    /// Whole-year age for a birth date
    Age {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,

        /// Reference date (default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Query {
            patients,
            filter,
            params,
            sort,
            direction,
        } => query::query(&query::QueryConfig {
            patients,
            filter,
            params,
            sort,
            direction,
            output_format: cli.format,
            output_file: cli.output,
        }),

        Commands::Stats {
            patients,
            as_of,
            period_days,
            top,
            filter,
            params,
        } => stats::stats(&stats::StatsConfig {
            patients,
            as_of,
            period_days,
            top,
            filter,
            params,
            output_format: cli.format,
            output_file: cli.output,
        }),

        Commands::Age { birth, as_of } => age::age(&age::AgeConfig {
            birth,
            as_of,
            output_format: cli.format,
            output_file: cli.output,
        }),
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
