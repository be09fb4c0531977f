mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wellstat",
    version,
    about = "Production rates and daily charts for oil and gas wells"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive oil, gas and BOE daily rates from a baseline forecast
    Rates {
        /// Path to baseline JSON file
        baseline_file: PathBuf,

        /// Date(s) to derive rates for (default: every baseline period)
        #[arg(short, long = "date", value_name = "DATE")]
        dates: Vec<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", env = "WELLSTAT_OUTPUT")]
        output: String,

        /// Show how each rate was derived
        #[arg(long)]
        verbose: bool,
    },
    /// Build a daily chart series from exported readings
    Aggregate {
        #[command(subcommand)]
        series: SeriesAction,
    },
    /// Inspect baseline files
    Baseline {
        #[command(subcommand)]
        action: BaselineAction,
    },
}

#[derive(Subcommand)]
enum SeriesAction {
    /// Total gas rate and instant gas rate per day
    Gas {
        /// Path to meter readings JSON file
        readings_file: PathBuf,

        #[command(flatten)]
        args: SeriesArgs,
    },
    /// Total oil in tanks per day, in barrels
    Oil {
        /// Path to tank gaugings JSON file
        gaugings_file: PathBuf,

        #[command(flatten)]
        args: SeriesArgs,
    },
    /// Daily and cumulative run ticket volume
    Tickets {
        /// Path to run tickets JSON file
        tickets_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", env = "WELLSTAT_OUTPUT")]
        output: String,

        /// Write the series to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SeriesArgs {
    /// Path to wells JSON file
    #[arg(short, long, value_name = "FILE")]
    wells: PathBuf,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table", env = "WELLSTAT_OUTPUT")]
    output: String,

    /// Write the series to a JSON file
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum BaselineAction {
    /// Validate a baseline file
    Validate {
        /// Path to baseline JSON file
        file: PathBuf,
    },
    /// Show which rows feed the oil and gas rates
    Explain {
        /// Path to baseline JSON file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rates {
            baseline_file,
            dates,
            output,
            verbose,
        } => commands::rates::run(baseline_file, &dates, &output, verbose),
        Commands::Aggregate { series } => match series {
            SeriesAction::Gas {
                readings_file,
                args,
            } => commands::aggregate::gas(readings_file, args.wells, &args.output, args.out),
            SeriesAction::Oil {
                gaugings_file,
                args,
            } => commands::aggregate::oil(gaugings_file, args.wells, &args.output, args.out),
            SeriesAction::Tickets {
                tickets_file,
                output,
                out,
            } => commands::aggregate::tickets(tickets_file, &output, out),
        },
        Commands::Baseline { action } => match action {
            BaselineAction::Validate { file } => commands::baseline::validate(&file),
            BaselineAction::Explain { file } => commands::baseline::explain(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
