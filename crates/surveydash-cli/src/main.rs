mod commands;
mod config;
mod errors;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use surveydash_core::{AnalysisKind, Dataset, SelectionState};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, load_config};
use crate::errors::ConfigError;

/// Output format for report rendering
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Print the report to standard output (human-readable)
    Stdout,
    /// Emit the report outputs as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "surveydash",
    version,
    about = "SurveyDash - interactive report over a household survey sheet",
    long_about = "SurveyDash loads a household survey table (CSV or Parquet) once at startup \
                  and serves an interactive report: pick a contact to see that household's \
                  members, their detail rows and a verification summary, or pick an analysis \
                  kind or status column for chart breakdowns.\n\n\
                  Example usage:\n  \
                  surveydash --data survey.csv\n  \
                  surveydash --data survey.csv --contact 111 --analysis gender --output json"
)]
struct Args {
    /// Path to the survey data file (.csv or .parquet)
    #[arg(short, long, value_name = "FILE")]
    data: Option<String>,

    /// TOML config carrying the data path and default selections
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Output format for report rendering
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Render once for this contact and exit
    #[arg(long, value_name = "MOBILE")]
    contact: Option<String>,

    /// Render once for this analysis kind and exit (gender|age|livestock|land)
    #[arg(long, value_name = "KIND")]
    analysis: Option<String>,

    /// Render once for this verification column and exit
    #[arg(long, value_name = "COLUMN")]
    verify: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn run(args: Args) -> Result<()> {
    let config: Option<Config> = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let data_path = args
        .data
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.data.clone()))
        .ok_or(ConfigError::MissingDataPath)?;
    let dataset = Dataset::load(&data_path)
        .with_context(|| format!("Failed to load survey data from '{}'", data_path))?;

    let contact = args
        .contact
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.contact.clone()));
    let analysis_literal = args
        .analysis
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.analysis.clone()));
    let verification = args
        .verify
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.verify.clone()));

    let analysis = analysis_literal.as_deref().and_then(|literal| {
        let kind = AnalysisKind::parse(literal);
        if kind.is_none() {
            warn!(literal, "unrecognized analysis kind, showing placeholder");
        }
        kind
    });

    let one_shot = contact.is_some()
        || analysis_literal.is_some()
        || verification.is_some()
        || matches!(args.output, OutputFormat::Json);

    if one_shot {
        let selection = SelectionState {
            contact,
            analysis,
            verification,
        };
        session::run_once(&dataset, selection, &args.output)
    } else {
        session::run_interactive(&dataset)
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {:#}", err);
        eprintln!("\nHint: run with --debug or RUST_LOG=debug for detailed logs");
        std::process::exit(1);
    }
}
