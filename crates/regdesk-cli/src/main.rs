//! # regdesk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regdesk_cli::complaint::{run_complaint, ComplaintArgs};
use regdesk_cli::risk::{run_risk, RiskArgs};

/// RegDesk Compliance Stack CLI
///
/// Offline reporting over risk register and complaints exports: heat-map
/// aggregation, portfolio summaries, and regulatory deadline status.
#[derive(Parser, Debug)]
#[command(name = "regdesk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Risk register reports (summary, heat map).
    Risk(RiskArgs),

    /// Complaint deadline reports.
    Complaint(ComplaintArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Risk(args) => run_risk(&args),
        Commands::Complaint(args) => run_complaint(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
