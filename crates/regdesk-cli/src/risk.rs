//! # `regdesk risk` — Risk Register Reports
//!
//! Offline reporting over a risk register export: portfolio summary and
//! the 5×5 heat-map count matrix.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use regdesk_risk::{summarize, HeatMapGrid, RiskRecord, RiskView, GRID_DIM};

use crate::read_export;

/// Arguments for the `risk` subcommand.
#[derive(Args, Debug)]
pub struct RiskArgs {
    #[command(subcommand)]
    command: RiskCommand,
}

#[derive(Subcommand, Debug)]
enum RiskCommand {
    /// Print portfolio summary metrics as JSON.
    Summary {
        /// Risk register export (JSON array).
        file: PathBuf,
    },
    /// Print the 5×5 heat-map count matrix.
    Heatmap {
        /// Risk register export (JSON array).
        file: PathBuf,
        /// Which axes to aggregate: inherent (default) or residual.
        #[arg(long, default_value_t = RiskView::Inherent)]
        view: RiskView,
        /// Emit the full grid (cells with their records) as JSON instead
        /// of the count matrix.
        #[arg(long)]
        json: bool,
    },
}

/// Run a `risk` subcommand. Returns the process exit code.
pub fn run_risk(args: &RiskArgs) -> anyhow::Result<u8> {
    match &args.command {
        RiskCommand::Summary { file } => {
            let risks: Vec<RiskRecord> = read_export(file)?;
            tracing::debug!(count = risks.len(), "loaded risk register export");
            let summary = summarize(&risks);
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(0)
        }
        RiskCommand::Heatmap { file, view, json } => {
            let risks: Vec<RiskRecord> = read_export(file)?;
            let grid = HeatMapGrid::build(&risks, *view);
            if *json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", render_count_matrix(&grid));
            }
            Ok(0)
        }
    }
}

/// Render the grid as a fixed-width count matrix, impact 5 at the top.
fn render_count_matrix(grid: &HeatMapGrid) -> String {
    let counts = grid.counts();
    let mut out = String::new();
    out.push_str(&format!("heat map ({} view)\n", grid.view));
    for (row, row_counts) in counts.iter().enumerate() {
        out.push_str(&format!("impact {} |", GRID_DIM - row));
        for count in row_counts {
            out.push_str(&format!(" {count:>3}"));
        }
        out.push('\n');
    }
    out.push_str("          ");
    for col in 0..GRID_DIM {
        out.push_str(&format!(" {:>3}", col + 1));
    }
    out.push_str("\n           likelihood\n");
    out
}
