//! # `regdesk complaint` — Complaint Deadline Reports
//!
//! Offline deadline reporting over a complaints export. Every record is
//! evaluated at the moment the command runs, matching what the API's
//! deadline endpoint would return.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;

use regdesk_complaints::{milestones, ComplaintRecord, DeadlineStatus, MilestoneReport};

use crate::read_export;

/// Arguments for the `complaint` subcommand.
#[derive(Args, Debug)]
pub struct ComplaintArgs {
    #[command(subcommand)]
    command: ComplaintCommand,
}

#[derive(Subcommand, Debug)]
enum ComplaintCommand {
    /// Print per-complaint deadline status and milestone letters as JSON.
    Status {
        /// Complaints export (JSON array).
        file: PathBuf,
    },
}

/// One complaint's line in the status report.
#[derive(Debug, Serialize)]
struct StatusLine {
    reference: String,
    status: DeadlineStatus,
    milestones: MilestoneReport,
}

/// Run a `complaint` subcommand. Returns the process exit code.
pub fn run_complaint(args: &ComplaintArgs) -> anyhow::Result<u8> {
    match &args.command {
        ComplaintCommand::Status { file } => {
            let complaints: Vec<ComplaintRecord> = read_export(file)?;
            tracing::debug!(count = complaints.len(), "loaded complaints export");
            let report = status_report(&complaints, Utc::now());
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(0)
        }
    }
}

/// Evaluate every complaint at one instant.
fn status_report(complaints: &[ComplaintRecord], now: DateTime<Utc>) -> Vec<StatusLine> {
    complaints
        .iter()
        .map(|record| {
            let status = record.deadline_status_at(now);
            StatusLine {
                reference: record.reference.clone(),
                status,
                milestones: milestones(record, &status),
            }
        })
        .collect()
}
