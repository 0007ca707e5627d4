//! # Log — Timestamped Logger Stage
//!
//! Loads the findings report, attaches one wall-clock capture timestamp
//! shared by every finding in the batch, and replaces the drift log.
//! The findings artifact is a precondition: if the audit stage has not
//! run yet the stage halts before any log file is written.

use anyhow::Result;
use chrono::Local;

use accessgov_core::LoggedFinding;
use accessgov_store::{load_findings, write_log, DataDir};

/// Timestamp rendering used in the log artifact.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Execute the `log` subcommand.
pub fn run_log(data: &DataDir) -> Result<u8> {
    let findings = load_findings(data)?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let entries: Vec<LoggedFinding> = findings
        .iter()
        .map(|f| LoggedFinding::stamp(f, &timestamp))
        .collect();

    write_log(data, &entries)?;
    println!(
        "Drift log updated: {} entries at {timestamp} → {}",
        entries.len(),
        data.log_path().display()
    );
    Ok(0)
}
