//! # Report — Findings Summary Stage
//!
//! Loads the timestamped drift log and prints an aggregate summary:
//! totals, per-issue counts, and per-system counts. The log artifact is
//! a precondition; the stage halts if the logger has not run yet.

use anyhow::Result;

use accessgov_core::summarize;
use accessgov_store::{load_log, DataDir};

/// Execute the `report` subcommand.
pub fn run_report(data: &DataDir) -> Result<u8> {
    let entries = load_log(data)?;
    let summary = summarize(&entries);
    tracing::info!(
        total = summary.total_findings,
        unknown_system = summary.unknown_system,
        unexpected_role = summary.unexpected_role,
        "drift summary computed"
    );
    print!("{summary}");
    Ok(0)
}
