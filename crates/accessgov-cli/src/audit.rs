//! # Audit — Drift Detection Stage
//!
//! Loads the declared policy table and the observed access dataset,
//! classifies every observed record, and writes the findings report.
//! Both input artifacts are preconditions: if either is missing the
//! stage halts before any findings file is written.

use anyhow::Result;

use accessgov_store::{load_observed, load_policy, write_findings, DataDir};

/// Execute the `audit` subcommand.
pub fn run_audit(data: &DataDir) -> Result<u8> {
    let policy = load_policy(data)?;
    let observed = load_observed(data)?;

    let findings = accessgov_core::audit(&policy, &observed);
    tracing::info!(
        observed = observed.len(),
        findings = findings.len(),
        "drift audit classified all observed records"
    );

    write_findings(data, &findings)?;
    println!(
        "Drift audit completed: {} finding(s) in {} record(s) → {}",
        findings.len(),
        observed.len(),
        data.findings_path().display()
    );
    Ok(0)
}
