//! # Generate — Demo Fixture Producer
//!
//! Writes the hardcoded demo policy table and observed-access dataset.
//! Deterministic and idempotent: re-running overwrites the prior
//! fixture files byte-for-byte.

use anyhow::Result;

use accessgov_store::{write_demo_fixtures, DataDir};

/// Execute the `generate` subcommand.
pub fn run_generate(data: &DataDir) -> Result<u8> {
    write_demo_fixtures(data)?;
    println!("Demo data generated:");
    println!("  policy:   {}", data.policy_path().display());
    println!("  observed: {}", data.observed_path().display());
    Ok(0)
}
