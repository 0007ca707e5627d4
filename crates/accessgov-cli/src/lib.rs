//! # accessgov-cli — CLI for the Access Drift Governor
//!
//! Provides the `accessgov` command-line interface over the pipeline
//! stages. Each subcommand is an independent invocation communicating
//! with the others only through the data directory's artifacts:
//!
//! ```bash
//! accessgov generate             # demo policy + observed fixtures
//! accessgov audit                # policy + observed → drift_report.csv
//! accessgov log                  # drift_report.csv → drift_log.json
//! accessgov report               # drift_log.json → summary on stdout
//! accessgov schedule --at 01:00  # daily audit → log → report loop
//! ```
//!
//! A missing input artifact halts the invoking stage with a message
//! naming the precondition and the command that produces it.

pub mod audit;
pub mod generate;
pub mod log;
pub mod report;
pub mod schedule;

use std::path::PathBuf;

use accessgov_store::DataDir;

/// Resolve the data directory from the global `--data-dir` flag,
/// falling back to the conventional `data/` location.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> DataDir {
    match flag {
        Some(path) => DataDir::new(path),
        None => DataDir::default_location(),
    }
}
