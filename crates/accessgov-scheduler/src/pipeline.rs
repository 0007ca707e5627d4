//! # Pipeline Invocation
//!
//! The scheduled job: run `audit`, `log`, and `report` as sequential
//! blocking child processes of the current executable, sharing one data
//! directory. Exit status is observed for logging only — a failed stage
//! never stops the stages after it, and never stops the loop.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use chrono::{Local, NaiveTime};

use crate::schedule::{Schedule, ScheduleError, ScheduleResult};

/// The pipeline stages, in invocation order.
pub const PIPELINE_STAGES: [&str; 3] = ["audit", "log", "report"];

/// Default poll interval between due-ness checks.
pub const DEFAULT_POLL: Duration = Duration::from_secs(60);

/// Configuration for the polling loop.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Local time-of-day the pipeline runs at.
    pub trigger: NaiveTime,
    /// Sleep between due-ness checks.
    pub poll: Duration,
    /// Data directory passed to every stage.
    pub data_dir: PathBuf,
}

impl SchedulerConfig {
    /// A daily schedule at `trigger` with the default 60-second poll.
    pub fn new(trigger: NaiveTime, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            trigger,
            poll: DEFAULT_POLL,
            data_dir: data_dir.into(),
        }
    }
}

/// Run all pipeline stages once, in order, as blocking child processes
/// of `exe`. Each stage receives `--data-dir <data_dir> <stage>`.
pub fn run_pipeline(exe: &Path, data_dir: &Path) {
    tracing::info!("running daily access drift audit pipeline");
    for stage in PIPELINE_STAGES {
        tracing::info!(stage, "invoking pipeline stage");
        let status = Command::new(exe)
            .arg("--data-dir")
            .arg(data_dir)
            .arg(stage)
            .status();
        match status {
            Ok(status) if status.success() => {
                tracing::info!(stage, "stage completed");
            }
            Ok(status) => {
                // The pipeline proceeds regardless of upstream failure.
                tracing::warn!(stage, code = ?status.code(), "stage exited non-zero; continuing");
            }
            Err(e) => {
                tracing::warn!(stage, error = %e, "stage failed to start; continuing");
            }
        }
    }
}

/// Run the polling loop forever.
///
/// Resolves the current executable once, then checks due-ness every
/// `config.poll` and runs the pipeline when the daily trigger fires.
/// There is no cancellation mechanism; a hung stage blocks all future
/// scheduled runs.
pub fn run_forever(config: &SchedulerConfig) -> ScheduleResult<()> {
    let exe = std::env::current_exe().map_err(|source| ScheduleError::CurrentExe { source })?;
    let mut schedule = Schedule::daily_at(config.trigger);

    tracing::info!(
        trigger = %config.trigger.format("%H:%M"),
        data_dir = %config.data_dir.display(),
        "scheduler active; running daily drift detection"
    );

    loop {
        if schedule.fire_due(Local::now()) {
            run_pipeline(&exe, &config.data_dir);
        }
        std::thread::sleep(config.poll);
    }
}
