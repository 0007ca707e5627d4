//! # Schedule — Daily Pipeline Loop
//!
//! Runs the polling scheduler: once per day at the configured local
//! time, invoke `audit`, `log`, and `report` as sequential child
//! processes of this executable. This subcommand does not return under
//! normal operation.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use accessgov_scheduler::{run_forever, Schedule, SchedulerConfig};
use accessgov_store::DataDir;

/// Schedule subcommand arguments.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Local time-of-day to run the pipeline, HH:MM.
    #[arg(long, default_value = "01:00")]
    pub at: String,

    /// Seconds to sleep between due-ness checks.
    #[arg(long, default_value_t = 60)]
    pub poll_secs: u64,
}

/// Execute the `schedule` subcommand. Blocks forever unless startup
/// configuration is invalid.
pub fn run_schedule(args: &ScheduleArgs, data: &DataDir) -> Result<u8> {
    let schedule = Schedule::parse(&args.at)?;
    let config = SchedulerConfig {
        trigger: schedule.trigger_time(),
        poll: Duration::from_secs(args.poll_secs),
        data_dir: data.root().to_path_buf(),
    };
    run_forever(&config)?;
    Ok(0)
}
