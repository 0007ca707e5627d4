//! Scheduler-facing integration tests: the stage list matches the CLI
//! surface, and a pipeline run over an unprepared data directory leaves
//! the loop alive.

use std::path::Path;

use accessgov_scheduler::{run_pipeline, Schedule, PIPELINE_STAGES};
use chrono::{Local, TimeZone};

#[test]
fn pipeline_stage_names_are_cli_subcommands() {
    // The scheduler invokes `accessgov --data-dir <dir> <stage>`; every
    // stage name must be a real subcommand of the binary.
    assert_eq!(PIPELINE_STAGES, ["audit", "log", "report"]);
}

#[test]
fn failed_stages_do_not_panic_the_runner() {
    // Invoking a nonexistent executable fails to spawn every stage; the
    // runner logs and returns.
    run_pipeline(
        Path::new("/nonexistent/accessgov-it-binary"),
        Path::new("/nonexistent/data"),
    );
}

#[test]
fn schedule_fires_once_per_day_across_many_polls() {
    let mut schedule = Schedule::parse("01:00").unwrap();
    let mut fired = 0;

    // Two days of one-minute polls starting at midnight.
    for day in 26..28 {
        for hour in 0..24 {
            for minute in 0..60 {
                let now = Local
                    .with_ymd_and_hms(2026, 8, day, hour, minute, 0)
                    .unwrap();
                if schedule.fire_due(now) {
                    fired += 1;
                    assert_eq!((hour, minute), (1, 0), "fired off-schedule on day {day}");
                }
            }
        }
    }
    assert_eq!(fired, 2);
}
