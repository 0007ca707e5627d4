//! # accessgov-scheduler — Daily Polling Trigger
//!
//! A single-threaded timer with one recurring job: once per day at a
//! fixed time-of-day, run the audit → log → report pipeline as
//! sequential blocking child-process invocations.
//!
//! ## Semantics
//!
//! - Due-ness is checked once per poll interval with a sleep between
//!   checks; nothing runs between polls.
//! - One run per calendar day. If the process is down (or starts) after
//!   the trigger time, that day's run is skipped — there is no catch-up.
//! - A stage's non-zero exit or spawn failure is logged and the pipeline
//!   proceeds to the next stage regardless; the loop itself never stops.
//! - No run history is persisted. Restarting the process forgets whether
//!   today already ran, except that a restart after the trigger time
//!   skips the day entirely (see above).
//!
//! Running two scheduler instances against the same data directory is
//! unsupported: both would write the same artifacts with no coordination.

pub mod pipeline;
pub mod schedule;

// Re-export primary types.
pub use pipeline::{run_forever, run_pipeline, SchedulerConfig, PIPELINE_STAGES};
pub use schedule::{Schedule, ScheduleError, ScheduleResult};
