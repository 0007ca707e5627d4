//! # Daily Schedule
//!
//! Due-ness tracking for the one recurring job. [`Schedule::fire_due`]
//! takes the current wall-clock instant so the loop and the tests share
//! one code path; only the polling loop ever passes `Local::now()`.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};

/// Result alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised by the scheduler.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The trigger time string did not parse as `HH:MM`.
    #[error("invalid trigger time {value:?}: expected HH:MM")]
    InvalidTime { value: String },

    /// The current executable could not be resolved for stage invocation.
    #[error("could not resolve the current executable: {source}")]
    CurrentExe {
        #[source]
        source: std::io::Error,
    },
}

/// A once-daily trigger at a fixed local time-of-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    trigger: NaiveTime,
    last_fired: Option<NaiveDate>,
    aligned: bool,
}

impl Schedule {
    /// A schedule firing daily at `trigger` (local time).
    pub fn daily_at(trigger: NaiveTime) -> Self {
        Self {
            trigger,
            last_fired: None,
            aligned: false,
        }
    }

    /// Parse an `HH:MM` trigger time.
    pub fn parse(value: &str) -> ScheduleResult<Self> {
        let trigger = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
            ScheduleError::InvalidTime {
                value: value.to_string(),
            }
        })?;
        Ok(Self::daily_at(trigger))
    }

    /// The configured time-of-day.
    pub fn trigger_time(&self) -> NaiveTime {
        self.trigger
    }

    /// Whether the job is due at `now`, consuming the day's firing if so.
    ///
    /// The very first check aligns the schedule: if the trigger time has
    /// already passed when the loop starts, that day is treated as
    /// missed, not caught up.
    pub fn fire_due(&mut self, now: DateTime<Local>) -> bool {
        let today = now.date_naive();

        if !self.aligned {
            self.aligned = true;
            if now.time() >= self.trigger {
                self.last_fired = Some(today);
                tracing::debug!(
                    trigger = %self.trigger,
                    "trigger time already passed at startup; skipping today"
                );
            }
        }

        if self.last_fired == Some(today) || now.time() < self.trigger {
            return false;
        }

        self.last_fired = Some(today);
        true
    }
}
