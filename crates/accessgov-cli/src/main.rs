//! # accessgov CLI entry point
//!
//! Parses command-line arguments, initializes tracing based on the
//! verbosity level, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use accessgov_cli::audit::run_audit;
use accessgov_cli::generate::run_generate;
use accessgov_cli::log::run_log;
use accessgov_cli::report::run_report;
use accessgov_cli::resolve_data_dir;
use accessgov_cli::schedule::{run_schedule, ScheduleArgs};

/// Access Drift Governor
///
/// Compares a declared access-policy table against observed access
/// state, flags drift findings, logs them with timestamps, and repeats
/// the audit pipeline on a daily schedule.
#[derive(Parser, Debug)]
#[command(name = "accessgov", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory the pipeline artifacts live under.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the deterministic demo policy table and observed dataset.
    Generate,

    /// Compare policy against observed access and write the findings report.
    Audit,

    /// Attach a batch timestamp to the findings and write the drift log.
    Log,

    /// Summarize the drift log on stdout.
    Report,

    /// Run the daily audit → log → report pipeline loop.
    Schedule(ScheduleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let data = resolve_data_dir(cli.data_dir);
    tracing::debug!(data_dir = %data.root().display(), "accessgov starting");

    let result = match cli.command {
        Commands::Generate => run_generate(&data),
        Commands::Audit => run_audit(&data),
        Commands::Log => run_log(&data),
        Commands::Report => run_report(&data),
        Commands::Schedule(args) => run_schedule(&args, &data),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_generate() {
        let cli = Cli::try_parse_from(["accessgov", "generate"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate));
        assert_eq!(cli.verbose, 0);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn cli_parse_audit_log_report() {
        for (argv, expect_audit, expect_log) in [
            ("audit", true, false),
            ("log", false, true),
            ("report", false, false),
        ] {
            let cli = Cli::try_parse_from(["accessgov", argv]).unwrap();
            assert_eq!(matches!(cli.command, Commands::Audit), expect_audit);
            assert_eq!(matches!(cli.command, Commands::Log), expect_log);
        }
    }

    #[test]
    fn cli_parse_schedule_defaults() {
        let cli = Cli::try_parse_from(["accessgov", "schedule"]).unwrap();
        if let Commands::Schedule(args) = cli.command {
            assert_eq!(args.at, "01:00");
            assert_eq!(args.poll_secs, 60);
        } else {
            panic!("expected schedule subcommand");
        }
    }

    #[test]
    fn cli_parse_schedule_with_options() {
        let cli = Cli::try_parse_from([
            "accessgov",
            "schedule",
            "--at",
            "23:30",
            "--poll-secs",
            "5",
        ])
        .unwrap();
        if let Commands::Schedule(args) = cli.command {
            assert_eq!(args.at, "23:30");
            assert_eq!(args.poll_secs, 5);
        } else {
            panic!("expected schedule subcommand");
        }
    }

    #[test]
    fn cli_parse_global_data_dir_before_subcommand() {
        // The scheduler invokes stages as `accessgov --data-dir <dir> <stage>`.
        let cli = Cli::try_parse_from(["accessgov", "--data-dir", "/tmp/gov", "audit"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/gov")));
    }

    #[test]
    fn cli_parse_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["accessgov", "audit", "--data-dir", "/tmp/gov"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/gov")));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["accessgov", "audit"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["accessgov", "-vv", "audit"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["accessgov"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["accessgov", "nonexistent"]).is_err());
    }
}
