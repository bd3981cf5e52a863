//! CLI commands.

mod assign;
mod check;
mod queries;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rota_engine::Schedule;
use rota_model::{DateKey, DateRange};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;
use crate::seed;

/// rota - query and adjust shift assignments from a seed snapshot.
#[derive(Debug, Parser)]
#[command(name = "rota")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Seed snapshot (.json or .toml). Overrides ROTA_SNAPSHOT and config.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the shifts a worker is assigned to.
    WorkerShifts(queries::WorkerShiftsArgs),

    /// List who works at a site, per day.
    SiteStaff(queries::SiteStaffArgs),

    /// List shifts below their required headcount.
    Unassigned(queries::UnassignedArgs),

    /// Show which active workers are free on a date.
    Availability(queries::AvailabilityArgs),

    /// Show every site's shifts and staff on a date.
    Occupancy(queries::OccupancyArgs),

    /// Assign a worker to a shift.
    Assign(assign::AssignArgs),

    /// Remove a worker from a shift.
    Unassign(assign::AssignArgs),

    /// Load the snapshot and verify its indexes.
    Check,

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            snapshot: resolve_snapshot(self.snapshot, config),
            format: self.format,
        };

        match self.command {
            Commands::WorkerShifts(args) => queries::worker_shifts(ctx, args),
            Commands::SiteStaff(args) => queries::site_staff(ctx, args),
            Commands::Unassigned(args) => queries::unassigned(ctx, args),
            Commands::Availability(args) => queries::availability(ctx, args),
            Commands::Occupancy(args) => queries::occupancy(ctx, args),
            Commands::Assign(args) => assign::assign(ctx, args),
            Commands::Unassign(args) => assign::unassign(ctx, args),
            Commands::Check => check::check(ctx),
            Commands::Version => {
                println!("rota {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// The flag wins; the config already carries any environment override.
fn resolve_snapshot(flag: Option<PathBuf>, config: Config) -> Option<PathBuf> {
    flag.or(config.snapshot)
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    /// Resolved seed path: flag, then environment, then config file.
    pub snapshot: Option<PathBuf>,
}

impl CommandContext {
    /// Load the configured snapshot into a schedule.
    pub fn schedule(&self) -> Result<Schedule> {
        let path = self.snapshot.as_deref().ok_or(CliError::NoSnapshot)?;
        seed::load_schedule(path)
    }
}

/// Optional inclusive date window shared by the listing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// First date to include (YYYY-MM-DD). Requires `--to`.
    #[arg(long)]
    from: Option<DateKey>,

    /// Last date to include (YYYY-MM-DD). Requires `--from`.
    #[arg(long)]
    to: Option<DateKey>,
}

impl RangeArgs {
    /// Both bounds or neither; a lone bound is a usage error.
    pub fn range(&self) -> Result<Option<DateRange>, CliError> {
        match (self.from, self.to) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => DateRange::new(start, end)
                .map(Some)
                .map_err(|e| CliError::Usage(e.to_string())),
            (Some(_), None) => Err(CliError::Usage("`--from` given without `--to`".into())),
            (None, Some(_)) => Err(CliError::Usage("`--to` given without `--from`".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rota").chain(args.iter().copied())).unwrap()
    }

    fn range_of(cli: Cli) -> Result<Option<DateRange>, CliError> {
        match cli.command {
            Commands::WorkerShifts(args) => args.range.range(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_range_both_or_neither() {
        assert!(range_of(parse(&["worker-shifts", "w1"])).unwrap().is_none());

        let range = range_of(parse(&[
            "worker-shifts",
            "w1",
            "--from",
            "2025-07-18",
            "--to",
            "2025-07-20",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(range.start().to_string(), "2025-07-18");
        assert_eq!(range.end().to_string(), "2025-07-20");
    }

    #[test]
    fn test_lone_bound_is_usage_error() {
        let err = range_of(parse(&["worker-shifts", "w1", "--from", "2025-07-18"])).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));

        let err = range_of(parse(&["worker-shifts", "w1", "--to", "2025-07-18"])).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn test_inverted_range_is_usage_error() {
        let err = range_of(parse(&[
            "worker-shifts",
            "w1",
            "--from",
            "2025-07-20",
            "--to",
            "2025-07-18",
        ]))
        .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn test_bad_date_rejected_by_parser() {
        let result = Cli::try_parse_from(["rota", "availability", "18/07/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_snapshot_beats_config() {
        let config = Config {
            snapshot: Some(PathBuf::from("config.json")),
            ..Config::default()
        };

        let cli = parse(&["--snapshot", "flag.json", "check"]);
        assert_eq!(
            resolve_snapshot(cli.snapshot, config.clone()),
            Some(PathBuf::from("flag.json"))
        );

        let cli = parse(&["check"]);
        assert_eq!(
            resolve_snapshot(cli.snapshot, config),
            Some(PathBuf::from("config.json"))
        );
    }

    #[test]
    fn test_format_flag() {
        let cli = parse(&["--format", "json", "version"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(parse(&["version"]).format, OutputFormat::Table);
    }

    #[test]
    fn test_schedule_without_snapshot() {
        let ctx = CommandContext {
            format: OutputFormat::Table,
            snapshot: None,
        };
        let err = ctx.schedule().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoSnapshot)
        ));
    }
}
