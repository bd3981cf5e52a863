//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use rota_engine::EngineError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No snapshot configured")]
    NoSnapshot,

    #[error("Unsupported snapshot format: {0:?} (expected .json or .toml)")]
    UnsupportedSnapshot(PathBuf),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let engine_err = err.downcast_ref::<EngineError>().or_else(|| {
        match err.downcast_ref::<CliError>() {
            Some(CliError::Engine(e)) => Some(e),
            _ => None,
        }
    });

    if let Some(hint) = engine_err.and_then(engine_hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
        return;
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::NoSnapshot) => {
            eprintln!(
                "\n{}",
                "Hint: Pass `--snapshot <PATH>`, set ROTA_SNAPSHOT, or add \"snapshot\" to config.json."
                    .yellow()
            );
        }
        Some(CliError::Usage(_)) => {
            eprintln!(
                "\n{}",
                "Hint: Date ranges take both `--from` and `--to` (YYYY-MM-DD).".yellow()
            );
        }
        _ => {}
    }
}

fn engine_hint(err: &EngineError) -> Option<&'static str> {
    match err {
        EngineError::SiteNotFound(_) => {
            Some("Site ids are case-sensitive. Run `rota occupancy <DATE>` to see sites with shifts.")
        }
        EngineError::ShiftNotFound { .. } => {
            Some("The shift must belong to the given site. Check the site's `shifts` in the snapshot.")
        }
        EngineError::WorkerNotFound(_) => {
            Some("Only workers listed under `workers` in the snapshot can be assigned.")
        }
        EngineError::DuplicateSite(_) | EngineError::SiteMismatch { .. } | EngineError::Invalid(_) => {
            Some("Fix the offending record in the snapshot and try again.")
        }
        EngineError::IndexDrift(_) => Some("Run `rota check` to verify the loaded schedule."),
        EngineError::Journal(_) => None,
    }
}
