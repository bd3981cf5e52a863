//! Seed snapshot loading.
//!
//! The file format is picked by extension: `.json` or `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rota_engine::{Schedule, ScheduleSnapshot};
use tracing::{debug, instrument};

use crate::error::CliError;

/// Supported seed file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedFormat {
    Json,
    Toml,
}

impl SeedFormat {
    fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CliError::UnsupportedSnapshot(path.to_path_buf())),
        }
    }
}

/// Read and parse a seed file without building a schedule.
pub fn read_snapshot(path: &Path) -> Result<ScheduleSnapshot> {
    let format = SeedFormat::from_path(path)?;

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot from {:?}", path))?;

    let snapshot = match format {
        SeedFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON snapshot {:?}", path))?,
        SeedFormat::Toml => toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML snapshot {:?}", path))?,
    };
    Ok(snapshot)
}

/// Load a seed file into a ready schedule.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_schedule(path: &Path) -> Result<Schedule> {
    let snapshot = read_snapshot(path)?;
    debug!(
        workers = snapshot.workers.len(),
        sites = snapshot.sites.len(),
        "Snapshot parsed"
    );

    let schedule = Schedule::from_snapshot(snapshot)
        .map_err(CliError::from)
        .with_context(|| format!("Invalid snapshot {:?}", path))?;
    Ok(schedule)
}
