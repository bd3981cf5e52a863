//! Snapshot health check.

use anyhow::{Context, Result};
use rota_engine::Schedule;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Counts reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct CheckReport {
    #[tabled(rename = "Workers")]
    workers: usize,
    #[tabled(rename = "Active")]
    active_workers: usize,
    #[tabled(rename = "Sites")]
    sites: usize,
    #[tabled(rename = "Shifts")]
    shifts: usize,
    #[tabled(rename = "Assignments")]
    assignments: usize,
    #[tabled(rename = "Understaffed")]
    understaffed: usize,
}

impl CheckReport {
    fn from_schedule(schedule: &Schedule) -> Self {
        let shifts = || schedule.sites().flat_map(|site| site.calendar.iter());
        Self {
            workers: schedule.roster().len(),
            active_workers: schedule.roster().active().count(),
            sites: schedule.sites().count(),
            shifts: shifts().count(),
            assignments: shifts().map(|shift| shift.assigned_count()).sum(),
            understaffed: shifts().filter(|shift| shift.is_understaffed()).count(),
        }
    }
}

pub fn check(ctx: CommandContext) -> Result<()> {
    let schedule = ctx.schedule()?;
    schedule
        .verify_indexes()
        .map_err(CliError::from)
        .context("Index verification failed")?;

    let report = CheckReport::from_schedule(&schedule);
    match ctx.format {
        OutputFormat::Json => print_single(&report),
        OutputFormat::Table => {
            print_success("Snapshot loaded and indexes verified");
            print_output(&report, std::slice::from_ref(&report), ctx.format);
        }
    }
    Ok(())
}
