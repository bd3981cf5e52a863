//! Assignment commands.
//!
//! Changes apply to the schedule loaded for this invocation only; the seed
//! file is never written back. `--journal` prints the resulting change
//! events as JSON lines after the command output.

use anyhow::{Context, Result};
use clap::Args;
use rota_engine::{AssignOutcome, RemoveOutcome, Schedule, WorkerShift};
use rota_id::{ShiftId, SiteId, WorkerId};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_info, print_output, print_single, print_success, print_unchanged, OutputFormat};

use super::queries::WorkerShiftRow;
use super::CommandContext;

#[derive(Debug, Args)]
pub struct AssignArgs {
    /// Site ID.
    site: SiteId,

    /// Shift ID.
    shift: ShiftId,

    /// Worker ID.
    worker: WorkerId,

    /// Print the change journal as JSON lines.
    #[arg(long)]
    journal: bool,
}

/// JSON receipt for `assign`.
#[derive(Debug, Serialize)]
struct AssignReceipt {
    outcome: AssignOutcome,
    site_id: SiteId,
    shift_id: ShiftId,
    worker_id: WorkerId,
    commitments: Vec<WorkerShift>,
}

/// JSON receipt for `unassign`.
#[derive(Debug, Serialize)]
struct RemoveReceipt {
    outcome: RemoveOutcome,
    site_id: SiteId,
    shift_id: ShiftId,
    worker_id: WorkerId,
}

pub fn assign(ctx: CommandContext, args: AssignArgs) -> Result<()> {
    let mut schedule = ctx.schedule()?;
    let outcome = apply_assign(&mut schedule, &args)?;

    let receipt = AssignReceipt {
        outcome,
        commitments: schedule.worker_shifts(&args.worker, None),
        site_id: args.site,
        shift_id: args.shift,
        worker_id: args.worker,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&receipt),
        OutputFormat::Table => {
            let message = format!(
                "{} on shift {} at site {}",
                receipt.worker_id, receipt.shift_id, receipt.site_id
            );
            if outcome.changed() {
                print_success(&format!("Assigned {message}"));
            } else {
                print_unchanged(&format!("Already assigned: {message}"));
            }

            print_info(&format!("Commitments for {}:", receipt.worker_id));
            let rows: Vec<WorkerShiftRow> =
                receipt.commitments.iter().map(WorkerShiftRow::from).collect();
            print_output(&receipt.commitments, &rows, ctx.format);
        }
    }
    if args.journal {
        print_journal(&mut schedule)?;
    }
    Ok(())
}

pub fn unassign(ctx: CommandContext, args: AssignArgs) -> Result<()> {
    let mut schedule = ctx.schedule()?;
    let outcome = apply_remove(&mut schedule, &args)?;

    let receipt = RemoveReceipt {
        outcome,
        site_id: args.site,
        shift_id: args.shift,
        worker_id: args.worker,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&receipt),
        OutputFormat::Table => {
            let message = format!(
                "{} from shift {} at site {}",
                receipt.worker_id, receipt.shift_id, receipt.site_id
            );
            if outcome.changed() {
                print_success(&format!("Removed {message}"));
            } else {
                print_unchanged(&format!("Not assigned: {message}"));
            }
        }
    }
    if args.journal {
        print_journal(&mut schedule)?;
    }
    Ok(())
}

fn print_journal(schedule: &mut Schedule) -> Result<()> {
    for line in journal_lines(schedule)? {
        println!("{line}");
    }
    Ok(())
}

/// Drains the journal into one JSON document per entry.
fn journal_lines(schedule: &mut Schedule) -> Result<Vec<String>> {
    schedule
        .drain_journal()
        .iter()
        .map(|event| event.to_json_line().context("Failed to encode journal entry"))
        .collect()
}

fn apply_assign(schedule: &mut Schedule, args: &AssignArgs) -> Result<AssignOutcome, CliError> {
    Ok(schedule.assign_worker_to_shift(&args.site, &args.shift, &args.worker)?)
}

fn apply_remove(schedule: &mut Schedule, args: &AssignArgs) -> Result<RemoveOutcome, CliError> {
    Ok(schedule.remove_worker_from_shift(&args.site, &args.shift, &args.worker)?)
}
