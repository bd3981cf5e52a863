//! Read-only commands.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rota_engine::{
    SiteOccupancy, SiteStaffDay, UnassignedShift, WorkerAvailability, WorkerShift,
};
use rota_id::{SiteId, WorkerId};
use rota_model::DateKey;
use tabled::Tabled;

use crate::output::{display_option, print_output};

use super::{CommandContext, RangeArgs};

#[derive(Debug, Args)]
pub struct WorkerShiftsArgs {
    /// Worker ID.
    worker: WorkerId,

    #[command(flatten)]
    pub(super) range: RangeArgs,
}

#[derive(Debug, Args)]
pub struct SiteStaffArgs {
    /// Site ID.
    site: SiteId,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Debug, Args)]
pub struct UnassignedArgs {
    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Debug, Args)]
pub struct AvailabilityArgs {
    /// Date (YYYY-MM-DD).
    date: DateKey,
}

#[derive(Debug, Args)]
pub struct OccupancyArgs {
    /// Date (YYYY-MM-DD).
    date: DateKey,
}

// =============================================================================
// Table rows
// =============================================================================

#[derive(Debug, Tabled)]
pub(super) struct WorkerShiftRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Shift")]
    shift_id: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&WorkerShift> for WorkerShiftRow {
    fn from(shift: &WorkerShift) -> Self {
        Self {
            date: shift.date.to_string(),
            shift_id: shift.shift_id.to_string(),
            site: format!("{} ({})", shift.site_name, shift.site_id),
            hours: format!("{}-{}", shift.start, shift.end),
            status: shift.status.to_string(),
        }
    }
}

#[derive(Debug, Tabled)]
struct StaffRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Worker")]
    worker_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Initials")]
    initials: String,
}

fn staff_rows(days: &[SiteStaffDay]) -> Vec<StaffRow> {
    days.iter()
        .flat_map(|day| {
            day.staff.iter().map(move |member| StaffRow {
                date: day.date.to_string(),
                worker_id: member.worker_id.to_string(),
                name: member.name.clone(),
                initials: member.initials.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Tabled)]
struct UnassignedRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Shift")]
    shift_id: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Staffed")]
    staffed: String,
    #[tabled(rename = "Short")]
    shortfall: u32,
}

impl From<&UnassignedShift> for UnassignedRow {
    fn from(shift: &UnassignedShift) -> Self {
        Self {
            date: shift.date.to_string(),
            shift_id: shift.shift_id.to_string(),
            site: format!("{} ({})", shift.site_name, shift.site_id),
            hours: format!("{}-{}", shift.start, shift.end),
            staffed: format!("{}/{}", shift.assigned, shift.staff_required),
            shortfall: shift.shortfall,
        }
    }
}

#[derive(Debug, Tabled)]
struct AvailabilityRow {
    #[tabled(rename = "Worker")]
    worker_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Shift", display = "display_option")]
    shift: Option<String>,
}

impl From<&WorkerAvailability<'_>> for AvailabilityRow {
    fn from(entry: &WorkerAvailability<'_>) -> Self {
        let available = if entry.is_available {
            "yes".green().to_string()
        } else {
            "no".red().to_string()
        };
        Self {
            worker_id: entry.worker.id.to_string(),
            name: entry.worker.name.clone(),
            available,
            shift: entry
                .current_shift
                .as_ref()
                .map(|s| format!("{} @ {} {}-{}", s.shift_id, s.site_name, s.start, s.end)),
        }
    }
}

#[derive(Debug, Tabled)]
struct OccupancyRow {
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Shift")]
    shift_id: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Staffed")]
    staffed: String,
    #[tabled(rename = "Workers")]
    workers: String,
}

fn occupancy_rows(sites: &[SiteOccupancy<'_>]) -> Vec<OccupancyRow> {
    sites
        .iter()
        .flat_map(|site| {
            site.shifts.iter().map(move |entry| {
                let staffed = format!(
                    "{}/{}",
                    entry.shift.assigned_count(),
                    entry.shift.staff_required
                );
                OccupancyRow {
                    site: format!("{} ({})", site.site_name, site.site_id),
                    shift_id: entry.shift.id.to_string(),
                    hours: format!("{}-{}", entry.shift.start, entry.shift.end),
                    staffed: if entry.shift.is_understaffed() {
                        staffed.yellow().to_string()
                    } else {
                        staffed
                    },
                    workers: entry
                        .workers
                        .iter()
                        .map(|w| w.initials.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                }
            })
        })
        .collect()
}

// =============================================================================
// Commands
// =============================================================================

pub fn worker_shifts(ctx: CommandContext, args: WorkerShiftsArgs) -> Result<()> {
    let range = args.range.range()?;
    let schedule = ctx.schedule()?;

    let shifts = schedule.worker_shifts(&args.worker, range);
    let rows: Vec<WorkerShiftRow> = shifts.iter().map(WorkerShiftRow::from).collect();
    print_output(&shifts, &rows, ctx.format);
    Ok(())
}

pub fn site_staff(ctx: CommandContext, args: SiteStaffArgs) -> Result<()> {
    let range = args.range.range()?;
    let schedule = ctx.schedule()?;

    let days = schedule.site_staff(&args.site, range);
    print_output(&days, &staff_rows(&days), ctx.format);
    Ok(())
}

pub fn unassigned(ctx: CommandContext, args: UnassignedArgs) -> Result<()> {
    let range = args.range.range()?;
    let schedule = ctx.schedule()?;

    let shifts = schedule.unassigned_shifts(range);
    let rows: Vec<UnassignedRow> = shifts.iter().map(UnassignedRow::from).collect();
    print_output(&shifts, &rows, ctx.format);
    Ok(())
}

pub fn availability(ctx: CommandContext, args: AvailabilityArgs) -> Result<()> {
    let schedule = ctx.schedule()?;

    let entries = schedule.worker_availability(args.date);
    let rows: Vec<AvailabilityRow> = entries.iter().map(AvailabilityRow::from).collect();
    print_output(&entries, &rows, ctx.format);
    Ok(())
}

pub fn occupancy(ctx: CommandContext, args: OccupancyArgs) -> Result<()> {
    let schedule = ctx.schedule()?;

    let sites = schedule.site_occupancy(args.date);
    print_output(&sites, &occupancy_rows(&sites), ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_testing::{date, ScheduleBuilder, ShiftBuilder};

    fn schedule() -> rota_engine::Schedule {
        ScheduleBuilder::new()
            .worker("w1", "Ada Lovelace")
            .worker("w2", "Alan Turing")
            .site("S1", "North Depot")
            .shift(
                ShiftBuilder::new("sh1", "S1", "2025-07-18")
                    .hours("22:00", "06:00")
                    .staff_required(2)
                    .assigned(&["w1", "w2"]),
            )
            .shift(ShiftBuilder::new("sh2", "S1", "2025-07-19"))
            .build()
    }

    #[test]
    fn test_staff_rows_flatten_days() {
        let schedule = schedule();
        let days = schedule.site_staff(&rota_testing::site_id("S1"), None);
        let rows = staff_rows(&days);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2025-07-18");
        assert_eq!(rows[1].initials, "AT");
    }

    #[test]
    fn test_unassigned_row() {
        let schedule = schedule();
        let shifts = schedule.unassigned_shifts(None);
        let row = UnassignedRow::from(&shifts[0]);

        assert_eq!(row.shift_id, "sh2");
        assert_eq!(row.staffed, "0/1");
        assert_eq!(row.hours, "08:00-16:00");
        assert_eq!(row.site, "North Depot (S1)");
    }

    #[test]
    fn test_occupancy_rows_list_initials() {
        let schedule = schedule();
        let sites = schedule.site_occupancy(date("2025-07-18"));
        let rows = occupancy_rows(&sites);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].workers, "AL, AT");
        assert_eq!(rows[0].hours, "22:00-06:00");
    }

    #[test]
    fn test_availability_row_names_shift() {
        let schedule = schedule();
        let entries = schedule.worker_availability(date("2025-07-18"));
        let row = AvailabilityRow::from(&entries[0]);

        assert_eq!(
            row.shift.as_deref(),
            Some("sh1 @ North Depot 22:00-06:00")
        );
    }

    #[test]
    fn test_availability_table_marks_free_worker() {
        let schedule = schedule();
        let entries = schedule.worker_availability(date("2025-07-19"));
        let row = AvailabilityRow::from(&entries[0]);

        let headers = AvailabilityRow::headers();
        assert_eq!(headers.last().map(|h| h.as_ref()), Some("Shift"));
        let fields = row.fields();
        assert_eq!(fields.last().map(|f| f.as_ref()), Some("-"));
    }
}
