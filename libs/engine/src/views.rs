//! Query result records.

use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::{DateKey, Shift, ShiftStatus, ShiftTime, Site, Worker, WorkerStatus};
use serde::Serialize;

/// One of a worker's commitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerShift {
    pub shift_id: ShiftId,
    pub site_id: SiteId,
    pub site_name: String,
    pub date: DateKey,
    pub start: ShiftTime,
    pub end: ShiftTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub status: ShiftStatus,
}

impl WorkerShift {
    pub(crate) fn new(site: &Site, shift: &Shift) -> Self {
        Self {
            shift_id: shift.id.clone(),
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            date: shift.date,
            start: shift.start,
            end: shift.end,
            color: shift.color.clone(),
            status: shift.status,
        }
    }
}

/// Display record for a worker, joined from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    pub worker_id: WorkerId,
    pub name: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub status: WorkerStatus,
}

impl From<&Worker> for StaffMember {
    fn from(worker: &Worker) -> Self {
        Self {
            worker_id: worker.id.clone(),
            name: worker.name.clone(),
            initials: worker.initials.clone(),
            color: worker.color.clone(),
            status: worker.status,
        }
    }
}

/// Staff working at a site on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteStaffDay {
    pub date: DateKey,
    pub staff: Vec<StaffMember>,
}

/// A shift below its required headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnassignedShift {
    pub shift_id: ShiftId,
    pub site_id: SiteId,
    pub site_name: String,
    pub date: DateKey,
    pub start: ShiftTime,
    pub end: ShiftTime,
    pub assigned: usize,
    pub staff_required: u32,
    pub shortfall: u32,
}

impl UnassignedShift {
    pub(crate) fn new(site: &Site, shift: &Shift) -> Self {
        Self {
            shift_id: shift.id.clone(),
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            date: shift.date,
            start: shift.start,
            end: shift.end,
            assigned: shift.assigned_count(),
            staff_required: shift.staff_required,
            shortfall: shift.shortfall(),
        }
    }
}

/// Whether an active worker is free on a date.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerAvailability<'a> {
    pub worker: &'a Worker,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_shift: Option<WorkerShift>,
}

/// A shift with its assigned workers resolved.
#[derive(Debug, Clone, Serialize)]
pub struct OccupiedShift<'a> {
    pub shift: &'a Shift,
    pub workers: Vec<&'a Worker>,
}

/// A site's shifts on one date.
#[derive(Debug, Clone, Serialize)]
pub struct SiteOccupancy<'a> {
    pub site_id: &'a SiteId,
    pub site_name: &'a str,
    pub shifts: Vec<OccupiedShift<'a>>,
}
