//! Read-only queries across roster and calendars.
//!
//! None of these fail: an unknown id simply yields an empty result.

use std::collections::HashSet;

use rota_id::{SiteId, WorkerId};
use rota_model::{DateKey, DateRange, Worker};
use tracing::warn;

use crate::schedule::Schedule;
use crate::views::{
    OccupiedShift, SiteOccupancy, SiteStaffDay, StaffMember, UnassignedShift,
    WorkerAvailability, WorkerShift,
};

impl Schedule {
    /// Shifts the worker is assigned to, ascending by date.
    ///
    /// Ties on the same date follow site insertion order, then calendar order.
    pub fn worker_shifts(&self, worker_id: &WorkerId, range: Option<DateRange>) -> Vec<WorkerShift> {
        self.worker_index
            .refs(worker_id.as_str(), range.as_ref())
            .filter_map(|shift_ref| self.resolve(shift_ref))
            .map(|(site, shift)| WorkerShift::new(site, shift))
            .collect()
    }

    /// Workers staffing a site, grouped by date, ascending.
    ///
    /// A worker on several shifts of the same date is listed once. Ids missing
    /// from the roster are skipped, and dates left with nobody are omitted.
    pub fn site_staff(&self, site_id: &SiteId, range: Option<DateRange>) -> Vec<SiteStaffDay> {
        let Some(site) = self.site(site_id.as_str()) else {
            return Vec::new();
        };

        site.calendar
            .days(range.as_ref())
            .filter_map(|(date, shifts)| {
                let mut seen = HashSet::new();
                let staff: Vec<StaffMember> = shifts
                    .iter()
                    .flat_map(|shift| shift.assigned_workers())
                    .filter(|worker_id| seen.insert(*worker_id))
                    .filter_map(|worker_id| self.staff_member(worker_id))
                    .map(StaffMember::from)
                    .collect();

                (!staff.is_empty()).then_some(SiteStaffDay { date, staff })
            })
            .collect()
    }

    /// Understaffed shifts across every site, ascending by date.
    pub fn unassigned_shifts(&self, range: Option<DateRange>) -> Vec<UnassignedShift> {
        let mut shifts: Vec<UnassignedShift> = self
            .sites()
            .flat_map(|site| {
                site.calendar
                    .days(range.as_ref())
                    .flat_map(|(_, shifts)| shifts)
                    .filter(|shift| shift.is_understaffed())
                    .map(move |shift| UnassignedShift::new(site, shift))
            })
            .collect();

        // Stable, so same-date shifts keep site then calendar order.
        shifts.sort_by_key(|s| s.date);
        shifts
    }

    /// Availability of every `Active` worker on `date`, in roster order.
    pub fn worker_availability(&self, date: DateKey) -> Vec<WorkerAvailability<'_>> {
        self.roster
            .active()
            .map(|worker| {
                let current_shift = self
                    .worker_shifts(&worker.id, Some(DateRange::day(date)))
                    .into_iter()
                    .find(|entry| entry.date == date);

                WorkerAvailability {
                    worker,
                    is_available: current_shift.is_none(),
                    current_shift,
                }
            })
            .collect()
    }

    /// Sites with at least one shift on exactly `date`, with resolved workers.
    pub fn site_occupancy(&self, date: DateKey) -> Vec<SiteOccupancy<'_>> {
        self.sites()
            .filter(|site| site.calendar.has_entry(date))
            .map(|site| SiteOccupancy {
                site_id: &site.id,
                site_name: &site.name,
                shifts: site
                    .calendar
                    .on(date)
                    .iter()
                    .map(|shift| OccupiedShift {
                        shift,
                        workers: shift
                            .assigned_workers()
                            .filter_map(|worker_id| self.staff_member(worker_id))
                            .collect::<Vec<&Worker>>(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn staff_member(&self, worker_id: &WorkerId) -> Option<&Worker> {
        let worker = self.roster.get(worker_id.as_str());
        if worker.is_none() {
            warn!(%worker_id, "Assigned worker missing from roster, skipping");
        }
        worker
    }
}
