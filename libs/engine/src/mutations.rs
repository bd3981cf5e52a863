//! Assign and remove: the only two mutations.

use rota_events::{AssignmentChange, AssignmentPayload};
use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::DateKey;
use tracing::{debug, info, instrument};

use crate::error::{EngineError, EngineResult};
use crate::index::ShiftRef;
use crate::outcome::{AssignOutcome, RemoveOutcome};
use crate::schedule::Schedule;

impl Schedule {
    /// Puts a worker on a shift.
    ///
    /// Fails if the site, the shift (within that site) or the worker does not
    /// exist. Assigning a worker who is already on the shift changes nothing
    /// and returns [`AssignOutcome::AlreadyAssigned`].
    #[instrument(skip_all, fields(site_id = %site_id, shift_id = %shift_id, worker_id = %worker_id))]
    pub fn assign_worker_to_shift(
        &mut self,
        site_id: &SiteId,
        shift_id: &ShiftId,
        worker_id: &WorkerId,
    ) -> EngineResult<AssignOutcome> {
        let shift_ref = self.locate(site_id, shift_id)?;

        let entry = &mut self.sites[shift_ref.site];
        let shift = entry
            .site
            .calendar
            .get_on_mut(shift_ref.date, shift_id.as_str())
            .ok_or_else(|| shift_not_found(site_id, shift_id))?;

        if shift.is_assigned(worker_id.as_str()) {
            debug!("Worker already on shift");
            return Ok(AssignOutcome::AlreadyAssigned);
        }

        if !self.roster.contains(worker_id.as_str()) {
            return Err(EngineError::WorkerNotFound(worker_id.clone()));
        }

        shift.assign(worker_id.clone());
        let assigned = shift.assigned_count();
        let staff_required = shift.staff_required;

        self.worker_index.insert(worker_id, shift_ref);
        self.record(AssignmentChange::Assigned, site_id, shift_id, worker_id, shift_ref.date)?;

        info!(
            date = %shift_ref.date,
            assigned,
            staff_required,
            "Worker assigned to shift"
        );
        Ok(AssignOutcome::Assigned)
    }

    /// Takes a worker off a shift.
    ///
    /// Fails if the site or the shift does not exist. The worker does not
    /// need to be on the roster. Removing a worker who is not on the shift
    /// changes nothing and returns [`RemoveOutcome::NotAssigned`].
    #[instrument(skip_all, fields(site_id = %site_id, shift_id = %shift_id, worker_id = %worker_id))]
    pub fn remove_worker_from_shift(
        &mut self,
        site_id: &SiteId,
        shift_id: &ShiftId,
        worker_id: &WorkerId,
    ) -> EngineResult<RemoveOutcome> {
        let shift_ref = self.locate(site_id, shift_id)?;

        let entry = &mut self.sites[shift_ref.site];
        let shift = entry
            .site
            .calendar
            .get_on_mut(shift_ref.date, shift_id.as_str())
            .ok_or_else(|| shift_not_found(site_id, shift_id))?;

        if !shift.unassign(worker_id.as_str()) {
            debug!("Worker not on shift");
            return Ok(RemoveOutcome::NotAssigned);
        }
        let assigned = shift.assigned_count();

        self.worker_index.remove(worker_id.as_str(), &shift_ref);
        self.record(AssignmentChange::Removed, site_id, shift_id, worker_id, shift_ref.date)?;

        info!(date = %shift_ref.date, assigned, "Worker removed from shift");
        Ok(RemoveOutcome::Removed)
    }

    fn locate(&self, site_id: &SiteId, shift_id: &ShiftId) -> EngineResult<ShiftRef> {
        let site = self.site_position(site_id)?;
        let (date, slot) = self.sites[site]
            .locator
            .locate(shift_id.as_str())
            .ok_or_else(|| shift_not_found(site_id, shift_id))?;
        Ok(ShiftRef { date, site, slot })
    }

    fn record(
        &mut self,
        change: AssignmentChange,
        site_id: &SiteId,
        shift_id: &ShiftId,
        worker_id: &WorkerId,
        date: DateKey,
    ) -> EngineResult<()> {
        let payload = AssignmentPayload {
            site_id: site_id.clone(),
            shift_id: shift_id.clone(),
            worker_id: worker_id.clone(),
            date,
        };
        let event = self.journal.record(change, payload)?;
        debug!(event_id = %event.event_id, event_type = %event.event_type, "Journal entry recorded");
        Ok(())
    }
}

fn shift_not_found(site_id: &SiteId, shift_id: &ShiftId) -> EngineError {
    EngineError::ShiftNotFound {
        site_id: site_id.clone(),
        shift_id: shift_id.clone(),
    }
}
