//! The owned schedule store.

use std::collections::HashMap;

use rota_events::{AssignmentEvent, Journal};
use rota_id::{SiteId, WorkerId};
use rota_model::{Shift, ShiftCalendar, Site, Worker, WorkerRoster};
use tracing::{debug, instrument};

use crate::error::{EngineError, EngineResult};
use crate::index::{ShiftLocator, ShiftRef, WorkerIndex};

/// A site together with its shift locator.
#[derive(Debug, Clone)]
pub(crate) struct SiteEntry {
    pub site: Site,
    pub locator: ShiftLocator,
}

/// Roster, site calendars and the indexes over them.
///
/// Built once by the embedding program and passed around by reference.
/// Mutations take `&mut self`, so the assignment write and the index update
/// can never interleave with another caller.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub(crate) roster: WorkerRoster,
    pub(crate) sites: Vec<SiteEntry>,
    pub(crate) site_index: HashMap<SiteId, usize>,
    pub(crate) worker_index: WorkerIndex,
    pub(crate) journal: Journal,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker to the roster.
    pub fn add_worker(&mut self, worker: Worker) -> EngineResult<&Worker> {
        Ok(self.roster.insert(worker)?)
    }

    /// Adds a site. Shifts already on its calendar are validated and indexed
    /// as if filed through [`Schedule::add_shift`].
    ///
    /// Every prefilled shift must name this site. Nothing is registered
    /// unless all of them file cleanly.
    #[instrument(skip_all, fields(site_id = %site.id))]
    pub fn add_site(&mut self, mut site: Site) -> EngineResult<()> {
        if self.site_index.contains_key(site.id.as_str()) {
            return Err(EngineError::DuplicateSite(site.id));
        }

        let existing: Vec<Shift> = site.calendar.iter().cloned().collect();
        site.calendar = ShiftCalendar::new();

        let site_pos = self.sites.len();
        let mut entry = SiteEntry {
            site,
            locator: ShiftLocator::default(),
        };

        let mut filed = Vec::with_capacity(existing.len());
        for shift in existing {
            if shift.site_id != entry.site.id {
                return Err(EngineError::SiteMismatch {
                    shift_id: shift.id,
                    expected: entry.site.id.clone(),
                    actual: shift.site_id,
                });
            }
            filed.push(Self::file_shift(&self.roster, &mut entry, site_pos, shift)?);
        }

        for (shift_ref, workers) in &filed {
            for worker_id in workers {
                self.worker_index.insert(worker_id, *shift_ref);
            }
        }
        self.site_index.insert(entry.site.id.clone(), site_pos);
        self.sites.push(entry);

        debug!(site_count = self.sites.len(), shifts = filed.len(), "Site added");
        Ok(())
    }

    /// Files a shift under its site's calendar.
    ///
    /// The site must exist, and any workers already on the shift must be on
    /// the roster. The shift's site name is taken from the site.
    #[instrument(skip_all, fields(site_id = %shift.site_id, shift_id = %shift.id))]
    pub fn add_shift(&mut self, shift: Shift) -> EngineResult<()> {
        let site_pos = self.site_position(&shift.site_id)?;
        let (shift_ref, workers) =
            Self::file_shift(&self.roster, &mut self.sites[site_pos], site_pos, shift)?;

        for worker_id in &workers {
            self.worker_index.insert(worker_id, shift_ref);
        }

        debug!(date = %shift_ref.date, slot = shift_ref.slot, assigned = workers.len(), "Shift filed");
        Ok(())
    }

    /// Inserts a shift into one site's calendar and locator, returning the
    /// index entry its workers still need.
    fn file_shift(
        roster: &WorkerRoster,
        entry: &mut SiteEntry,
        site_pos: usize,
        mut shift: Shift,
    ) -> EngineResult<(ShiftRef, Vec<WorkerId>)> {
        if let Some(worker_id) = shift
            .assigned_workers()
            .find(|id| !roster.contains(id.as_str()))
        {
            return Err(EngineError::WorkerNotFound(worker_id.clone()));
        }

        shift.site_name = entry.site.name.clone();

        let shift_id = shift.id.clone();
        let date = shift.date;
        let workers: Vec<WorkerId> = shift.assigned_workers().cloned().collect();

        entry.site.calendar.insert(shift)?;
        let slot = entry.site.calendar.on(date).len() - 1;
        entry.locator.insert(shift_id, date, slot);

        let shift_ref = ShiftRef {
            date,
            site: site_pos,
            slot,
        };
        Ok((shift_ref, workers))
    }

    pub fn roster(&self) -> &WorkerRoster {
        &self.roster
    }

    /// Mutable roster access for collaborator edits such as status changes.
    ///
    /// Workers cannot be removed from a roster, so this cannot strand an
    /// assignment.
    pub fn roster_mut(&mut self) -> &mut WorkerRoster {
        &mut self.roster
    }

    pub fn worker(&self, worker_id: &str) -> Option<&Worker> {
        self.roster.get(worker_id)
    }

    pub fn site(&self, site_id: &str) -> Option<&Site> {
        self.site_index
            .get(site_id)
            .map(|&pos| &self.sites[pos].site)
    }

    /// Sites in insertion order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter().map(|entry| &entry.site)
    }

    /// Looks up a shift by site and shift id.
    pub fn shift(&self, site_id: &str, shift_id: &str) -> Option<&Shift> {
        let entry = &self.sites[*self.site_index.get(site_id)?];
        let (date, slot) = entry.locator.locate(shift_id)?;
        entry.site.calendar.on(date).get(slot)
    }

    /// Changes applied so far, oldest first.
    pub fn journal(&self) -> &[AssignmentEvent] {
        self.journal.entries()
    }

    /// Hands off the journal entries, leaving it empty.
    pub fn drain_journal(&mut self) -> Vec<AssignmentEvent> {
        self.journal.drain()
    }

    /// Rebuilds every index from the calendars.
    pub fn rebuild_indexes(&mut self) {
        for entry in &mut self.sites {
            entry.locator = ShiftLocator::build(&entry.site);
        }
        self.worker_index = WorkerIndex::build(self.sites());
    }

    /// Checks that the maintained indexes match the calendars.
    pub fn verify_indexes(&self) -> EngineResult<()> {
        for entry in &self.sites {
            if entry.locator != ShiftLocator::build(&entry.site) {
                return Err(EngineError::IndexDrift(format!(
                    "shift locator for site {} is stale",
                    entry.site.id
                )));
            }
        }

        let rebuilt = WorkerIndex::build(self.sites());
        match self.worker_index.diff(&rebuilt) {
            Some(detail) => Err(EngineError::IndexDrift(detail)),
            None => Ok(()),
        }
    }

    pub(crate) fn site_position(&self, site_id: &SiteId) -> EngineResult<usize> {
        self.site_index
            .get(site_id.as_str())
            .copied()
            .ok_or_else(|| EngineError::SiteNotFound(site_id.clone()))
    }

    /// Resolves an index entry back to its site and shift.
    pub(crate) fn resolve(&self, shift_ref: ShiftRef) -> Option<(&Site, &Shift)> {
        let site = &self.sites.get(shift_ref.site)?.site;
        let shift = site.calendar.on(shift_ref.date).get(shift_ref.slot)?;
        Some((site, shift))
    }
}
