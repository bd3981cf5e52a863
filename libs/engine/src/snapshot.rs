//! Seed data for building a [`Schedule`] in one step.
//!
//! A snapshot is a flat, serde-friendly description of a roster and its
//! sites. Loading validates every record and stops at the first problem.

use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::{DateKey, Shift, ShiftStatus, ShiftTime, Site, SiteStatus, Worker};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{EngineError, EngineResult};
use crate::schedule::Schedule;

/// Roster plus sites, as read from a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub sites: Vec<SiteSnapshot>,
}

/// A site and its shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    pub id: SiteId,
    pub name: String,
    #[serde(default)]
    pub status: SiteStatus,
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
}

/// A shift as stored under its site.
///
/// `site_id` may be omitted; when present it must name the enclosing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: ShiftId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    pub date: DateKey,
    pub start: ShiftTime,
    pub end: ShiftTime,
    #[serde(default = "default_staff_required")]
    pub staff_required: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned: Vec<WorkerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub status: ShiftStatus,
}

fn default_staff_required() -> u32 {
    1
}

impl ShiftRecord {
    fn into_shift(self, site: &SiteSnapshot) -> EngineResult<Shift> {
        if let Some(actual) = self.site_id.filter(|id| *id != site.id) {
            return Err(EngineError::SiteMismatch {
                shift_id: self.id,
                expected: site.id.clone(),
                actual,
            });
        }

        let mut shift = Shift::new(
            self.id,
            site.id.clone(),
            site.name.clone(),
            self.date,
            self.start,
            self.end,
        )
        .with_staff_required(self.staff_required)
        .with_status(self.status)
        .with_assignments(self.assigned);
        shift.color = self.color;
        Ok(shift)
    }

    fn from_shift(shift: &Shift) -> Self {
        Self {
            id: shift.id.clone(),
            site_id: None,
            date: shift.date,
            start: shift.start,
            end: shift.end,
            staff_required: shift.staff_required,
            assigned: shift.assigned_workers().cloned().collect(),
            color: shift.color.clone(),
            status: shift.status,
        }
    }
}

impl Schedule {
    /// Builds a schedule from seed data.
    ///
    /// Workers are inserted first, so shifts may reference any of them
    /// regardless of order in the file.
    #[instrument(skip_all, fields(workers = snapshot.workers.len(), sites = snapshot.sites.len()))]
    pub fn from_snapshot(snapshot: ScheduleSnapshot) -> EngineResult<Schedule> {
        let mut schedule = Schedule::new();

        for worker in snapshot.workers {
            schedule.add_worker(worker)?;
        }

        let mut shift_count = 0usize;
        for site in snapshot.sites {
            schedule.add_site(Site::new(site.id.clone(), site.name.clone()).with_status(site.status))?;
            for record in site.shifts.iter().cloned() {
                schedule.add_shift(record.into_shift(&site)?)?;
                shift_count += 1;
            }
        }

        info!(shifts = shift_count, "Schedule loaded from snapshot");
        Ok(schedule)
    }

    /// Captures the current state as seed data.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            workers: self.roster.iter().cloned().collect(),
            sites: self
                .sites()
                .map(|site| SiteSnapshot {
                    id: site.id.clone(),
                    name: site.name.clone(),
                    status: site.status,
                    shifts: site.calendar.iter().map(ShiftRecord::from_shift).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "workers": [
            { "id": "w1", "name": "Ada Lovelace" },
            { "id": "w2", "name": "Alan Turing", "status": "disabled" }
        ],
        "sites": [
            {
                "id": "S1",
                "name": "North Depot",
                "shifts": [
                    { "id": "sh1", "date": "2025-07-18", "start": "22:00", "end": "06:00",
                      "assigned": ["w1"] },
                    { "id": "sh2", "site_id": "S1", "date": "2025-07-19",
                      "start": "08:00", "end": "16:00", "staff_required": 2 }
                ]
            }
        ]
    }"#;

    fn seed() -> ScheduleSnapshot {
        serde_json::from_str(SEED).unwrap()
    }

    #[test]
    fn test_from_snapshot_builds_indexed_schedule() {
        let schedule = Schedule::from_snapshot(seed()).unwrap();

        assert_eq!(schedule.roster().len(), 2);
        assert_eq!(schedule.worker("w1").unwrap().initials, "AL");

        let sh1 = schedule.shift("S1", "sh1").unwrap();
        assert_eq!(sh1.site_name, "North Depot");
        assert_eq!(sh1.staff_required, 1);
        assert!(sh1.crosses_midnight());

        let shifts = schedule.worker_shifts(&WorkerId::parse("w1").unwrap(), None);
        assert_eq!(shifts.len(), 1);
        schedule.verify_indexes().unwrap();
        assert!(schedule.journal().is_empty());
    }

    #[test]
    fn test_from_snapshot_site_mismatch() {
        let mut snapshot = seed();
        snapshot.sites[0].shifts[1].site_id = Some(SiteId::parse("S2").unwrap());

        let err = Schedule::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, EngineError::SiteMismatch { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_snapshot_unknown_assignee() {
        let mut snapshot = seed();
        snapshot.sites[0].shifts[1].assigned = vec![WorkerId::parse("w9").unwrap()];

        let err = Schedule::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, EngineError::WorkerNotFound(_)));
    }

    #[test]
    fn test_from_snapshot_bad_worker_initials() {
        let json = r#"{ "workers": [ { "id": "w1", "name": "Ada", "initials": "A1" } ] }"#;
        let snapshot: ScheduleSnapshot = serde_json::from_str(json).unwrap();
        let err = Schedule::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, EngineError::Invalid(_)));
    }

    #[test]
    fn test_snapshot_reflects_mutations() {
        let mut schedule = Schedule::from_snapshot(seed()).unwrap();
        schedule
            .assign_worker_to_shift(
                &SiteId::parse("S1").unwrap(),
                &ShiftId::parse("sh2").unwrap(),
                &WorkerId::parse("w2").unwrap(),
            )
            .unwrap();

        let snapshot = schedule.snapshot();
        assert_eq!(snapshot.sites[0].shifts[1].assigned.len(), 1);

        let reloaded = Schedule::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(reloaded.snapshot(), snapshot);
    }
}
