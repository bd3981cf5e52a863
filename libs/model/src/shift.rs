//! Shift records and their assignment lists.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use rota_id::{ShiftId, SiteId, WorkerId};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::time::{DateKey, ShiftTime};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Shift status.
///
/// Set once at creation; the engine never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Published,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Scheduled => write!(f, "scheduled"),
            ShiftStatus::Published => write!(f, "published"),
            ShiftStatus::Completed => write!(f, "completed"),
            ShiftStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One worker's place on a shift.
///
/// Display name and initials are not stored here; readers join against the
/// roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub worker_id: WorkerId,
}

impl Assignment {
    pub fn new(worker_id: WorkerId) -> Self {
        Self { worker_id }
    }
}

fn default_staff_required() -> u32 {
    1
}

/// A bounded work period at a site on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub site_id: SiteId,
    pub site_name: String,
    pub date: DateKey,
    pub start: ShiftTime,

    /// End time. Earlier than `start` when the shift runs past midnight.
    pub end: ShiftTime,

    #[serde(default = "default_staff_required")]
    pub staff_required: u32,

    #[serde(default)]
    assignments: Vec<Assignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub status: ShiftStatus,
}

impl Shift {
    /// Creates an empty scheduled shift needing one worker.
    pub fn new(
        id: ShiftId,
        site_id: SiteId,
        site_name: impl Into<String>,
        date: DateKey,
        start: ShiftTime,
        end: ShiftTime,
    ) -> Self {
        Self {
            id,
            site_id,
            site_name: site_name.into(),
            date,
            start,
            end,
            staff_required: default_staff_required(),
            assignments: Vec::new(),
            color: None,
            status: ShiftStatus::default(),
        }
    }

    pub fn with_staff_required(mut self, staff_required: u32) -> Self {
        self.staff_required = staff_required;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    /// Pre-populates the assignment list (for seeding from stored data).
    pub fn with_assignments(mut self, workers: impl IntoIterator<Item = WorkerId>) -> Self {
        self.assignments = workers.into_iter().map(Assignment::new).collect();
        self
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Assigned worker ids in assignment order.
    pub fn assigned_workers(&self) -> impl Iterator<Item = &WorkerId> {
        self.assignments.iter().map(|a| &a.worker_id)
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_assigned(&self, worker_id: &str) -> bool {
        self.assignments.iter().any(|a| a.worker_id.as_str() == worker_id)
    }

    /// Appends a worker. Returns false if it is already on the shift.
    pub fn assign(&mut self, worker_id: WorkerId) -> bool {
        if self.is_assigned(worker_id.as_str()) {
            return false;
        }
        self.assignments.push(Assignment::new(worker_id));
        true
    }

    /// Removes a worker. Returns false if it was not on the shift.
    pub fn unassign(&mut self, worker_id: &str) -> bool {
        match self
            .assignments
            .iter()
            .position(|a| a.worker_id.as_str() == worker_id)
        {
            Some(pos) => {
                self.assignments.remove(pos);
                true
            }
            None => false,
        }
    }

    /// True when nobody is assigned or fewer than `staff_required` are.
    pub fn is_understaffed(&self) -> bool {
        self.assignments.is_empty() || self.assignments.len() < self.staff_required as usize
    }

    /// Workers still needed to reach `staff_required`.
    pub fn shortfall(&self) -> u32 {
        let assigned = u32::try_from(self.assignments.len()).unwrap_or(u32::MAX);
        self.staff_required.saturating_sub(assigned)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Length of the shift in minutes, wrapping past midnight.
    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.minutes_from_midnight();
        let end = self.end.minutes_from_midnight();
        if end >= start {
            end - start
        } else {
            MINUTES_PER_DAY - start + end
        }
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.date().and_time(self.start.time())
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at() + Duration::minutes(i64::from(self.duration_minutes()))
    }

    /// Rejects zero-length shifts and repeated workers.
    pub fn validate(&self) -> ModelResult<()> {
        if self.start == self.end {
            return Err(ModelError::ZeroLengthShift(self.id.clone()));
        }

        let mut seen = HashSet::new();
        for worker_id in self.assigned_workers() {
            if !seen.insert(worker_id) {
                return Err(ModelError::DuplicateAssignment {
                    shift_id: self.id.clone(),
                    worker_id: worker_id.clone(),
                });
            }
        }

        Ok(())
    }
}
