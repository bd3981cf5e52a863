//! # rota-testing
//!
//! Shared fixtures for engine and CLI tests.
//!
//! Builders panic on malformed input; they are only ever fed literals.

use rota_engine::{Schedule, ScheduleSnapshot};
use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::{DateKey, DateRange, Shift, ShiftTime, Site, Worker, WorkerStatus};

pub fn worker_id(id: &str) -> WorkerId {
    WorkerId::parse(id).expect("valid worker id")
}

pub fn site_id(id: &str) -> SiteId {
    SiteId::parse(id).expect("valid site id")
}

pub fn shift_id(id: &str) -> ShiftId {
    ShiftId::parse(id).expect("valid shift id")
}

pub fn date(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date")
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end)).expect("ordered range")
}

pub fn worker(id: &str, name: &str) -> Worker {
    Worker::new(worker_id(id), name).expect("valid worker")
}

/// Builder for a [`Shift`] with a 08:00-16:00 default window.
#[derive(Debug, Clone)]
pub struct ShiftBuilder {
    shift: Shift,
}

impl ShiftBuilder {
    pub fn new(id: &str, site: &str, day: &str) -> Self {
        Self {
            shift: Shift::new(
                shift_id(id),
                site_id(site),
                "",
                date(day),
                time("08:00"),
                time("16:00"),
            ),
        }
    }

    pub fn hours(mut self, start: &str, end: &str) -> Self {
        self.shift.start = time(start);
        self.shift.end = time(end);
        self
    }

    pub fn staff_required(mut self, n: u32) -> Self {
        self.shift.staff_required = n;
        self
    }

    pub fn assigned(mut self, workers: &[&str]) -> Self {
        self.shift = self
            .shift
            .with_assignments(workers.iter().map(|id| worker_id(id)));
        self
    }

    pub fn build(self) -> Shift {
        self.shift
    }
}

fn time(s: &str) -> ShiftTime {
    ShiftTime::parse(s).expect("valid time")
}

/// Builder for a whole [`Schedule`].
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    workers: Vec<Worker>,
    sites: Vec<Site>,
    shifts: Vec<Shift>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn worker(mut self, id: &str, name: &str) -> Self {
        self.workers.push(worker(id, name));
        self
    }

    pub fn disabled_worker(mut self, id: &str, name: &str) -> Self {
        self.workers
            .push(worker(id, name).with_status(WorkerStatus::Disabled));
        self
    }

    pub fn site(mut self, id: &str, name: &str) -> Self {
        self.sites.push(Site::new(site_id(id), name));
        self
    }

    pub fn shift(mut self, shift: ShiftBuilder) -> Self {
        self.shifts.push(shift.build());
        self
    }

    pub fn build(self) -> Schedule {
        let mut schedule = Schedule::new();
        for worker in self.workers {
            schedule.add_worker(worker).expect("add worker");
        }
        for site in self.sites {
            schedule.add_site(site).expect("add site");
        }
        for shift in self.shifts {
            schedule.add_shift(shift).expect("add shift");
        }
        schedule
    }
}

/// Site `S1` with one unstaffed night shift `sh1` on 2025-07-18 needing one
/// worker, and active worker `w1`.
pub fn night_shift_scenario() -> Schedule {
    ScheduleBuilder::new()
        .worker("w1", "Ada Lovelace")
        .site("S1", "North Depot")
        .shift(ShiftBuilder::new("sh1", "S1", "2025-07-18").hours("22:00", "06:00"))
        .build()
}

/// The same scenario as a seed file body.
pub const NIGHT_SHIFT_JSON: &str = r#"{
  "workers": [
    { "id": "w1", "name": "Ada Lovelace" },
    { "id": "w2", "name": "Alan Turing" }
  ],
  "sites": [
    {
      "id": "S1",
      "name": "North Depot",
      "shifts": [
        { "id": "sh1", "date": "2025-07-18", "start": "22:00", "end": "06:00" }
      ]
    }
  ]
}"#;

/// The same seed in TOML.
pub const NIGHT_SHIFT_TOML: &str = r#"
[[workers]]
id = "w1"
name = "Ada Lovelace"

[[workers]]
id = "w2"
name = "Alan Turing"

[[sites]]
id = "S1"
name = "North Depot"

[[sites.shifts]]
id = "sh1"
date = "2025-07-18"
start = "22:00"
end = "06:00"
"#;

pub fn night_shift_snapshot() -> ScheduleSnapshot {
    serde_json::from_str(NIGHT_SHIFT_JSON).expect("valid seed")
}
