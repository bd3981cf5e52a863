//! # rota-engine
//!
//! The assignment engine. A [`Schedule`] owns the worker roster and every
//! site's shift calendar and answers the cross-cutting questions:
//!
//! - which shifts a worker is committed to ([`Schedule::worker_shifts`])
//! - who staffs a site, per day ([`Schedule::site_staff`])
//! - which shifts still lack staff ([`Schedule::unassigned_shifts`])
//! - who is free on a day ([`Schedule::worker_availability`])
//! - what each site looks like on a day ([`Schedule::site_occupancy`])
//!
//! The only two mutations are [`Schedule::assign_worker_to_shift`] and
//! [`Schedule::remove_worker_from_shift`].
//!
//! # Invariants
//!
//! - The shift assignment lists inside the calendars are the source of truth
//! - The worker index always mirrors them; it is updated in the same call that
//!   mutates a shift and can be checked with [`Schedule::verify_indexes`]
//! - Queries never fail: unknown ids produce empty results
//! - Mutations report "not found" and "invalid input" as [`EngineError`] and
//!   "nothing to do" as an `Ok` outcome whose `changed()` is false

mod error;
mod index;
mod mutations;
mod outcome;
mod queries;
mod schedule;
mod snapshot;
mod views;

pub use error::{EngineError, EngineResult};
pub use outcome::{AssignOutcome, RemoveOutcome};
pub use schedule::Schedule;
pub use snapshot::{ScheduleSnapshot, ShiftRecord, SiteSnapshot};
pub use views::{
    OccupiedShift, SiteOccupancy, SiteStaffDay, StaffMember, UnassignedShift,
    WorkerAvailability, WorkerShift,
};
