//! # rota-model
//!
//! Data model for the rota scheduling engine.
//!
//! ## Collections
//!
//! - [`WorkerRoster`]: flat, insertion-ordered list of workers with lookup by id
//! - [`ShiftCalendar`]: per-site shifts keyed by canonical calendar date
//!
//! The two collections are owned independently. Cross-cutting questions
//! (who works where, what is understaffed) are answered by `rota-engine`.
//!
//! ## Dates
//!
//! Calendar keys are [`DateKey`] values, so every date is canonical
//! (`YYYY-MM-DD`) by construction. Shift times are [`ShiftTime`] values
//! (`HH:mm`); a shift whose end is before its start runs into the next day.

mod calendar;
mod error;
mod roster;
mod shift;
mod site;
mod time;
mod worker;

pub use calendar::ShiftCalendar;
pub use error::{ModelError, ModelResult};
pub use roster::WorkerRoster;
pub use shift::{Assignment, Shift, ShiftStatus};
pub use site::{Site, SiteStatus};
pub use time::{DateKey, DateRange, ShiftTime};
pub use worker::{derive_initials, Worker, WorkerStatus};

pub use rota_id::{ShiftId, SiteId, WorkerId};
