//! # rota-events
//!
//! Journal of assignment changes made by the rota engine.
//!
//! ## Design Principles
//!
//! - Entries are immutable records of applied mutations
//! - No-op mutations (already assigned, not assigned) never produce entries
//! - Entry ids are monotonic within a journal, starting at 1
//!
//! ## Event Types
//!
//! - `shift.worker_assigned`
//! - `shift.worker_removed`

mod envelope;
mod error;
mod journal;
mod types;

pub use envelope::*;
pub use error::EventError;
pub use journal::Journal;
pub use types::*;
