//! Error types for model construction and validation.

use rota_id::{IdError, ShiftId, WorkerId};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised when a record or collection would become malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A date string could not be normalized to `YYYY-MM-DD`.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// A time string is not `HH:mm`.
    #[error("invalid time '{input}': expected HH:mm")]
    InvalidTime { input: String },

    /// Range start falls after range end.
    #[error("date range start {start} is after end {end}")]
    InvertedRange { start: String, end: String },

    /// A worker record has no display name.
    #[error("worker {0} has an empty name")]
    EmptyName(WorkerId),

    /// Initials are not exactly two letters.
    #[error("invalid initials '{initials}' for worker {worker_id}")]
    InvalidInitials {
        worker_id: WorkerId,
        initials: String,
    },

    /// The roster already holds a worker with this id.
    #[error("duplicate worker id: {0}")]
    DuplicateWorker(WorkerId),

    /// The calendar already holds a shift with this id.
    #[error("duplicate shift id: {0}")]
    DuplicateShift(ShiftId),

    /// Start and end time are equal.
    #[error("shift {0} starts and ends at the same time")]
    ZeroLengthShift(ShiftId),

    /// A shift lists the same worker twice.
    #[error("worker {worker_id} is listed twice on shift {shift_id}")]
    DuplicateAssignment {
        shift_id: ShiftId,
        worker_id: WorkerId,
    },

    /// An identifier failed validation.
    #[error(transparent)]
    Id(#[from] IdError),
}
