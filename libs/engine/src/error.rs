//! Engine error types.

use rota_events::EventError;
use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::ModelError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors returned by engine mutations and construction.
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    #[error("site not found: {0}")]
    SiteNotFound(SiteId),

    #[error("shift {shift_id} not found at site {site_id}")]
    ShiftNotFound { site_id: SiteId, shift_id: ShiftId },

    #[error("worker not found: {0}")]
    WorkerNotFound(WorkerId),

    #[error("duplicate site id: {0}")]
    DuplicateSite(SiteId),

    #[error("shift {shift_id} is filed for site {actual}, not {expected}")]
    SiteMismatch {
        shift_id: ShiftId,
        expected: SiteId,
        actual: SiteId,
    },

    #[error("invalid input: {0}")]
    Invalid(#[from] ModelError),

    #[error("worker index out of sync: {0}")]
    IndexDrift(String),

    #[error("journal error: {0}")]
    Journal(#[from] EventError),
}

impl EngineError {
    /// Returns true if a referenced site, shift or worker does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::SiteNotFound(_)
                | EngineError::ShiftNotFound { .. }
                | EngineError::WorkerNotFound(_)
        )
    }

    /// Returns true if the caller supplied a malformed or conflicting record.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::Invalid(_) | EngineError::DuplicateSite(_) | EngineError::SiteMismatch { .. }
        )
    }
}
