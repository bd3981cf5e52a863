//! Journal event types and payloads.

use rota_id::{ShiftId, SiteId, WorkerId};
use rota_model::DateKey;
use serde::{Deserialize, Serialize};

use crate::envelope::EventEnvelope;
use crate::error::EventError;

// =============================================================================
// Event Type Constants
// =============================================================================

/// All event type names as constants.
pub mod event_types {
    pub const SHIFT_WORKER_ASSIGNED: &str = "shift.worker_assigned";
    pub const SHIFT_WORKER_REMOVED: &str = "shift.worker_removed";
}

/// The kind of assignment change recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentChange {
    Assigned,
    Removed,
}

impl AssignmentChange {
    /// Returns the event type string for this change.
    pub fn event_type(&self) -> &'static str {
        match self {
            AssignmentChange::Assigned => event_types::SHIFT_WORKER_ASSIGNED,
            AssignmentChange::Removed => event_types::SHIFT_WORKER_REMOVED,
        }
    }

    /// Parses an event type string.
    pub fn from_event_type(event_type: &str) -> Result<Self, EventError> {
        match event_type {
            event_types::SHIFT_WORKER_ASSIGNED => Ok(AssignmentChange::Assigned),
            event_types::SHIFT_WORKER_REMOVED => Ok(AssignmentChange::Removed),
            other => Err(EventError::UnknownEventType(other.to_string())),
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Payload for `shift.worker_assigned` and `shift.worker_removed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub site_id: SiteId,
    pub shift_id: ShiftId,
    pub worker_id: WorkerId,
    pub date: DateKey,
}

/// A journal entry for an assignment change.
pub type AssignmentEvent = EventEnvelope<AssignmentPayload>;

impl AssignmentEvent {
    /// The change this entry records.
    pub fn change(&self) -> Result<AssignmentChange, EventError> {
        AssignmentChange::from_event_type(&self.event_type)
    }
}
