//! Event envelope - the common wrapper for journal entries.

use chrono::{DateTime, Utc};
use rota_id::EventId;
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// The event envelope - common metadata for every journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope<P> {
    /// Monotonic identifier within the journal.
    pub event_id: EventId,

    /// When the mutation was applied.
    pub occurred_at: DateTime<Utc>,

    /// The event type (e.g., "shift.worker_assigned").
    pub event_type: String,

    /// Schema version for this event type.
    pub event_version: i32,

    /// Event-specific payload.
    pub payload: P,
}

impl<P> EventEnvelope<P> {
    /// Creates a new event envelope builder.
    pub fn builder() -> EventEnvelopeBuilder<P> {
        EventEnvelopeBuilder::new()
    }
}

impl<P: Serialize> EventEnvelope<P> {
    /// Renders the entry as a single JSON line.
    pub fn to_json_line(&self) -> Result<String, EventError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for constructing event envelopes.
#[derive(Debug)]
pub struct EventEnvelopeBuilder<P> {
    event_id: Option<EventId>,
    occurred_at: Option<DateTime<Utc>>,
    event_type: Option<String>,
    event_version: i32,
    payload: Option<P>,
}

impl<P> EventEnvelopeBuilder<P> {
    pub fn new() -> Self {
        Self {
            event_id: None,
            occurred_at: None,
            event_type: None,
            event_version: 1,
            payload: None,
        }
    }

    pub fn event_id(mut self, id: EventId) -> Self {
        self.event_id = Some(id);
        self
    }

    pub fn occurred_at(mut self, ts: DateTime<Utc>) -> Self {
        self.occurred_at = Some(ts);
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn event_version(mut self, version: i32) -> Self {
        self.event_version = version;
        self
    }

    pub fn payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Builds the event envelope. `occurred_at` defaults to now.
    pub fn build(self) -> Result<EventEnvelope<P>, EventError> {
        Ok(EventEnvelope {
            event_id: self.event_id.ok_or(EventError::MissingField("event_id"))?,
            occurred_at: self.occurred_at.unwrap_or_else(Utc::now),
            event_type: self
                .event_type
                .ok_or(EventError::MissingField("event_type"))?,
            event_version: self.event_version,
            payload: self.payload.ok_or(EventError::MissingField("payload"))?,
        })
    }
}

impl<P> Default for EventEnvelopeBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_envelope_builder() {
        let envelope = EventEnvelope::<serde_json::Value>::builder()
            .event_id(EventId::new(1))
            .event_type("shift.worker_assigned")
            .payload(serde_json::json!({"worker_id": "w1"}))
            .build()
            .unwrap();

        assert_eq!(envelope.event_type, "shift.worker_assigned");
        assert_eq!(envelope.event_version, 1);
        assert_eq!(envelope.event_id, EventId::FIRST);
    }

    #[test]
    fn test_builder_missing_field() {
        let result = EventEnvelope::<serde_json::Value>::builder()
            .event_type("shift.worker_assigned")
            .payload(serde_json::json!({}))
            .build();
        assert!(matches!(result, Err(EventError::MissingField("event_id"))));
    }

    #[test]
    fn test_json_line() {
        let envelope = EventEnvelope::builder()
            .event_id(EventId::new(7))
            .occurred_at(DateTime::from_timestamp(0, 0).unwrap())
            .event_type("shift.worker_removed")
            .payload(serde_json::json!({"worker_id": "w1"}))
            .build()
            .unwrap();

        let line = envelope.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"event_id\":7"));
        assert!(line.contains("1970-01-01T00:00:00Z"));
    }
}
