//! In-memory journal of assignment changes.

use chrono::Utc;
use rota_id::EventId;

use crate::envelope::EventEnvelope;
use crate::error::EventError;
use crate::types::{AssignmentChange, AssignmentEvent, AssignmentPayload};

/// Append-only list of assignment events with monotonic ids.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    next_id: EventId,
    entries: Vec<AssignmentEvent>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time and returns it.
    pub fn record(
        &mut self,
        change: AssignmentChange,
        payload: AssignmentPayload,
    ) -> Result<&AssignmentEvent, EventError> {
        let event = EventEnvelope::builder()
            .event_id(self.next_id)
            .occurred_at(Utc::now())
            .event_type(change.event_type())
            .payload(payload)
            .build()?;

        self.next_id = self.next_id.next();
        self.entries.push(event);
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[AssignmentEvent] {
        &self.entries
    }

    pub fn last(&self) -> Option<&AssignmentEvent> {
        self.entries.last()
    }

    /// Takes all entries out. Ids keep counting from where they were.
    pub fn drain(&mut self) -> Vec<AssignmentEvent> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_id::{ShiftId, SiteId, WorkerId};
    use rota_model::DateKey;

    fn payload(worker: &str) -> AssignmentPayload {
        AssignmentPayload {
            site_id: SiteId::parse("S1").unwrap(),
            shift_id: ShiftId::parse("sh1").unwrap(),
            worker_id: WorkerId::parse(worker).unwrap(),
            date: DateKey::parse("2025-07-18").unwrap(),
        }
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut journal = Journal::new();
        journal.record(AssignmentChange::Assigned, payload("w1")).unwrap();
        journal.record(AssignmentChange::Removed, payload("w1")).unwrap();

        let ids: Vec<_> = journal.entries().iter().map(|e| e.event_id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            journal.last().unwrap().change().unwrap(),
            AssignmentChange::Removed
        );
    }

    #[test]
    fn test_drain_keeps_counter() {
        let mut journal = Journal::new();
        journal.record(AssignmentChange::Assigned, payload("w1")).unwrap();
        let drained = journal.drain();
        assert_eq!(drained.len(), 1);
        assert!(journal.is_empty());

        let next = journal.record(AssignmentChange::Assigned, payload("w2")).unwrap();
        assert_eq!(next.event_id.value(), 2);
    }
}
