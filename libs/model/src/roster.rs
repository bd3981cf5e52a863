//! The worker roster.

use std::collections::HashMap;

use rota_id::WorkerId;

use crate::error::{ModelError, ModelResult};
use crate::worker::{Worker, WorkerStatus};

/// Flat, insertion-ordered collection of workers with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct WorkerRoster {
    workers: Vec<Worker>,
    by_id: HashMap<WorkerId, usize>,
}

impl WorkerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker after normalizing it. Duplicate ids are rejected.
    pub fn insert(&mut self, worker: Worker) -> ModelResult<&Worker> {
        if self.by_id.contains_key(&worker.id) {
            return Err(ModelError::DuplicateWorker(worker.id));
        }

        let worker = worker.normalized()?;
        let pos = self.workers.len();
        self.by_id.insert(worker.id.clone(), pos);
        self.workers.push(worker);
        Ok(&self.workers[pos])
    }

    pub fn get(&self, id: &str) -> Option<&Worker> {
        self.by_id.get(id).map(|&pos| &self.workers[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Updates a worker's status, returning the previous one.
    pub fn set_status(&mut self, id: &str, status: WorkerStatus) -> Option<WorkerStatus> {
        let pos = *self.by_id.get(id)?;
        Some(std::mem::replace(&mut self.workers[pos].status, status))
    }

    /// Iterates workers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Iterates `Active` workers in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|w| w.is_active())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: &str, name: &str) -> Worker {
        Worker::new(WorkerId::parse(id).unwrap(), name).unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut roster = WorkerRoster::new();
        roster.insert(worker("w1", "Ada Lovelace")).unwrap();
        roster.insert(worker("w2", "Alan Turing")).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("w2").unwrap().name, "Alan Turing");
        assert!(roster.get("w3").is_none());
        assert!(roster.contains("w1"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut roster = WorkerRoster::new();
        roster.insert(worker("w1", "Ada Lovelace")).unwrap();
        let result = roster.insert(worker("w1", "Someone Else"));
        assert!(matches!(result, Err(ModelError::DuplicateWorker(_))));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut roster = WorkerRoster::new();
        for (id, name) in [("w3", "Cy Young"), ("w1", "Ada Lovelace"), ("w2", "Bo Jackson")] {
            roster.insert(worker(id, name)).unwrap();
        }
        let ids: Vec<_> = roster.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w3", "w1", "w2"]);
    }

    #[test]
    fn test_active_filter_and_status_change() {
        let mut roster = WorkerRoster::new();
        roster.insert(worker("w1", "Ada Lovelace")).unwrap();
        roster
            .insert(worker("w2", "Alan Turing").with_status(WorkerStatus::Disabled))
            .unwrap();

        let active: Vec<_> = roster.active().map(|w| w.id.as_str()).collect();
        assert_eq!(active, vec!["w1"]);

        let previous = roster.set_status("w1", WorkerStatus::Stale);
        assert_eq!(previous, Some(WorkerStatus::Active));
        assert_eq!(roster.active().count(), 0);
        assert_eq!(roster.set_status("missing", WorkerStatus::Active), None);
    }
}
