//! Lookup structures kept alongside the calendars.
//!
//! Calendars never delete shifts, so a shift's position inside its date entry
//! is stable and can be stored directly.

use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

use rota_id::{ShiftId, WorkerId};
use rota_model::{DateKey, DateRange, Site};

/// Position of a shift: date, site position in the schedule, slot within the
/// date entry. Ordering is chronological, then by site, then calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ShiftRef {
    pub date: DateKey,
    pub site: usize,
    pub slot: usize,
}

impl ShiftRef {
    fn bounds(range: Option<&DateRange>) -> (Bound<ShiftRef>, Bound<ShiftRef>) {
        match range {
            Some(r) => (
                Bound::Included(ShiftRef {
                    date: r.start(),
                    site: 0,
                    slot: 0,
                }),
                Bound::Included(ShiftRef {
                    date: r.end(),
                    site: usize::MAX,
                    slot: usize::MAX,
                }),
            ),
            None => (Bound::Unbounded, Bound::Unbounded),
        }
    }
}

/// Shift id -> (date, slot) for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShiftLocator {
    by_shift: HashMap<ShiftId, (DateKey, usize)>,
}

impl ShiftLocator {
    pub fn build(site: &Site) -> Self {
        let mut locator = Self::default();
        for (date, shifts) in site.calendar.days(None) {
            for (slot, shift) in shifts.iter().enumerate() {
                locator.insert(shift.id.clone(), date, slot);
            }
        }
        locator
    }

    pub fn insert(&mut self, shift_id: ShiftId, date: DateKey, slot: usize) {
        self.by_shift.insert(shift_id, (date, slot));
    }

    pub fn locate(&self, shift_id: &str) -> Option<(DateKey, usize)> {
        self.by_shift.get(shift_id).copied()
    }
}

/// Worker id -> ordered set of the shifts it is assigned to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WorkerIndex {
    by_worker: HashMap<WorkerId, BTreeSet<ShiftRef>>,
}

impl WorkerIndex {
    /// Builds the index from scratch by walking every calendar.
    pub fn build<'a>(sites: impl IntoIterator<Item = &'a Site>) -> Self {
        let mut index = Self::default();
        for (site_pos, site) in sites.into_iter().enumerate() {
            for (date, shifts) in site.calendar.days(None) {
                for (slot, shift) in shifts.iter().enumerate() {
                    let shift_ref = ShiftRef {
                        date,
                        site: site_pos,
                        slot,
                    };
                    for worker_id in shift.assigned_workers() {
                        index.insert(worker_id, shift_ref);
                    }
                }
            }
        }
        index
    }

    pub fn insert(&mut self, worker_id: &WorkerId, shift_ref: ShiftRef) -> bool {
        match self.by_worker.get_mut(worker_id.as_str()) {
            Some(refs) => refs.insert(shift_ref),
            None => {
                self.by_worker
                    .insert(worker_id.clone(), BTreeSet::from([shift_ref]));
                true
            }
        }
    }

    pub fn remove(&mut self, worker_id: &str, shift_ref: &ShiftRef) -> bool {
        let Some(refs) = self.by_worker.get_mut(worker_id) else {
            return false;
        };
        let removed = refs.remove(shift_ref);
        if refs.is_empty() {
            self.by_worker.remove(worker_id);
        }
        removed
    }

    /// Shifts of `worker_id` within the optional range, ascending.
    pub fn refs<'a>(
        &'a self,
        worker_id: &str,
        range: Option<&DateRange>,
    ) -> impl Iterator<Item = ShiftRef> + 'a {
        let bounds = ShiftRef::bounds(range);
        self.by_worker
            .get(worker_id)
            .into_iter()
            .flat_map(move |refs| refs.range(bounds).copied())
    }

    /// Reports the first difference against another index.
    pub fn diff(&self, other: &WorkerIndex) -> Option<String> {
        for (worker_id, refs) in &self.by_worker {
            match other.by_worker.get(worker_id) {
                None => return Some(format!("worker {worker_id} missing from rebuilt index")),
                Some(other_refs) if other_refs != refs => {
                    return Some(format!(
                        "worker {worker_id} has {} indexed shifts, calendars hold {}",
                        refs.len(),
                        other_refs.len()
                    ));
                }
                Some(_) => {}
            }
        }

        other
            .by_worker
            .keys()
            .find(|worker_id| !self.by_worker.contains_key(worker_id.as_str()))
            .map(|worker_id| format!("worker {worker_id} assigned in calendars but not indexed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    fn wid(s: &str) -> WorkerId {
        WorkerId::parse(s).unwrap()
    }

    fn at(day: &str, site: usize, slot: usize) -> ShiftRef {
        ShiftRef {
            date: date(day),
            site,
            slot,
        }
    }

    #[test]
    fn test_refs_ordered_and_ranged() {
        let mut index = WorkerIndex::default();
        index.insert(&wid("w1"), at("2025-07-20", 0, 0));
        index.insert(&wid("w1"), at("2025-07-18", 1, 0));
        index.insert(&wid("w1"), at("2025-07-18", 0, 2));

        let all: Vec<_> = index.refs("w1", None).collect();
        assert_eq!(
            all,
            vec![at("2025-07-18", 0, 2), at("2025-07-18", 1, 0), at("2025-07-20", 0, 0)]
        );

        let range = DateRange::new(date("2025-07-19"), date("2025-07-20")).unwrap();
        let ranged: Vec<_> = index.refs("w1", Some(&range)).collect();
        assert_eq!(ranged, vec![at("2025-07-20", 0, 0)]);

        let day = DateRange::day(date("2025-07-18"));
        assert_eq!(index.refs("w1", Some(&day)).count(), 2);
        assert_eq!(index.refs("w9", None).count(), 0);
    }

    #[test]
    fn test_remove_drops_empty_worker() {
        let mut index = WorkerIndex::default();
        index.insert(&wid("w1"), at("2025-07-18", 0, 0));
        assert!(index.remove("w1", &at("2025-07-18", 0, 0)));
        assert!(!index.remove("w1", &at("2025-07-18", 0, 0)));
        assert_eq!(index, WorkerIndex::default());
    }

    #[test]
    fn test_diff_detects_drift() {
        let mut a = WorkerIndex::default();
        let mut b = WorkerIndex::default();
        a.insert(&wid("w1"), at("2025-07-18", 0, 0));
        b.insert(&wid("w1"), at("2025-07-18", 0, 0));
        assert!(a.diff(&b).is_none());

        b.insert(&wid("w2"), at("2025-07-18", 0, 0));
        assert!(a.diff(&b).unwrap().contains("w2"));

        a.insert(&wid("w1"), at("2025-07-19", 0, 0));
        assert!(a.diff(&b).unwrap().contains("w1"));
    }
}
