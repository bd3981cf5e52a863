//! Random assign/remove sequences keep the schedule consistent.

use std::collections::HashSet;

use proptest::prelude::*;
use rota_engine::Schedule;
use rota_events::AssignmentChange;
use rota_testing::{shift_id, site_id, worker_id, ScheduleBuilder, ShiftBuilder};

const WORKERS: [&str; 4] = ["w1", "w2", "w3", "w4"];
const SHIFTS: [(&str, &str); 5] = [
    ("S1", "a"),
    ("S1", "b"),
    ("S1", "c"),
    ("S2", "d"),
    ("S2", "e"),
];

#[derive(Debug, Clone)]
enum Op {
    Assign { shift: usize, worker: usize },
    Remove { shift: usize, worker: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..SHIFTS.len(), 0..WORKERS.len()).prop_map(|(shift, worker)| Op::Assign { shift, worker }),
        (0..SHIFTS.len(), 0..WORKERS.len()).prop_map(|(shift, worker)| Op::Remove { shift, worker }),
    ]
}

fn schedule() -> Schedule {
    ScheduleBuilder::new()
        .worker("w1", "Ada Lovelace")
        .worker("w2", "Alan Turing")
        .worker("w3", "Grace Hopper")
        .worker("w4", "Edsger Dijkstra")
        .site("S1", "North Depot")
        .site("S2", "South Yard")
        .shift(ShiftBuilder::new("a", "S1", "2025-07-18").staff_required(2))
        .shift(ShiftBuilder::new("b", "S1", "2025-07-18").staff_required(1))
        .shift(ShiftBuilder::new("c", "S1", "2025-07-19").staff_required(0))
        .shift(ShiftBuilder::new("d", "S2", "2025-07-18").staff_required(3))
        .shift(ShiftBuilder::new("e", "S2", "2025-07-21").staff_required(1))
        .build()
}

proptest! {
    #[test]
    fn prop_mutations_keep_schedule_consistent(ops in prop::collection::vec(op(), 0..60)) {
        let mut schedule = schedule();

        for op in &ops {
            let ((site, shift), worker, assign) = match *op {
                Op::Assign { shift, worker } => (SHIFTS[shift], WORKERS[worker], true),
                Op::Remove { shift, worker } => (SHIFTS[shift], WORKERS[worker], false),
            };
            let (site, shift, worker) = (site_id(site), shift_id(shift), worker_id(worker));

            let before = schedule
                .shift(site.as_str(), shift.as_str())
                .map(|s| s.is_assigned(worker.as_str()))
                .unwrap_or(false);

            let changed = if assign {
                schedule.assign_worker_to_shift(&site, &shift, &worker).unwrap().changed()
            } else {
                schedule.remove_worker_from_shift(&site, &shift, &worker).unwrap().changed()
            };
            prop_assert_eq!(changed, before != assign);
        }

        prop_assert!(schedule.verify_indexes().is_ok());

        let understaffed: HashSet<String> = schedule
            .unassigned_shifts(None)
            .into_iter()
            .map(|s| s.shift_id.to_string())
            .collect();

        for (site, shift) in SHIFTS {
            let shift = schedule.shift(site, shift).unwrap();

            let ids: Vec<_> = shift.assigned_workers().collect();
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(ids.len(), unique.len());

            let expected = shift.assigned_count() == 0
                || shift.assigned_count() < shift.staff_required as usize;
            prop_assert_eq!(understaffed.contains(shift.id.as_str()), expected);

            for worker in &ids {
                let listed = schedule
                    .worker_shifts(worker, None)
                    .iter()
                    .filter(|entry| entry.shift_id == shift.id)
                    .count();
                prop_assert_eq!(listed, 1);
            }
        }

        // The journal replays to the current assignment count.
        let net: i64 = schedule
            .journal()
            .iter()
            .map(|event| match event.change() {
                Ok(AssignmentChange::Assigned) => 1,
                Ok(AssignmentChange::Removed) => -1,
                Err(_) => 0,
            })
            .sum();
        let total_assigned: usize = SHIFTS
            .iter()
            .filter_map(|(site, shift)| schedule.shift(site, shift))
            .map(|s| s.assigned_count())
            .sum();
        prop_assert_eq!(net, total_assigned as i64);
    }
}
