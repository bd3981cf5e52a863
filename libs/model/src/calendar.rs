//! Per-site shift calendar.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::Serialize;

use crate::error::{ModelError, ModelResult};
use crate::shift::Shift;
use crate::time::{DateKey, DateRange};

/// Shifts of one site keyed by canonical date.
///
/// Dates iterate in ascending order; shifts within a date keep insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ShiftCalendar {
    days: BTreeMap<DateKey, Vec<Shift>>,
}

impl ShiftCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shift under its date. Shift ids are unique per calendar.
    pub fn insert(&mut self, shift: Shift) -> ModelResult<()> {
        shift.validate()?;

        if self.find(shift.id.as_str()).is_some() {
            return Err(ModelError::DuplicateShift(shift.id));
        }

        self.days.entry(shift.date).or_default().push(shift);
        Ok(())
    }

    /// Shifts on exactly `date`; empty when the date has no entry.
    pub fn on(&self, date: DateKey) -> &[Shift] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if `date` has at least one shift.
    pub fn has_entry(&self, date: DateKey) -> bool {
        !self.on(date).is_empty()
    }

    /// Scans every date for `shift_id` and returns the date it is filed under.
    pub fn find(&self, shift_id: &str) -> Option<DateKey> {
        self.days.iter().find_map(|(date, shifts)| {
            shifts
                .iter()
                .any(|s| s.id.as_str() == shift_id)
                .then_some(*date)
        })
    }

    pub fn get(&self, shift_id: &str) -> Option<&Shift> {
        self.find(shift_id)
            .and_then(|date| self.get_on(date, shift_id))
    }

    pub fn get_mut(&mut self, shift_id: &str) -> Option<&mut Shift> {
        let date = self.find(shift_id)?;
        self.get_on_mut(date, shift_id)
    }

    /// Looks up a shift when its date is already known.
    pub fn get_on(&self, date: DateKey, shift_id: &str) -> Option<&Shift> {
        self.on(date).iter().find(|s| s.id.as_str() == shift_id)
    }

    pub fn get_on_mut(&mut self, date: DateKey, shift_id: &str) -> Option<&mut Shift> {
        self.days
            .get_mut(&date)?
            .iter_mut()
            .find(|s| s.id.as_str() == shift_id)
    }

    /// Dates that have an entry, ascending.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.keys().copied()
    }

    /// Date entries within an optional inclusive range, ascending.
    pub fn days(&self, range: Option<&DateRange>) -> impl Iterator<Item = (DateKey, &[Shift])> {
        let bounds = match range {
            Some(r) => (Bound::Included(r.start()), Bound::Included(r.end())),
            None => (Bound::Unbounded, Bound::Unbounded),
        };
        self.days
            .range(bounds)
            .map(|(date, shifts)| (*date, shifts.as_slice()))
    }

    /// Every shift, ascending by date.
    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.days.values().flatten()
    }

    /// Number of shifts across all dates.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ShiftTime;
    use rota_id::{ShiftId, SiteId};

    fn date(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    fn shift(id: &str, day: &str) -> Shift {
        Shift::new(
            ShiftId::parse(id).unwrap(),
            SiteId::parse("S1").unwrap(),
            "North Depot",
            date(day),
            ShiftTime::parse("09:00").unwrap(),
            ShiftTime::parse("17:00").unwrap(),
        )
    }

    fn calendar() -> ShiftCalendar {
        let mut cal = ShiftCalendar::new();
        cal.insert(shift("sh3", "2025-07-20")).unwrap();
        cal.insert(shift("sh1", "2025-07-18")).unwrap();
        cal.insert(shift("sh2", "2025-07-18")).unwrap();
        cal
    }

    #[test]
    fn test_shifts_on_date() {
        let cal = calendar();
        let ids: Vec<_> = cal.on(date("2025-07-18")).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sh1", "sh2"]);
        assert!(cal.on(date("2025-07-19")).is_empty());
        assert!(cal.has_entry(date("2025-07-20")));
        assert!(!cal.has_entry(date("2025-07-19")));
    }

    #[test]
    fn test_duplicate_shift_rejected_across_dates() {
        let mut cal = calendar();
        let result = cal.insert(shift("sh1", "2025-07-25"));
        assert!(matches!(result, Err(ModelError::DuplicateShift(_))));
        assert_eq!(cal.len(), 3);
    }

    #[test]
    fn test_equal_start_and_end_not_filed() {
        let mut cal = calendar();
        let mut s = shift("sh9", "2025-07-21");
        s.end = s.start;

        let result = cal.insert(s);
        assert!(matches!(result, Err(ModelError::ZeroLengthShift(_))));
        assert!(!cal.has_entry(date("2025-07-21")));
    }

    #[test]
    fn test_find_and_get() {
        let cal = calendar();
        assert_eq!(cal.find("sh3"), Some(date("2025-07-20")));
        assert_eq!(cal.find("nope"), None);
        assert_eq!(cal.get("sh2").unwrap().date, date("2025-07-18"));
        assert!(cal.get_on(date("2025-07-20"), "sh2").is_none());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut cal = calendar();
        cal.get_mut("sh3").unwrap().staff_required = 4;
        assert_eq!(cal.on(date("2025-07-20"))[0].staff_required, 4);
        assert!(cal.get_mut("nope").is_none());
    }

    #[test]
    fn test_days_ascending_and_ranged() {
        let cal = calendar();
        let all: Vec<_> = cal.days(None).map(|(d, _)| d.to_string()).collect();
        assert_eq!(all, vec!["2025-07-18", "2025-07-20"]);

        let range = DateRange::new(date("2025-07-19"), date("2025-07-20")).unwrap();
        let ranged: Vec<_> = cal.days(Some(&range)).map(|(d, _)| d.to_string()).collect();
        assert_eq!(ranged, vec!["2025-07-20"]);

        let edge = DateRange::day(date("2025-07-18"));
        assert_eq!(cal.days(Some(&edge)).count(), 1);
    }

    #[test]
    fn test_iter_and_len() {
        let cal = calendar();
        let ids: Vec<_> = cal.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sh1", "sh2", "sh3"]);
        assert_eq!(cal.len(), 3);
        assert!(!cal.is_empty());
        assert!(ShiftCalendar::new().is_empty());
    }

    #[test]
    fn test_calendar_serializes_by_date() {
        let json = serde_json::to_value(calendar()).unwrap();
        assert_eq!(json["2025-07-18"].as_array().unwrap().len(), 2);
        assert_eq!(json["2025-07-20"][0]["id"], "sh3");
    }
}
