//! Typed ID definitions for scheduling resources.

use crate::define_id;

// =============================================================================
// Roster and Calendar
// =============================================================================

define_id!(WorkerId, "wkr");
define_id!(SiteId, "site");
define_id!(ShiftId, "shft");

// =============================================================================
// Journal
// =============================================================================

/// Journal event ID is a simple monotonic integer, not string-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(i64);

impl EventId {
    /// The first ID handed out by a fresh journal.
    pub const FIRST: Self = Self(1);

    /// Creates a new EventId from an i64.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying i64 value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns the next event ID.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EventId> for i64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl serde::Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = <i64 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdError;

    #[test]
    fn test_short_ids_accepted() {
        let worker: WorkerId = "w1".parse().unwrap();
        let site: SiteId = "S1".parse().unwrap();
        let shift: ShiftId = "sh1".parse().unwrap();
        assert_eq!(worker.as_str(), "w1");
        assert_eq!(site.to_string(), "S1");
        assert_eq!(shift.as_ref(), "sh1");
    }

    #[test]
    fn test_generated_id_prefix() {
        let id = ShiftId::generate();
        assert!(id.as_str().starts_with("shft_"));
        assert!(ShiftId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn test_generated_ids_unique() {
        let a = WorkerId::generate();
        let b = WorkerId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_id() {
        let result: Result<WorkerId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), IdError::Empty));
    }

    #[test]
    fn test_id_with_whitespace() {
        let result = SiteId::parse("north wing");
        assert!(matches!(
            result.unwrap_err(),
            IdError::InvalidCharacter { found: ' ', .. }
        ));
    }

    #[test]
    fn test_id_too_long() {
        let long = "x".repeat(crate::MAX_ID_LEN + 1);
        assert!(matches!(
            WorkerId::parse(&long).unwrap_err(),
            IdError::TooLong { .. }
        ));
        assert!(WorkerId::parse(&long[..crate::MAX_ID_LEN]).is_ok());
    }

    #[test]
    fn test_id_json_roundtrip() {
        let id = WorkerId::parse("w-42.b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"w-42.b\"");
        let parsed: WorkerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_json_rejects_invalid() {
        let result: Result<ShiftId, _> = serde_json::from_str("\"bad id\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_id_borrow_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(WorkerId::parse("w1").unwrap(), 1);
        assert_eq!(map.get("w1"), Some(&1));
    }

    #[test]
    fn test_event_id_next() {
        let id = EventId::FIRST;
        assert_eq!(id.value(), 1);
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn test_all_id_prefixes_unique() {
        let prefixes = vec![WorkerId::PREFIX, SiteId::PREFIX, ShiftId::PREFIX];

        let unique: std::collections::HashSet<_> = prefixes.iter().collect();
        assert_eq!(prefixes.len(), unique.len(), "Duplicate ID prefixes found!");
    }
}
