//! Mutation outcomes.

use serde::Serialize;

/// Result of a successful assign call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOutcome {
    /// The worker was appended to the shift.
    Assigned,
    /// The worker was already on the shift; nothing changed.
    AlreadyAssigned,
}

impl AssignOutcome {
    /// True when the call mutated the shift.
    pub fn changed(&self) -> bool {
        matches!(self, AssignOutcome::Assigned)
    }
}

impl std::fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignOutcome::Assigned => write!(f, "assigned"),
            AssignOutcome::AlreadyAssigned => write!(f, "already assigned"),
        }
    }
}

/// Result of a successful remove call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    /// The worker was taken off the shift.
    Removed,
    /// The worker was not on the shift; nothing changed.
    NotAssigned,
}

impl RemoveOutcome {
    /// True when the call mutated the shift.
    pub fn changed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

impl std::fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveOutcome::Removed => write!(f, "removed"),
            RemoveOutcome::NotAssigned => write!(f, "not assigned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AssignOutcome::Assigned, true, "assigned", "\"assigned\"")]
    #[case(AssignOutcome::AlreadyAssigned, false, "already assigned", "\"already_assigned\"")]
    fn test_assign_outcome(
        #[case] outcome: AssignOutcome,
        #[case] changed: bool,
        #[case] display: &str,
        #[case] json: &str,
    ) {
        assert_eq!(outcome.changed(), changed);
        assert_eq!(outcome.to_string(), display);
        assert_eq!(serde_json::to_string(&outcome).unwrap(), json);
    }

    #[rstest]
    #[case(RemoveOutcome::Removed, true, "removed")]
    #[case(RemoveOutcome::NotAssigned, false, "not assigned")]
    fn test_remove_outcome(#[case] outcome: RemoveOutcome, #[case] changed: bool, #[case] display: &str) {
        assert_eq!(outcome.changed(), changed);
        assert_eq!(outcome.to_string(), display);
    }
}
