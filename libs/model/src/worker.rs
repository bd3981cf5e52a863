//! Worker records.

use rota_id::WorkerId;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Worker status.
///
/// Advisory only: the engine never refuses an assignment because of it, but
/// availability queries consider `Active` workers alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    #[default]
    Active,
    Disabled,
    Stale,
}

impl std::fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerStatus::Active => write!(f, "active"),
            WorkerStatus::Disabled => write!(f, "disabled"),
            WorkerStatus::Stale => write!(f, "stale"),
        }
    }
}

/// A person eligible to be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,

    /// Display name.
    pub name: String,

    /// Two-letter initials. Derived from the name when left empty.
    #[serde(default)]
    pub initials: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default)]
    pub status: WorkerStatus,

    /// Display color (e.g. `#3b82f6`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Worker {
    /// Creates an active worker with initials derived from `name`.
    pub fn new(id: WorkerId, name: impl Into<String>) -> ModelResult<Self> {
        Self {
            id,
            name: name.into(),
            initials: String::new(),
            email: None,
            phone: None,
            status: WorkerStatus::Active,
            color: None,
        }
        .normalized()
    }

    pub fn with_initials(mut self, initials: impl Into<String>) -> ModelResult<Self> {
        self.initials = initials.into();
        self.normalized()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_status(mut self, status: WorkerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }

    /// Fills in missing initials, uppercases them and validates the record.
    pub fn normalized(mut self) -> ModelResult<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ModelError::EmptyName(self.id));
        }

        let initials = self.initials.trim();
        self.initials = if initials.is_empty() {
            derive_initials(&self.name)
        } else {
            initials.to_uppercase()
        };

        self.validate()?;
        Ok(self)
    }

    /// Checks the name and initials.
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName(self.id.clone()));
        }

        let letters = self.initials.chars().filter(|c| c.is_alphabetic()).count();
        if letters != 2 || self.initials.chars().count() != 2 {
            return Err(ModelError::InvalidInitials {
                worker_id: self.id.clone(),
                initials: self.initials.clone(),
            });
        }

        Ok(())
    }
}

/// Derives two-letter initials from a display name.
///
/// Multi-word names use the first letter of the first and last word;
/// single-word names use their first two letters. The result may be shorter
/// than two letters when the name does not contain enough of them.
pub fn derive_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let first_letter = |word: &str| word.chars().find(|c| c.is_alphabetic());

    let letters: Vec<char> = match words.as_slice() {
        [] => Vec::new(),
        [only] => only.chars().filter(|c| c.is_alphabetic()).take(2).collect(),
        [first, .., last] => first_letter(*first)
            .into_iter()
            .chain(first_letter(*last))
            .collect(),
    };

    letters.into_iter().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> WorkerId {
        WorkerId::parse(s).unwrap()
    }

    #[test]
    fn test_derive_initials() {
        assert_eq!(derive_initials("Ada Lovelace"), "AL");
        assert_eq!(derive_initials("grace brewster murray hopper"), "GH");
        assert_eq!(derive_initials("Cher"), "CH");
        assert_eq!(derive_initials("  ada   lovelace "), "AL");
        assert_eq!(derive_initials("Q"), "Q");
    }

    #[test]
    fn test_new_worker_defaults() {
        let worker = Worker::new(id("w1"), "Ada Lovelace").unwrap();
        assert_eq!(worker.initials, "AL");
        assert!(worker.is_active());
        assert!(worker.email.is_none());
    }

    #[test]
    fn test_explicit_initials_uppercased() {
        let worker = Worker::new(id("w1"), "Ada Lovelace")
            .unwrap()
            .with_initials("ak")
            .unwrap();
        assert_eq!(worker.initials, "AK");
    }

    #[test]
    fn test_invalid_initials_rejected() {
        let result = Worker::new(id("w1"), "Ada Lovelace")
            .unwrap()
            .with_initials("A1");
        assert!(matches!(result, Err(ModelError::InvalidInitials { .. })));

        let result = Worker::new(id("w2"), "Q");
        assert!(matches!(result, Err(ModelError::InvalidInitials { .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Worker::new(id("w1"), "   ");
        assert!(matches!(result, Err(ModelError::EmptyName(_))));
    }

    #[test]
    fn test_worker_json_fills_initials() {
        let json = r#"{"id":"w7","name":"Alan Turing","status":"stale"}"#;
        let worker: Worker = serde_json::from_str(json).unwrap();
        let worker = worker.normalized().unwrap();
        assert_eq!(worker.initials, "AT");
        assert_eq!(worker.status, WorkerStatus::Stale);
    }
}
