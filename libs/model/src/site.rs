//! Sites and their calendars.

use rota_id::SiteId;
use serde::{Deserialize, Serialize};

use crate::calendar::ShiftCalendar;

/// Site status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteStatus::Active => write!(f, "active"),
            SiteStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A physical location with its own shift calendar.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub status: SiteStatus,
    pub calendar: ShiftCalendar,
}

impl Site {
    /// Creates an active site with an empty calendar.
    pub fn new(id: SiteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: SiteStatus::Active,
            calendar: ShiftCalendar::new(),
        }
    }

    pub fn with_status(mut self, status: SiteStatus) -> Self {
        self.status = status;
        self
    }
}
