//! Camp entity representing a single code camp event.

use chrono::{Days, NaiveDate};

use super::{Location, Talk};

/// A code camp.
///
/// Camps are addressed by their `moniker`, a URL-safe slug that is unique
/// across all camps. A camp owns its [`Location`] and its talks; deleting the
/// camp deletes both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    pub id: i64,
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDate,
    /// Duration in days, at least 1.
    pub length: i32,
    pub location: Location,
    /// Talks in id order. Only populated when the caller asked for them.
    pub talks: Vec<Talk>,
}

impl Camp {
    /// Last day of the camp (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        let extra_days = u64::try_from(self.length.max(1) - 1).unwrap_or(0);
        self.event_date
            .checked_add_days(Days::new(extra_days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if the camp takes place on `date`.
    pub fn is_held_on(&self, date: NaiveDate) -> bool {
        self.event_date <= date && date <= self.end_date()
    }
}
