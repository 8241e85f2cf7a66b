use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column the todo list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    CreationDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The active ordering. Exactly one key/direction pair at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: SortKey::CreationDate,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header-click semantics: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Inclusive creation-date range. Both bounds unset means no filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateFilter {
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether `instant` falls inside the range. Bounds compare on the full
    /// timestamp; a date-only `to` bound does not extend to end-of-day.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let after_from = self.from.is_none_or(|from| instant >= from);
        let before_to = self.to.is_none_or(|to| instant <= to);
        after_from && before_to
    }
}

/// Parse one filter bound typed by the user. Accepts `YYYY-MM-DD`,
/// `YYYY-MM-DDTHH:MM[:SS]`, or RFC 3339. Empty or unparseable text means
/// the bound is unset, never an error.
pub fn parse_bound(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A single todo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the data source; unique and stable
    pub id: u64,
    pub title: String,
    /// Informational only — never mutated here
    pub completed: bool,
    /// Starts out equal to `title` at load time, independently editable after
    pub description: String,
    /// Synthesized once at load time, never recomputed
    pub creation_date: DateTime<Utc>,
}

impl Todo {
    /// Date as shown in the list column
    pub fn display_date(&self) -> String {
        self.creation_date.format("%m/%d/%Y").to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
