//! Public data types shared across the engine.
//!
//! This file consolidates the types that cross module boundaries: the
//! lecture record as delivered by the catalog, the placed schedule entry,
//! and the search-surface option set. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::time::Day;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One lecture section as delivered by the catalog.
///
/// The catalog fetch is the source of truth; a `Lecture` is never mutated
/// locally. `schedule` is the raw schedule-string, decoded on demand by
/// [`crate::models::schedule::parse_schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    /// Credit description, e.g. `"3(3)"`. Kept as a string; the credits
    /// filter matches on its decimal prefix.
    pub credits: String,
    pub grade: u8,
    pub major: String,
    /// Raw schedule-string; empty when the section has no fixed meeting.
    #[serde(default)]
    pub schedule: String,
}

/// A single contiguous placement of one lecture on one day within a table.
///
/// Invariants: `range` is non-empty, strictly increasing by 1, and
/// contained in `[1, MAX_SLOT]`. The codec and the grid mapper uphold
/// these by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Day,
    /// 1-based time slots, contiguous and ascending.
    pub range: Vec<u8>,
    pub room: String,
    pub lecture: Lecture,
}

impl ScheduleEntry {
    /// First slot of the placement, used for grid positioning.
    pub fn first_slot(&self) -> u8 {
        self.range.first().copied().unwrap_or(1)
    }

    /// Number of slots the placement spans.
    pub fn span(&self) -> usize {
        self.range.len()
    }

    /// Whether `range` satisfies the entry invariant.
    pub fn range_is_contiguous(&self) -> bool {
        let in_bounds = |&slot: &u8| (1..=crate::models::time::MAX_SLOT).contains(&slot);
        !self.range.is_empty()
            && self.range.windows(2).all(|w| w[1] == w[0] + 1)
            && self.range.iter().all(in_bounds)
    }
}

/// Reference to one placed entry: table id plus positional index.
///
/// The drag surface identifies the dragged element with the composite id
/// `"{table_id}:{index}"`; this is its parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryHandle {
    pub table_id: String,
    pub index: usize,
}

impl EntryHandle {
    pub fn new(table_id: impl Into<String>, index: usize) -> Self {
        Self {
            table_id: table_id.into(),
            index,
        }
    }
}

impl fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table_id, self.index)
    }
}

impl FromStr for EntryHandle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (table_id, index) = s.rsplit_once(':').ok_or(())?;
        if table_id.is_empty() {
            return Err(());
        }
        let index = index.parse().map_err(|_| ())?;
        Ok(Self {
            table_id: table_id.to_string(),
            index,
        })
    }
}

/// Filter options of the search surface.
///
/// Every field is vacuously true for filtering purposes when empty/unset;
/// `Default` therefore matches the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    /// Case-insensitive substring matched against title or id.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub grades: Vec<u8>,
    #[serde(default)]
    pub days: Vec<Day>,
    /// Slot numbers; a lecture matches when any meeting intersects them.
    #[serde(default)]
    pub times: Vec<u8>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default)]
    pub credits: Option<u8>,
}

/// Target that opened the search surface: the table to add into, and the
/// grid cell (if any) that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTarget {
    pub table_id: String,
    #[serde(default)]
    pub day: Option<Day>,
    #[serde(default)]
    pub time: Option<u8>,
}

impl SearchTarget {
    /// Target without a triggering cell (the plain "add" button).
    pub fn table(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            day: None,
            time: None,
        }
    }

    /// Target seeded from a clicked grid cell.
    pub fn cell(table_id: impl Into<String>, day: Day, time: u8) -> Self {
        Self {
            table_id: table_id.into(),
            day: Some(day),
            time: Some(time),
        }
    }
}
