use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of time slots in one grid column.
pub const MAX_SLOT: u8 = 24;

/// Number of day columns in the grid.
pub const DAY_COUNT: usize = 6;

/// Granularity of the merged-slot marker in raw schedule strings:
/// a fractional slot value steps in halves of one slot.
pub const HALF_SLOT: f64 = 0.5;

/// First slot starts at 09:00.
const FIRST_SLOT_MINUTES: u32 = 9 * 60;
/// Slots 1..=18 are 30-minute periods.
const DAY_SLOT_MINUTES: u32 = 30;
/// Evening slots (19..=24) start every 55 minutes...
const EVENING_STRIDE_MINUTES: u32 = 55;
/// ...and run for 50 minutes each.
const EVENING_SLOT_MINUTES: u32 = 50;
const EVENING_FIRST_SLOT: u8 = 19;

/// Day column of the weekly grid.
///
/// The grid shows six columns, Monday through Saturday. Ordering follows
/// display order, so `Day::index` doubles as the column index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// All days in display order.
    pub const ALL: [Day; DAY_COUNT] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

    /// Column index of this day, `0..DAY_COUNT`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day at the given column index, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    /// Three-letter label used in raw schedule strings.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Day {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.label() == s)
            .ok_or(())
    }
}

/// Minutes after midnight at which the given slot starts.
///
/// Returns `None` for slots outside `[1, MAX_SLOT]`.
pub fn slot_start_minutes(slot: u8) -> Option<u32> {
    if slot == 0 || slot > MAX_SLOT {
        return None;
    }
    let start = if slot < EVENING_FIRST_SLOT {
        FIRST_SLOT_MINUTES + u32::from(slot - 1) * DAY_SLOT_MINUTES
    } else {
        FIRST_SLOT_MINUTES
            + u32::from(EVENING_FIRST_SLOT - 1) * DAY_SLOT_MINUTES
            + u32::from(slot - EVENING_FIRST_SLOT) * EVENING_STRIDE_MINUTES
    };
    Some(start)
}

/// Duration of the given slot in minutes.
pub fn slot_duration_minutes(slot: u8) -> Option<u32> {
    if slot == 0 || slot > MAX_SLOT {
        return None;
    }
    if slot < EVENING_FIRST_SLOT {
        Some(DAY_SLOT_MINUTES)
    } else {
        Some(EVENING_SLOT_MINUTES)
    }
}

/// Human-readable time range for a slot, e.g. `"09:00~09:30"`.
pub fn slot_label(slot: u8) -> Option<String> {
    let start = slot_start_minutes(slot)?;
    let stop = start + slot_duration_minutes(slot)?;
    Some(format!(
        "{:02}:{:02}~{:02}:{:02}",
        start / 60,
        start % 60,
        stop / 60,
        stop % 60
    ))
}

/// Convert a raw slot value into the covering slot number.
///
/// Raw schedule strings may carry a fractional marker (`18.5`) denoting a
/// merged half-period; the value is snapped to the half-slot grid and the
/// covering whole slot is returned. Values outside `[1, MAX_SLOT]` yield
/// `None`.
pub fn covering_slot(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    let snapped = (value / HALF_SLOT).round() * HALF_SLOT;
    let slot = snapped.ceil();
    if slot < 1.0 || slot > f64::from(MAX_SLOT) {
        return None;
    }
    Some(slot as u8)
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
