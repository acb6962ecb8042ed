//! Grid coordinate mapping for drag gestures.
//!
//! Converts raw pixel deltas from the drag surface into day/slot cell
//! deltas and applies them to placed entries with clamping. The cell
//! geometry mirrors the rendered grid: a 120px time-label column and a
//! 40px day-header row frame 80x30px cells.

use crate::api::ScheduleEntry;
use crate::models::time::{Day, DAY_COUNT, MAX_SLOT};

pub const CELL_WIDTH: f64 = 80.0;
pub const CELL_HEIGHT: f64 = 30.0;
/// Width of the time-label column left of the first day column.
pub const GRID_LEFT: f64 = 120.0;
/// Height of the day-header row above the first slot row.
pub const GRID_TOP: f64 = 40.0;

/// Convert a pixel displacement into whole-cell day/slot deltas.
///
/// Both axes divide by the cell size and round to the nearest whole cell,
/// so a drag must cross at least half a cell to register as a move. This
/// keeps jitter from triggering moves.
pub fn pixel_delta_to_cell_delta(dx: f64, dy: f64) -> (i32, i32) {
    (
        (dx / CELL_WIDTH).round() as i32,
        (dy / CELL_HEIGHT).round() as i32,
    )
}

/// Apply a cell delta to an entry, clamping to the grid.
///
/// The day index clamps to `[0, DAY_COUNT-1]`; each slot clamps to
/// `[1, MAX_SLOT]` independently. Clamping only one end of a multi-slot
/// range compresses its length; that is accepted behavior, and slots
/// pinned onto the same boundary value are deduplicated so the entry
/// invariant holds.
///
/// Returns `None` when neither the day nor any slot changed after
/// clamping, so callers can skip the store mutation entirely.
pub fn apply_move(entry: &ScheduleEntry, day_delta: i32, slot_delta: i32) -> Option<ScheduleEntry> {
    let day_index = entry.day.index() as i32;
    let new_day_index = (day_index + day_delta).clamp(0, DAY_COUNT as i32 - 1) as usize;

    let mut new_range: Vec<u8> = Vec::with_capacity(entry.range.len());
    for &slot in &entry.range {
        let moved = (i32::from(slot) + slot_delta).clamp(1, i32::from(MAX_SLOT)) as u8;
        if new_range.last() != Some(&moved) {
            new_range.push(moved);
        }
    }

    let new_day = Day::ALL[new_day_index];
    if new_day == entry.day && new_range == entry.range {
        return None;
    }

    Some(ScheduleEntry {
        day: new_day,
        range: new_range,
        room: entry.room.clone(),
        lecture: entry.lecture.clone(),
    })
}

/// Clamp a visual drag displacement to the grid's pixel bounds.
///
/// The drag surface snaps the dragged block to whole cells and keeps it
/// inside the grid while the gesture is still in progress. This runs
/// before [`pixel_delta_to_cell_delta`] and is independent of it: it
/// constrains what the user sees, not the resulting cell delta.
pub fn clamp_drag_displacement(entry: &ScheduleEntry, dx: f64, dy: f64) -> (f64, f64) {
    let left_index = entry.day.index() as f64;
    let top_index = f64::from(entry.first_slot() - 1);
    let span = entry.span() as f64;

    let snapped_x = (dx / CELL_WIDTH).round() * CELL_WIDTH;
    let snapped_y = (dy / CELL_HEIGHT).round() * CELL_HEIGHT;

    let min_x = -left_index * CELL_WIDTH;
    let max_x = (DAY_COUNT as f64 - 1.0 - left_index) * CELL_WIDTH;
    let min_y = -top_index * CELL_HEIGHT;
    let max_y = (f64::from(MAX_SLOT) - span - top_index) * CELL_HEIGHT;

    (snapped_x.clamp(min_x, max_x), snapped_y.clamp(min_y, max_y))
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod grid_tests;
