//! Per-table entry state.

use crate::api::{Day, ScheduleEntry};
use crate::services::grid;
use crate::store::error::{StoreError, StoreResult};

/// Owns the ordered entry list of one table.
///
/// Entry order is insertion order and is what positional indices refer
/// to; a removal shifts later indices down, so callers must not reuse
/// indices cached before a removal.
///
/// A store is constructed exactly once per table id with its seed; there
/// is no re-seed path, so no later change to the seed's origin can reset
/// a table behind the user's back.
#[derive(Debug, Clone)]
pub struct TableStore {
    table_id: String,
    entries: Vec<ScheduleEntry>,
}

impl TableStore {
    /// Construct the store for `table_id`, consuming its seed.
    pub fn new(table_id: impl Into<String>, seed: Vec<ScheduleEntry>) -> Self {
        Self {
            table_id: table_id.into(),
            entries: seed,
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. No dedup and no overlap check: overlapping
    /// placements are allowed by design.
    pub fn add(&mut self, entry: ScheduleEntry) {
        tracing::debug!(table_id = %self.table_id, lecture = %entry.lecture.id, "add entry");
        self.entries.push(entry);
    }

    /// Append several entries (the multi-day expansion of one lecture).
    pub fn add_all(&mut self, entries: impl IntoIterator<Item = ScheduleEntry>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Delete the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> StoreResult<ScheduleEntry> {
        if index >= self.entries.len() {
            return Err(StoreError::index_out_of_range(
                &self.table_id,
                index,
                self.entries.len(),
            ));
        }
        tracing::debug!(table_id = %self.table_id, index, "remove entry");
        Ok(self.entries.remove(index))
    }

    /// Replace the entry at `index`.
    pub fn update(&mut self, index: usize, entry: ScheduleEntry) -> StoreResult<()> {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(StoreError::index_out_of_range(
                &self.table_id,
                index,
                self.entries.len(),
            )),
        }
    }

    /// Delete the first entry occupying the given grid cell.
    ///
    /// This is the delete path triggered by clicking a placed entry;
    /// nothing at that location is a silent no-op.
    pub fn remove_by_location(&mut self, day: Day, slot: u8) -> Option<ScheduleEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.day == day && entry.range.contains(&slot))?;
        // Position came from the list we are removing from.
        self.remove(index).ok()
    }

    /// Apply a finished drag gesture to the entry at `index`.
    ///
    /// The pixel delta converts to a cell delta (§ grid mapper), and the
    /// store is only touched when the clamped move actually changes the
    /// entry. Returns whether an update happened.
    pub fn move_by_drag(&mut self, index: usize, dx: f64, dy: f64) -> StoreResult<bool> {
        let entry = self.entries.get(index).ok_or_else(|| {
            StoreError::index_out_of_range(&self.table_id, index, self.entries.len())
        })?;

        let (day_delta, slot_delta) = grid::pixel_delta_to_cell_delta(dx, dy);
        match grid::apply_move(entry, day_delta, slot_delta) {
            Some(moved) => {
                tracing::debug!(
                    table_id = %self.table_id,
                    index,
                    day_delta,
                    slot_delta,
                    "entry moved"
                );
                self.entries[index] = moved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
