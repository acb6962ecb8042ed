//! Multi-table registry: table lifecycle, duplication, clone provenance.

use crate::api::{EntryHandle, ScheduleEntry};
use crate::store::error::{StoreError, StoreResult};
use crate::store::table::TableStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence appended to generated ids; two tables created in
/// the same millisecond still get distinct ids.
static TABLE_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_table_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = TABLE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("timetable-{millis}-{seq}")
}

/// Owns the set of tables: display order, one [`TableStore`] per id, and
/// the record of which table each duplicate was copied from.
///
/// Invariant: at least one table id always exists. Tables are created and
/// destroyed only by explicit action; the registry never inspects entry
/// contents beyond duplication's value copy.
pub struct TableRegistry {
    order: Vec<String>,
    tables: HashMap<String, TableStore>,
    clone_sources: HashMap<String, String>,
}

impl TableRegistry {
    /// Build a registry from seed tables in display order. An empty seed
    /// falls back to a single fresh empty table so the invariant holds
    /// from construction.
    pub fn new(seed: Vec<(String, Vec<ScheduleEntry>)>) -> Self {
        let mut registry = Self {
            order: Vec::new(),
            tables: HashMap::new(),
            clone_sources: HashMap::new(),
        };
        for (table_id, entries) in seed {
            registry.insert_table(table_id, entries);
        }
        if registry.order.is_empty() {
            registry.create_table();
        }
        registry
    }

    fn insert_table(&mut self, table_id: String, entries: Vec<ScheduleEntry>) {
        self.tables
            .insert(table_id.clone(), TableStore::new(table_id.clone(), entries));
        self.order.push(table_id);
    }

    /// Create a fresh empty table and return its id.
    pub fn create_table(&mut self) -> String {
        let table_id = next_table_id();
        tracing::info!(table_id = %table_id, "table created");
        self.insert_table(table_id.clone(), Vec::new());
        table_id
    }

    /// Duplicate a table: a value copy of the source's **live** entries at
    /// this moment, so in-progress edits are captured. Records clone
    /// provenance for the new table.
    pub fn duplicate_table(&mut self, source_id: &str) -> StoreResult<String> {
        let entries = self
            .tables
            .get(source_id)
            .ok_or_else(|| StoreError::table_not_found(source_id))?
            .entries()
            .to_vec();

        let table_id = next_table_id();
        tracing::info!(table_id = %table_id, source_id, "table duplicated");
        self.insert_table(table_id.clone(), entries);
        self.clone_sources
            .insert(table_id.clone(), source_id.to_string());
        Ok(table_id)
    }

    /// Remove a table. Rejected as a no-op when the id is unknown or when
    /// it would leave the registry empty; returns whether anything was
    /// removed. Never an error: the last-table case is an expected,
    /// guarded UI condition.
    pub fn remove_table(&mut self, table_id: &str) -> bool {
        if self.order.len() <= 1 || !self.tables.contains_key(table_id) {
            return false;
        }
        tracing::info!(table_id, "table removed");
        self.order.retain(|id| id != table_id);
        self.tables.remove(table_id);
        self.clone_sources.remove(table_id);
        true
    }

    /// Whether the remove affordance should be enabled.
    pub fn can_remove(&self) -> bool {
        self.order.len() > 1
    }

    /// Table ids in display order.
    pub fn table_ids(&self) -> &[String] {
        &self.order
    }

    pub fn table_count(&self) -> usize {
        self.order.len()
    }

    pub fn table(&self, table_id: &str) -> Option<&TableStore> {
        self.tables.get(table_id)
    }

    pub fn table_mut(&mut self, table_id: &str) -> Option<&mut TableStore> {
        self.tables.get_mut(table_id)
    }

    /// Origin of a duplicated table, if this table was cloned.
    pub fn clone_source_of(&self, table_id: &str) -> Option<&str> {
        self.clone_sources.get(table_id).map(String::as_str)
    }

    /// Finished drag gesture as a synchronous command: resolve the handle
    /// and delegate to the table's drag move. Returns whether the entry
    /// actually moved.
    pub fn drag_end(&mut self, handle: &EntryHandle, dx: f64, dy: f64) -> StoreResult<bool> {
        let table = self
            .tables
            .get_mut(&handle.table_id)
            .ok_or_else(|| StoreError::table_not_found(&handle.table_id))?;
        table.move_by_drag(handle.index, dx, dy)
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
