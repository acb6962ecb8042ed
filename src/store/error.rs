//! Error types for table-state operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for table-state operations.
///
/// Store state is never partially mutated: an operation that returns an
/// error has left its table exactly as it found it. Guarded UI conditions
/// (removing the last table, deleting at an unoccupied location) are not
/// errors and are reported through return values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Positional index outside the table's entry list.
    #[error("entry index {index} out of range for table '{table_id}' (len {len})")]
    IndexOutOfRange {
        table_id: String,
        index: usize,
        len: usize,
    },

    /// The registry has no table with the given id.
    #[error("table not found: '{0}'")]
    TableNotFound(String),
}

impl StoreError {
    /// Create an index-out-of-range error.
    pub fn index_out_of_range(table_id: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            table_id: table_id.into(),
            index,
            len,
        }
    }

    /// Create a table-not-found error.
    pub fn table_not_found(table_id: impl Into<String>) -> Self {
        Self::TableNotFound(table_id.into())
    }
}
