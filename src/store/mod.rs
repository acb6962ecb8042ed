//! In-memory table state.
//!
//! Each table's entry list is owned exclusively by its [`TableStore`];
//! nothing mutates a table except its own store operations and the
//! registry's duplication seeding, which writes only at creation time.
//! The [`TableRegistry`] owns the stores, table display order, and clone
//! provenance.

pub mod error;
pub mod registry;
pub mod table;

pub use error::{StoreError, StoreResult};
pub use registry::TableRegistry;
pub use table::TableStore;
