//! # Timetable Engine
//!
//! Data and placement engine for an interactive course-timetable planner.
//! Users search a lecture catalog, place sections onto one or more weekly
//! grids, and rearrange placements by dragging; this crate owns everything
//! behind that surface that has actual algorithmic content.
//!
//! ## Features
//!
//! - **Schedule codec**: parse raw schedule-strings into day/slot segments
//! - **Grid mapping**: pixel-delta to day/slot-delta conversion with
//!   snapping, clamping, and no-op detection
//! - **Table state**: per-table entry stores plus a multi-table registry
//!   with duplication and clone provenance
//! - **Catalog loading**: concurrent, coalescing, per-page cached fetch of
//!   the lecture catalog
//! - **Search pipeline**: compound predicate filtering with incremental
//!   page reveal
//!
//! ## Architecture
//!
//! - [`api`]: public data types shared across the engine
//! - [`models`]: schedule-string codec and the slot/time domain
//! - [`services`]: pure logic — grid mapper, filter pipeline, search session
//! - [`store`]: in-memory table state and the multi-table registry
//! - [`catalog`]: catalog sources, coalescing page cache, and the fetcher
//! - [`config`]: file/env configuration for the engine
//!
//! Rendering, styling, and the network transport are external
//! collaborators; the engine exposes only data and commands.

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod store;

pub use api::{Day, EntryHandle, Lecture, ScheduleEntry, SearchOption, SearchTarget};
pub use catalog::{CatalogFetcher, CatalogSource, FetchError, PageCache, PageKey, SourceKind};
pub use config::EngineConfig;
pub use models::schedule::{parse_schedule, DaySegment, ScheduleCache};
pub use services::filter::filter_lectures;
pub use services::search::SearchSession;
pub use store::{StoreError, TableRegistry, TableStore};
