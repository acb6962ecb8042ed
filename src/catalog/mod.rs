//! Catalog loading: paged sources, the coalescing page cache, and the
//! fetcher that assembles the full lecture list.

pub mod cache;
pub mod fetcher;
pub mod source;

pub use cache::PageCache;
pub use fetcher::{default_plan, CatalogFetcher, DEFAULT_PAGES_PER_SOURCE};
pub use source::{CatalogSource, FetchError, JsonFileSource, PageKey, SourceKind};
