//! Catalog assembly: fetch every page of the plan concurrently and
//! flatten the results in plan order.

use crate::api::Lecture;
use crate::catalog::cache::PageCache;
use crate::catalog::source::{CatalogSource, FetchError, PageKey, SourceKind};
use futures::future::try_join_all;
use std::sync::Arc;

/// Pages requested per source by the default fetch plan.
pub const DEFAULT_PAGES_PER_SOURCE: u32 = 3;

/// Assembles the full lecture catalog from its paged sources through a
/// coalescing [`PageCache`].
pub struct CatalogFetcher {
    cache: PageCache,
    plan: Vec<PageKey>,
}

impl CatalogFetcher {
    /// Fetcher with the default plan over the given source.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_plan(source, default_plan(DEFAULT_PAGES_PER_SOURCE))
    }

    /// Fetcher with an explicit page plan (from configuration).
    pub fn with_plan(source: Arc<dyn CatalogSource>, plan: Vec<PageKey>) -> Self {
        Self {
            cache: PageCache::new(source),
            plan,
        }
    }

    /// The full catalog: every plan key fetched concurrently, results
    /// flattened in plan order.
    ///
    /// A single failed key fails this call, but pages cached for the
    /// other keys survive and the failed key is evicted, so a retry only
    /// re-fetches what actually failed. The returned list is shared and
    /// must be treated as immutable.
    pub async fn fetch_catalog(&self) -> Result<Arc<Vec<Lecture>>, FetchError> {
        tracing::info!(pages = self.plan.len(), "assembling catalog");
        let pages = try_join_all(self.plan.iter().map(|&key| self.cache.get(key))).await?;

        let total = pages.iter().map(|page| page.len()).sum();
        let mut catalog = Vec::with_capacity(total);
        for page in &pages {
            catalog.extend_from_slice(page);
        }
        tracing::info!(lectures = catalog.len(), "catalog assembled");
        Ok(Arc::new(catalog))
    }

    pub fn plan(&self) -> &[PageKey] {
        &self.plan
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }
}

/// The default plan interleaves both sources round by round, the order
/// the search surface has always issued them in.
pub fn default_plan(pages_per_source: u32) -> Vec<PageKey> {
    (1..=pages_per_source)
        .flat_map(|page| SourceKind::ALL.map(|source| PageKey::new(source, page)))
        .collect()
}
