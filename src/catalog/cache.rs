//! Coalescing per-page catalog cache.
//!
//! The first caller for a key installs the fetch as a shared future;
//! concurrent callers for the same key await that same future, so each
//! distinct key reaches the upstream source at most once at a time. A
//! resolved page stays memoized; a failed key is evicted so a later
//! caller can retry. The cache is read-mostly and write-once per key, so
//! one short-held lock around the map is the only synchronization.

use crate::api::Lecture;
use crate::catalog::source::{CatalogSource, FetchError, PageKey};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type PageResult = Result<Arc<Vec<Lecture>>, FetchError>;
type PageFuture = Shared<BoxFuture<'static, PageResult>>;

/// In-flight-coalescing, memoizing cache over a [`CatalogSource`].
///
/// Injected into the fetcher rather than living as ambient global state,
/// so tests can construct and drop caches freely.
pub struct PageCache {
    source: Arc<dyn CatalogSource>,
    pages: Mutex<HashMap<PageKey, PageFuture>>,
}

impl PageCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            pages: Mutex::new(HashMap::new()),
        }
    }

    /// Page for `key`, fetching it at most once concurrently.
    pub async fn get(&self, key: PageKey) -> PageResult {
        let page = {
            let mut pages = self.pages.lock();
            match pages.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let source = Arc::clone(&self.source);
                    let fetch: BoxFuture<'static, PageResult> = async move {
                        tracing::debug!(%key, "fetching catalog page");
                        source.fetch_page(&key).await.map(Arc::new)
                    }
                    .boxed();
                    let shared = fetch.shared();
                    pages.insert(key, shared.clone());
                    shared
                }
            }
        };

        let result = page.await;
        if let Err(error) = &result {
            tracing::warn!(%key, %error, "catalog page fetch failed, evicting");
            self.evict(&key);
        }
        result
    }

    /// Drop the cached state for one key.
    pub fn evict(&self, key: &PageKey) {
        self.pages.lock().remove(key);
    }

    /// Drop everything (test/reset hook).
    pub fn clear(&self) {
        self.pages.lock().clear();
    }

    /// Number of keys currently cached or in flight.
    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::SourceKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Stub source that counts upstream calls and can fail on demand.
    struct CountingSource {
        calls: AtomicUsize,
        fail_first: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_first: AtomicUsize::new(0),
            })
        }

        fn failing_first(n: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_first: AtomicUsize::new(n),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch_page(&self, key: &PageKey) -> Result<Vec<Lecture>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Hold the fetch open long enough for concurrent callers to pile
            // onto the same in-flight future.
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self
                .fail_first
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(FetchError::upstream(key, "stubbed failure"));
            }
            Ok(vec![Lecture {
                id: format!("{key}"),
                title: "Stub".to_string(),
                credits: "3(3)".to_string(),
                grade: 1,
                major: "Stub".to_string(),
                schedule: String::new(),
            }])
        }
    }

    fn key() -> PageKey {
        PageKey::new(SourceKind::Majors, 1)
    }

    #[tokio::test]
    async fn test_concurrent_callers_coalesce_to_one_call() {
        let source = CountingSource::new();
        let cache = Arc::new(PageCache::new(source.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.get(key()).await })
            })
            .collect();
        for handle in handles {
            let page = handle.await.expect("task").expect("fetch ok");
            assert_eq!(page.len(), 1);
        }

        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolved_page_is_memoized() {
        let source = CountingSource::new();
        let cache = PageCache::new(source.clone());

        let first = cache.get(key()).await.expect("fetch ok");
        let second = cache.get(key()).await.expect("fetch ok");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_fetch_independently() {
        let source = CountingSource::new();
        let cache = PageCache::new(source.clone());

        cache.get(PageKey::new(SourceKind::Majors, 1)).await.expect("ok");
        cache
            .get(PageKey::new(SourceKind::LiberalArts, 1))
            .await
            .expect("ok");
        cache.get(PageKey::new(SourceKind::Majors, 2)).await.expect("ok");

        assert_eq!(source.calls(), 3);
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_failure_evicts_key_and_allows_retry() {
        let source = CountingSource::failing_first(1);
        let cache = PageCache::new(source.clone());

        assert!(cache.get(key()).await.is_err());
        assert!(cache.is_empty());

        // The retry reaches upstream again and succeeds.
        let page = cache.get(key()).await.expect("retry ok");
        assert_eq!(page.len(), 1);
        assert_eq!(source.calls(), 2);
    }
}
