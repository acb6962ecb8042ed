//! Catalog page sources.
//!
//! The catalog is composed from two logically distinct paged resources,
//! "majors" and "liberal-arts". Transport and URL resolution are external
//! collaborators behind the [`CatalogSource`] trait; the engine only ever
//! asks for one `(source, page)` key at a time.

use crate::api::Lecture;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One of the two upstream catalog resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Majors,
    LiberalArts,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Majors, SourceKind::LiberalArts];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Majors => "majors",
            SourceKind::LiberalArts => "liberal-arts",
        }
    }
}

/// Cache key for one page of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub source: SourceKind,
    /// 1-based page number.
    pub page: u32,
}

impl PageKey {
    pub fn new(source: SourceKind, page: u32) -> Self {
        Self { source, page }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source.as_str(), self.page)
    }
}

/// Error fetching one catalog page. Failure is per-key: one failed page
/// does not invalidate pages cached for other keys.
///
/// `Clone` because a failed result is broadcast to every caller coalesced
/// onto the same in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("catalog I/O error for page {key}: {message}")]
    Io { key: String, message: String },

    #[error("catalog decode error for page {key}: {message}")]
    Decode { key: String, message: String },

    #[error("catalog upstream error for page {key}: {message}")]
    Upstream { key: String, message: String },
}

impl FetchError {
    pub fn io(key: &PageKey, message: impl fmt::Display) -> Self {
        Self::Io {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn decode(key: &PageKey, message: impl fmt::Display) -> Self {
        Self::Decode {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn upstream(key: &PageKey, message: impl fmt::Display) -> Self {
        Self::Upstream {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Provider of catalog pages.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, key: &PageKey) -> Result<Vec<Lecture>, FetchError>;
}

/// File-backed source reading the bundled catalog documents
/// (`schedules-majors.json`, `schedules-liberal-arts.json`).
///
/// The bundled data set serves every page of a source from the same
/// document, so the page number only participates in cache keying.
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch_page(&self, key: &PageKey) -> Result<Vec<Lecture>, FetchError> {
        let path = self
            .data_dir
            .join(format!("schedules-{}.json", key.source.as_str()));
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| FetchError::io(key, e))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::decode(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "timetable-engine-{label}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_page_key_display() {
        assert_eq!(PageKey::new(SourceKind::Majors, 1).to_string(), "majors-1");
        assert_eq!(
            PageKey::new(SourceKind::LiberalArts, 3).to_string(),
            "liberal-arts-3"
        );
    }

    #[tokio::test]
    async fn test_json_file_source_reads_catalog_document() {
        let dir = scratch_dir("source-ok");
        std::fs::write(
            dir.join("schedules-majors.json"),
            r#"[{"id":"CS101","title":"Algorithms","credits":"3(3)","grade":1,"major":"CS","schedule":"Mon1,2(R101)"}]"#,
        )
        .expect("write fixture");

        let source = JsonFileSource::new(&dir);
        let page = source
            .fetch_page(&PageKey::new(SourceKind::Majors, 1))
            .await
            .expect("fixture readable");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "CS101");
        assert_eq!(page[0].schedule, "Mon1,2(R101)");
    }

    #[tokio::test]
    async fn test_json_file_source_missing_document_is_io_error() {
        let source = JsonFileSource::new(scratch_dir("source-missing"));
        let err = source
            .fetch_page(&PageKey::new(SourceKind::LiberalArts, 1))
            .await
            .expect_err("no document on disk");
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_json_file_source_malformed_document_is_decode_error() {
        let dir = scratch_dir("source-bad");
        std::fs::write(dir.join("schedules-majors.json"), "not json").expect("write fixture");

        let source = JsonFileSource::new(dir);
        let err = source
            .fetch_page(&PageKey::new(SourceKind::Majors, 1))
            .await
            .expect_err("malformed document");
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
