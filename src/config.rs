//! Engine configuration file support.
//!
//! Reads engine settings from a TOML file with env-var overrides. Every
//! field has a serde default, so a missing file or an empty table yields
//! the stock behavior: three pages per source and 100-row reveal pages.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: {message}")]
    Env { var: String, message: String },
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Catalog fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Directory holding the bundled catalog documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Pages requested per source by the fetch plan.
    #[serde(default = "default_pages_per_source")]
    pub pages_per_source: u32,
}

/// Search surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Results revealed per sentinel trigger.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_pages_per_source() -> u32 {
    crate::catalog::DEFAULT_PAGES_PER_SOURCE
}

fn default_page_size() -> usize {
    crate::services::search::PAGE_SIZE
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            pages_per_source: default_pages_per_source(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `timetable.toml` in the current directory, then
    /// `config/`, then the parent directory. Falls back to defaults when
    /// no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("timetable.toml"),
            PathBuf::from("config/timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Apply environment overrides on top of the loaded values.
    ///
    /// Recognized variables: `TIMETABLE_DATA_DIR`,
    /// `TIMETABLE_PAGES_PER_SOURCE`, `TIMETABLE_PAGE_SIZE`.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var("TIMETABLE_DATA_DIR") {
            self.catalog.data_dir = PathBuf::from(dir);
        }
        if let Ok(pages) = std::env::var("TIMETABLE_PAGES_PER_SOURCE") {
            self.catalog.pages_per_source = pages.parse().map_err(|_| ConfigError::Env {
                var: "TIMETABLE_PAGES_PER_SOURCE".to_string(),
                message: format!("expected a positive integer, got '{pages}'"),
            })?;
        }
        if let Ok(size) = std::env::var("TIMETABLE_PAGE_SIZE") {
            self.search.page_size = size.parse().map_err(|_| ConfigError::Env {
                var: "TIMETABLE_PAGE_SIZE".to_string(),
                message: format!("expected a positive integer, got '{size}'"),
            })?;
        }
        Ok(())
    }

    /// Default-location file plus env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env()?;
        Ok(config)
    }
}
