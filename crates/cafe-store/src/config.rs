//! # Store Configuration
//!
//! Where the snapshot lives and under which key.
//!
//! ## Sources (Priority Order)
//! 1. Environment variables (`CAFE_*`)
//! 2. Defaults (this file)
//!
//! | Variable           | Values                      | Default                   |
//! |--------------------|-----------------------------|---------------------------|
//! | `CAFE_STORAGE`     | `memory`, `json`, `sqlite`  | `json`                    |
//! | `CAFE_DATA_DIR`    | directory path              | platform data directory   |
//! | `CAFE_STORAGE_KEY` | snapshot key                | `cafe-management-store`   |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::{JsonFileStorage, MemoryStorage, SqliteConfig, SqliteStorage, Storage};

/// Key the dashboard has always persisted its store under.
pub const DEFAULT_STORAGE_KEY: &str = "cafe-management-store";

/// File name of the SQLite database inside the data directory.
pub const SQLITE_FILE_NAME: &str = "cafe.db";

/// Which snapshot backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    Memory,
    #[default]
    Json,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "json" => Ok(StorageBackend::Json),
            "sqlite" => Ok(StorageBackend::Sqlite),
            _ => Err(StoreError::invalid_config("CAFE_STORAGE", s)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Json => "json",
            StorageBackend::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub backend: StorageBackend,
    /// Directory for the JSON file or SQLite database.
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `CAFE_*` environment variables.
    pub fn from_env() -> StoreResult<Self> {
        StoreConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StoreResult<Self> {
        let mut config = StoreConfig::default();

        if let Some(backend) = lookup("CAFE_STORAGE") {
            config.backend = backend.parse()?;
        }

        if let Some(dir) = lookup("CAFE_DATA_DIR") {
            if dir.trim().is_empty() {
                return Err(StoreError::invalid_config("CAFE_DATA_DIR", dir));
            }
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(key) = lookup("CAFE_STORAGE_KEY") {
            if key.trim().is_empty() {
                return Err(StoreError::invalid_config("CAFE_STORAGE_KEY", key));
            }
            config.storage_key = key;
        }

        Ok(config)
    }

    /// Path of the SQLite database for this configuration.
    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join(SQLITE_FILE_NAME)
    }

    /// Opens the configured backend.
    pub async fn open_storage(&self) -> StoreResult<Storage> {
        info!(
            backend = %self.backend,
            data_dir = %self.data_dir.display(),
            key = %self.storage_key,
            "Opening snapshot storage"
        );

        let storage = match self.backend {
            StorageBackend::Memory => Storage::Memory(MemoryStorage::new()),
            StorageBackend::Json => Storage::Json(JsonFileStorage::new(&self.data_dir)),
            StorageBackend::Sqlite => {
                tokio::fs::create_dir_all(&self.data_dir)
                    .await
                    .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
                Storage::Sqlite(SqliteStorage::new(SqliteConfig::new(self.sqlite_path())).await?)
            }
        };
        Ok(storage)
    }
}

/// Per-user data directory, or `./data` on platforms without one.
fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("com", "cafedesk", "cafe-desk") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            warn!("No platform data directory, using ./data");
            PathBuf::from("data")
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
