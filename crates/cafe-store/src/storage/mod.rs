//! # Snapshot Storage
//!
//! Key-value backends holding the serialized [`StoreSnapshot`].
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SnapshotStorage                                    │
//! │                                                                         │
//! │  CafeStore::save(&storage, key)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save_snapshot() ── StoreSnapshot::to_json() ──► set(key, json)         │
//! │                                                    │                    │
//! │           ┌────────────────────────┬───────────────┴──────┐             │
//! │           ▼                        ▼                      ▼             │
//! │   MemoryStorage           JsonFileStorage         SqliteStorage         │
//! │   HashMap in a Mutex      <dir>/<key>.json        kv_store table        │
//! │   (tests, demo runs)      temp file + rename      WAL, upsert           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backends only move strings. Encoding and decoding of the snapshot live in
//! the provided methods of [`SnapshotStorage`], so every backend persists the
//! same document.

mod json_file;
mod memory;
mod sqlite;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use sqlite::{SqliteConfig, SqliteStorage};

use tracing::debug;

use crate::error::StoreResult;
use crate::snapshot::StoreSnapshot;

/// A key-value facility for snapshot documents.
#[allow(async_fn_in_trait)]
pub trait SnapshotStorage {
    /// Raw document stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous document.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Returns whether a document was present.
    async fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Loads and decodes the snapshot under `key`.
    async fn load_snapshot(&self, key: &str) -> StoreResult<Option<StoreSnapshot>> {
        match self.get(key).await? {
            Some(json) => {
                debug!(key, bytes = json.len(), "Snapshot loaded");
                Ok(Some(StoreSnapshot::from_json(&json)?))
            }
            None => Ok(None),
        }
    }

    /// Encodes and stores `snapshot` under `key`.
    async fn save_snapshot(&self, key: &str, snapshot: &StoreSnapshot) -> StoreResult<()> {
        let json = snapshot.to_json()?;
        debug!(key, bytes = json.len(), "Saving snapshot");
        self.set(key, &json).await
    }
}

/// The backend chosen by configuration.
#[derive(Debug)]
pub enum Storage {
    Memory(MemoryStorage),
    Json(JsonFileStorage),
    Sqlite(SqliteStorage),
}

impl Storage {
    /// Short backend name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Storage::Memory(_) => "memory",
            Storage::Json(_) => "json",
            Storage::Sqlite(_) => "sqlite",
        }
    }
}

impl SnapshotStorage for Storage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            Storage::Memory(s) => s.get(key).await,
            Storage::Json(s) => s.get(key).await,
            Storage::Sqlite(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            Storage::Memory(s) => s.set(key, value).await,
            Storage::Json(s) => s.set(key, value).await,
            Storage::Sqlite(s) => s.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        match self {
            Storage::Memory(s) => s.remove(key).await,
            Storage::Json(s) => s.remove(key).await,
            Storage::Sqlite(s) => s.remove(key).await,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::seed::demo_snapshot;

    #[tokio::test]
    async fn test_snapshot_round_trip_through_enum() {
        let storage = Storage::Memory(MemoryStorage::new());
        let snapshot = demo_snapshot();

        storage.save_snapshot("cafe-management-store", &snapshot).await.unwrap();
        let loaded = storage.load_snapshot("cafe-management-store").await.unwrap();

        assert_eq!(loaded, Some(snapshot));
        assert_eq!(storage.kind(), "memory");
    }

    #[tokio::test]
    async fn test_corrupt_document_is_serialization_error() {
        let storage = MemoryStorage::new();
        storage.set("cafe-management-store", "{\"orders\": 3").await.unwrap();

        let err = storage.load_snapshot("cafe-management-store").await.unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_missing_key_loads_nothing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load_snapshot("nothing-here").await.unwrap(), None);
    }
}
