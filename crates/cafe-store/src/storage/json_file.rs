//! # JSON File Storage
//!
//! One file per key: `<dir>/<key>.json`.
//!
//! ## Write Path
//! ```text
//! set("cafe-management-store", json)
//!      │
//!      ├─ create_dir_all(dir)
//!      ├─ write  <dir>/cafe-management-store.json.tmp
//!      └─ rename ──► <dir>/cafe-management-store.json
//! ```
//!
//! The rename replaces the old file in one step, so a crash mid-write leaves
//! either the previous snapshot or the new one, never a truncated file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::SnapshotStorage;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        info!(dir = %dir.display(), "Using JSON file storage");
        JsonFileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::invalid_config("storage_key", key));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SnapshotStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No snapshot file");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).await?;
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;

        debug!(path = %path.display(), bytes = value.len(), "Snapshot file written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_snapshot;

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = demo_snapshot();

        JsonFileStorage::new(dir.path().join("nested"))
            .save_snapshot("cafe-management-store", &snapshot)
            .await
            .unwrap();

        let reopened = JsonFileStorage::new(dir.path().join("nested"));
        let loaded = reopened.load_snapshot("cafe-management-store").await.unwrap();

        assert_eq!(loaded, Some(snapshot));
        assert!(dir.path().join("nested/cafe-management-store.json").exists());
        assert!(!dir.path().join("nested/cafe-management-store.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_file_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert_eq!(storage.get("absent").await.unwrap(), None);
        assert!(!storage.remove("absent").await.unwrap());

        storage.set("present", "{}").await.unwrap();
        assert!(storage.remove("present").await.unwrap());
    }

    #[test]
    fn test_keys_cannot_escape_the_directory() {
        let storage = JsonFileStorage::new("/tmp/cafe");

        assert!(storage.path_for("../etc/passwd").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.path_for(".hidden").is_err());
        assert_eq!(
            storage.path_for("cafe-management-store").unwrap(),
            PathBuf::from("/tmp/cafe/cafe-management-store.json")
        );
    }
}
