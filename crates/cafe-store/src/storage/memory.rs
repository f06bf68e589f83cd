//! In-process storage. Contents are lost when the value is dropped.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::SnapshotStorage;
use crate::error::StoreResult;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl SnapshotStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.lock().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_replaces_and_remove_reports() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty().await);

        storage.set("k", "one").await.unwrap();
        storage.set("k", "two").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len().await, 1);
        assert!(storage.remove("k").await.unwrap());
        assert!(!storage.remove("k").await.unwrap());
    }
}
