//! # SQLite Storage
//!
//! Snapshot documents in a single `kv_store` table.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────┬──────────────────────┬──────────────────────┐
//! │ key (PRIMARY KEY)        │ value                │ updated_at           │
//! ├──────────────────────────┼──────────────────────┼──────────────────────┤
//! │ cafe-management-store    │ {"user":…,"orders":…}│ 2024-06-01T09:30:00Z │
//! └──────────────────────────┴──────────────────────┴──────────────────────┘
//! ```
//!
//! ## Connection Setup
//! - WAL journal: readers never wait on the writer
//! - NORMAL synchronous: durable across crashes except the last commit
//! - File created on first connect
//! - Embedded migrations create the table

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::SnapshotStorage;
use crate::error::{StoreError, StoreResult};
use crate::migrations;

// =============================================================================
// Configuration
// =============================================================================

/// SQLite backend configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = SqliteConfig::new(data_dir.join("cafe.db"))
///     .max_connections(2)
///     .run_migrations(true);
/// let storage = SqliteStorage::new(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Path to the database file.
    pub database_path: PathBuf,

    /// Default: 4. One writer at a time, the rest serve reads.
    pub max_connections: u32,

    /// Default: 1
    pub min_connections: u32,

    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Default: true
    pub run_migrations: bool,
}

impl SqliteConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteConfig {
            database_path: path.into(),
            max_connections: 4,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Private in-memory database for tests.
    ///
    /// A single connection, since every connection to `:memory:` opens its
    /// own empty database.
    pub fn in_memory() -> Self {
        SqliteConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Storage
// =============================================================================

#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens the pool and, if configured, applies pending migrations.
    pub async fn new(config: SqliteConfig) -> StoreResult<Self> {
        info!(path = %config.database_path.display(), "Opening SQLite snapshot storage");

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "SQLite pool created");

        let storage = SqliteStorage { pool };
        if config.run_migrations {
            migrations::run_migrations(&storage.pool).await?;
        }

        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Whether the database answers a trivial query.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// When `key` was last written (RFC 3339).
    pub async fn updated_at(&self, key: &str) -> StoreResult<Option<String>> {
        let updated_at = sqlx::query_scalar::<_, String>("SELECT updated_at FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated_at)
    }

    pub async fn close(&self) {
        info!("Closing SQLite snapshot storage");
        self.pool.close().await;
    }
}

impl SnapshotStorage for SqliteStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(key, bytes = value.len(), "Snapshot row upserted");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
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
    async fn test_in_memory_storage() {
        let storage = SqliteStorage::new(SqliteConfig::in_memory()).await.unwrap();
        assert!(storage.health_check().await);
    }

    #[tokio::test]
    async fn test_upsert_replaces_value() {
        let storage = SqliteStorage::new(SqliteConfig::in_memory()).await.unwrap();

        storage.set("k", "one").await.unwrap();
        storage.set("k", "two").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("two"));
        assert!(storage.updated_at("k").await.unwrap().is_some());
        assert!(storage.remove("k").await.unwrap());
        assert_eq!(storage.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cafe.db");
        let snapshot = demo_snapshot();

        let storage = SqliteStorage::new(SqliteConfig::new(&path)).await.unwrap();
        storage.save_snapshot("cafe-management-store", &snapshot).await.unwrap();
        storage.close().await;

        let reopened = SqliteStorage::new(SqliteConfig::new(&path)).await.unwrap();
        let loaded = reopened.load_snapshot("cafe-management-store").await.unwrap();

        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_config_builder() {
        let config = SqliteConfig::new("/tmp/cafe.db")
            .max_connections(8)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 8);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
    }
}
