//! # SQLite Migrations
//!
//! Embedded SQL migrations for the SQLite snapshot backend.
//!
//! ```text
//! SqliteStorage::new()
//!      │
//!      ▼
//! _sqlx_migrations ── compare with embedded files ──► run pending in order
//!                                                      001_snapshot_store.sql
//! ```
//!
//! ## Adding Migrations
//! 1. Add `migrations/sqlite/NNN_description.sql` with the next number
//! 2. Use `IF NOT EXISTS` where possible
//! 3. Never edit an applied migration

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;

/// Migrations from `migrations/sqlite`, embedded at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies pending migrations. Idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied");
    Ok(())
}

/// `(embedded, applied)` migration counts.
pub async fn migration_status(pool: &SqlitePool) -> StoreResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{SqliteConfig, SqliteStorage};

    #[tokio::test]
    async fn test_all_migrations_applied() {
        let storage = SqliteStorage::new(SqliteConfig::in_memory()).await.unwrap();

        let (total, applied) = migration_status(storage.pool()).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(applied, total);
    }

    #[tokio::test]
    async fn test_rerun_is_harmless() {
        let storage = SqliteStorage::new(SqliteConfig::in_memory()).await.unwrap();
        run_migrations(storage.pool()).await.unwrap();
    }
}
