//! # cafe-store: State Store for Cafe Desk
//!
//! The mutable back-office state of the cafe and its persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe Desk Data Flow                              │
//! │                                                                         │
//! │  Dashboard action (mark order paid)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   cafe-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CafeStore    │    │  Snapshot     │    │  Storage     │  │   │
//! │  │   │  (store/)     │───►│ (snapshot.rs) │───►│  (storage/)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ orders        │    │ one JSON      │    │ memory       │  │   │
//! │  │   │ tables, staff │    │ document      │    │ JSON file    │  │   │
//! │  │   │ menu, stock   │    │               │    │ SQLite kv    │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  cafe-core: Money, Analytics::from_orders, inventory rules             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CafeStore` and its mutations
//! - [`snapshot`] - The persisted document
//! - [`storage`] - Snapshot backends
//! - [`config`] - Backend selection from the environment
//! - [`migrations`] - Embedded SQLite migrations
//! - [`seed`] - Demo cafe data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cafe_store::{CafeStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let storage = config.open_storage().await?;
//! let mut store = CafeStore::load_or_demo(&storage, &config.storage_key).await?;
//!
//! store.set_order_status("ORD-003", OrderStatus::Preparing);
//! store.save(&storage, &config.storage_key).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod seed;
pub mod snapshot;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{StorageBackend, StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use snapshot::StoreSnapshot;
pub use storage::{
    JsonFileStorage, MemoryStorage, SnapshotStorage, SqliteConfig, SqliteStorage, Storage,
};
pub use store::{CafeStore, SettingsChange};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cafe=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
