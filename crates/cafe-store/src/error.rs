//! # Store Error Types
//!
//! Error types for snapshot storage and the checked store entry points.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / io::Error / serde_json::Error      CoreError             │
//! │       │                                              │                  │
//! │       ▼                                              ▼                  │
//! │  StoreError (this module) ◄──────────────────────────┘                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (dashboard bridge, seed binary)                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain mutations on unknown ids never produce a `StoreError`; they return
//! `false` instead.

use cafe_core::CoreError;
use thiserror::Error;

/// Store and storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening the storage failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - SQLite file cannot be opened
    /// - Pool cannot reach the database within the timeout
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Snapshot file I/O failed.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot document could not be encoded or decoded.
    #[error("Snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A checked entry point rejected its input.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Invalid configuration value.
    #[error("Invalid configuration: {key}={value}")]
    InvalidConfig { key: String, value: String },

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates an InvalidConfig error.
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → StoreError::QueryFailed
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

impl From<cafe_core::ValidationError> for StoreError {
    fn from(err: cafe_core::ValidationError) -> Self {
        StoreError::Domain(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_pass_through() {
        let err: StoreError = CoreError::EmptyOrder.into();
        assert_eq!(err.to_string(), "Order must contain at least one item");
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::PoolExhausted));
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err: StoreError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
