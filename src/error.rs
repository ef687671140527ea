//! Error types for the user store.

use thiserror::Error;

/// Result alias used throughout the store.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by the store. None of them are retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or read.
    #[error("store unavailable at {path}: {source}")]
    StoreUnavailable {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// An insert or delete could not complete.
    #[error("{op} failed: {source}")]
    WriteFailed {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("migration {migration_id} failed: {reason}")]
    Migration { migration_id: String, reason: String },

    /// The blocking worker running a store call panicked or was cancelled.
    #[error("store worker failed: {0}")]
    WorkerFailed(String),
}

impl StoreError {
    pub fn unavailable(path: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(op: &'static str, source: rusqlite::Error) -> Self {
        Self::WriteFailed { op, source }
    }

    pub fn migration(migration_id: &str, reason: impl ToString) -> Self {
        Self::Migration {
            migration_id: migration_id.to_string(),
            reason: reason.to_string(),
        }
    }
}
