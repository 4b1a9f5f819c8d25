//! Error types for the storage layer.
//!
//! Storage errors never reach the store: the persistence adapters log them and
//! fall back to in-memory operation. They are surfaced only by the low-level
//! slot I/O so callers such as the CLI and tests can inspect them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("migration failed: {0}")]
    Migration(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
