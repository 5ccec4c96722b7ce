//! Database error types.

use puzzle_core::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("collection not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("deck not found: {0}")]
    DeckNotFound(String),

    #[error("collection already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("unsupported schema version {found} (expected {expected})")]
    SchemaVersion { found: i32, expected: i32 },
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
