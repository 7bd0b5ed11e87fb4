//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The underlying backend failed.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
