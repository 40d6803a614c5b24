//! Domain-level error types.

use thiserror::Error;

use crate::ports::StorageError;

/// Post store errors.
///
/// A missing post is not an error: lookups return `Option` and deletes return
/// `bool`. Only storage that cannot be read back surfaces here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stored posts under `{key}` are corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode posts: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Bundled seed data is invalid: {0}")]
    InvalidSeed(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
