use std::path::PathBuf;
use std::sync::Arc;

/// Key-value storage - abstraction over where the serialized posts live
/// (an in-memory map, a directory of files).
///
/// Calls are synchronous: every post store operation is a single
/// load, compute, store round trip.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Storage backend errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failed for `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage lock poisoned")]
    Lock,
}
